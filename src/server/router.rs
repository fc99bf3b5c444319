//! HTTP routing and OpenAPI documentation configuration.
//!
//! Routes are grouped by the access they require: public, optional
//! identity, authenticated (any role) and per-role guarded groups. Each
//! group is an [`OpenApiRouter`] whose paths are collected into a single
//! OpenAPI document, and Swagger UI serves the merged document at
//! `/api/docs`.

use axum::routing::get;
use axum::{middleware, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::model::account::Role;
use crate::model::api::MessageDto;
use crate::server::{
    controller,
    middleware::{optional_identity, require_role, resolve_identity},
    model::app::AppState,
};

static STUDENT_ONLY: &[Role] = &[Role::Student];
static COMPANY_ONLY: &[Role] = &[Role::Company];
static COORDINATOR_ONLY: &[Role] = &[Role::Coordinator];
static COMPANY_OR_COORDINATOR: &[Role] = &[Role::Company, Role::Coordinator];
static PROFESSOR_OR_COORDINATOR: &[Role] = &[Role::Professor, Role::Coordinator];

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers that share a path but sit behind different access gates live
/// in different groups; their method routers merge cleanly because the
/// methods are disjoint. Handlers that share a path within one group must
/// be registered in a single `routes!` call.
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Practika", description = "Internship management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login and identity verification"),
        (name = controller::student::STUDENT_TAG, description = "Student account management"),
        (name = controller::professor::PROFESSOR_TAG, description = "Professor account management"),
        (name = controller::company::COMPANY_TAG, description = "Company account management and validation"),
        (name = controller::offer::OFFER_TAG, description = "Internship offer management"),
        (name = controller::application::APPLICATION_TAG, description = "Application management"),
        (name = controller::placement::PLACEMENT_TAG, description = "Placement management"),
    ))]
    struct ApiDoc;

    let (public, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::delete_user))
        .routes(routes!(
            controller::student::list_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::replace_student
        ))
        .routes(routes!(
            controller::professor::list_professors,
            controller::professor::create_professor
        ))
        .routes(routes!(
            controller::professor::get_professor,
            controller::professor::replace_professor
        ))
        .routes(routes!(
            controller::company::list_companies,
            controller::company::create_company
        ))
        .routes(routes!(
            controller::company::get_company,
            controller::company::replace_company
        ))
        .routes(routes!(controller::application::list_applications))
        .routes(routes!(controller::placement::list_placements))
        .routes(routes!(
            controller::placement::get_placement,
            controller::placement::replace_placement,
            controller::placement::delete_placement
        ))
        .split_for_parts();

    let (browse, browse_api) = OpenApiRouter::new()
        .routes(routes!(controller::offer::list_offers))
        .routes(routes!(
            controller::offer::get_offer,
            controller::offer::replace_offer
        ))
        .routes(routes!(controller::offer::list_company_offers))
        .split_for_parts();
    let browse = browse.layer(middleware::from_fn_with_state(
        state.clone(),
        optional_identity,
    ));

    let (authenticated, authenticated_api) = OpenApiRouter::new()
        .routes(routes!(controller::auth::verify))
        .routes(routes!(
            controller::student::patch_student,
            controller::student::delete_student
        ))
        .routes(routes!(
            controller::professor::patch_professor,
            controller::professor::delete_professor
        ))
        .routes(routes!(
            controller::company::patch_company,
            controller::company::delete_company
        ))
        .routes(routes!(controller::application::list_student_applications))
        .routes(routes!(controller::application::list_company_applications))
        .routes(routes!(controller::application::delete_application))
        .split_for_parts();
    let authenticated = authenticated.layer(middleware::from_fn_with_state(
        state.clone(),
        resolve_identity,
    ));

    let (student_gated, student_api) = OpenApiRouter::new()
        .routes(routes!(controller::application::create_application))
        .split_for_parts();
    let student_gated = guard(student_gated, STUDENT_ONLY, &state);

    let (company_gated, company_api) = OpenApiRouter::new()
        .routes(routes!(controller::offer::create_offer))
        .routes(routes!(
            controller::offer::patch_offer,
            controller::offer::delete_offer
        ))
        .split_for_parts();
    let company_gated = guard(company_gated, COMPANY_ONLY, &state);

    let (review_gated, review_api) = OpenApiRouter::new()
        .routes(routes!(controller::application::set_application_state))
        .split_for_parts();
    let review_gated = guard(review_gated, COMPANY_OR_COORDINATOR, &state);

    let (supervision_gated, supervision_api) = OpenApiRouter::new()
        .routes(routes!(controller::placement::create_placement))
        .split_for_parts();
    let supervision_gated = guard(supervision_gated, PROFESSOR_OR_COORDINATOR, &state);

    let (coordination_gated, coordination_api) = OpenApiRouter::new()
        .routes(routes!(controller::company::validate_company))
        .split_for_parts();
    let coordination_gated = guard(coordination_gated, COORDINATOR_ONLY, &state);

    api.merge(browse_api);
    api.merge(authenticated_api);
    api.merge(student_api);
    api.merge(company_api);
    api.merge(review_api);
    api.merge(supervision_api);
    api.merge(coordination_api);

    public
        .merge(browse)
        .merge(authenticated)
        .merge(student_gated)
        .merge(company_gated)
        .merge(review_gated)
        .merge(supervision_gated)
        .merge(coordination_gated)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Layers a role guard and identity resolution onto a route group.
///
/// The resolution layer is added last so it runs first.
fn guard(router: Router<AppState>, allowed: &'static [Role], state: &AppState) -> Router<AppState> {
    router
        .layer(middleware::from_fn(move |req, next| {
            require_role(allowed, req, next)
        }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ))
}

async fn health() -> Json<MessageDto> {
    Json(MessageDto::new("ok"))
}
