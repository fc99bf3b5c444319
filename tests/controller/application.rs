//! Tests for the application endpoints: student-gated submission, the
//! review state transition, and the per-student and per-company
//! listings.

use axum::http::StatusCode;
use practika_test_utils::fixtures::{account, idp, internship};
use practika_test_utils::token::TokenClaims;
use practika_test_utils::{TestBuilder, TestError};
use serde_json::json;

use crate::setup::{app, body_json, request, send};

/// Expect a student to submit an application that starts out PENDENTE.
#[tokio::test]
async fn student_submits_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let offer = internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request(
            "POST",
            "/api/applications",
            Some(&token),
            Some(json!({"student": student.id, "offer": offer.id})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["state"], "PENDENTE");
    assert_eq!(body["student"], student.id);
    assert_eq!(body["offer"], offer.id);

    Ok(())
}

/// Expect submission to be open to students only.
#[tokio::test]
async fn submission_is_student_gated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let payload = json!({"student": 1, "offer": 1});

    let anonymous = send(
        &app,
        request("POST", "/api/applications", None, Some(payload.clone())),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
    let token = test.signing_key.issue(&claims).unwrap();

    let company = send(
        &app,
        request("POST", "/api/applications", Some(&token), Some(payload)),
    )
    .await;
    assert_eq!(company.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect missing references to be listed in a single validation error.
#[tokio::test]
async fn submission_requires_student_and_offer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request("POST", "/api/applications", Some(&token), Some(json!({}))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields: student, offer");

    Ok(())
}

mod set_state_tests {
    use super::*;

    /// Expect a company to accept an application and a coordinator to
    /// later overturn it.
    #[tokio::test]
    async fn company_and_coordinator_review_application() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
        let application = internship::insert_application(&test.db, "PENDENTE", 1, 1).await?;
        let app = app(&test);

        let uri = format!("/api/applications/{}/state", application.id);

        let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
        let token = test.signing_key.issue(&claims).unwrap();

        let accepted = send(
            &app,
            request("PATCH", &uri, Some(&token), Some(json!({"state": "ACEITE"}))),
        )
        .await;

        assert_eq!(accepted.status(), StatusCode::OK);
        let body = body_json(accepted).await;
        assert_eq!(body["state"], "ACEITE");

        let claims =
            TokenClaims::for_subject("uid-2", "carlos@example.com").with_role("Coordinator");
        let token = test.signing_key.issue(&claims).unwrap();

        let overturned = send(
            &app,
            request("PATCH", &uri, Some(&token), Some(json!({"state": "RECUSADO"}))),
        )
        .await;

        assert_eq!(overturned.status(), StatusCode::OK);
        let body = body_json(overturned).await;
        assert_eq!(body["state"], "RECUSADO");

        Ok(())
    }

    /// Expect students to be turned away from the review endpoint.
    #[tokio::test]
    async fn student_cannot_review() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
        let application = internship::insert_application(&test.db, "PENDENTE", 1, 1).await?;
        let app = app(&test);

        let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
        let token = test.signing_key.issue(&claims).unwrap();

        let uri = format!("/api/applications/{}/state", application.id);
        let response = send(
            &app,
            request("PATCH", &uri, Some(&token), Some(json!({"state": "ACEITE"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Access denied: insufficient role");

        Ok(())
    }

    /// Expect an unknown state value to be rejected naming the accepted
    /// ones.
    #[tokio::test]
    async fn rejects_unknown_state_value() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
        let application = internship::insert_application(&test.db, "PENDENTE", 1, 1).await?;
        let app = app(&test);

        let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
        let token = test.signing_key.issue(&claims).unwrap();

        let uri = format!("/api/applications/{}/state", application.id);
        let response = send(
            &app,
            request("PATCH", &uri, Some(&token), Some(json!({"state": "ACCEPTED"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Invalid application state \"ACCEPTED\", expected one of PENDENTE, ACEITE, RECUSADO"
        );

        Ok(())
    }
}

/// Expect the per-student listing to require a token and to filter by
/// the student, embedding the offer with its company.
#[tokio::test]
async fn student_listing_filters_and_embeds() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let ana = account::insert_student(&test.db, "Ana Costa", "ana@example.com").await?;
    let joao = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let offer = internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    internship::insert_application(&test.db, "PENDENTE", ana.id, offer.id).await?;
    internship::insert_application(&test.db, "ACEITE", joao.id, offer.id).await?;
    let app = app(&test);

    let uri = format!("/api/applications/student/{}", ana.id);

    let anonymous = send(&app, request("GET", &uri, None, None)).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let claims = TokenClaims::for_subject("uid-1", "ana@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(&app, request("GET", &uri, Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let applications = body.as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["student"]["name"], "Ana Costa");
    assert_eq!(applications[0]["offer"]["company"]["name"], "Sonae Tech");

    Ok(())
}

/// Expect the per-company listing to cover every offer the company
/// published and nothing else.
#[tokio::test]
async fn company_listing_spans_its_offers() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let sonae = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let futura = account::insert_company(&test.db, "Futura Labs", "ola@futura.example", true)
        .await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let frontend = internship::insert_offer(&test.db, "Desenvolvedor Frontend", sonae.id).await?;
    let backend = internship::insert_offer(&test.db, "Backend Node.js", sonae.id).await?;
    let other = internship::insert_offer(&test.db, "Data Engineer", futura.id).await?;
    internship::insert_application(&test.db, "PENDENTE", student.id, frontend.id).await?;
    internship::insert_application(&test.db, "PENDENTE", student.id, backend.id).await?;
    internship::insert_application(&test.db, "PENDENTE", student.id, other.id).await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
    let token = test.signing_key.issue(&claims).unwrap();

    let uri = format!("/api/applications/company/{}", sonae.id);
    let response = send(&app, request("GET", &uri, Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect any authenticated caller to delete an application.
#[tokio::test]
async fn authenticated_caller_deletes_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let application = internship::insert_application(&test.db, "PENDENTE", 1, 1).await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let uri = format!("/api/applications/{}", application.id);
    let response = send(&app, request("DELETE", &uri, Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Application deleted successfully");

    let listing = send(&app, request("GET", "/api/applications", None, None)).await;
    let listing = body_json(listing).await;
    assert_eq!(listing.as_array().unwrap().len(), 0);

    Ok(())
}
