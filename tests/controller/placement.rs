//! Tests for the placement endpoints: supervision-gated creation and
//! the open read, replace, and delete routes.

use axum::http::StatusCode;
use practika_test_utils::fixtures::{account, idp, internship};
use practika_test_utils::token::TokenClaims;
use practika_test_utils::{TestBuilder, TestError};
use serde_json::json;

use crate::setup::{app, body_json, request, send};

/// Expect a professor to open a placement that defaults to ATIVO.
#[tokio::test]
async fn professor_creates_placement() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let professor =
        account::insert_professor(&test.db, "Dra. Maria Santos", "maria@example.com").await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "maria@example.com").with_role("Professor");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request(
            "POST",
            "/api/placements",
            Some(&token),
            Some(json!({
                "startDate": "2026-09-01",
                "student": student.id,
                "professor": professor.id,
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["state"], "ATIVO");
    assert_eq!(body["startDate"], "2026-09-01");
    assert_eq!(body["endDate"], serde_json::Value::Null);
    assert_eq!(body["student"], student.id);
    assert_eq!(body["professor"], professor.id);

    Ok(())
}

/// Expect creation to be open to professors and coordinators only.
#[tokio::test]
async fn creation_is_supervision_gated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let payload = json!({"startDate": "2026-09-01", "student": 1, "professor": 1});

    let anonymous = send(
        &app,
        request("POST", "/api/placements", None, Some(payload.clone())),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let student = send(
        &app,
        request("POST", "/api/placements", Some(&token), Some(payload.clone())),
    )
    .await;
    assert_eq!(student.status(), StatusCode::FORBIDDEN);

    let claims = TokenClaims::for_subject("uid-2", "carlos@example.com").with_role("Coordinator");
    let token = test.signing_key.issue(&claims).unwrap();

    let coordinator = send(
        &app,
        request("POST", "/api/placements", Some(&token), Some(payload)),
    )
    .await;
    assert_eq!(coordinator.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect missing fields to be reported together in wire casing.
#[tokio::test]
async fn creation_requires_start_date_and_references() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "maria@example.com").with_role("Professor");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request("POST", "/api/placements", Some(&token), Some(json!({}))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Missing required fields: startDate, student, professor"
    );

    Ok(())
}

/// Expect the public listing to embed the student and professor, null
/// for references that no longer resolve.
#[tokio::test]
async fn listing_embeds_student_and_professor() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let professor =
        account::insert_professor(&test.db, "Dra. Maria Santos", "maria@example.com").await?;
    internship::insert_placement(&test.db, student.id, professor.id).await?;
    internship::insert_placement(&test.db, student.id, professor.id + 100).await?;
    let app = app(&test);

    let response = send(&app, request("GET", "/api/placements", None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let placements = body.as_array().unwrap();
    assert_eq!(placements.len(), 2);

    let resolved = placements
        .iter()
        .find(|placement| placement["professor"].is_object())
        .unwrap();
    assert_eq!(resolved["student"]["name"], "João Silva");
    assert_eq!(resolved["professor"]["name"], "Dra. Maria Santos");

    let dangling = placements
        .iter()
        .find(|placement| placement["professor"].is_null())
        .unwrap();
    assert_eq!(dangling["student"]["name"], "João Silva");

    Ok(())
}

/// Expect a replace to rewrite the record in place, clearing fields the
/// body leaves out.
#[tokio::test]
async fn replace_rewrites_placement() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let professor =
        account::insert_professor(&test.db, "Dra. Maria Santos", "maria@example.com").await?;
    let placement = internship::insert_placement(&test.db, student.id, professor.id).await?;
    let app = app(&test);

    let uri = format!("/api/placements/{}", placement.id);
    let response = send(
        &app,
        request(
            "PUT",
            &uri,
            None,
            Some(json!({
                "startDate": "2026-03-01",
                "endDate": "2026-08-31",
                "state": "CONCLUIDO",
                "student": student.id,
                "professor": professor.id,
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["state"], "CONCLUIDO");
    assert_eq!(body["startDate"], "2026-03-01");
    assert_eq!(body["endDate"], "2026-08-31");

    Ok(())
}

/// Expect an unknown placement id to get a 404.
#[tokio::test]
async fn get_unknown_placement_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(&app, request("GET", "/api/placements/999", None, None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Placement not found");

    Ok(())
}

/// Expect deleting a placement to take it out of the listing.
#[tokio::test]
async fn delete_removes_placement() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let placement = internship::insert_placement(&test.db, 1, 1).await?;
    let app = app(&test);

    let uri = format!("/api/placements/{}", placement.id);
    let response = send(&app, request("DELETE", &uri, None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Placement deleted successfully");

    let listing = send(&app, request("GET", "/api/placements", None, None)).await;
    let listing = body_json(listing).await;
    assert_eq!(listing.as_array().unwrap().len(), 0);

    Ok(())
}
