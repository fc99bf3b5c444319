//! Tests for the registration, login, verification, and account removal
//! endpoints, driven through the full router with the identity provider
//! mocked.

use axum::http::StatusCode;
use practika_test_utils::fixtures::{account, idp};
use practika_test_utils::token::TokenClaims;
use practika_test_utils::{TestBuilder, TestError};
use serde_json::json;

use crate::setup::{app, body_json, request, send};

/// Expect registration to create the provider account, set the role
/// claim, insert the directory row, and echo the new user back.
#[tokio::test]
async fn register_creates_provider_account_and_directory_row() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let create = idp::mock_create_account(&mut test.server, "uid-7");
    let claims = idp::mock_set_claims(&mut test.server, "uid-7");
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Ana Silva",
                "email": "ana@example.com",
                "password": "secret123",
                "role": "Student",
                "fieldOfStudy": "Engenharia Informática",
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["externalId"], "uid-7");
    assert_eq!(body["user"]["role"], "Student");
    create.assert();
    claims.assert();

    let students = send(&app, request("GET", "/api/students", None, None)).await;
    let students = body_json(students).await;
    assert_eq!(students[0]["email"], "ana@example.com");

    Ok(())
}

/// Expect a taken email to be rejected with a 400 naming it.
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    account::insert_student(&test.db, "Ana Silva", "ana@example.com").await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Ana Silva",
                "email": "ana@example.com",
                "password": "secret123",
                "role": "Student",
                "fieldOfStudy": "Engenharia Informática",
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Email \"ana@example.com\" is already registered");

    Ok(())
}

/// Expect missing required fields to be reported together in wire
/// casing.
#[tokio::test]
async fn register_lists_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({"email": "ana@example.com", "role": "Student"})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields: name, password");

    Ok(())
}

/// Expect login to resolve the directory record by email.
#[tokio::test]
async fn login_resolves_directory_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let inserted = account::insert_student(&test.db, "Ana Silva", "ana@example.com").await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "ana@example.com"})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], inserted.id);
    assert_eq!(body["user"]["role"], "Student");

    Ok(())
}

/// Expect an unknown email to get a 404 from login.
#[tokio::test]
async fn login_unknown_email_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "ghost@example.com"})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Account not found");

    Ok(())
}

/// Expect verify to join the token identity with the directory record.
#[tokio::test]
async fn verify_returns_caller_record() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let inserted = account::insert_student(&test.db, "Ana Silva", "ana@example.com").await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-3", "ana@example.com");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(&app, request("GET", "/api/auth/verify", Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["externalId"], "uid-3");
    assert_eq!(body["user"]["id"], inserted.id);
    assert_eq!(body["user"]["role"], "Student");

    Ok(())
}

/// Expect verify to reject a caller without a token.
#[tokio::test]
async fn verify_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(&app, request("GET", "/api/auth/verify", None, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Authentication token not provided");

    Ok(())
}

/// Expect an expired token to be rejected with the failure in the
/// details.
#[tokio::test]
async fn verify_rejects_expired_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-3", "ana@example.com").expired();
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(&app, request("GET", "/api/auth/verify", Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired authentication token");

    Ok(())
}

/// Expect delete-user to remove the provider account and the directory
/// row.
#[tokio::test]
async fn delete_user_removes_both_records() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let delete = idp::mock_delete_account(&mut test.server, "uid-9");
    account::insert_student_with_external_id(&test.db, "Ana Silva", "ana@example.com", "uid-9")
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        request("DELETE", "/api/auth/delete-user/uid-9", None, None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted successfully");
    assert_eq!(body["deletedUser"]["email"], "ana@example.com");
    delete.assert();

    let login = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "ana@example.com"})),
        ),
    )
    .await;
    assert_eq!(login.status(), StatusCode::NOT_FOUND);

    Ok(())
}
