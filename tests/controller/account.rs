//! Tests for the role-scoped account collections and the company
//! validation endpoint.

use axum::http::StatusCode;
use practika_test_utils::fixtures::{account, idp};
use practika_test_utils::token::TokenClaims;
use practika_test_utils::{TestBuilder, TestError};
use serde_json::json;

use crate::setup::{app, body_json, request, send};

/// Expect a created student to come back field for field on a get.
#[tokio::test]
async fn create_and_get_student_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let created = send(
        &app,
        request(
            "POST",
            "/api/students",
            None,
            Some(json!({
                "name": "João Silva",
                "email": "joao@example.com",
                "fieldOfStudy": "Engenharia Informática",
                "skills": "Rust, SQL",
            })),
        ),
    )
    .await;

    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["role"], "Student");

    let id = created["id"].as_i64().unwrap();
    let fetched = send(&app, request("GET", &format!("/api/students/{}", id), None, None)).await;

    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = body_json(fetched).await;
    assert_eq!(fetched["name"], "João Silva");
    assert_eq!(fetched["email"], "joao@example.com");
    assert_eq!(fetched["fieldOfStudy"], "Engenharia Informática");
    assert_eq!(fetched["skills"], "Rust, SQL");
    assert_eq!(fetched["resume"], serde_json::Value::Null);

    Ok(())
}

/// Expect the role-specific required field to be enforced on create.
#[tokio::test]
async fn create_student_requires_field_of_study() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/students",
            None,
            Some(json!({"name": "João Silva", "email": "joao@example.com"})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields: fieldOfStudy");

    Ok(())
}

/// Expect a new company to start out unvalidated.
#[tokio::test]
async fn created_company_is_unvalidated() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(
        &app,
        request(
            "POST",
            "/api/companies",
            None,
            Some(json!({
                "name": "Sonae Tech",
                "email": "geral@sonae.example",
                "taxId": "509442013",
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["validated"], false);

    Ok(())
}

/// Expect a student listed under /api/students to be invisible under
/// the professor collection.
#[tokio::test]
async fn collections_are_scoped_by_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    account::insert_professor(&test.db, "Dra. Maria Santos", "maria@example.com").await?;
    let app = app(&test);

    let students = send(&app, request("GET", "/api/students", None, None)).await;
    let students = body_json(students).await;
    let professors = send(&app, request("GET", "/api/professors", None, None)).await;
    let professors = body_json(professors).await;

    assert_eq!(students.as_array().unwrap().len(), 1);
    assert_eq!(professors.as_array().unwrap().len(), 1);
    assert_eq!(students[0]["id"], student.id);

    let missing = send(
        &app,
        request("GET", &format!("/api/professors/{}", student.id), None, None),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body = body_json(missing).await;
    assert_eq!(body["error"], "Professor not found");

    Ok(())
}

/// Expect a patch to update only the provided fields and to require a
/// token.
#[tokio::test]
async fn patch_student_updates_provided_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let app = app(&test);

    let uri = format!("/api/students/{}", student.id);
    let patch = json!({"skills": "Rust, SQL, Docker"});

    let anonymous = send(&app, request("PATCH", &uri, None, Some(patch.clone()))).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(&app, request("PATCH", &uri, Some(&token), Some(patch))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["skills"], "Rust, SQL, Docker");
    assert_eq!(body["name"], "João Silva");

    Ok(())
}

/// Expect deleting a student to take the record out of the collection.
#[tokio::test]
async fn delete_student_removes_record() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let uri = format!("/api/students/{}", student.id);
    let response = send(&app, request("DELETE", &uri, Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Student deleted successfully");

    let fetched = send(&app, request("GET", &uri, None, None)).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    Ok(())
}

mod validate_company_tests {
    use super::*;

    /// Expect a coordinator to validate a company, and a repeat call to
    /// stay validated.
    #[tokio::test]
    async fn coordinator_validates_company() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
        let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", false)
            .await?;
        let app = app(&test);

        let claims =
            TokenClaims::for_subject("uid-1", "carlos@example.com").with_role("Coordinator");
        let token = test.signing_key.issue(&claims).unwrap();

        let uri = format!("/api/companies/{}/validate", company.id);
        let response = send(&app, request("PATCH", &uri, Some(&token), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["validated"], true);

        let repeat = send(&app, request("PATCH", &uri, Some(&token), None)).await;
        assert_eq!(repeat.status(), StatusCode::OK);
        let body = body_json(repeat).await;
        assert_eq!(body["validated"], true);

        Ok(())
    }

    /// Expect any other role to be turned away by the guard.
    #[tokio::test]
    async fn non_coordinator_is_forbidden() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
        let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", false)
            .await?;
        let app = app(&test);

        let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
        let token = test.signing_key.issue(&claims).unwrap();

        let uri = format!("/api/companies/{}/validate", company.id);
        let response = send(&app, request("PATCH", &uri, Some(&token), None)).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Access denied: insufficient role");

        Ok(())
    }

    /// Expect an anonymous caller to be rejected before the guard.
    #[tokio::test]
    async fn anonymous_caller_is_unauthorized() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tables().build().await?;
        let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", false)
            .await?;
        let app = app(&test);

        let uri = format!("/api/companies/{}/validate", company.id);
        let response = send(&app, request("PATCH", &uri, None, None)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Authentication token not provided");

        Ok(())
    }
}
