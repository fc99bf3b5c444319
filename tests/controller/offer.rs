//! Tests for the offer endpoints: public browsing, the company-gated
//! mutations, and the application cascade on delete.

use axum::http::StatusCode;
use practika_test_utils::fixtures::{account, idp, internship};
use practika_test_utils::token::TokenClaims;
use practika_test_utils::{TestBuilder, TestError};
use serde_json::json;

use crate::setup::{app, body_json, request, send};

/// Expect a validated company to publish an offer.
#[tokio::test]
async fn validated_company_publishes_offer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request(
            "POST",
            "/api/offers",
            Some(&token),
            Some(json!({
                "title": "Desenvolvedor Frontend",
                "description": "React + Tailwind",
                "duration": "3 meses",
                "location": "Lisboa",
                "company": company.id,
            })),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Desenvolvedor Frontend");
    assert_eq!(body["company"], company.id);

    Ok(())
}

/// Expect publication to be refused while the company is unvalidated.
#[tokio::test]
async fn unvalidated_company_cannot_publish() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let company = account::insert_company(&test.db, "Futura Labs", "ola@futura.example", false)
        .await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "ola@futura.example").with_role("Company");
    let token = test.signing_key.issue(&claims).unwrap();

    let response = send(
        &app,
        request(
            "POST",
            "/api/offers",
            Some(&token),
            Some(json!({"title": "Estágio", "company": company.id})),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Company must be validated before it can publish offers"
    );

    Ok(())
}

/// Expect the publish guard to turn away anonymous callers and other
/// roles.
#[tokio::test]
async fn publish_is_company_gated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let app = app(&test);

    let payload = json!({"title": "Estágio", "company": 1});

    let anonymous = send(&app, request("POST", "/api/offers", None, Some(payload.clone()))).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let claims = TokenClaims::for_subject("uid-1", "joao@example.com").with_role("Student");
    let token = test.signing_key.issue(&claims).unwrap();

    let student = send(
        &app,
        request("POST", "/api/offers", Some(&token), Some(payload)),
    )
    .await;
    assert_eq!(student.status(), StatusCode::FORBIDDEN);
    let body = body_json(student).await;
    assert_eq!(body["error"], "Access denied: insufficient role");

    Ok(())
}

/// Expect the public listing to embed the company, or null when the
/// company account is gone.
#[tokio::test]
async fn listing_embeds_company_or_null() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    internship::insert_offer(&test.db, "Oferta Órfã", company.id + 100).await?;
    let app = app(&test);

    let response = send(&app, request("GET", "/api/offers", None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let offers = body.as_array().unwrap();
    assert_eq!(offers.len(), 2);

    let embedded = offers
        .iter()
        .find(|offer| offer["title"] == "Desenvolvedor Frontend")
        .unwrap();
    assert_eq!(embedded["company"]["name"], "Sonae Tech");

    let orphaned = offers
        .iter()
        .find(|offer| offer["title"] == "Oferta Órfã")
        .unwrap();
    assert_eq!(orphaned["company"], serde_json::Value::Null);

    Ok(())
}

/// Expect the per-company listing to return raw references only.
#[tokio::test]
async fn company_listing_uses_raw_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let other = account::insert_company(&test.db, "Futura Labs", "ola@futura.example", true)
        .await?;
    internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    internship::insert_offer(&test.db, "Backend Node.js", other.id).await?;
    let app = app(&test);

    let uri = format!("/api/companies/{}/offers", company.id);
    let response = send(&app, request("GET", &uri, None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let offers = body.as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["company"], company.id);

    Ok(())
}

/// Expect an unknown offer id to get a 404 on the detail endpoint.
#[tokio::test]
async fn get_unknown_offer_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = app(&test);

    let response = send(&app, request("GET", "/api/offers/999", None, None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Offer not found");

    Ok(())
}

/// Expect deleting an offer to take its applications with it while
/// leaving other offers' applications alone.
#[tokio::test]
async fn delete_cascades_to_applications() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let _jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let student = account::insert_student(&test.db, "João Silva", "joao@example.com").await?;
    let doomed = internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    let kept = internship::insert_offer(&test.db, "Backend Node.js", company.id).await?;
    internship::insert_application(&test.db, "PENDENTE", student.id, doomed.id).await?;
    internship::insert_application(&test.db, "ACEITE", student.id, doomed.id).await?;
    let survivor =
        internship::insert_application(&test.db, "PENDENTE", student.id, kept.id).await?;
    let app = app(&test);

    let claims = TokenClaims::for_subject("uid-1", "geral@sonae.example").with_role("Company");
    let token = test.signing_key.issue(&claims).unwrap();

    let uri = format!("/api/offers/{}", doomed.id);
    let response = send(&app, request("DELETE", &uri, Some(&token), None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Offer deleted successfully");

    let applications = send(&app, request("GET", "/api/applications", None, None)).await;
    let applications = body_json(applications).await;
    let applications = applications.as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["id"], survivor.id);

    Ok(())
}

/// Expect a full replace to be open while the partial update stays
/// behind the company gate.
#[tokio::test]
async fn replace_is_open_but_patch_is_gated() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let company = account::insert_company(&test.db, "Sonae Tech", "geral@sonae.example", true)
        .await?;
    let offer = internship::insert_offer(&test.db, "Desenvolvedor Frontend", company.id).await?;
    let app = app(&test);

    let uri = format!("/api/offers/{}", offer.id);
    let replaced = send(
        &app,
        request(
            "PUT",
            &uri,
            None,
            Some(json!({"title": "Desenvolvedor Full-Stack", "company": company.id})),
        ),
    )
    .await;

    assert_eq!(replaced.status(), StatusCode::OK);
    let body = body_json(replaced).await;
    assert_eq!(body["title"], "Desenvolvedor Full-Stack");
    assert_eq!(body["description"], serde_json::Value::Null);

    let patched = send(
        &app,
        request("PATCH", &uri, None, Some(json!({"title": "Outro Título"}))),
    )
    .await;
    assert_eq!(patched.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
