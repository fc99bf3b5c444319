//! Mock identity provider HTTP endpoints.
//!
//! Each helper registers one endpoint on the test server and returns the
//! [`Mock`] so tests can add expectations or assert call counts. The
//! paths mirror the provider's key publication and admin account API.

use mockito::{Mock, ServerGuard};

use crate::token::SigningKey;

/// Serve the key set for the given signing key at `GET /v1/keys`.
pub fn mock_jwks_endpoint(server: &mut ServerGuard, signing_key: &SigningKey) -> Mock {
    server
        .mock("GET", "/v1/keys")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(signing_key.jwks().to_string())
        .create()
}

/// Accept an account creation and answer with the given subject id.
pub fn mock_create_account(server: &mut ServerGuard, uid: &str) -> Mock {
    server
        .mock("POST", "/v1/accounts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "uid": uid }).to_string())
        .create()
}

/// Reject account creation with the given status and error code.
pub fn mock_create_account_failure(server: &mut ServerGuard, status: usize, error: &str) -> Mock {
    server
        .mock("POST", "/v1/accounts")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "error": error }).to_string())
        .create()
}

/// Accept a claims update for the given subject id.
pub fn mock_set_claims(server: &mut ServerGuard, uid: &str) -> Mock {
    server
        .mock("POST", format!("/v1/accounts/{}/claims", uid).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create()
}

/// Accept an account deletion for the given subject id.
pub fn mock_delete_account(server: &mut ServerGuard, uid: &str) -> Mock {
    server
        .mock("DELETE", format!("/v1/accounts/{}", uid).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create()
}
