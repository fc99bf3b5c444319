//! Shared constants for identity provider test configuration.
//!
//! These values are placeholders wired into both the mock provider
//! endpoints and the clients under test, so tokens minted by the test
//! signing key validate against the mock key set.

/// Issuer claim stamped on test tokens and expected by test clients.
pub static TEST_ISSUER: &str = "https://idp.practika.test";

/// Audience claim stamped on test tokens and expected by test clients.
pub static TEST_AUDIENCE: &str = "practika-api";

/// Admin API key for mock provider requests. Not a real credential.
pub static TEST_API_KEY: &str = "idp_api_key";

/// Key id published in the mock key set and used when signing tokens.
pub static TEST_SIGNING_KID: &str = "test-signing-key-1";
