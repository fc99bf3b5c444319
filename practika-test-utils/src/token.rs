//! Token minting for identity verification tests.
//!
//! [`SigningKey`] holds a freshly generated RSA key pair. Tokens issued
//! with it validate against the key set served by
//! [`fixtures::idp::mock_jwks_endpoint`](crate::fixtures::idp::mock_jwks_endpoint),
//! and claims default to the values the test clients expect.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use openssl::rsa::Rsa;
use serde::Serialize;

use crate::constant::{TEST_AUDIENCE, TEST_ISSUER, TEST_SIGNING_KID};
use crate::error::TestError;

/// Claims for a provider-style id token.
///
/// Starts out valid for the test issuer and audience; builder methods
/// bend individual claims for negative cases.
#[derive(Debug, Clone, Serialize)]
pub struct TokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Valid claims for the given subject and email, expiring in fifteen
    /// minutes.
    pub fn for_subject(sub: &str, email: &str) -> Self {
        let now = Utc::now().timestamp();

        Self {
            iss: TEST_ISSUER.to_string(),
            aud: TEST_AUDIENCE.to_string(),
            sub: sub.to_string(),
            email: email.to_string(),
            email_verified: true,
            name: None,
            role: None,
            iat: now,
            exp: now + 900,
        }
    }

    /// Adds the custom role claim.
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Overrides the audience claim.
    pub fn with_audience(mut self, audience: &str) -> Self {
        self.aud = audience.to_string();
        self
    }

    /// Moves the expiry an hour into the past, beyond validation leeway.
    pub fn expired(mut self) -> Self {
        let now = Utc::now().timestamp();
        self.iat = now - 7200;
        self.exp = now - 3600;
        self
    }
}

/// RSA key pair used to sign test tokens.
pub struct SigningKey {
    encoding_key: EncodingKey,
    modulus: Vec<u8>,
    exponent: Vec<u8>,
}

impl SigningKey {
    /// Generates a fresh 2048-bit key pair.
    pub(crate) fn generate() -> Result<Self, TestError> {
        let rsa = Rsa::generate(2048)?;
        let pem = rsa.private_key_to_pem()?;
        let encoding_key = EncodingKey::from_rsa_pem(&pem)?;

        Ok(Self {
            encoding_key,
            modulus: rsa.n().to_vec(),
            exponent: rsa.e().to_vec(),
        })
    }

    /// Signs the claims under the published key id.
    pub fn issue(&self, claims: &TokenClaims) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_kid(TEST_SIGNING_KID, claims)
    }

    /// Signs the claims under an arbitrary key id, for rotation cases.
    pub fn issue_with_kid(
        &self,
        kid: &str,
        claims: &TokenClaims,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());

        encode(&header, claims, &self.encoding_key)
    }

    /// The key set document a provider would publish for this key.
    pub fn jwks(&self) -> serde_json::Value {
        serde_json::json!({
            "keys": [{
                "kty": "RSA",
                "alg": "RS256",
                "use": "sig",
                "kid": TEST_SIGNING_KID,
                "n": URL_SAFE_NO_PAD.encode(&self.modulus),
                "e": URL_SAFE_NO_PAD.encode(&self.exponent),
            }]
        })
    }
}
