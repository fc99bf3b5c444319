//! Client for the external identity provider.
//!
//! Covers the two surfaces the server needs: verifying caller id tokens
//! (RS256, against the provider's published key set) and the admin REST
//! API used by registration and account deletion. The client is cheap to
//! clone and injected through application state so tests can point it at
//! a mock server.

pub mod model;

use std::sync::Arc;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use tokio::sync::RwLock;

use crate::model::account::Role;
use crate::server::error::identity::IdentityError;
use crate::server::identity::model::{
    IdTokenClaims, ProviderAccount, ProviderErrorBody, VerifiedIdentity,
};

/// REST and token-verification client for the identity provider.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    issuer: String,
    audience: String,
    api_key: String,
    /// Provider signing keys, fetched on first use and refreshed once
    /// whenever a token names a key the cache does not hold.
    keys: Arc<RwLock<Option<JwkSet>>>,
}

impl IdentityClient {
    pub fn new(
        base_url: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let base_url = base_url.into();

        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            issuer: issuer.into(),
            audience: audience.into(),
            api_key: api_key.into(),
            keys: Arc::new(RwLock::new(None)),
        })
    }

    /// Verifies an id token and extracts the caller identity.
    ///
    /// Checks signature, issuer, audience, and expiry. A role claim that
    /// does not name a known role is ignored rather than rejected; role
    /// resolution then falls back to the account directory.
    pub async fn verify_id_token(&self, token: &str) -> Result<VerifiedIdentity, IdentityError> {
        let header = decode_header(token)?;
        let kid = header
            .kid
            .ok_or_else(|| IdentityError::UnknownKey("<none>".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer.as_str()]);

        let claims = decode::<IdTokenClaims>(token, &key, &validation)?.claims;

        let role = claims.role.as_deref().and_then(|value| {
            value
                .parse::<Role>()
                .inspect_err(|_| tracing::debug!(claim = %value, "ignoring malformed role claim"))
                .ok()
        });

        Ok(VerifiedIdentity {
            external_id: claims.sub,
            email: claims.email,
            email_verified: claims.email_verified,
            display_name: claims.name,
            role,
        })
    }

    /// Creates a provider account and returns its subject id.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<ProviderAccount, IdentityError> {
        let response = self
            .http
            .post(format!("{}/v1/accounts", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "displayName": display_name,
            }))
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        Ok(response.json::<ProviderAccount>().await?)
    }

    /// Stores the account role as a custom claim so future tokens carry it.
    pub async fn set_role_claim(&self, uid: &str, role: Role) -> Result<(), IdentityError> {
        let response = self
            .http
            .post(format!("{}/v1/accounts/{}/claims", self.base_url, uid))
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({ "role": role }))
            .send()
            .await?;

        Self::check_status(response).await?;

        Ok(())
    }

    /// Removes a provider account.
    pub async fn delete_user(&self, uid: &str) -> Result<(), IdentityError> {
        let response = self
            .http
            .delete(format!("{}/v1/accounts/{}", self.base_url, uid))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        Self::check_status(response).await?;

        Ok(())
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, IdentityError> {
        if let Some(keys) = self.keys.read().await.as_ref() {
            if let Some(jwk) = keys.find(kid) {
                return Ok(DecodingKey::from_jwk(jwk)?);
            }
        }

        // Cache miss: either first use or the provider rotated its keys.
        let keys = self.fetch_keys().await?;
        let key = match keys.find(kid) {
            Some(jwk) => DecodingKey::from_jwk(jwk)?,
            None => return Err(IdentityError::UnknownKey(kid.to_string())),
        };

        *self.keys.write().await = Some(keys);

        Ok(key)
    }

    async fn fetch_keys(&self) -> Result<JwkSet, IdentityError> {
        let keys = self
            .http
            .get(format!("{}/v1/keys", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        Ok(keys)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, IdentityError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ProviderErrorBody>().await {
            Ok(body) => body.error.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        Err(IdentityError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
