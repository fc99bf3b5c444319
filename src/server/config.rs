use crate::server::error::config::ConfigError;

/// Runtime configuration pulled from the environment at startup.
pub struct Config {
    pub database_url: String,
    pub idp_url: String,
    pub idp_issuer: String,
    pub idp_audience: String,
    pub idp_api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            idp_url: require("IDP_URL")?,
            idp_issuer: require("IDP_ISSUER")?,
            idp_audience: require("IDP_AUDIENCE")?,
            idp_api_key: require("IDP_API_KEY")?,
            port: port_from_env()?,
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::Missing(var))
}

fn port_from_env() -> Result<u16, ConfigError> {
    match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value)),
        Err(_) => Ok(5000),
    }
}
