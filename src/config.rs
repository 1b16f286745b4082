//! Configuration models loaded from the environment.
//!
//! The adapters behind the repository traits own the actual connections;
//! this crate owns the environment schema so every host application reads
//! the same variables.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Connected-app credentials for the CRM's object API.
///
/// Read from `WEBCORE_CRM_*` variables: `WEBCORE_CRM_API_VERSION`,
/// `WEBCORE_CRM_CLIENT_ID`, `WEBCORE_CRM_CLIENT_SECRET`,
/// `WEBCORE_CRM_USERNAME`, `WEBCORE_CRM_PASSWORD`,
/// `WEBCORE_CRM_SECURITY_TOKEN`, `WEBCORE_CRM_ENVIRONMENT`.
#[derive(Clone, Debug, Deserialize)]
pub struct CrmConfig {
    pub api_version: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub security_token: String,
    /// Either "sandbox" or "production".
    pub environment: String,
}

impl CrmConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("WEBCORE_CRM"))
            .build()?
            .try_deserialize()
    }
}

/// Access-control settings for the message-relay endpoint.
///
/// Read from `WEBCORE_RELAY_*` variables: `WEBCORE_RELAY_NAMESPACE`,
/// `WEBCORE_RELAY_SCOPE`, `WEBCORE_RELAY_ISSUER_NAME`,
/// `WEBCORE_RELAY_ISSUER_KEY`.
#[derive(Clone, Debug, Deserialize)]
pub struct RelayConfig {
    pub namespace: String,
    pub scope: String,
    pub issuer_name: String,
    pub issuer_key: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("WEBCORE_RELAY"))
            .build()?
            .try_deserialize()
    }
}
