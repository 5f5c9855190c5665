//! Environment-driven configuration.
//!
//! Variable names stay compatible with the existing Alfred deployment
//! (`NODE_ENV`, `DATABASE_URL`, `JWT_SECRET`, `OWNER_SETUP_KEY`). The debug
//! trigger's credentials come from `ALFRED_EMAIL` / `ALFRED_PASSWORD`; they
//! are never hardcoded.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use url::Url;

use crate::error::OpsError;

/// Deployment environment, from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub node_env: AppEnv,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default)]
    pub owner_setup_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub alfred_base_url: Url,
    #[serde(default)]
    pub alfred_email: Option<String>,
    #[serde(default)]
    pub alfred_password: Option<String>,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3333").expect("static base URL must parse")
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Extract the configuration from the process environment.
    pub fn load() -> Result<Self, OpsError> {
        Ok(Figment::from(Env::prefixed("")).extract()?)
    }

    /// Login credentials for the debug trigger, required as a pair.
    pub fn debug_credentials(&self) -> Result<(&str, &str), OpsError> {
        match (self.alfred_email.as_deref(), self.alfred_password.as_deref()) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(OpsError::MissingCredentials),
        }
    }
}
