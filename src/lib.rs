pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub use api::client::AlfredClient;
pub use config::{AppEnv, Config};
pub use error::OpsError;
