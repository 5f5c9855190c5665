//! Dialect selection for the Alfred database.
//!
//! Development installs fall back to a local SQLite file when `DATABASE_URL`
//! is unset; production refuses to start without it. The logging seam is an
//! explicit trait so tests can observe the warning/error calls without
//! touching the global subscriber.

use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::{AnyPool, Pool};
use tracing::{error, warn};
use url::Url;

use crate::config::AppEnv;
use crate::error::OpsError;

/// SQLite file used when development has no `DATABASE_URL`.
pub const SQLITE_FALLBACK_URL: &str = "sqlite:alfred-dev.sqlite?mode=rwc";

/// Warning emitted when falling back to SQLite.
pub const SQLITE_FALLBACK_WARNING: &str =
    "DATABASE_URL not set; falling back to SQLite. PostgreSQL is recommended for production deployments.";

/// Logging seam for the setup path.
pub trait SetupLog {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Production impl forwarding to `tracing`.
pub struct TracingSetupLog;

impl SetupLog for TracingSetupLog {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
}

/// A resolved database target, ready to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePlan {
    pub dialect: Dialect,
    pub url: String,
}

impl DatabasePlan {
    pub async fn connect(&self, max_connections: u32) -> Result<AnyPool, OpsError> {
        install_default_drivers();
        let pool: Pool<sqlx::Any> = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(&self.url)
            .await?;
        Ok(pool)
    }
}

/// Resolve the database target from the deployment environment.
///
/// Decision table:
/// - URL set and well-formed: use it (scheme picks the dialect)
/// - URL set but malformed or of an unsupported scheme: log, then fail
/// - URL unset in production: fail (no silent fallback)
/// - URL unset elsewhere: SQLite fallback with a warning
pub fn plan_database(
    env: AppEnv,
    database_url: Option<&str>,
    log: &dyn SetupLog,
) -> Result<DatabasePlan, OpsError> {
    match (database_url, env) {
        (Some(raw), _) => parse_plan(raw).inspect_err(|e| {
            log.error(&format!("Failed to configure database from DATABASE_URL: {e}"));
        }),
        (None, AppEnv::Production) => Err(OpsError::MissingDatabaseUrl),
        (None, _) => {
            log.warn(SQLITE_FALLBACK_WARNING);
            Ok(DatabasePlan {
                dialect: Dialect::Sqlite,
                url: SQLITE_FALLBACK_URL.to_string(),
            })
        }
    }
}

fn parse_plan(raw: &str) -> Result<DatabasePlan, OpsError> {
    let url = Url::parse(raw)?;
    let dialect = match url.scheme() {
        "postgres" | "postgresql" => Dialect::Postgres,
        "sqlite" => Dialect::Sqlite,
        other => return Err(OpsError::UnsupportedDatabaseScheme(other.to_string())),
    };
    Ok(DatabasePlan {
        dialect,
        url: raw.to_string(),
    })
}
