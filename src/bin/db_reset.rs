//! Drop and recreate the `public` schema of the database behind
//! `DATABASE_URL`. Destroys all tables, indexes, and data in it.

use alfred_ops::db::{Dialect, TracingSetupLog, plan_database, reset_public_schema};
use alfred_ops::{Config, OpsError};
use sqlx::{Connection, PgConnection};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    alfred_ops::logging::init(&cfg.loglevel);

    if let Err(e) = run(&cfg).await {
        error!(error = %e, "schema reset failed");
        std::process::exit(1);
    }
}

async fn run(cfg: &Config) -> Result<(), OpsError> {
    let url = cfg.database_url.as_deref().ok_or(OpsError::MissingDatabaseUrl)?;
    let plan = plan_database(cfg.node_env, Some(url), &TracingSetupLog)?;
    if plan.dialect != Dialect::Postgres {
        return Err(OpsError::SchemaResetRequiresPostgres);
    }

    warn!("dropping and recreating schema `public`; all contained data will be lost");
    let conn = PgConnection::connect(&plan.url).await?;
    reset_public_schema(conn).await?;

    info!("schema `public` dropped and recreated");
    Ok(())
}
