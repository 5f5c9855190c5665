use reqwest::StatusCode;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OpsError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("Alfred API error (status {status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("DATABASE_URL environment variable is required for unified Alfred MCP Server")]
    MissingDatabaseUrl,

    #[error("unsupported database URL scheme: {0}")]
    UnsupportedDatabaseScheme(String),

    #[error("schema reset requires a PostgreSQL DATABASE_URL")]
    SchemaResetRequiresPostgres,

    #[error("ALFRED_EMAIL and ALFRED_PASSWORD must be set for the debug trigger")]
    MissingCredentials,
}
