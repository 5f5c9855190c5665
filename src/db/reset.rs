//! Destructive reset of the `public` schema.

use sqlx::{Connection, Executor, PgConnection};
use tracing::{info, warn};

use crate::error::OpsError;

/// The three DDL statements, in execution order. Deliberately not wrapped in
/// a transaction: a mid-sequence failure can leave the schema dropped but not
/// recreated, and rerunning the reset is the documented recovery.
pub const RESET_STATEMENTS: [&str; 3] = [
    "DROP SCHEMA IF EXISTS public CASCADE",
    "CREATE SCHEMA public",
    "GRANT ALL ON SCHEMA public TO public",
];

/// Drop and recreate the `public` schema, discarding every contained object.
/// Consumes the connection; it is closed whether or not the statements
/// succeeded.
pub async fn reset_public_schema(conn: PgConnection) -> Result<(), OpsError> {
    run_statements_then_close(conn, &RESET_STATEMENTS).await
}

/// Execute `statements` sequentially, stopping at the first failure, then
/// close the connection regardless of the outcome. Earlier statements stay
/// applied when a later one fails (no transaction).
pub async fn run_statements_then_close<C>(
    mut conn: C,
    statements: &[&str],
) -> Result<(), OpsError>
where
    C: Connection,
    for<'c> &'c mut C: Executor<'c, Database = C::Database>,
    for<'q> <C::Database as sqlx::Database>::Arguments<'q>:
        sqlx::IntoArguments<'q, C::Database>,
{
    let mut outcome = Ok(());
    for stmt in statements.iter().copied() {
        info!(statement = stmt, "executing DDL");
        if let Err(e) = sqlx::query(stmt).execute(&mut conn).await {
            outcome = Err(e.into());
            break;
        }
    }
    if let Err(e) = conn.close().await {
        warn!(error = %e, "failed to close database connection");
    }
    outcome
}
