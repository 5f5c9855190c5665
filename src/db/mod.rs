//! Database utilities.
//!
//! Layout:
//! - `setup.rs`: dialect selection from `NODE_ENV` / `DATABASE_URL`
//! - `reset.rs`: destructive recreation of the `public` schema

pub mod reset;
pub mod setup;

pub use reset::{RESET_STATEMENTS, reset_public_schema, run_statements_then_close};
pub use setup::{DatabasePlan, Dialect, SetupLog, TracingSetupLog, plan_database};
