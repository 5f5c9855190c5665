//! Shared test-environment bootstrap.

use std::sync::Once;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-alfred-ops";
pub const TEST_OWNER_SETUP_KEY: &str = "test-owner-setup-key";

static BOOTSTRAP: Once = Once::new();

/// Pin the environment variables every test expects. Idempotent; call it at
/// the top of any test that reads configuration.
pub fn bootstrap() {
    BOOTSTRAP.call_once(|| {
        // set_var is unsafe in edition 2024; tests run before any config
        // read and the values never change afterwards.
        unsafe {
            std::env::set_var("NODE_ENV", "test");
            std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
            std::env::set_var("OWNER_SETUP_KEY", TEST_OWNER_SETUP_KEY);
        }
    });
}
