mod common;

#[test]
fn bootstrap_pins_the_test_environment() {
    common::bootstrap();
    // A second call must be a no-op.
    common::bootstrap();

    assert_eq!(std::env::var("NODE_ENV").as_deref(), Ok("test"));
    assert_eq!(
        std::env::var("JWT_SECRET").as_deref(),
        Ok(common::TEST_JWT_SECRET)
    );
    assert_eq!(
        std::env::var("OWNER_SETUP_KEY").as_deref(),
        Ok(common::TEST_OWNER_SETUP_KEY)
    );
}

#[test]
fn bootstrapped_environment_maps_to_test_app_env() {
    common::bootstrap();

    let cfg = alfred_ops::Config::load().expect("config should load");
    assert_eq!(cfg.node_env, alfred_ops::AppEnv::Test);
    assert_eq!(cfg.jwt_secret.as_deref(), Some(common::TEST_JWT_SECRET));
    assert_eq!(
        cfg.owner_setup_key.as_deref(),
        Some(common::TEST_OWNER_SETUP_KEY)
    );
}
