//! Tests for config loading.

use std::path::PathBuf;

use config_core::Config;

#[tokio::test]
async fn loads_from_explicit_path() {
    let loaded = config_load::with(Some(PathBuf::from("tests/fixtures/config.yaml")))
        .await
        .expect("config should load");

    assert!(!loaded.is_first_run());
    assert_eq!(
        loaded.path,
        Some(PathBuf::from("tests/fixtures/config.yaml"))
    );
    assert_eq!(
        loaded.config,
        Config {
            display_name: "Test Buds".to_string(),
            icon_size: 48,
            ..Config::default()
        }
    );
}

#[tokio::test]
async fn missing_file_yields_defaults() {
    let loaded = config_load::with(Some(PathBuf::from("tests/fixtures/absent.yaml")))
        .await
        .expect("missing config should fall back to defaults");

    assert_eq!(loaded.config, Config::default());
    assert!(loaded.is_first_run());
}

#[tokio::test]
async fn broken_file_is_an_error() {
    let error = config_load::with(Some(PathBuf::from("tests/fixtures/broken.yaml")))
        .await
        .expect_err("broken config should fail");

    assert!(matches!(error, config_locate::LoadError::Load { .. }));
}
