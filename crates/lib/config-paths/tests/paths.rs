//! Tests for the config-paths crate.

use std::path::PathBuf;

use config_paths::{defaults, resolve};

#[test]
fn test_default_paths_are_absolute() {
    for path in defaults() {
        assert!(
            path.is_absolute(),
            "Path {} is not absolute",
            path.display()
        );
    }
}

#[test]
fn test_default_paths_end_with_system_config() {
    let last = defaults().last();

    assert_eq!(last, Some(PathBuf::from("/etc/earbud-tray/config.yaml")));
}

#[test]
fn test_env_path_overrides_defaults() {
    let paths: Vec<_> = resolve(Some(PathBuf::from("/tmp/custom.yaml"))).collect();

    assert_eq!(paths, vec![PathBuf::from("/tmp/custom.yaml")]);
}

#[test]
fn test_no_env_path_uses_defaults() {
    let resolved: Vec<_> = resolve(None).collect();
    let defaults: Vec<_> = defaults().collect();

    assert_eq!(resolved, defaults);
}

#[test]
fn test_user_config_dir_comes_first() {
    let Some(config_dir) = dirs::config_dir() else {
        return;
    };

    let first = defaults().next();

    assert_eq!(first, Some(config_dir.join("earbud-tray").join("config.yaml")));
}
