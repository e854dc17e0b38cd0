//! Tests for locating config files.

use std::path::PathBuf;

use config_locate::{LoadError, ReadError, load, read};

#[tokio::test]
async fn test_read_first_file_exists() {
    let paths = vec!["tests/fixtures/first.yaml", "tests/fixtures/second.yaml"];
    let result = read(&paths).await.unwrap();
    assert_eq!(result.payload, "first config");
    assert_eq!(result.path, PathBuf::from("tests/fixtures/first.yaml"));
}

#[tokio::test]
async fn test_read_second_file_when_first_missing() {
    let paths = vec!["tests/fixtures/nonexistent.yaml", "tests/fixtures/second.yaml"];
    let result = read(&paths).await.unwrap();
    assert_eq!(result.payload, "second config");
    assert_eq!(result.path, PathBuf::from("tests/fixtures/second.yaml"));
}

#[tokio::test]
async fn test_read_no_files_found() {
    let paths = vec![
        "tests/fixtures/nonexistent1.yaml",
        "tests/fixtures/nonexistent2.yaml",
    ];
    let error = read(&paths).await.unwrap_err();
    match error {
        ReadError::NotFound { paths } => {
            assert_eq!(
                paths,
                vec![
                    PathBuf::from("tests/fixtures/nonexistent1.yaml"),
                    PathBuf::from("tests/fixtures/nonexistent2.yaml"),
                ]
            );
        }
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_applies_loader() {
    let paths = vec!["tests/fixtures/second.yaml"];
    let result = load(&paths, |s| Ok::<_, std::convert::Infallible>(s.len()))
        .await
        .unwrap();
    assert_eq!(result.payload, "second config".len());
}

#[tokio::test]
async fn test_load_reports_loader_error_with_path() {
    let paths = vec!["tests/fixtures/first.yaml"];
    let error = load(&paths, |_| Err::<(), _>("bad")).await.unwrap_err();
    assert!(!error.is_not_found());
    match error {
        LoadError::Load { path, source } => {
            assert_eq!(path, PathBuf::from("tests/fixtures/first.yaml"));
            assert_eq!(source, "bad");
        }
        other => panic!("Expected Load error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_not_found() {
    let paths = vec!["tests/fixtures/nonexistent.yaml"];
    let error = load(&paths, |s| Ok::<_, std::convert::Infallible>(s))
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}
