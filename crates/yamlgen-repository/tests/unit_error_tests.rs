//! Unit tests for RepositoryError types

use yamlgen_repository::RepositoryError;

#[test]
fn test_error_invalid_record_display() {
    let error = RepositoryError::InvalidRecord("yaml must not be empty".to_string());
    assert_eq!(error.to_string(), "Invalid record: yaml must not be empty");
}

#[test]
fn test_error_storage_display() {
    let error = RepositoryError::Storage("connection refused".to_string());
    assert_eq!(error.to_string(), "Storage error: connection refused");
}

#[test]
fn test_error_other_display() {
    let error = RepositoryError::Other("unknown error".to_string());
    assert_eq!(error.to_string(), "Repository error: unknown error");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RepositoryError>();
}
