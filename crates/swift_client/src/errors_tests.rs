use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_failed_error() {
    let error = Error::AuthFailed("token expired".to_string());

    assert_eq!(
        error.to_string(),
        "Storage request was not authorized: token expired"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_deserialization_error_carries_source() {
    let json_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let error = Error::Deserialization(json_error);

    assert!(error.to_string().starts_with("Failed to deserialize"));
    assert!(error.source().is_some());
}

#[test]
fn test_integrity_check_failed_error() {
    let error = Error::IntegrityCheckFailed;

    assert_eq!(error.to_string(), "Object integrity check failed");
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_endpoint_error() {
    let error = Error::InvalidEndpoint("relative URL without a base".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid storage endpoint: relative URL without a base"
    );
}

#[test]
fn test_invalid_header_error() {
    let error = Error::InvalidHeader("x-account-bytes-used");

    assert_eq!(
        error.to_string(),
        "Response header x-account-bytes-used is missing or malformed"
    );
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound;

    assert_eq!(error.to_string(), "Resource not found");
    assert!(error.source().is_none());
}

#[test]
fn test_unexpected_status_error() {
    let error = Error::UnexpectedStatus {
        status: 503,
        message: "service unavailable".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Unexpected status 503: service unavailable"
    );
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
