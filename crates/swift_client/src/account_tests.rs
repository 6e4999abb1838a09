use super::*;
use http::header::{HeaderName, HeaderValue};

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    map
}

#[test]
fn test_from_headers_parses_counts() {
    let headers = headers(&[
        ("x-account-container-count", "3"),
        ("x-account-bytes-used", "323479"),
    ]);

    let metadata = AccountMetadata::from_headers(&headers).unwrap();

    assert_eq!(metadata.container_count, 3);
    assert_eq!(metadata.bytes_used, 323479);
}

#[test]
fn test_from_headers_missing_container_count() {
    let headers = headers(&[("x-account-bytes-used", "323479")]);

    let result = AccountMetadata::from_headers(&headers);

    assert!(matches!(
        result,
        Err(Error::InvalidHeader("x-account-container-count"))
    ));
}

#[test]
fn test_from_headers_missing_bytes_used() {
    let headers = headers(&[("x-account-container-count", "3")]);

    let result = AccountMetadata::from_headers(&headers);

    assert!(matches!(
        result,
        Err(Error::InvalidHeader("x-account-bytes-used"))
    ));
}

#[test]
fn test_from_headers_rejects_non_numeric_value() {
    let headers = headers(&[
        ("x-account-container-count", "many"),
        ("x-account-bytes-used", "323479"),
    ]);

    let result = AccountMetadata::from_headers(&headers);

    assert!(matches!(
        result,
        Err(Error::InvalidHeader("x-account-container-count"))
    ));
}
