use super::*;
use serde_json::json;

#[test]
fn test_deserialize_container_listing() {
    let body = json!([
        {"name": "backups", "count": 12, "bytes": 4096},
        {"name": "images", "count": 0, "bytes": 0}
    ])
    .to_string();

    let listing: Vec<ContainerInfo> = serde_json::from_str(&body).unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(
        listing[0],
        ContainerInfo {
            name: "backups".to_string(),
            count: 12,
            bytes: 4096,
        }
    );
    assert_eq!(listing[1].name, "images");
}

#[test]
fn test_deserialize_empty_listing() {
    let listing: Vec<ContainerInfo> = serde_json::from_str("[]").unwrap();

    assert!(listing.is_empty());
}

#[test]
fn test_default_options_produce_no_query_pairs() {
    let options = ListContainerOptions::default();

    assert!(options.query_pairs().is_empty());
}

#[test]
fn test_query_pairs_include_all_set_fields() {
    let options = ListContainerOptions {
        limit: Some(100),
        marker: Some("images".to_string()),
        prefix: Some("im".to_string()),
    };

    let pairs = options.query_pairs();

    assert_eq!(
        pairs,
        vec![
            ("limit", "100".to_string()),
            ("marker", "images".to_string()),
            ("prefix", "im".to_string()),
        ]
    );
}

#[test]
fn test_query_pairs_skip_unset_fields() {
    let options = ListContainerOptions {
        limit: None,
        marker: Some("m".to_string()),
        prefix: None,
    };

    assert_eq!(options.query_pairs(), vec![("marker", "m".to_string())]);
}
