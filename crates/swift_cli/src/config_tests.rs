use super::*;
use secrecy::ExposeSecret;
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> CliConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    CliConfig::from_lookup(|name| vars.get(name).cloned())
}

#[tokio::test]
async fn test_resolve_session_uses_preauthenticated_values() {
    let config = config_from(&[
        (ENV_STORAGE_URL, "https://storage.example.com/v1/acct"),
        (ENV_AUTH_TOKEN, "AUTH_tk123"),
    ]);

    let session = config.resolve_session().await.unwrap();

    assert_eq!(session.storage_url, "https://storage.example.com/v1/acct");
    assert_eq!(session.token.expose_secret(), "AUTH_tk123");
}

#[tokio::test]
async fn test_resolve_session_requires_auth_url() {
    let config = config_from(&[(ENV_USERNAME, "me"), (ENV_API_KEY, "key")]);

    let result = config.resolve_session().await;

    match result {
        Err(crate::errors::Error::Config(message)) => {
            assert!(message.contains(ENV_AUTH_URL));
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_session_requires_username() {
    let config = config_from(&[
        (ENV_AUTH_URL, "https://auth.example.com/v1.0"),
        (ENV_API_KEY, "key"),
    ]);

    let result = config.resolve_session().await;

    match result {
        Err(crate::errors::Error::Config(message)) => {
            assert!(message.contains(ENV_USERNAME));
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_session_requires_api_key() {
    let config = config_from(&[
        (ENV_AUTH_URL, "https://auth.example.com/v1.0"),
        (ENV_USERNAME, "me"),
    ]);

    let result = config.resolve_session().await;

    match result {
        Err(crate::errors::Error::Config(message)) => {
            assert!(message.contains(ENV_API_KEY));
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_debug_output_redacts_api_key() {
    let config = config_from(&[(ENV_API_KEY, "super-secret"), (ENV_USERNAME, "me")]);

    let debug = format!("{config:?}");

    assert!(!debug.contains("super-secret"));
}
