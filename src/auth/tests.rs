//! Tests for the auth module

use super::*;
use base64::Engine;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn iam_config(server: &MockServer) -> AuthConfig {
    AuthConfig::Iam {
        apikey: "my-apikey".to_string(),
        url: server.uri(),
        client_id: None,
        client_secret: None,
        scope: None,
    }
}

#[tokio::test]
async fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");

    let built = auth.apply(req).await.unwrap().build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::basic("user", "pass"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("user:pass")
    );
    assert_eq!(built.headers().get("Authorization").unwrap(), &expected);
}

#[tokio::test]
async fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::bearer("my-bearer-token"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-bearer-token"
    );
}

#[tokio::test]
async fn test_iam_token_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(body_string_contains("apikey=my-apikey"))
        .and(body_string_contains("response_type=cloud_iam"))
        .and(body_string_contains("grant-type%3Aapikey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "iam-access-token",
            "refresh_token": "iam-refresh",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_000_000
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer iam-access-token"
    );
}

#[tokio::test]
async fn test_iam_token_caching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server));
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let req = client.get("https://example.com/api");
        let _ = auth.apply(req).await.unwrap();
    }
}

#[tokio::test]
async fn test_iam_cache_shared_between_clones() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "shared-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server));
    let other = auth.clone();
    let client = reqwest::Client::new();

    let _ = auth.apply(client.get("https://example.com/a")).await.unwrap();
    let built = other
        .apply(client.get("https://example.com/b"))
        .await
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer shared-token"
    );
}

#[tokio::test]
async fn test_iam_clear_cache_refetches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server));
    let client = reqwest::Client::new();

    let _ = auth.apply(client.get("https://example.com/api")).await.unwrap();
    auth.clear_cache().await;
    let _ = auth.apply(client.get("https://example.com/api")).await.unwrap();
}

#[tokio::test]
async fn test_iam_client_credentials_use_basic_auth() {
    let mock_server = MockServer::start().await;

    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("bx:bx")
    );
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(header("Authorization", expected.as_str()))
        .and(body_string_contains("scope=openid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "scoped-token",
            "expires_in": 3600
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Iam {
        apikey: "key".to_string(),
        url: format!("{}/", mock_server.uri()),
        client_id: Some("bx".to_string()),
        client_secret: Some("bx".to_string()),
        scope: Some("openid".to_string()),
    });

    let client = reqwest::Client::new();
    let built = auth
        .apply(client.get("https://example.com/api"))
        .await
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer scoped-token"
    );
}

#[tokio::test]
async fn test_iam_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errorCode": "BXNIM0415E",
            "errorMessage": "Provided API key could not be found"
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server));
    let client = reqwest::Client::new();

    let result = auth.apply(client.get("https://example.com/api")).await;
    let err = result.unwrap_err();
    assert!(matches!(err, crate::Error::TokenRequest { .. }));
    assert!(err.to_string().contains("400"));
}
