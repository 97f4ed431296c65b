use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{PostgrestRemote, RemoteStore};
use taxisite_types::{CloudSettings, SiteConfig, SyncError};

const KEY: &str = "anon-key-123";

fn remote_for(server: &MockServer) -> PostgrestRemote {
    PostgrestRemote::new(CloudSettings::new(format!("{}/", server.uri()), KEY)).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_auth_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/site_config"))
        .and(query_param("select", "data"))
        .and(query_param("id", "eq.1"))
        .and(header("apikey", KEY))
        .and(header("authorization", "Bearer anon-key-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "data": { "address": "Sector 9" } }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = remote_for(&server).fetch().await.unwrap();
    assert_eq!(data, json!({ "address": "Sector 9" }));
}

#[tokio::test]
async fn test_fetch_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = remote_for(&server).fetch().await.unwrap_err();
    assert_eq!(err, SyncError::Empty);
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = remote_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, SyncError::Malformed { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let err = remote_for(&server).fetch().await.unwrap_err();
    assert_eq!(
        err,
        SyncError::HttpStatus { status: 401, body: "Invalid API key".to_string() }
    );
}

#[tokio::test]
async fn test_publish_patches_whole_document() {
    let server = MockServer::start().await;
    let config = SiteConfig::default();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/site_config"))
        .and(query_param("id", "eq.1"))
        .and(header("apikey", KEY))
        .and(header("authorization", "Bearer anon-key-123"))
        .and(header("content-type", "application/json"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({ "data": config })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    remote_for(&server).publish(&config).await.unwrap();
}

#[tokio::test]
async fn test_publish_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = remote_for(&server).publish(&SiteConfig::default()).await.unwrap_err();
    assert!(matches!(err, SyncError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_unconfigured_never_hits_network() {
    let remote = PostgrestRemote::new(CloudSettings::default()).unwrap();
    assert_eq!(remote.fetch().await.unwrap_err(), SyncError::NotConfigured);
    assert_eq!(
        remote.publish(&SiteConfig::default()).await.unwrap_err(),
        SyncError::NotConfigured
    );
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let remote =
        PostgrestRemote::new(CloudSettings::new("http://127.0.0.1:9", KEY)).unwrap();
    let err = remote.fetch().await.unwrap_err();
    assert!(matches!(err, SyncError::Network { .. }), "got {err:?}");
}

#[test]
fn test_table_url() {
    let remote =
        PostgrestRemote::new(CloudSettings::new("https://xyz.supabase.co/", KEY)).unwrap();
    assert_eq!(remote.table_url(), "https://xyz.supabase.co/rest/v1/site_config");
}

#[test]
fn test_rejects_non_http_urls() {
    for url in ["xyz.supabase.co", "ftp://xyz.supabase.co", "https://"] {
        let err = PostgrestRemote::new(CloudSettings::new(url, KEY)).unwrap_err();
        assert!(matches!(err, SyncError::InvalidUrl { .. }), "{url}: {err:?}");
    }
}
