//! Contract tests for BlobClient against a mock blob API.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | PUT    | `/?pathname={path}` | `put_*` |

use consent_blob::{Access, BlobApiConfig, BlobClient, BlobError, BlobStore, PutOptions};
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> BlobClient {
    let config = BlobApiConfig::for_base_url(&mock_server.uri(), "test-token").unwrap();
    BlobClient::new(config).unwrap()
}

// ── PUT /?pathname= ──────────────────────────────────────────────────

#[tokio::test]
async fn put_sends_headers_and_returns_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/"))
        .and(query_param("pathname", "submissions/1700000000000.json"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-api-version", "7"))
        .and(header("x-content-type", "application/json"))
        .and(header("x-add-random-suffix", "1"))
        .and(header("x-vercel-blob-access", "private"))
        .and(body_bytes(br#"{"ok":true}"#.to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://store.example/submissions/1700000000000-AbC.json",
            "downloadUrl": "https://store.example/submissions/1700000000000-AbC.json?download=1",
            "pathname": "submissions/1700000000000-AbC.json",
            "contentType": "application/json",
            "contentDisposition": "inline; filename=\"1700000000000.json\""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .put(
            "submissions/1700000000000.json",
            br#"{"ok":true}"#.to_vec(),
            &PutOptions::private_json(),
        )
        .await
        .unwrap();

    assert_eq!(result.pathname, "submissions/1700000000000-AbC.json");
    assert_eq!(result.content_type.as_deref(), Some("application/json"));
    assert!(result.download_url.is_some());
}

#[tokio::test]
async fn put_without_suffix_sends_zero_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header("x-add-random-suffix", "0"))
        .and(header("x-vercel-blob-access", "public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://store.example/a.txt",
            "pathname": "a.txt"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = PutOptions {
        access: Access::Public,
        content_type: "text/plain".to_string(),
        add_random_suffix: false,
    };
    let result = client.put("a.txt", b"hi".to_vec(), &options).await.unwrap();
    assert_eq!(result.pathname, "a.txt");
}

#[tokio::test]
async fn put_handles_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Access denied"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .put("submissions/1.json", vec![], &PutOptions::private_json())
        .await
        .unwrap_err();

    match err {
        BlobError::Api { status, body, .. } => {
            assert_eq!(status, 403);
            assert!(body.contains("Access denied"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn put_handles_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .put("submissions/1.json", vec![], &PutOptions::private_json())
        .await
        .unwrap_err();
    assert!(matches!(err, BlobError::Deserialization { .. }), "got: {err:?}");
}

#[tokio::test]
async fn put_rejects_empty_pathname_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .put("", vec![], &PutOptions::private_json())
        .await
        .unwrap_err();
    assert!(matches!(err, BlobError::InvalidPathname(_)));
}

#[tokio::test]
async fn put_transport_failure_is_http_error() {
    let config = BlobApiConfig::for_base_url("http://127.0.0.1:1", "test-token").unwrap();
    let client = BlobClient::new(config).unwrap();
    let err = client
        .put("submissions/1.json", vec![], &PutOptions::private_json())
        .await
        .unwrap_err();
    assert!(matches!(err, BlobError::Http { .. }), "got: {err:?}");
}

#[tokio::test]
async fn blob_store_dispatches_to_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://store.example/x-1.json",
            "pathname": "x-1.json"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = BlobStore::from(test_client(&mock_server));
    assert_eq!(store.backend_name(), "remote");
    let result = store
        .put("x.json", vec![], &PutOptions::private_json())
        .await
        .unwrap();
    assert_eq!(result.pathname, "x-1.json");
}
