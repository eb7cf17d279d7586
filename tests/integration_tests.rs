//! Integration tests using mock HTTP server
//!
//! Tests the full flow: ClientConfig → KeysService → HttpKeysApi → HTTP requests

use keyctl::pagination::Page;
use keyctl::{
    paginate, ClientConfig, Error, KeyCreateRequest, KeyUpdateRequest, KeysService, HttpKeysApi,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer, per_page: u32) -> KeysService<HttpKeysApi> {
    let mut config = ClientConfig::default()
        .with_access_token(Some("integration-token".to_string()))
        .with_api_url(Some(server.uri()));
    config.per_page = per_page;
    config.build_keys_service().unwrap()
}

fn key_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("key-{id}"),
        "fingerprint": format!("fp:{id:02x}"),
        "public_key": "ssh-ed25519 AAAA test"
    })
}

async fn mount_page(
    server: &MockServer,
    page: u32,
    ids: &[u64],
    has_next: bool,
    expected_calls: u64,
) {
    let mut body = json!({
        "ssh_keys": ids.iter().map(|id| key_json(*id)).collect::<Vec<_>>(),
        "meta": {"total": 5}
    });
    if has_next {
        body["links"] = json!({
            "pages": {"next": format!("{}/v2/account/keys?page={}&per_page=2", server.uri(), page + 1)}
        });
    }

    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "2"))
        .and(header("Authorization", "Bearer integration-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_three_pages() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, &[1, 2], true, 1).await;
    mount_page(&mock_server, 2, &[3, 4], true, 1).await;
    mount_page(&mock_server, 3, &[5], false, 1).await;

    let keys = service(&mock_server, 2).list().await.unwrap();

    let ids: Vec<u64> = keys.iter().map(|k| k.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_list_fails_fast_on_page_error() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, &[1, 2], true, 1).await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("connection reset"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 3 must never be requested
    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ssh_keys": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = service(&mock_server, 2).list().await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "connection reset");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_twice_is_stable() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, &[1, 2], true, 2).await;
    mount_page(&mock_server, 2, &[3], false, 2).await;

    let service = service(&mock_server, 2);
    let first = service.list().await.unwrap();
    let second = service.list().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_lists_are_independent() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, &[1, 2], true, 2).await;
    mount_page(&mock_server, 2, &[3], false, 2).await;

    let service = service(&mock_server, 2);
    let (a, b) = tokio::join!(service.list(), service.list());

    assert_eq!(a.unwrap().len(), 3);
    assert_eq!(b.unwrap().len(), 3);
}

// ============================================================================
// Single Key Tests
// ============================================================================

#[tokio::test]
async fn test_key_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/account/keys"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ssh_key": key_json(10)})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ssh_key": key_json(10)})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/account/keys/fp:0a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_key": {"id": 10, "name": "renamed", "fingerprint": "fp:0a", "public_key": "k"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/account/keys/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service(&mock_server, 2);

    let created = service
        .create(&KeyCreateRequest::new("key-10", "ssh-ed25519 AAAA test"))
        .await
        .unwrap();
    assert_eq!(created.id, 10);

    let fetched = service.get("10").await.unwrap();
    assert_eq!(fetched, created);

    let renamed = service
        .update(&fetched.fingerprint, &KeyUpdateRequest::new("renamed"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "renamed");

    service.delete("10").await.unwrap();
}

#[tokio::test]
async fn test_get_missing_key_surfaces_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys/ab:cd:ef"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "The resource you were accessing could not be found."
        })))
        .mount(&mock_server)
        .await;

    let err = service(&mock_server, 2).get("ab:cd:ef").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Api { status: 404, ref id, .. } if id == "not_found"
    ));
}

#[tokio::test]
async fn test_empty_id_is_local_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = service(&mock_server, 2).delete("").await.unwrap_err();
    assert!(matches!(err, Error::MissingKeyId));
}

// ============================================================================
// Generic Walker Tests
// ============================================================================

#[tokio::test]
async fn test_paginate_over_other_item_types() {
    let names = paginate(|request| async move {
        let items = vec![format!("item-{}", request.page)];
        if request.page < 3 {
            Ok::<_, Error>(Page::with_next(items, format!("page={}", request.page + 1)))
        } else {
            Ok(Page::last(items))
        }
    })
    .await
    .unwrap();

    assert_eq!(names, vec!["item-1", "item-2", "item-3"]);
}
