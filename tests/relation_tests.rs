//! Integration tests for relationship resolution.
//!
//! These tests verify that to-one references resolve with a fresh fetch,
//! that fan-out resolution preserves declared order regardless of response
//! timing and fails whole on any member failure, and that nested
//! collections are discovered by pagination.

use std::time::Duration;

use simplemdm_api::clients::HttpClient;
use simplemdm_api::rest::resources::{AppGroup, CustomAttributeValue, Device};
use simplemdm_api::rest::{ListableResource, ResourceError, ToManyNested};
use simplemdm_api::{ApiKey, HostUrl, SimpleMdmConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointing at the given mock server.
fn create_test_client(server: &MockServer) -> HttpClient {
    let config = SimpleMdmConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .build();
    HttpClient::new(&config)
}

fn app_group_json() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": "app_group",
            "id": 9,
            "attributes": {"name": "Productivity", "auto_deploy": true},
            "relationships": {
                "apps": {
                    "data": [
                        {"type": "app", "id": 63},
                        {"type": "app", "id": 67}
                    ]
                },
                "device_groups": {
                    "data": [{"type": "device_group", "id": 37}]
                }
            }
        }
    })
}

fn app_response(id: i64, name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "data": {"type": "app", "id": id, "attributes": {"name": name}}
    }))
}

#[tokio::test]
async fn test_relationships_decode_into_reference_lists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app_groups/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_group_json()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let group = AppGroup::find(&client, 9).await.unwrap();

    let app_ids: Vec<i64> = group.apps.ids().copied().collect();
    assert_eq!(app_ids, vec![63, 67]);
    assert_eq!(group.device_groups.len(), 1);
}

#[tokio::test]
async fn test_to_one_resolves_with_a_fresh_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices/121"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "type": "device",
                "id": 121,
                "attributes": {"name": "Mac Mini"},
                "relationships": {
                    "device_group": {"data": {"type": "device_group", "id": 37}}
                }
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/device_groups/37"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"type": "device_group", "id": 37, "attributes": {"name": "Interns"}}
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let device = Device::find(&client, 121).await.unwrap();

    let reference = device.device_group.as_ref().unwrap();
    assert_eq!(*reference.id(), 37);

    // Nothing is cached: each resolve performs its own fetch.
    let group = reference.resolve(&client).await.unwrap();
    assert_eq!(group.name, "Interns");
    let again = reference.resolve(&client).await.unwrap();
    assert_eq!(group, again);
}

#[tokio::test]
async fn test_resolve_all_preserves_declared_order_under_skewed_timing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app_groups/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_group_json()))
        .mount(&mock_server)
        .await;

    // The first declared app answers last.
    Mock::given(method("GET"))
        .and(path("/api/v1/apps/63"))
        .respond_with(app_response(63, "Keynote").set_delay(Duration::from_millis(200)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps/67"))
        .respond_with(app_response(67, "Numbers"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let group = AppGroup::find(&client, 9).await.unwrap();

    let apps = group.apps.resolve_all(&client).await.unwrap();
    let ids: Vec<Option<i64>> = apps.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![Some(63), Some(67)]);
}

#[tokio::test]
async fn test_resolve_all_fails_whole_when_one_member_is_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app_groups/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_group_json()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/apps/63"))
        .respond_with(app_response(63, "Keynote"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/apps/67"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{"title": "object not found"}]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let group = AppGroup::find(&client, 9).await.unwrap();

    let result = group.apps.resolve_all(&client).await;
    assert!(matches!(
        result,
        Err(ResourceError::DoesNotExist { resource: "app", id: Some(id) }) if id == "67"
    ));
}

#[tokio::test]
async fn test_resolve_at_out_of_range_fails_without_a_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app_groups/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_group_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let group = AppGroup::find(&client, 9).await.unwrap();

    let result = group.apps.resolve_at(&client, 5).await;
    assert!(matches!(
        result,
        Err(ResourceError::DoesNotExist { resource: "app", id: None })
    ));

    // Only the app group fetch itself reached the server.
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_nested_collection_resolves_by_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices/121/custom_attribute_values"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"type": "custom_attribute_value", "id": "asset_tag", "attributes": {"value": "A-100"}},
                {"type": "custom_attribute_value", "id": "owner", "attributes": {"value": "kim"}}
            ],
            "has_more": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let reference: ToManyNested<Device, CustomAttributeValue> = ToManyNested::new(121);

    let values = reference.resolve_all(&client).await.unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].id.as_deref(), Some("asset_tag"));
    assert_eq!(values[1].value, "kim");
}

#[tokio::test]
async fn test_nested_resolve_by_id_exhausts_then_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices/121/custom_attribute_values"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"type": "custom_attribute_value", "id": "owner", "attributes": {"value": "kim"}}
            ],
            "has_more": false
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let reference: ToManyNested<Device, CustomAttributeValue> = ToManyNested::new(121);

    let found = reference
        .resolve_by_id(&client, "owner".to_string())
        .await
        .unwrap();
    assert_eq!(found.value, "kim");

    let missing = reference
        .resolve_by_id(&client, "asset_tag".to_string())
        .await;
    assert!(matches!(
        missing,
        Err(ResourceError::DoesNotExist { resource: "custom_attribute_value", id: Some(id) })
            if id == "asset_tag"
    ));
}
