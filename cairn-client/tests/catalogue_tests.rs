use cairn_client::{catalogue_query, CatalogueClient, ClientConfig, ClientError, MAX_CATALOGUE_DEPTH};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> CatalogueClient {
    CatalogueClient::new(ClientConfig::new("test-tenant").with_service_api_url(server.uri()))
}

// ── Query generation ─────────────────────────────────────────────

#[test]
fn query_unrolls_requested_depth() {
    let query = catalogue_query(MAX_CATALOGUE_DEPTH);
    assert_eq!(query.matches("children {").count(), MAX_CATALOGUE_DEPTH);
}

#[test]
fn zero_depth_requests_root_only() {
    let query = catalogue_query(0);
    assert!(!query.contains("children"));
    assert!(query.contains("publishedAt"));
}

#[test]
fn query_targets_root_path_with_language_variable() {
    let query = catalogue_query(2);
    assert!(query.starts_with("query GET_ALL_CATALOGUE_ITEMS($language: String!)"));
    assert!(query.contains("catalogue(language: $language, path: \"/\")"));
    assert!(query.contains("shape {"));
}

#[test]
fn query_parses_as_graphql() {
    let tree = apollo_parser::Parser::new(&catalogue_query(MAX_CATALOGUE_DEPTH)).parse();
    assert_eq!(tree.errors().count(), 0);
}

// ── Tree fetching ────────────────────────────────────────────────

#[tokio::test]
async fn returns_root_children_without_root() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogue"))
        .and(body_partial_json(json!({ "variables": { "language": "en" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "catalogue": {
                    "id": "root",
                    "path": "/",
                    "name": "Root",
                    "type": "folder",
                    "children": [
                        { "id": "A", "path": "/a", "name": "A", "type": "folder" },
                        { "id": "B", "path": "/b", "name": "B", "type": "document" },
                    ],
                },
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = mock_client(&server).all_catalogue_items("en").await.unwrap();

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["A", "B"]);
}

#[tokio::test]
async fn nested_children_decode_recursively() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "catalogue": {
                    "id": "root",
                    "path": "/",
                    "type": "folder",
                    "children": [{
                        "id": "teas",
                        "path": "/teas",
                        "type": "folder",
                        "shape": { "name": "Folder" },
                        "children": [{
                            "id": "sencha",
                            "path": "/teas/sencha",
                            "type": "product",
                            "publishedAt": "2024-01-10T09:00:00.000Z",
                        }],
                    }],
                },
            },
        })))
        .mount(&server)
        .await;

    let items = mock_client(&server)
        .catalogue_items_at_depth("en", 2)
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].children[0].id, "sencha");
    assert!(items[0].children[0].published_at.is_some());
}

#[tokio::test]
async fn missing_catalogue_node_is_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "catalogue": null } })))
        .mount(&server)
        .await;

    let err = mock_client(&server).all_catalogue_items("en").await.unwrap_err();
    assert!(matches!(err, ClientError::Shape(_)));
}

#[tokio::test]
async fn missing_data_is_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "tenant not found" }],
        })))
        .mount(&server)
        .await;

    let err = mock_client(&server).all_catalogue_items("en").await.unwrap_err();
    assert!(matches!(err, ClientError::Shape(_)));
}

#[tokio::test]
async fn transport_failures_propagate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = mock_client(&server).all_catalogue_items("en").await.unwrap_err();
    assert_eq!(err.to_string(), "bad gateway");
}
