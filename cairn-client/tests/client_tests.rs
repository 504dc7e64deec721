use cairn_client::{CatalogueClient, ClientConfig, ClientError};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> CatalogueClient {
    CatalogueClient::new(ClientConfig::new("test-tenant").with_service_api_url(server.uri()))
}

fn variables(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

// ── Config URL derivation ────────────────────────────────────────

#[test]
fn tenant_forms_default_urls() {
    let config = ClientConfig::new("my-shop");
    assert_eq!(
        config.catalogue_url(),
        "https://api.crystallize.com/my-shop/catalogue"
    );
    assert_eq!(
        config.search_url(),
        "https://api.crystallize.com/my-shop/search"
    );
}

#[test]
fn service_api_url_overrides_base() {
    let config = ClientConfig::new("my-shop").with_service_api_url("https://proxy.example/crystallize/");
    assert_eq!(
        config.catalogue_url(),
        "https://proxy.example/crystallize/catalogue"
    );
}

// ── Transport ────────────────────────────────────────────────────

#[tokio::test]
async fn success_returns_parsed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "x": 1 } })))
        .mount(&server)
        .await;

    let response = mock_client(&server).execute("{ x }", None).await.unwrap();
    assert_eq!(response.data, Some(json!({ "x": 1 })));
    assert!(response.errors.is_none());
    assert!(!response.has_errors());
}

#[tokio::test]
async fn non_success_surfaces_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogue"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = mock_client(&server).execute("{ x }", None).await.unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn request_is_json_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogue"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server).execute("{ x }", None).await.unwrap();
}

#[tokio::test]
async fn body_carries_sanitized_path_variable() {
    let server = MockServer::start().await;

    // Trailing slash stripped, other variables untouched.
    Mock::given(method("POST"))
        .and(body_json(json!({
            "query": "Q",
            "variables": { "path": "/a/b", "language": "en" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server)
        .execute("Q", Some(variables(json!({ "path": "/a/b/", "language": "en" }))))
        .await
        .unwrap();
}

#[tokio::test]
async fn variables_are_omitted_when_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({ "query": "{ x }" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server).execute("{ x }", None).await.unwrap();
}

// ── Endpoint routing ─────────────────────────────────────────────

#[tokio::test]
async fn search_posts_to_search_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({ "variables": { "term": "tea" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "search": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server)
        .search("query S($term: String!) { search(term: $term) { id } }", Some(variables(json!({ "term": "tea" }))))
        .await
        .unwrap();
}

#[tokio::test]
async fn execute_at_targets_explicit_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/custom/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client
        .execute_at(&format!("{}/custom/endpoint", server.uri()), "{ x }", None)
        .await
        .unwrap();
}

// ── GraphQL-level errors ─────────────────────────────────────────

#[tokio::test]
async fn graphql_errors_pass_through_execute() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Cannot query field \"nope\"" }],
        })))
        .mount(&server)
        .await;

    // Parity behavior: a 200 with an errors array is a successful call.
    let response = mock_client(&server).execute("{ nope }", None).await.unwrap();
    assert!(response.has_errors());
    assert_eq!(
        response.errors.as_ref().unwrap()[0].message,
        "Cannot query field \"nope\""
    );
}

#[tokio::test]
async fn into_data_promotes_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "nope" }, { "message": "also nope" }],
        })))
        .mount(&server)
        .await;

    let response = mock_client(&server).execute("{ nope }", None).await.unwrap();
    match response.into_data() {
        Err(ClientError::Graphql(msg)) => {
            assert_eq!(msg, "nope; also nope");
        }
        other => panic!("expected graphql error, got {other:?}"),
    }
}

#[tokio::test]
async fn into_data_unwraps_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "x": 1 } })))
        .mount(&server)
        .await;

    let response = mock_client(&server).execute("{ x }", None).await.unwrap();
    assert_eq!(response.into_data().unwrap(), json!({ "x": 1 }));
}

#[test]
fn into_data_without_data_is_shape_error() {
    let response = cairn_client::GraphqlResponse {
        data: None,
        errors: None,
    };
    assert!(matches!(response.into_data(), Err(ClientError::Shape(_))));
}

// ── Environment configuration ────────────────────────────────────

#[test]
fn from_env_requires_tenant() {
    // Sole test touching these variables; safe despite parallel tests.
    unsafe {
        std::env::remove_var(cairn_client::TENANT_ENV_VAR);
        std::env::remove_var(cairn_client::SERVICE_API_ENV_VAR);
    }
    assert!(matches!(
        ClientConfig::from_env(),
        Err(ClientError::Config(_))
    ));

    unsafe {
        std::env::set_var(cairn_client::TENANT_ENV_VAR, "env-tenant");
    }
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.tenant_identifier, "env-tenant");
    assert!(config.service_api_url.is_none());

    unsafe {
        std::env::remove_var(cairn_client::TENANT_ENV_VAR);
    }
}
