//! GraphQL-over-POST transport.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::path::sanitize_path_variable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Wire form of a GraphQL request body. `variables` is omitted entirely
/// when absent, matching what the API expects.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Map<String, Value>>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Option<Value>,
    #[serde(default)]
    pub path: Option<Value>,
}

/// The `{data, errors}` envelope of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// True when the envelope carries a non-empty `errors` array.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Promotes GraphQL-level errors to a failure and unwraps `data`.
    ///
    /// [`CatalogueClient::execute`] deliberately returns the envelope
    /// untouched even when it carries an `errors` array; call this to opt
    /// into strict handling.
    pub fn into_data(self) -> ClientResult<Value> {
        if let Some(errors) = &self.errors {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                return Err(ClientError::Graphql(messages.join("; ")));
            }
        }

        self.data
            .ok_or_else(|| ClientError::Shape("response has no data".to_owned()))
    }
}

/// Asynchronous client for a tenant's catalogue and search endpoints.
///
/// Stateless between calls: each method issues exactly one POST and
/// returns a fresh value. There is no retry, timeout, or caching layer;
/// dropping a returned future cancels the underlying request. The client
/// is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct CatalogueClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl CatalogueClient {
    /// Creates a client for the given configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes a GraphQL document against the tenant's catalogue
    /// endpoint.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
    ) -> ClientResult<GraphqlResponse> {
        self.execute_at(&self.config.catalogue_url(), query, variables)
            .await
    }

    /// Executes a GraphQL document against the tenant's search endpoint.
    /// Semantics are otherwise identical to [`execute`](Self::execute).
    pub async fn search(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
    ) -> ClientResult<GraphqlResponse> {
        self.execute_at(&self.config.search_url(), query, variables)
            .await
    }

    /// Executes a GraphQL document against an explicit endpoint URL.
    ///
    /// A `path` variable, if present, is sanitized before serialization.
    /// A non-2xx response fails with [`ClientError::Request`] carrying the
    /// raw body text; a 2xx response is parsed into the envelope with any
    /// GraphQL-level `errors` passed through for the caller to interpret.
    pub async fn execute_at(
        &self,
        url: &str,
        query: &str,
        mut variables: Option<Map<String, Value>>,
    ) -> ClientResult<GraphqlResponse> {
        if let Some(variables) = variables.as_mut() {
            sanitize_path_variable(variables);
        }

        debug!(%url, "executing GraphQL document");

        let response = self
            .http
            .post(url)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Request { status, body });
        }

        Ok(response.json().await?)
    }
}
