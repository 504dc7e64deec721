//! Client configuration.
//!
//! Configuration is explicit: every client owns its own [`ClientConfig`],
//! so multiple independently configured clients (e.g. one pointed at a
//! mock server in tests) can coexist in a process. There is no global
//! state.

use crate::error::{ClientError, ClientResult};

/// Public API host. Tenant-scoped bases are formed as `{host}/{tenant}`.
pub const DEFAULT_API_HOST: &str = "https://api.crystallize.com";

/// Environment variable naming the tenant whose data the client addresses.
pub const TENANT_ENV_VAR: &str = "CRYSTALLIZE_TENANT_IDENTIFIER";

/// Environment variable carrying an authenticated service-proxy base URL.
/// When APIs require authentication, requests are routed through the
/// service API instead of the public tenant endpoint.
pub const SERVICE_API_ENV_VAR: &str = "SERVICE_API_URL";

/// Configuration for a [`CatalogueClient`](crate::CatalogueClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Tenant identifier; forms the default API base URL.
    pub tenant_identifier: String,
    /// Optional base-URL override for authenticated proxying.
    pub service_api_url: Option<String>,
}

impl ClientConfig {
    /// Configuration addressing the given tenant on the public API host.
    pub fn new(tenant_identifier: impl Into<String>) -> Self {
        Self {
            tenant_identifier: tenant_identifier.into(),
            service_api_url: None,
        }
    }

    /// Routes all requests through the given base URL instead of the
    /// public tenant endpoint.
    #[must_use]
    pub fn with_service_api_url(mut self, url: impl Into<String>) -> Self {
        self.service_api_url = Some(url.into());
        self
    }

    /// Reads configuration from the environment.
    ///
    /// Requires [`TENANT_ENV_VAR`]; [`SERVICE_API_ENV_VAR`] is picked up
    /// when set.
    pub fn from_env() -> ClientResult<Self> {
        let tenant_identifier = std::env::var(TENANT_ENV_VAR)
            .map_err(|_| ClientError::Config(format!("{TENANT_ENV_VAR} is not set")))?;

        Ok(Self {
            tenant_identifier,
            service_api_url: std::env::var(SERVICE_API_ENV_VAR).ok(),
        })
    }

    /// The base URL endpoint paths are appended to.
    #[must_use]
    pub fn api_base(&self) -> String {
        match &self.service_api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{DEFAULT_API_HOST}/{}", self.tenant_identifier),
        }
    }

    /// URL of the tenant's catalogue endpoint.
    #[must_use]
    pub fn catalogue_url(&self) -> String {
        format!("{}/catalogue", self.api_base())
    }

    /// URL of the tenant's search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_base())
    }
}
