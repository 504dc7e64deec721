//! Async client for the Crystallize catalogue and search GraphQL APIs.
//!
//! The client is deliberately small:
//! - [`ClientConfig`] selects the tenant, or an authenticated proxy
//! - [`CatalogueClient`] POSTs GraphQL documents and returns the parsed
//!   `{data, errors}` envelope
//! - [`sanitize_path`] normalizes `path` variables before they go out
//! - [`CatalogueClient::all_catalogue_items`] fetches the bounded-depth
//!   catalogue tree
//! - [`fragments`] holds the reusable fragment library for the component
//!   system
//!
//! There is no retry, timeout, or caching layer: every call maps to
//! exactly one HTTP POST and either fully succeeds or fully fails.
//! GraphQL-level `errors` inside a 2xx response are returned to the
//! caller untouched; see [`GraphqlResponse::into_data`] for the strict
//! alternative.

mod catalogue;
mod client;
mod config;
mod error;
pub mod fragments;
mod path;

pub use catalogue::{catalogue_query, MAX_CATALOGUE_DEPTH};
pub use client::{CatalogueClient, GraphqlError, GraphqlResponse};
pub use config::{ClientConfig, DEFAULT_API_HOST, SERVICE_API_ENV_VAR, TENANT_ENV_VAR};
pub use error::{ClientError, ClientResult};
pub use path::{sanitize_path, sanitize_path_variable};
