//! Bounded-depth catalogue tree retrieval.
//!
//! The catalogue schema is recursive, but GraphQL selections are not: the
//! tree query unrolls the `children` relation to a fixed depth. Nodes
//! below that depth are omitted by the server, never erred on.

use crate::client::CatalogueClient;
use crate::error::{ClientError, ClientResult};
use cairn_types::CatalogueItem;
use serde::Deserialize;
use serde_json::{Map, Value};

/// `children` nesting the built-in tree query unrolls.
pub const MAX_CATALOGUE_DEPTH: usize = 6;

const NODE_FIELDS: [&str; 7] = [
    "id",
    "path",
    "name",
    "type",
    "createdAt",
    "updatedAt",
    "publishedAt",
];

/// Builds the catalogue tree query, unrolling `children` blocks `depth`
/// times under the root. Every level requests the same node fields.
#[must_use]
pub fn catalogue_query(depth: usize) -> String {
    let mut query = String::from(
        "query GET_ALL_CATALOGUE_ITEMS($language: String!) {\n  catalogue(language: $language, path: \"/\") {\n",
    );
    write_level(&mut query, depth, 2);
    query.push_str("  }\n}\n");
    query
}

fn write_level(out: &mut String, depth: usize, indent: usize) {
    let pad = "  ".repeat(indent);

    for field in NODE_FIELDS {
        out.push_str(&pad);
        out.push_str(field);
        out.push('\n');
    }
    out.push_str(&pad);
    out.push_str("shape {\n");
    out.push_str(&pad);
    out.push_str("  name\n");
    out.push_str(&pad);
    out.push_str("}\n");

    if depth > 0 {
        out.push_str(&pad);
        out.push_str("children {\n");
        write_level(out, depth - 1, indent + 1);
        out.push_str(&pad);
        out.push_str("}\n");
    }
}

#[derive(Deserialize)]
struct CatalogueData {
    catalogue: Option<CatalogueItem>,
}

impl CatalogueClient {
    /// Fetches the catalogue tree rooted at `/` to [`MAX_CATALOGUE_DEPTH`]
    /// and returns the root's immediate children. The root node itself is
    /// not part of the result.
    pub async fn all_catalogue_items(&self, language: &str) -> ClientResult<Vec<CatalogueItem>> {
        self.catalogue_items_at_depth(language, MAX_CATALOGUE_DEPTH)
            .await
    }

    /// Same as [`all_catalogue_items`](Self::all_catalogue_items) with an
    /// explicit traversal depth.
    ///
    /// Fails with [`ClientError::Shape`] when the response lacks the
    /// `data.catalogue` node: an absent root means the query or tenant is
    /// misconfigured, and an empty result would mask that.
    pub async fn catalogue_items_at_depth(
        &self,
        language: &str,
        depth: usize,
    ) -> ClientResult<Vec<CatalogueItem>> {
        let mut variables = Map::new();
        variables.insert("language".to_owned(), Value::String(language.to_owned()));

        let response = self.execute(&catalogue_query(depth), Some(variables)).await?;

        let data = response
            .data
            .ok_or_else(|| ClientError::Shape("catalogue response has no data".to_owned()))?;
        let data: CatalogueData = serde_json::from_value(data)?;
        let root = data
            .catalogue
            .ok_or_else(|| ClientError::Shape("catalogue response has no catalogue node".to_owned()))?;

        Ok(root.children)
    }
}
