//! Catalogue tree nodes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The kind of entity a catalogue node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Folder,
    Product,
    Document,
    /// Tag introduced server-side after this crate was published.
    #[serde(other)]
    Unknown,
}

/// Shape metadata attached to an item.
///
/// The `id` field is only requested by some selections, so it is optional
/// even though every shape has one remotely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shape {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// One node of the catalogue tree.
///
/// Nesting depth is bounded by the query that produced the value, not by
/// the type: nodes below the requested depth arrive with empty `children`
/// rather than erring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueItem {
    pub id: String,
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub children: Vec<CatalogueItem>,
}

impl CatalogueItem {
    /// Depth of the deepest populated `children` chain under this node.
    /// A leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over this node and every descendant, depth first.
    pub fn walk(&self) -> impl Iterator<Item = &CatalogueItem> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
