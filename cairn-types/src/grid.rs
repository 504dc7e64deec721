//! Grid layouts referencing items by position.

use crate::item::Item;
use serde::Deserialize;

/// Row/column span of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridLayout {
    #[serde(default)]
    pub rowspan: Option<u32>,
    #[serde(default)]
    pub colspan: Option<u32>,
}

/// One cell of a grid row, optionally holding an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    #[serde(default)]
    pub layout: Option<GridLayout>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub item: Option<Item>,
}

/// One row of a grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridRow {
    #[serde(default)]
    pub columns: Vec<GridColumn>,
}

/// A named grid of item references.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Grid {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rows: Vec<GridRow>,
}
