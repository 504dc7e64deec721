//! Wire-shape type definitions for the cairn catalogue client.
//!
//! This crate defines read-only projections of remote catalogue state:
//! - Catalogue tree nodes returned by the bounded-depth tree query
//! - Items, products, variants and pricing
//! - The polymorphic component system, modelled as a sum type keyed by the
//!   wire `type` tag
//! - Media and grid shapes referenced by components
//!
//! Everything here is `Deserialize`-only: each response parses into fresh
//! values that are discarded after consumption. Nothing is persisted,
//! cached, or written back to the API.

mod catalogue;
mod component;
mod grid;
mod item;
mod media;

pub use catalogue::{CatalogueItem, ItemType, Shape};
pub use component::{
    BooleanContent, Component, ComponentChoiceContent, ComponentContent, ComponentType,
    DatetimeContent, GridRelationsContent, ImagesContent, ItemRelationsContent, KeyValue,
    Paragraph, ParagraphCollectionContent, PropertiesTableContent, PropertiesTableSection,
    RichTextContent, SingleLineContent, VideosContent,
};
pub use grid::{Grid, GridColumn, GridLayout, GridRow};
pub use item::{Item, PriceVariant, ProductData, Topic, Variant, VariantAttribute, VatType};
pub use media::{Caption, Image, ImageVariant, Video, VideoThumbnail};
