//! The polymorphic component system.
//!
//! A component's wire shape is `{name, type, meta, content}` where the
//! `type` tag decides which content shape the `content` object holds.
//! Deserialization reads the tag first, then decodes `content` into the
//! matching [`ComponentContent`] variant, so consumers match on an
//! exhaustive enum instead of probing untyped JSON.

use crate::grid::Grid;
use crate::item::Item;
use crate::media::{Image, Video};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wire tag carried by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    SingleLine,
    RichText,
    Images,
    Videos,
    ParagraphCollection,
    ItemRelations,
    GridRelations,
    PropertiesTable,
    Datetime,
    Boolean,
    ComponentChoice,
    /// Tag this crate does not model; content stays raw JSON.
    #[serde(other)]
    Unknown,
}

/// A key/value metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Content of a single-line text component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SingleLineContent {
    #[serde(default)]
    pub text: Option<String>,
}

/// Content of a rich-text component. The `json` payload is the editor's
/// node tree and is passed through unparsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextContent {
    #[serde(default)]
    pub json: Value,
}

/// Content of an images component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImagesContent {
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Content of a videos component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideosContent {
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// One paragraph of a paragraph collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub title: Option<SingleLineContent>,
    #[serde(default)]
    pub body: Option<RichTextContent>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Content of a paragraph-collection component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParagraphCollectionContent {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// Content of an item-relations component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRelationsContent {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Content of a grid-relations component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridRelationsContent {
    #[serde(default)]
    pub grids: Vec<Grid>,
}

/// One titled section of a properties table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertiesTableSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub properties: Vec<KeyValue>,
}

/// Content of a properties-table component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertiesTableContent {
    #[serde(default)]
    pub sections: Vec<PropertiesTableSection>,
}

/// Content of a datetime component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatetimeContent {
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
}

/// Content of a boolean component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BooleanContent {
    #[serde(default)]
    pub value: bool,
}

/// Content of a component-choice component: the editor picked one of the
/// configured child components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChoiceContent {
    #[serde(default)]
    pub selected_component: Option<Box<Component>>,
}

/// The possible content shapes of a component, one variant per wire tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentContent {
    SingleLine(SingleLineContent),
    RichText(RichTextContent),
    Images(ImagesContent),
    Videos(VideosContent),
    ParagraphCollection(ParagraphCollectionContent),
    ItemRelations(ItemRelationsContent),
    GridRelations(GridRelationsContent),
    PropertiesTable(PropertiesTableContent),
    Datetime(DatetimeContent),
    Boolean(BooleanContent),
    ComponentChoice(ComponentChoiceContent),
    /// Unrecognized tag; the raw content value is preserved.
    Unknown(Value),
}

impl ComponentContent {
    fn decode(tag: ComponentType, value: Value) -> serde_json::Result<Self> {
        Ok(match tag {
            ComponentType::SingleLine => Self::SingleLine(serde_json::from_value(value)?),
            ComponentType::RichText => Self::RichText(serde_json::from_value(value)?),
            ComponentType::Images => Self::Images(serde_json::from_value(value)?),
            ComponentType::Videos => Self::Videos(serde_json::from_value(value)?),
            ComponentType::ParagraphCollection => {
                Self::ParagraphCollection(serde_json::from_value(value)?)
            }
            ComponentType::ItemRelations => Self::ItemRelations(serde_json::from_value(value)?),
            ComponentType::GridRelations => Self::GridRelations(serde_json::from_value(value)?),
            ComponentType::PropertiesTable => {
                Self::PropertiesTable(serde_json::from_value(value)?)
            }
            ComponentType::Datetime => Self::Datetime(serde_json::from_value(value)?),
            ComponentType::Boolean => Self::Boolean(serde_json::from_value(value)?),
            ComponentType::ComponentChoice => {
                Self::ComponentChoice(serde_json::from_value(value)?)
            }
            ComponentType::Unknown => Self::Unknown(value),
        })
    }
}

/// A named, typed slot of content attached to an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub component_type: ComponentType,
    pub meta: Vec<KeyValue>,
    pub content: Option<ComponentContent>,
}

#[derive(Deserialize)]
struct RawComponent {
    name: String,
    #[serde(rename = "type")]
    component_type: ComponentType,
    #[serde(default)]
    meta: Option<Vec<KeyValue>>,
    #[serde(default)]
    content: Option<Value>,
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawComponent::deserialize(deserializer)?;
        let content = match raw.content {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                ComponentContent::decode(raw.component_type, value).map_err(D::Error::custom)?,
            ),
        };

        Ok(Component {
            name: raw.name,
            component_type: raw.component_type,
            meta: raw.meta.unwrap_or_default(),
            content,
        })
    }
}
