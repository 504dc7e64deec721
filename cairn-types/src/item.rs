//! Items, products, variants and pricing.

use crate::catalogue::{ItemType, Shape};
use crate::component::Component;
use crate::media::Image;
use serde::{Deserialize, Deserializer};

/// A topic the item is tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
}

/// One price entry of a variant, per price list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceVariant {
    pub identifier: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// A key/value attribute of a variant (e.g. size, colour).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantAttribute {
    pub attribute: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// VAT class applied to a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VatType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub percent: Option<f64>,
}

/// A purchasable SKU-level configuration of a product.
///
/// Different selections request different subsets, so everything except
/// the collections is optional. The grid selection requests a singular
/// `image` per variant; the product fragment requests `images`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price_variants: Vec<PriceVariant>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<VariantAttribute>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub image: Option<Image>,
}

impl Variant {
    /// Price for the given price-list identifier, if present.
    #[must_use]
    pub fn price(&self, identifier: &str) -> Option<f64> {
        self.price_variants
            .iter()
            .find(|pv| pv.identifier == identifier)
            .and_then(|pv| pv.price)
    }
}

/// Product-only fields of an item.
///
/// Present exactly when the response carried an `... on Product`
/// narrowing; `variants` is the one key every such selection requests,
/// so its presence is the discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub vat_type: Option<VatType>,
    pub is_virtual: Option<bool>,
    pub is_subscription_only: Option<bool>,
    pub variants: Vec<Variant>,
    pub default_variant: Option<Variant>,
}

impl ProductData {
    /// The variant flagged as default, falling back to the explicitly
    /// requested `defaultVariant` selection.
    #[must_use]
    pub fn find_default_variant(&self) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.is_default == Some(true))
            .or(self.default_variant.as_ref())
    }
}

/// A content entity with its attached components.
///
/// Deserialization assembles the flat wire fields of an `... on Product`
/// narrowing into [`ProductData`]; for folders and documents `product`
/// is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: Option<String>,
    pub item_type: ItemType,
    pub path: Option<String>,
    pub language: Option<String>,
    pub shape: Option<Shape>,
    pub topics: Vec<Topic>,
    pub components: Vec<Component>,
    pub product: Option<ProductData>,
}

impl Item {
    /// The component with the given name, if any.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    item_type: ItemType,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    shape: Option<Shape>,
    #[serde(default)]
    topics: Vec<Topic>,
    #[serde(default)]
    components: Vec<Component>,
    #[serde(default)]
    vat_type: Option<VatType>,
    #[serde(default)]
    is_virtual: Option<bool>,
    #[serde(default)]
    is_subscription_only: Option<bool>,
    #[serde(default)]
    variants: Option<Vec<Variant>>,
    #[serde(default)]
    default_variant: Option<Variant>,
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawItem::deserialize(deserializer)?;
        let product = raw.variants.map(|variants| ProductData {
            vat_type: raw.vat_type,
            is_virtual: raw.is_virtual,
            is_subscription_only: raw.is_subscription_only,
            variants,
            default_variant: raw.default_variant,
        });

        Ok(Item {
            id: raw.id,
            name: raw.name,
            item_type: raw.item_type,
            path: raw.path,
            language: raw.language,
            shape: raw.shape,
            topics: raw.topics,
            components: raw.components,
            product,
        })
    }
}
