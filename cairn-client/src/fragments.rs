//! The reusable GraphQL fragment library.
//!
//! Fourteen named fragments describe how the polymorphic component system
//! is requested: one fragment per content shape, plus `item` and `product`
//! entry points. Callers append the library to their own documents with
//! [`with_fragments`] and spread `...item` / `...product` where needed.
//!
//! The cross-references form a directed graph with controlled recursion
//! depth, not true cycles: `itemRelations` embeds one extra level of
//! item-to-item traversal inline, and `choiceComponent` embeds
//! `gridRelations` and a bounded `ItemRelationsContent` selection the same
//! way. Unbounded recursion is not expressible in GraphQL selections, so
//! the nesting stops at a fixed depth instead.

/// Product entry point: commerce fields and full variant data.
pub const PRODUCT: &str = r#"fragment product on Product {
  id
  language
  vatType {
    name
    percent
  }
  isVirtual
  isSubscriptionOnly
  variants {
    id
    name
    sku
    priceVariants {
      identifier
      price
      currency
    }
    stock
    isDefault
    attributes {
      attribute
      value
    }
    images {
      url
      altText
      variants {
        url
        width
        height
      }
    }
  }
}"#;

/// Item entry point: identity, shape, and every component content shape.
pub const ITEM: &str = r#"fragment item on Item {
  id
  name
  type
  path
  language
  shape {
    name
  }
  components {
    name
    type
    meta {
      key
      value
    }
    content {
      ...singleLine
      ...richText
      ...imageContent
      ...videoContent
      ...paragraphCollection
      ...itemRelations
      ...gridRelations
      ...propertiesTableContent
      ...dateTimeContent
      ...choiceComponent
    }
  }
}"#;

pub const SINGLE_LINE: &str = r#"fragment singleLine on SingleLineContent {
  text
}"#;

pub const RICH_TEXT: &str = r#"fragment richText on RichTextContent {
  json
}"#;

pub const IMAGE: &str = r#"fragment image on Image {
  url
  altText
  caption {
    plainText
    html
  }
  variants {
    url
    width
    height
  }
}"#;

pub const VIDEO: &str = r#"fragment video on Video {
  title
  playlists
  thumbnails {
    key
    url
    variants {
      url
      width
    }
  }
}"#;

pub const IMAGE_CONTENT: &str = r#"fragment imageContent on ImageContent {
  images {
    ...image
  }
}"#;

pub const VIDEO_CONTENT: &str = r#"fragment videoContent on VideoContent {
  videos {
    ...video
  }
}"#;

pub const PARAGRAPH_COLLECTION: &str = r#"fragment paragraphCollection on ParagraphCollectionContent {
  paragraphs {
    title {
      ...singleLine
    }
    body {
      ...richText
    }
    images {
      ...image
    }
  }
}"#;

/// Related items with one extra inline level of item-to-item traversal:
/// item -> components -> itemRelations -> items -> components.
pub const ITEM_RELATIONS: &str = r#"fragment itemRelations on ItemRelationsContent {
  items {
    id
    name
    path
    type
    shape {
      name
      id
    }
    topics {
      id
      name
    }
    ... on Product {
      variants {
        priceVariants {
          identifier
          price
          currency
        }
        isDefault
        name
        images {
          ...image
        }
      }
    }
    components {
      name
      type
      content {
        ...singleLine
        ...richText
        ...imageContent
        ...videoContent
        ...gridRelations
        ...choiceComponent
        ... on BooleanContent {
          value
        }
        ... on ItemRelationsContent {
          items {
            id
            name
            type
            path
            ... on Item {
              components {
                name
                type
                meta {
                  key
                  value
                }
                content {
                  ...singleLine
                  ...richText
                  ...imageContent
                  ...videoContent
                  ...choiceComponent
                }
              }
            }
            ... on Product {
              variants {
                priceVariants {
                  identifier
                  price
                  currency
                }
                isDefault
                name
                images {
                  ...image
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

pub const GRID_RELATIONS: &str = r#"fragment gridRelations on GridRelationsContent {
  grids {
    name
    rows {
      columns {
        layout {
          rowspan
          colspan
        }
        itemType
        itemId
        item {
          id
          name
          path
          type
          language
          ... on Product {
            variants {
              id
              name
              sku
              priceVariants {
                identifier
                price
                currency
              }
              stock
              isDefault
              attributes {
                attribute
                value
              }
              image {
                url
                altText
                variants {
                  url
                  width
                  height
                }
              }
            }
            defaultVariant {
              priceVariants {
                identifier
                price
                currency
              }
              isDefault
              name
              images {
                ...image
              }
            }
          }
          components {
            name
            type
            content {
              ...imageContent
              ...videoContent
            }
          }
        }
      }
    }
  }
}"#;

pub const PROPERTIES_TABLE: &str = r#"fragment propertiesTableContent on PropertiesTableContent {
  sections {
    title
    properties {
      key
      value
    }
  }
}"#;

/// Selected child of a component choice, with bounded grid and
/// item-relation selections of its own.
pub const CHOICE_COMPONENT: &str = r#"fragment choiceComponent on ComponentChoiceContent {
  selectedComponent {
    name
    type
    content {
      ...gridRelations
      ... on ItemRelationsContent {
        items {
          id
          name
          path
          type
          shape {
            name
            id
          }
          topics {
            id
            name
          }
          ... on Product {
            variants {
              priceVariants {
                identifier
                price
                currency
              }
              isDefault
              name
              images {
                ...image
              }
            }
          }
          components {
            name
            type
            content {
              ...singleLine
              ...richText
              ...imageContent
              ...videoContent
              ...gridRelations
              ... on BooleanContent {
                value
              }
            }
          }
        }
      }
    }
  }
}"#;

pub const DATE_TIME: &str = r#"fragment dateTimeContent on DatetimeContent {
  datetime
}"#;

/// Every fragment in the library, in composition order. Names are unique
/// and every spread a fragment uses resolves within this set.
pub const ALL_FRAGMENTS: [&str; 14] = [
    PRODUCT,
    ITEM,
    SINGLE_LINE,
    RICH_TEXT,
    IMAGE,
    VIDEO,
    IMAGE_CONTENT,
    VIDEO_CONTENT,
    PARAGRAPH_COLLECTION,
    ITEM_RELATIONS,
    GRID_RELATIONS,
    PROPERTIES_TABLE,
    CHOICE_COMPONENT,
    DATE_TIME,
];

/// The full library as one composable block.
#[must_use]
pub fn fragment_library() -> String {
    ALL_FRAGMENTS.join("\n\n")
}

/// Appends the fragment library to a caller's query document.
#[must_use]
pub fn with_fragments(query: &str) -> String {
    format!("{query}\n\n{}", fragment_library())
}
