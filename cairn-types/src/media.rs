//! Image and video shapes referenced by components and product variants.

use serde::Deserialize;

/// One pre-scaled rendition of an image or video thumbnail.
///
/// Video thumbnail selections omit `height`, so both dimensions are
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Caption attached to an image, in both plain-text and HTML renderings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

/// An image with its responsive variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub caption: Option<Caption>,
    #[serde(default)]
    pub variants: Vec<ImageVariant>,
}

/// A single thumbnail entry of a video.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoThumbnail {
    #[serde(default)]
    pub key: Option<String>,
    pub url: String,
    #[serde(default)]
    pub variants: Vec<ImageVariant>,
}

/// A hosted video with playlist manifests and thumbnails.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub playlists: Vec<String>,
    #[serde(default)]
    pub thumbnails: Vec<VideoThumbnail>,
}
