//! Variant and master playlist model
//!
//! A [`Variant`] is one `#EXT-X-STREAM-INF` rendition of the content. Its
//! identity is its position in the master playlist, which is assigned when the
//! [`MasterPlaylist`] is built and never changes afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

use super::codec::{format_codecs, parse_codecs};
use crate::error::{Result, SelectorError};

/// One encoded rendition referenced by the master playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Position in the master playlist
    #[serde(default)]
    pub index: usize,
    /// Variant playlist URI, as written in the master playlist
    #[serde(default)]
    pub uri: String,
    /// Declared bitrate in bits/sec
    pub bitrate: u64,
    /// Declared width in pixels, 0 when not declared
    #[serde(default)]
    pub width: u32,
    /// Declared height in pixels, 0 when not declared
    #[serde(default)]
    pub height: u32,
    /// Codec identifiers from the `CODECS` attribute
    #[serde(
        default,
        deserialize_with = "deserialize_codecs",
        serialize_with = "serialize_codecs"
    )]
    pub codecs: Vec<String>,
}

impl Variant {
    /// Create a variant with no declared resolution
    pub fn new(index: usize, uri: impl Into<String>, bitrate: u64, codecs: Option<&str>) -> Self {
        Self {
            index,
            uri: uri.into(),
            bitrate,
            width: 0,
            height: 0,
            codecs: parse_codecs(codecs),
        }
    }

    /// Set the declared resolution
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Whether both width and height were declared
    pub fn has_resolution(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The `CODECS` attribute value, if any codecs were declared
    pub fn codecs_attribute(&self) -> Option<String> {
        format_codecs(&self.codecs)
    }
}

fn deserialize_codecs<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let attribute: Option<String> = Option::deserialize(deserializer)?;
    Ok(parse_codecs(attribute.as_deref()))
}

fn serialize_codecs<S>(codecs: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    format_codecs(codecs).serialize(serializer)
}

/// A parsed master playlist: the ordered list of variants for one piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterPlaylist {
    /// Where the master playlist was loaded from, if known
    #[serde(default)]
    pub base_uri: Option<String>,
    /// Variants in master playlist order
    pub variants: Vec<Variant>,
}

impl MasterPlaylist {
    /// Build a master playlist, assigning each variant its position as index
    pub fn new(base_uri: Option<String>, variants: Vec<Variant>) -> Self {
        let mut playlist = Self { base_uri, variants };
        playlist.reindex();
        playlist
    }

    /// Parse a master playlist from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let playlist: MasterPlaylist = serde_json::from_str(json)?;
        let playlist = Self::new(playlist.base_uri, playlist.variants);
        playlist.validate()?;
        Ok(playlist)
    }

    /// Load a master playlist from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Check that every variant declares a positive bitrate
    pub fn validate(&self) -> Result<()> {
        match self.variants.iter().find(|v| v.bitrate == 0) {
            Some(variant) => Err(SelectorError::InvalidVariant {
                index: variant.index,
                reason: "bitrate must be positive".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the playlist has no variants
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    fn reindex(&mut self) {
        for (i, variant) in self.variants.iter_mut().enumerate() {
            variant.index = i;
        }
    }
}
