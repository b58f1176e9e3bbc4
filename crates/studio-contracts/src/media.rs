use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REFERENCE_PARSE_ERROR: &str = "Could not parse image data to use as reference.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("not a base64 image data URI")]
    InvalidDataUri,
    #[error("unsupported aspect ratio '{0}' (expected one of 1:1, 16:9, 9:16, 4:3, 3:4)")]
    InvalidAspectRatio(String),
    #[error("image count must be between 1 and 4, got {0}")]
    InvalidImageCount(i64),
}

/// An image handed to a collaborator: raw base64 without the data URI header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub base64: String,
    pub mime_type: String,
    pub name: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base64: BASE64.encode(bytes),
            mime_type: mime_type.into(),
            name: name.into(),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|value| value.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::from_bytes(&bytes, guess_image_mime(path), name))
    }

    /// Split a `data:<mime>;base64,<data>` URI.
    pub fn from_data_uri(uri: &str, name: impl Into<String>) -> Result<Self, MediaError> {
        let (header, data) = uri
            .trim()
            .split_once(',')
            .ok_or(MediaError::InvalidDataUri)?;
        let mime_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime.trim())
            .filter(|mime| !mime.is_empty())
            .ok_or(MediaError::InvalidDataUri)?;
        if data.is_empty() {
            return Err(MediaError::InvalidDataUri);
        }
        Ok(Self {
            base64: data.to_string(),
            mime_type: mime_type.to_string(),
            name: name.into(),
        })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    pub fn decode(&self) -> anyhow::Result<Vec<u8>> {
        BASE64
            .decode(self.base64.as_bytes())
            .with_context(|| format!("invalid base64 payload for {}", self.name))
    }
}

pub fn guess_image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => "image/png",
    }
}

pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Standard,
        AspectRatio::StandardPortrait,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
        }
    }

    /// Pixel size for a rendition whose long edge is `long_edge`.
    pub fn dimensions(self, long_edge: u32) -> (u32, u32) {
        let (w, h) = match self {
            Self::Square => (1, 1),
            Self::Landscape => (16, 9),
            Self::Portrait => (9, 16),
            Self::Standard => (4, 3),
            Self::StandardPortrait => (3, 4),
        };
        let long_edge = long_edge.max(1);
        if w >= h {
            (long_edge, (long_edge * h / w).max(1))
        } else {
            ((long_edge * w / h).max(1), long_edge)
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = MediaError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == value)
            .ok_or_else(|| MediaError::InvalidAspectRatio(value.to_string()))
    }
}

/// Number of images per request, always within `[1, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ImageCount(u8);

impl ImageCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(count: i64) -> Result<Self, MediaError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(MediaError::InvalidImageCount(count))
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for ImageCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for ImageCount {
    type Error = MediaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageCount> for i64 {
    fn from(value: ImageCount) -> Self {
        i64::from(value.0)
    }
}

impl FromStr for ImageCount {
    type Err = MediaError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        value
            .parse::<i64>()
            .map_err(|_| MediaError::InvalidImageCount(0))
            .and_then(Self::new)
    }
}
