use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use crate::utils::WorkbenchError;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    JPEG,
    PNG,
}

impl ImageFormat {
    /// Get the default quality value for this format
    pub fn default_quality(&self) -> u8 {
        match self {
            Self::JPEG => 85,
            Self::PNG => 100, // PNG is lossless, quality is nominal
        }
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    /// Map to the `image` crate's format identifier for encoding/decoding
    pub fn to_encode_format(&self) -> image::ImageFormat {
        match self {
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::PNG => image::ImageFormat::Png,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = WorkbenchError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            _ => Err(WorkbenchError::decode(format!(
                "Unsupported image format: {}", ext
            ))),
        }
    }
}

/// Get format from a file name's extension
pub fn format_from_name(name: &str) -> Result<ImageFormat, WorkbenchError> {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| WorkbenchError::decode(
            format!("File has no extension: {}", name)
        ))?;

    ImageFormat::from_str(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_extensions() {
        assert_eq!(format_from_name("photo.jpg").unwrap(), ImageFormat::JPEG);
        assert_eq!(format_from_name("photo.JPEG").unwrap(), ImageFormat::JPEG);
        assert_eq!(format_from_name("scan.png").unwrap(), ImageFormat::PNG);
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(format_from_name("clip.gif").is_err());
        assert!(format_from_name("noext").is_err());
    }

    #[test]
    fn extension_matching() {
        assert!(ImageFormat::JPEG.matches_extension("JPG"));
        assert!(!ImageFormat::PNG.matches_extension("jpg"));
        assert_eq!(ImageFormat::JPEG.primary_extension(), "jpg");
    }
}
