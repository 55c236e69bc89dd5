//! Core types for transform settings.

use serde::{Deserialize, Serialize};

/// How the base image is resized before derived variants are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ResizeMode {
    /// Keep the original dimensions
    None,
    /// Stretch to exact pixel dimensions, ignoring aspect ratio
    #[serde(rename_all = "camelCase")]
    FixedDimensions { width: u32, height: u32 },
    /// Scale both axes by a percentage (10-200)
    Ratio { percent: u32 },
}

/// Output encoding for single-file export.
///
/// The combined download archive always stores PNG entries; this option only
/// governs what a caller gets when exporting one processed image on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Re-encode in the upload's declared format
    Original,
    Png,
    Jpeg,
}

/// Configuration for one processing request.
///
/// Constructed once per request from user input and applied uniformly to
/// every image in the batch; read-only during processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformSettings {
    /// Resize applied to the base image
    pub resize: ResizeMode,
    /// Encoding used for single-file export
    pub output_format: OutputFormat,
    /// JPEG quality (10-100), required when the output format is JPEG
    pub jpeg_quality: Option<u8>,
    /// Produce a single-channel luminance variant
    pub grayscale: bool,
    /// Produce a two-level variant thresholded from the luminance image
    pub binarize: bool,
    /// Luminance cutoff for binarization (0-255), required when binarizing
    pub threshold: Option<u8>,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            resize: ResizeMode::None,
            output_format: OutputFormat::Original,
            jpeg_quality: None,
            grayscale: false,
            binarize: false,
            threshold: None,
        }
    }
}
