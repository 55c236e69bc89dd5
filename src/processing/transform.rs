//! Pure image transforms: decode, resize, grayscale, binarize.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use crate::core::{OutputFormat, ResizeMode, TransformSettings, UploadedImage};
use crate::utils::{ImageFormat, WorkbenchError, WorkbenchResult};

/// Fallback luminance cutoff when none is configured.
const DEFAULT_THRESHOLD: u8 = 128;

/// Derived images for one uploaded file.
///
/// The base image is always present (post-resize); the grayscale and
/// binarized variants only when requested in the settings.
#[derive(Debug, Clone)]
pub struct ProcessedResult {
    /// Source file name with the extension stripped
    pub base_name: String,
    /// Declared format of the upload, used for `Original` export
    pub source_format: ImageFormat,
    /// Base image after resizing
    pub base: DynamicImage,
    /// Luminance variant, present when grayscale was requested
    pub grayscale: Option<GrayImage>,
    /// Two-level variant, present when binarization was requested
    pub binarized: Option<GrayImage>,
}

impl ProcessedResult {
    /// Encodes the base image as PNG for insertion into the combined archive.
    pub fn encode_base_png(&self) -> WorkbenchResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.base
            .write_to(&mut buffer, image::ImageFormat::Png)
            .map_err(|e| WorkbenchError::processing(format!(
                "PNG encoding failed for {}: {}", self.base_name, e
            )))?;
        Ok(buffer.into_inner())
    }

    /// Encodes the base image for single-file export per the requested
    /// output format. `Original` re-encodes in the upload's declared format.
    pub fn export(&self, settings: &TransformSettings) -> WorkbenchResult<Vec<u8>> {
        let format = match settings.output_format {
            OutputFormat::Png => ImageFormat::PNG,
            OutputFormat::Jpeg => ImageFormat::JPEG,
            OutputFormat::Original => self.source_format,
        };

        match format {
            ImageFormat::PNG => self.encode_base_png(),
            ImageFormat::JPEG => {
                let quality = settings.jpeg_quality.unwrap_or_else(|| format.default_quality());
                let mut buffer = Cursor::new(Vec::new());
                let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
                // JPEG has no alpha channel; flatten before encoding.
                DynamicImage::ImageRgb8(self.base.to_rgb8())
                    .write_with_encoder(encoder)
                    .map_err(|e| WorkbenchError::processing(format!(
                        "JPEG encoding failed for {}: {}", self.base_name, e
                    )))?;
                Ok(buffer.into_inner())
            }
        }
    }
}

/// Applies the configured transforms to one uploaded image.
///
/// Pure and deterministic: decode, resize, then derive the optional
/// grayscale and binarized variants. No I/O and no shared state; every
/// parameter arrives in `settings`.
pub fn transform(
    image: &UploadedImage,
    settings: &TransformSettings,
) -> WorkbenchResult<ProcessedResult> {
    let decoded = image::load_from_memory(&image.bytes).map_err(|e| {
        WorkbenchError::decode(format!("Failed to decode {}: {}", image.file_name, e))
    })?;

    let base = apply_resize(decoded, &settings.resize)?;

    // Binarization always derives from the luminance image, so compute it
    // whenever either variant is requested.
    let luma = if settings.grayscale || settings.binarize {
        Some(base.to_luma8())
    } else {
        None
    };

    let binarized = match (settings.binarize, &luma) {
        (true, Some(gray)) => {
            let threshold = settings.threshold.unwrap_or(DEFAULT_THRESHOLD);
            Some(binarize(gray, threshold))
        }
        _ => None,
    };

    let grayscale = if settings.grayscale { luma } else { None };

    Ok(ProcessedResult {
        base_name: image.base_name(),
        source_format: image.format,
        base,
        grayscale,
        binarized,
    })
}

/// Applies the resize specified in `mode` to `image`.
///
/// Fixed dimensions stretch without preserving aspect ratio. Ratio scaling
/// floors each axis and never goes below one pixel, so a 100 percent ratio
/// leaves dimensions unchanged.
fn apply_resize(image: DynamicImage, mode: &ResizeMode) -> WorkbenchResult<DynamicImage> {
    match *mode {
        ResizeMode::None => Ok(image),
        ResizeMode::FixedDimensions { width, height } => {
            if width == 0 || height == 0 {
                return Err(WorkbenchError::invalid_dimension(format!(
                    "Target dimensions must be positive, got {}x{}", width, height
                )));
            }
            Ok(image.resize_exact(width, height, FilterType::Lanczos3))
        }
        ResizeMode::Ratio { percent } => {
            let width = scaled_dimension(image.width(), percent);
            let height = scaled_dimension(image.height(), percent);
            Ok(image.resize_exact(width, height, FilterType::Lanczos3))
        }
    }
}

/// `floor(dim * percent / 100)`, clamped to a minimum of one pixel.
fn scaled_dimension(dim: u32, percent: u32) -> u32 {
    ((dim as u64 * percent as u64) / 100).max(1) as u32
}

/// Thresholds a luminance image into strictly two levels: values above
/// `threshold` map to white, everything else to black.
fn binarize(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > threshold { 255 } else { 0 };
    }
    out
}
