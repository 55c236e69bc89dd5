use crate::core::{OutputFormat, ResizeMode, TransformSettings};
use crate::utils::{WorkbenchError, WorkbenchResult};

/// Validates transform settings before any decode attempt.
///
/// Invalid settings fail the whole request, since one settings value applies
/// uniformly to every image in the batch.
pub fn validate_settings(settings: &TransformSettings) -> WorkbenchResult<()> {
    match settings.resize {
        ResizeMode::FixedDimensions { width, height } => {
            if width == 0 || height == 0 {
                return Err(WorkbenchError::invalid_dimension(format!(
                    "Resize dimensions must be positive, got {}x{}", width, height
                )));
            }
        }
        ResizeMode::Ratio { percent } => {
            if !(10..=200).contains(&percent) {
                return Err(WorkbenchError::settings(format!(
                    "Resize ratio must be between 10 and 200 percent, got {}", percent
                )));
            }
        }
        ResizeMode::None => {}
    }

    if settings.output_format == OutputFormat::Jpeg && settings.jpeg_quality.is_none() {
        return Err(WorkbenchError::settings("JPEG output requires a quality value"));
    }

    if let Some(quality) = settings.jpeg_quality {
        if !(10..=100).contains(&quality) {
            return Err(WorkbenchError::settings(format!(
                "Invalid JPEG quality: {}. Must be between 10 and 100", quality
            )));
        }
    }

    if settings.binarize && settings.threshold.is_none() {
        return Err(WorkbenchError::settings("Binarization requires a threshold"));
    }

    Ok(())
}
