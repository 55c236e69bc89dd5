//! Uploaded image payload and identity.

use std::path::Path;
use crate::utils::{ImageFormat, WorkbenchResult, format_from_name};

/// A single uploaded image within one processing request.
///
/// Immutable once received; owned by the caller for the duration of the
/// request and not persisted afterwards.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original file name as supplied by the uploader
    pub file_name: String,
    /// Raw image payload
    pub bytes: Vec<u8>,
    /// Declared format, derived from the file extension
    pub format: ImageFormat,
}

impl UploadedImage {
    /// Creates an uploaded image, deriving the declared format from the file
    /// extension. Rejects extensions outside the supported set.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> WorkbenchResult<Self> {
        let file_name = file_name.into();
        let format = format_from_name(&file_name)?;
        Ok(Self { file_name, bytes, format })
    }

    /// File name with the extension stripped, used for archive entry names
    /// and history keys.
    pub fn base_name(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_format_from_extension() {
        let upload = UploadedImage::new("holiday.JPG", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.format, ImageFormat::JPEG);
        assert_eq!(upload.base_name(), "holiday");
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(UploadedImage::new("notes.txt", vec![]).is_err());
    }

    #[test]
    fn base_name_keeps_inner_dots() {
        let upload = UploadedImage::new("scan.v2.png", vec![]).unwrap();
        assert_eq!(upload.base_name(), "scan.v2");
    }
}
