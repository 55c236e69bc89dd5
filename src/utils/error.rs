//! Error types for the image workbench.
//!
//! Provides a single error type using `thiserror` for ergonomic error handling.

use std::io;
use serde::Serialize;
use thiserror::Error;

/// Main error type for the workbench.
///
/// All errors in the crate are converted to this type before being surfaced
/// to the caller.
#[derive(Error, Debug, Serialize)]
pub enum WorkbenchError {
    /// Payload could not be decoded as a supported image
    #[error("Decode error: {0}")]
    Decode(String),

    /// Resize parameters yield a non-positive dimension
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Transform settings failed validation
    #[error("Settings error: {0}")]
    Settings(String),

    /// Image processing or encoding failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// Blob store write failed
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Blob store read failed
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// History record payload could not be parsed
    #[error("Malformed history record: {0}")]
    MalformedRecord(String),

    /// Archive was already finalized
    #[error("Archive closed: {0}")]
    ArchiveClosed(String),

    /// Archive entry name collides with an existing entry
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// Worker pool dispatch failed
    #[error("Worker error: {0}")]
    Worker(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for workbench operations.
pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

// Helper methods for error creation
impl WorkbenchError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_dimension<T: Into<String>>(msg: T) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Settings(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn storage_write<T: Into<String>>(msg: T) -> Self {
        Self::StorageWrite(msg.into())
    }

    pub fn storage_read<T: Into<String>>(msg: T) -> Self {
        Self::StorageRead(msg.into())
    }

    pub fn malformed_record<T: Into<String>>(msg: T) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn worker<T: Into<String>>(msg: T) -> Self {
        Self::Worker(msg.into())
    }
}

// Convert std::io::Error to WorkbenchError
impl From<io::Error> for WorkbenchError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
