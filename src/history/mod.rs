//! Upload-history persistence and querying.
//!
//! One blob per processed file under the `logs/` namespace, payload
//! `"{file_name},{timestamp}\n"`; a repeated file name overwrites its
//! earlier record (last write wins, no versioning).

mod logger;
mod reader;

pub use logger::HistoryLogger;
pub use reader::{DailyCount, HistoryReader};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::utils::{WorkbenchError, WorkbenchResult};

/// Logical namespace for history blobs.
pub(crate) const HISTORY_PREFIX: &str = "logs/";

/// Timestamp layout used in record payloads.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One upload-history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub file_name: String,
    pub uploaded_at: NaiveDateTime,
}

impl HistoryRecord {
    /// Serializes to the stored payload line.
    pub(crate) fn to_payload(&self) -> String {
        format!("{},{}\n", self.file_name, self.uploaded_at.format(TIMESTAMP_FORMAT))
    }

    /// Parses a stored payload line of exactly two comma-separated fields.
    pub(crate) fn from_payload(payload: &str) -> WorkbenchResult<Self> {
        let content = payload.trim();
        let mut parts = content.split(',');
        let (Some(file_name), Some(timestamp), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(WorkbenchError::malformed_record(format!(
                "Expected two comma-separated fields: {:?}", content
            )));
        };

        let uploaded_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| WorkbenchError::malformed_record(format!(
                "Bad timestamp {:?}: {}", timestamp, e
            )))?;

        Ok(Self { file_name: file_name.to_string(), uploaded_at })
    }
}
