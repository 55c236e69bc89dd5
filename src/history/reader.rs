use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{HISTORY_PREFIX, HistoryRecord};
use crate::storage::BlobStore;
use crate::utils::WorkbenchResult;

/// Upload count for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Reads history rows back from the blob store.
pub struct HistoryReader {
    store: Arc<dyn BlobStore>,
}

impl HistoryReader {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Lists all parseable history records, in no particular order.
    ///
    /// A record that fails to download or parse is skipped with a warning
    /// while the rest are returned; an empty namespace yields an empty vec.
    /// Only a failed key listing propagates, for the caller to render as
    /// "no history available".
    pub async fn list_history(&self) -> WorkbenchResult<Vec<HistoryRecord>> {
        let keys = self.store.list(HISTORY_PREFIX).await?;
        debug!("Found {} history blobs", keys.len());

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let payload = match self.store.get(&key).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Skipping unreadable history blob {}: {}", key, e);
                    continue;
                }
            };
            match HistoryRecord::from_payload(&String::from_utf8_lossy(&payload)) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed history blob {}: {}", key, e),
            }
        }
        Ok(records)
    }

    /// Groups records into per-calendar-date upload counts, sorted by date,
    /// ready for time-series charting.
    pub fn daily_counts(records: &[HistoryRecord]) -> Vec<DailyCount> {
        let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.uploaded_at.date()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect()
    }
}
