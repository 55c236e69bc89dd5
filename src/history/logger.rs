use std::sync::Arc;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::{HISTORY_PREFIX, HistoryRecord};
use crate::storage::BlobStore;
use crate::utils::WorkbenchResult;

/// Writes one history blob per processed file.
pub struct HistoryLogger {
    store: Arc<dyn BlobStore>,
}

impl HistoryLogger {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Records one upload, overwriting any earlier record for the same file
    /// name.
    pub async fn record(&self, file_name: &str, at: NaiveDateTime) -> WorkbenchResult<()> {
        let record = HistoryRecord {
            file_name: file_name.to_string(),
            uploaded_at: at,
        };
        let key = format!("{}{}.txt", HISTORY_PREFIX, file_name);
        self.store.put(&key, record.to_payload().into_bytes()).await?;
        debug!("Recorded upload history for {}", file_name);
        Ok(())
    }

    /// Batch-path variant: a storage failure must not abort the batch, so it
    /// is downgraded to a warning here.
    pub async fn record_or_warn(&self, file_name: &str, at: NaiveDateTime) {
        if let Err(e) = self.record(file_name, at).await {
            warn!("History write failed for {}: {}", file_name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;
    use crate::utils::{WorkbenchError, WorkbenchResult};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FailingStore;

    #[async_trait]
    impl BlobStore for FailingStore {
        async fn put(&self, _key: &str, _bytes: Vec<u8>) -> WorkbenchResult<()> {
            Err(WorkbenchError::storage_write("transport down"))
        }
        async fn list(&self, _prefix: &str) -> WorkbenchResult<Vec<String>> {
            Err(WorkbenchError::storage_read("transport down"))
        }
        async fn get(&self, _key: &str) -> WorkbenchResult<Vec<u8>> {
            Err(WorkbenchError::storage_read("transport down"))
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn record_writes_under_the_logs_namespace() {
        let store = Arc::new(MemoryBlobStore::new());
        let logger = HistoryLogger::new(store.clone());
        logger.record("holiday", noon()).await.unwrap();

        let payload = store.get("logs/holiday.txt").await.unwrap();
        assert_eq!(payload, b"holiday,2026-08-05 12:00:00\n");
    }

    #[tokio::test]
    async fn record_propagates_write_failures() {
        let logger = HistoryLogger::new(Arc::new(FailingStore));
        let err = logger.record("holiday", noon()).await.unwrap_err();
        assert!(matches!(err, WorkbenchError::StorageWrite(_)));
    }

    #[tokio::test]
    async fn record_or_warn_swallows_write_failures() {
        let logger = HistoryLogger::new(Arc::new(FailingStore));
        // Must not panic or propagate.
        logger.record_or_warn("holiday", noon()).await;
    }
}
