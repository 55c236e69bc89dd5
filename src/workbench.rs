//! Top-level orchestration: one request from uploads to archive and history.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::archive::ArchiveBuilder;
use crate::core::{Progress, TransformSettings, UploadedImage};
use crate::history::HistoryLogger;
use crate::processing::{BatchItem, BatchProcessor, TaskOutcome};
use crate::storage::BlobStore;
use crate::utils::WorkbenchResult;

/// Final output of one processing request.
pub struct BatchOutput {
    /// Per-file outcomes, in completion order
    pub items: Vec<BatchItem>,
    /// Finalized ZIP buffer with one PNG entry per success
    pub archive: Vec<u8>,
}

impl BatchOutput {
    /// Base names of the files that made it into the archive.
    pub fn successes(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match &item.outcome {
                TaskOutcome::Success(result) => Some(result.base_name.as_str()),
                TaskOutcome::Failure(_) => None,
            })
            .collect()
    }

    /// `(file_name, message)` pairs for failed files.
    pub fn failures(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .filter_map(|item| match &item.outcome {
                TaskOutcome::Failure(e) => Some((item.file_name.clone(), e.to_string())),
                TaskOutcome::Success(_) => None,
            })
            .collect()
    }
}

/// Orchestrates one user request: parallel transforms, archive assembly,
/// history logging.
pub struct ImageWorkbench {
    processor: BatchProcessor,
    history: HistoryLogger,
}

impl ImageWorkbench {
    /// Wires the workbench against an injected blob store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            processor: BatchProcessor::new(),
            history: HistoryLogger::new(store),
        }
    }

    /// Processes one batch and returns the combined archive plus per-file
    /// outcomes.
    ///
    /// Successful files land in the archive as `{base_name}.png` and get a
    /// history record stamped at insertion time; a history write failure is
    /// downgraded to a warning. A file whose entry name collides with an
    /// earlier one is reported as that file's failure. Failed files never
    /// enter the archive.
    pub async fn run_batch(
        &self,
        images: Vec<UploadedImage>,
        settings: &TransformSettings,
        progress_callback: impl Fn(Progress) + Send + 'static,
    ) -> WorkbenchResult<BatchOutput> {
        let mut items = self
            .processor
            .process_batch(images, settings, progress_callback)
            .await?;

        let mut builder = ArchiveBuilder::new();
        for item in items.iter_mut() {
            let encoded = match &item.outcome {
                TaskOutcome::Success(result) => result
                    .encode_base_png()
                    .map(|bytes| (result.base_name.clone(), bytes)),
                TaskOutcome::Failure(_) => continue,
            };

            match encoded {
                Ok((base_name, bytes)) => {
                    let entry_name = format!("{}.png", base_name);
                    if let Err(e) = builder.add_entry(&entry_name, &bytes) {
                        warn!("Archive insertion failed for {}: {}", item.file_name, e);
                        item.outcome = TaskOutcome::Failure(e);
                        continue;
                    }
                    self.history
                        .record_or_warn(&base_name, Local::now().naive_local())
                        .await;
                }
                Err(e) => {
                    warn!("Encoding failed for {}: {}", item.file_name, e);
                    item.outcome = TaskOutcome::Failure(e);
                }
            }
        }

        let archived = builder.len();
        let archive = builder.finalize()?;
        info!(
            "Batch finished: {} archived, {} failed",
            archived,
            items.iter().filter(|item| !item.outcome.is_success()).count()
        );

        Ok(BatchOutput { items, archive })
    }
}
