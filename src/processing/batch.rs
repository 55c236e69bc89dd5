use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::core::{Progress, ProgressType, TransformSettings, UploadedImage};
use crate::processing::pool::WorkerPool;
use crate::processing::transform::{ProcessedResult, transform};
use crate::utils::{WorkbenchError, WorkbenchResult, validate_settings};

/// Outcome of processing one uploaded image.
#[derive(Debug)]
pub enum TaskOutcome {
    Success(ProcessedResult),
    Failure(WorkbenchError),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// One per-file entry in the batch result.
#[derive(Debug)]
pub struct BatchItem {
    pub file_name: String,
    pub outcome: TaskOutcome,
}

/// Dispatches one task per uploaded image into the worker pool and collects
/// outcomes as they complete.
pub struct BatchProcessor {
    pool: WorkerPool,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self { pool: WorkerPool::new() }
    }

    /// Processes a batch of uploads with per-file failure isolation.
    ///
    /// Settings are validated once before any decode attempt; invalid
    /// settings fail the whole request. Each image then runs as an
    /// independent task: a decode or transform failure is terminal for that
    /// file only and never cancels its siblings. Results arrive in
    /// completion order, and the progress callback fires per completion so a
    /// UI can stream them.
    pub async fn process_batch(
        &self,
        images: Vec<UploadedImage>,
        settings: &TransformSettings,
        progress_callback: impl Fn(Progress) + Send + 'static,
    ) -> WorkbenchResult<Vec<BatchItem>> {
        validate_settings(settings)?;

        let total_tasks = images.len();
        info!(
            "Processing batch of {} images with {} workers",
            total_tasks,
            self.pool.worker_count()
        );
        progress_callback(Progress::new(ProgressType::Start, 0, total_tasks, "processing"));

        // Completions funnel through this channel into the single collector
        // below, which is the only writer of the result list.
        let (tx, mut rx) = mpsc::channel::<BatchItem>(total_tasks.max(1));
        for image in images {
            let tx = tx.clone();
            let pool = self.pool.clone();
            let settings = settings.clone();
            tokio::spawn(async move {
                let file_name = image.file_name.clone();
                let label = file_name.clone();
                let outcome = match pool
                    .run(&label, move || transform(&image, &settings))
                    .await
                {
                    Ok(result) => TaskOutcome::Success(result),
                    Err(e) => {
                        warn!("Processing failed for {}: {}", file_name, e);
                        TaskOutcome::Failure(e)
                    }
                };
                // A dropped receiver means the caller abandoned the batch;
                // the outcome has nowhere to go then.
                let _ = tx.send(BatchItem { file_name, outcome }).await;
            });
        }
        drop(tx);

        let mut items = Vec::with_capacity(total_tasks);
        let mut failed = 0usize;
        while let Some(item) = rx.recv().await {
            let completed = items.len() + 1;
            match &item.outcome {
                TaskOutcome::Success(_) => {
                    debug!("Completed {} ({}/{})", item.file_name, completed, total_tasks);
                    progress_callback(
                        Progress::new(ProgressType::Progress, completed, total_tasks, "processing")
                            .for_file(&item.file_name),
                    );
                }
                TaskOutcome::Failure(e) => {
                    failed += 1;
                    progress_callback(
                        Progress::new(ProgressType::Error, completed, total_tasks, "failed")
                            .for_file(&item.file_name)
                            .with_error(e.to_string()),
                    );
                }
            }
            items.push(item);
        }

        if failed > 0 {
            warn!(
                "Batch completed with {} failed images out of {}",
                failed, total_tasks
            );
        } else {
            info!("Batch completed successfully: {} images processed", items.len());
        }
        progress_callback(Progress::new(
            ProgressType::Complete,
            items.len(),
            total_tasks,
            "complete",
        ));

        Ok(items)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}
