use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, warn};
use crate::utils::{WorkbenchError, WorkbenchResult};

/// Fallback when the machine's parallelism cannot be determined.
const DEFAULT_WORKERS: usize = 4;

/// Bounded set of concurrently executing task slots.
///
/// Sized to the machine's available parallelism; tasks queue on the
/// semaphore when every slot is busy.
#[derive(Clone)]
pub struct WorkerPool {
    active_workers: Arc<Mutex<usize>>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
}

impl WorkerPool {
    pub fn new() -> Self {
        let worker_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(DEFAULT_WORKERS);
        Self {
            active_workers: Arc::new(Mutex::new(0)),
            semaphore: Arc::new(Semaphore::new(worker_count)),
            worker_count,
        }
    }

    /// Runs one CPU-bound job in a pool slot, waiting for a free permit.
    pub async fn run<F, T>(&self, label: &str, job: F) -> WorkbenchResult<T>
    where
        F: FnOnce() -> WorkbenchResult<T> + Send + 'static,
        T: Send + 'static,
    {
        debug!("Acquiring semaphore for task: {}", label);
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            warn!("Failed to acquire semaphore: {}", e);
            WorkbenchError::worker(format!("Failed to acquire worker: {}", e))
        })?;

        {
            let mut count = self.active_workers.lock().await;
            *count += 1;
            debug!(
                "Worker started - Active: {}/{}, Available permits: {}, Task: {}",
                *count, self.worker_count, self.semaphore.available_permits(), label
            );
        }

        let result = tokio::task::spawn_blocking(job).await.map_err(|e| {
            warn!("Worker task for {} did not complete: {}", label, e);
            WorkbenchError::worker(format!("Worker task failed: {}", e))
        });

        let mut count = self.active_workers.lock().await;
        *count -= 1;
        debug!("Worker finished - Active: {}/{}", *count, self.worker_count);

        result?
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub async fn active_workers(&self) -> usize {
        *self.active_workers.lock().await
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new()
    }
}
