use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Unified progress struct for streaming batch completions to a UI sink.
///
/// Emitted once at batch start, once per completed file (in completion
/// order), and once when the batch is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete, error)
    pub progress_type: ProgressType,
    /// Number of completed tasks
    pub completed_tasks: usize,
    /// Total number of tasks
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
    /// File the update refers to, absent for batch-level updates
    #[serde(default)]
    pub file_name: Option<String>,
    /// Error message for failed files
    #[serde(default)]
    pub error: Option<String>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        status: &str,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.to_string(),
            file_name: None,
            error: None,
        }
    }

    /// Attach the file this update refers to
    pub fn for_file(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Attach an error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Convert to a JSON payload for a frontend event channel
    pub fn to_event(&self) -> serde_json::Value {
        serde_json::json!({
            "completed": self.completed_tasks,
            "total": self.total_tasks,
            "percentage": self.progress_percentage,
            "status": self.status,
            "fileName": self.file_name,
            "error": self.error,
        })
    }
}
