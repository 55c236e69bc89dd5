//! Blob store collaborator interface.
//!
//! History persistence goes through this trait so the cloud object store
//! stays an injected dependency with plain put/list/get semantics,
//! constructed once at startup and passed to the components that need it.

mod memory;

pub use memory::MemoryBlobStore;

use async_trait::async_trait;
use crate::utils::WorkbenchResult;

/// Key-value object storage used for history persistence.
///
/// Keys are flat strings with `/`-separated logical namespaces. Writes
/// overwrite per key; concurrent-write safety across keys is the store's
/// own responsibility.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `bytes` at `key`, overwriting any existing blob.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> WorkbenchResult<()>;

    /// Lists all keys starting with `prefix`.
    async fn list(&self, prefix: &str) -> WorkbenchResult<Vec<String>>;

    /// Reads the blob at `key`.
    async fn get(&self, key: &str) -> WorkbenchResult<Vec<u8>>;
}
