use anyhow::Result;
use async_trait::async_trait;

/// List-valued note storage.
///
/// Implementations must provide `append` and `read_all` as single atomic
/// primitives of the backing store. Handlers never compose them, so there is
/// no read-modify-write window between concurrent requests.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Append one note to the end of the list.
    async fn append(&self, note: &str) -> Result<()>;

    /// Read the whole list in insertion order (oldest first).
    ///
    /// A list that was never written is empty, not an error.
    async fn read_all(&self) -> Result<Vec<String>>;

    /// Liveness check against the backing store.
    async fn ping(&self) -> Result<()>;
}
