use std::io;

use async_trait::async_trait;

/// Durable byte storage addressed by name.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `content` under a name derived from `name` and returns the name it
    /// was actually stored under. Existing files are never overwritten.
    async fn save(&self, name: &str, content: &[u8]) -> io::Result<String>;

    /// Resolves a stored name to the URL it can be fetched from.
    fn url(&self, name: &str) -> String;

    /// Removes a stored file. Deleting a missing file succeeds.
    async fn delete(&self, name: &str) -> io::Result<()>;
}
