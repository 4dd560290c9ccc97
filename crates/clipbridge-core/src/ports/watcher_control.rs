use async_trait::async_trait;

/// Port for controlling the clipboard watcher lifecycle.
///
/// # Behavior
/// - `start_watcher()` should be idempotent.
/// - `stop_watcher()` should be idempotent.
///
/// Implementations also stop themselves when dropped, so owning a boxed
/// watcher is enough to scope its lifetime.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the clipboard watcher to start.
    async fn start_watcher(&self) -> Result<(), WatcherError>;

    /// Request the clipboard watcher to stop.
    async fn stop_watcher(&self) -> Result<(), WatcherError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("Failed to start watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop watcher: {0}")]
    StopFailed(String),

    #[error("Signal channel closed")]
    ChannelClosed,
}
