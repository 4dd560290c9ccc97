use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_channel_capacity() -> usize {
    64
}

/// Configuration for the clipboard change watcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Interval between polling probes, in milliseconds.
    ///
    /// Used for the selection buffer always (no OS callback exists for it)
    /// and for the primary buffer when the polling runtime is in use.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Capacity of the change-signal channel between watcher and bridge.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
