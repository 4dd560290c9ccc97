use tokio::sync::mpsc;

/// A raw change signal observed at the platform boundary.
///
/// Signals only say *which buffer* changed, never what it now contains;
/// consumers re-read the accessor they care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSignal {
    /// The primary copy/paste buffer changed.
    Primary,
    /// The middle-click selection buffer changed.
    Selection,
}

pub type ChangeSignalSender = mpsc::Sender<ChangeSignal>;
pub type ChangeSignalReceiver = mpsc::Receiver<ChangeSignal>;
