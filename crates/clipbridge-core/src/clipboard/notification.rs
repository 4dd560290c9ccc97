use serde::{Deserialize, Serialize};

/// Typed change notification delivered to UI consumers.
///
/// Every primary-buffer change produces `ContentChanged`, then exactly one
/// of `ImageChanged` / `TextChanged` depending on what the clipboard now
/// holds, then `HasImageChanged` (always, without diffing the flag).
/// Selection-buffer changes produce `SelectionChanged` alone.
///
/// Notifications are level-triggers: they carry no payload and mean
/// "re-read the corresponding accessor".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardNotification {
    /// Any primary-buffer change.
    ContentChanged,
    /// The primary buffer changed and now holds non-image content.
    TextChanged,
    /// The primary buffer changed and now holds image content.
    ImageChanged,
    /// The image-typed flag may have changed.
    HasImageChanged,
    /// The selection buffer changed.
    SelectionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_serializes_snake_case() {
        let json = serde_json::to_string(&ClipboardNotification::HasImageChanged).unwrap();
        assert_eq!(json, "\"has_image_changed\"");
    }

    #[test]
    fn test_notification_round_trips() {
        for n in [
            ClipboardNotification::ContentChanged,
            ClipboardNotification::TextChanged,
            ClipboardNotification::ImageChanged,
            ClipboardNotification::HasImageChanged,
            ClipboardNotification::SelectionChanged,
        ] {
            let json = serde_json::to_string(&n).unwrap();
            let back: ClipboardNotification = serde_json::from_str(&json).unwrap();
            assert_eq!(back, n);
        }
    }
}
