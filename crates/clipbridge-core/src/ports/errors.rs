use thiserror::Error;

/// Writing images to the system clipboard is not implemented.
///
/// The image accessor is read-only by contract; callers that attempt a
/// write get this error instead of a silent success, and clipboard state
/// is never touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageWriteError {
    #[error("writing images to the system clipboard is not supported")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_the_gap() {
        let msg = ImageWriteError::Unsupported.to_string();
        assert!(msg.contains("not supported"));
    }
}
