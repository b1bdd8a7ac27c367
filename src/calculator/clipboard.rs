//! Clipboard export of the calculator display.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(#[source] arboard::Error),

    #[error("Refusing to copy incomplete operand {0:?}")]
    Incomplete(String),
}

/// Copy display text to the system clipboard.
///
/// Only complete numbers are copied; an operand still being typed
/// (`"-"`, `"3."`) is rejected before the clipboard is touched.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    if !is_copyable(text) {
        return Err(ClipboardError::Incomplete(text.to_string()));
    }

    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::CopyFailed)
}

/// Whether `text` is a finished number worth exporting.
fn is_copyable(text: &str) -> bool {
    !text.is_empty() && !text.ends_with('-') && !text.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_numbers_are_copyable() {
        assert!(is_copyable("0"));
        assert!(is_copyable("-15"));
        assert!(is_copyable("0.3"));
        assert!(is_copyable("1.234568e+12"));
    }

    #[test]
    fn test_partial_operands_rejected() {
        assert!(!is_copyable(""));
        assert!(!is_copyable("-"));
        assert!(!is_copyable("3."));
        assert!(!is_copyable("-0."));
        assert!(matches!(
            copy_to_clipboard("-"),
            Err(ClipboardError::Incomplete(_))
        ));
    }
}
