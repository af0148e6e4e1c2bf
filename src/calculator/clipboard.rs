//! Clipboard functionality for copying calculator results.

use crate::error::{LumiraError, Result};
use arboard::Clipboard;

/// Text to copy for a display value: grouping separators removed so the
/// number pastes cleanly elsewhere. `None` for the error sentinel.
pub fn clipboard_text(display: &str) -> Option<String> {
    if display == super::ERROR_DISPLAY {
        return None;
    }
    Some(super::strip_separators(display))
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| LumiraError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| LumiraError::Clipboard(format!("Failed to copy to clipboard: {}", e)))
}
