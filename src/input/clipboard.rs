use super::ClipboardError;
use arboard::Clipboard;

/// Put `text` on the system clipboard
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|err| ClipboardError::Write(err.to_string()))?;
    tracing::debug!(len = text.len(), "copied display to clipboard");
    Ok(())
}
