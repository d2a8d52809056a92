//! Clipboard access for copying image URLs out of the preview.

use arboard::Clipboard;

/// Destination for copied text.
pub trait TextSink {
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard, opened on first use.
///
/// Opening can fail on headless sessions (no display server); the error
/// is returned from `copy_text` rather than at startup.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| format!("Failed to set clipboard text: {}", e)),
            None => Err("Clipboard unavailable".to_string()),
        }
    }
}
