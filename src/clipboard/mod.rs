// src/clipboard/mod.rs
use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Native system clipboard.
///
/// Wraps [arboard::Clipboard] and, when a clear timeout is configured,
/// clears the copied text after the timeout provided the clipboard
/// still holds it.
pub struct NativeClipboard {
    clipboard: Clipboard,
    clear_timeout: Option<Duration>,
}

impl NativeClipboard {
    pub fn new(clear_timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            clipboard: Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
            clear_timeout,
        })
    }

    /// Place text on the clipboard and schedule the timed clear.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        if let Some(timeout) = self.clear_timeout {
            let mut source = text.to_string();
            thread::spawn(move || {
                thread::sleep(timeout);
                clear_if_unchanged(&source);
                source.zeroize();
            });
        }

        Ok(())
    }
}

// Clear the clipboard only if it still holds the text we copied, so a
// value the user copied elsewhere in the meantime survives.
fn clear_if_unchanged(source: &str) {
    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            log::warn!("failed to open clipboard for clearing: {}", e);
            return;
        }
    };

    match clipboard.get_text() {
        Ok(current) if current == source => {
            if let Err(e) = clipboard.clear() {
                log::warn!("failed to clear clipboard: {}", e);
            }
        }
        Ok(_) => {}
        Err(e) => log::warn!("failed to read clipboard: {}", e),
    }
}
