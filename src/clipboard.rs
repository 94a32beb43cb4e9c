//! Clipboard access for copying the generated JSON

use anyhow::{anyhow, Result};

/// Destination for copied text, mockable in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard.
///
/// The arboard handle is created on first use and kept alive afterwards;
/// on X11 the copied text only stays available while the handle lives.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(
                arboard::Clipboard::new().map_err(|e| anyhow!("Clipboard unavailable: {}", e))?,
            );
        }
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard unavailable"))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))
    }
}
