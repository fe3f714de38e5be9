//! System clipboard access for cut/copy/paste.
//!
//! A thin wrapper around the `arboard` crate. Clipboard access can fail on
//! headless systems or when another process holds the clipboard; the
//! widgets treat any failure as "no clipboard" and carry on, so a missing
//! clipboard degrades copy/cut/paste to no-ops instead of interrupting the
//! frame loop.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(String);

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self(err.to_string())
    }
}

/// Cross-platform clipboard access.
///
/// Instances are created on demand and can be dropped after use. Creation
/// fails when the system clipboard is unavailable.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Create a new clipboard instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the system clipboard cannot be accessed.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }

    /// Get the current text content of the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is empty or holds non-text data.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.inner.get_text()?)
    }

    /// Replace the clipboard content with the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be written.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Ok(self.inner.set_text(text.to_owned())?)
    }
}
