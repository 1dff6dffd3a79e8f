//! Clipboard service for copying exported text to the OS clipboard.

use arboard::Clipboard;
use log::info;
use std::fmt;

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Nothing to copy.
    EmptyText,
    /// Platform-specific error occurred.
    PlatformError(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "No text to copy"),
            Self::PlatformError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Destination for copied text.
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
#[derive(Default)]
pub struct ClipboardService;

impl ClipboardService {
    /// Creates a new clipboard service.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for ClipboardService {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }

        let mut clipboard = Clipboard::new().map_err(|e| {
            ClipboardError::PlatformError(format!("Failed to access clipboard: {}", e))
        })?;

        let len = text.len();
        clipboard.set_text(text).map_err(|e| {
            ClipboardError::PlatformError(format!("Failed to set clipboard: {}", e))
        })?;

        info!("Copied {} bytes to clipboard", len);
        Ok(())
    }
}

/// In-memory clipboard for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            contents: None,
            fail_with: Some(message.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if let Some(message) = &self.fail_with {
            return Err(ClipboardError::PlatformError(message.clone()));
        }
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }
        self.contents = Some(text);
        Ok(())
    }
}
