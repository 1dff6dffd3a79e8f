//! User-facing alerts waiting to be shown by the view.

use log::debug;

#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Vec<String>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("Notice queued: {}", message);
        self.pending.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Hands all pending notices to the view, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
