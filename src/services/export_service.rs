//! Export of the collection as a pasteable seed literal.
//!
//! The literal has the shape
//!
//! ```text
//! import { Photo } from '../types';
//!
//! export const initialPhotos: Photo[] = [ ...pretty-printed records... ];
//! ```
//!
//! and is parsed back by [`parse_photo_literal`], which also loads the
//! built-in seed data.

use crate::config::{EXPORT_DECLARATION, EXPORT_FAILED_ALERT, EXPORT_HEADER};
use crate::error::{AppError, Result};
use crate::photo::{validate_collection, Photo};
use crate::services::clipboard_service::ClipboardSink;
use crate::state::{lock, AppState};
use log::{error, info};
use std::sync::{Arc, Mutex};

/// Renders `photos` as the seed literal.
pub fn render_photo_literal(photos: &[Photo]) -> Result<String> {
    let body = serde_json::to_string_pretty(photos).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(format!("{}\n\n{} {};", EXPORT_HEADER, EXPORT_DECLARATION, body))
}

/// Parses a seed literal back into photos.
///
/// Accepts the full literal or a bare JSON array. Rejects records without
/// images and repeated ids.
pub fn parse_photo_literal(text: &str) -> Result<Vec<Photo>> {
    let body = match text.find(EXPORT_DECLARATION) {
        Some(start) => &text[start + EXPORT_DECLARATION.len()..],
        None => text,
    };
    let body = body.trim();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();

    let photos: Vec<Photo> = serde_json::from_str(body)?;
    validate_collection(&photos)?;
    Ok(photos)
}

/// Copies the current collection to a clipboard.
pub struct ExportService {
    state: AppState,
    clipboard: Arc<Mutex<dyn ClipboardSink>>,
}

impl ExportService {
    pub fn new(state: AppState, clipboard: Arc<Mutex<dyn ClipboardSink>>) -> Self {
        Self { state, clipboard }
    }

    /// Writes the literal to the clipboard once.
    pub fn copy_collection(&self) -> Result<usize> {
        let (text, count) = {
            let store = lock(&self.state.store);
            (render_photo_literal(store.photos())?, store.len())
        };
        lock(&self.clipboard).set_text(text)?;
        info!("Exported {} photo(s) to clipboard", count);
        Ok(count)
    }

    /// Exports and reports success. Failures are logged and queued as an alert.
    pub fn export(&self) -> bool {
        match self.copy_collection() {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to copy data: {}", e);
                lock(&self.state.notices).push(EXPORT_FAILED_ALERT);
                false
            }
        }
    }
}
