//! Built-in photo list loaded at startup.
//!
//! `data/photos.ts` uses the export format, so an exported literal can be
//! pasted over it to become the new baseline.

use crate::error::Result;
use crate::photo::Photo;
use crate::services::export_service::parse_photo_literal;

const SEED_LITERAL: &str = include_str!("../data/photos.ts");

/// Parses the built-in photo list.
pub fn initial_photos() -> Result<Vec<Photo>> {
    parse_photo_literal(SEED_LITERAL)
}
