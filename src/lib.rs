//! In-memory photo gallery core.
//!
//! Owns the photo collection, the hero background, the detail view
//! selection and the owner-mode gate, and provides the upload and
//! export adapters. Rendering is done by the embedding application,
//! which reads [`ui::build_view`] and forwards input to [`ui::handlers`].

pub mod config;
pub mod error;
pub mod photo;
pub mod seed;
pub mod services;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
pub use photo::{EditableField, ImageRef, Photo};
pub use services::{ExportService, GalleryService, ImportService, SelectedFile};
pub use state::AppState;
