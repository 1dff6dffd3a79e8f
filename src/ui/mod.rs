//! UI-facing layer: key handling, action dispatch and view data.
//!
//! Rendering is left to the host; this module only decides what to show
//! and how input maps onto gallery operations. Uploads and image adds
//! are awaited by the host directly on [`crate::services::GalleryService`].

pub mod handlers;
pub mod keys;
pub mod view_model;

pub use handlers::{handle_action, handle_export, handle_key, UiAction};
pub use view_model::{build_view, GalleryView};
