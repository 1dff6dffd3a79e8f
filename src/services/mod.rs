//! Gallery operations built on the shared state.
//!
//! Upload, export and clipboard adapters live here next to the service
//! that applies store, selection and owner-mode rules together.

pub mod clipboard_service;
pub mod export_service;
pub mod gallery_service;
pub mod import_service;

pub use clipboard_service::{ClipboardService, ClipboardSink, MemoryClipboard};
pub use export_service::ExportService;
pub use gallery_service::GalleryService;
pub use import_service::{ImportService, SelectedFile};
