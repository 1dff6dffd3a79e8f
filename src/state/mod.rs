//! State management for the gallery.

use crate::error::Result;
use crate::photo::Photo;
use crate::seed;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod notices;
pub mod owner_gate;
pub mod selection;
pub mod store;

pub use notices::NoticeBoard;
pub use owner_gate::{GateState, OwnerGate};
pub use selection::SelectionState;
pub use store::{DeleteOutcome, PhotoStore, RemoveImageOutcome};

/// Application-wide state container.
///
/// Built once at startup and handed to services by cloning the handles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<PhotoStore>>,
    pub selection: Arc<Mutex<SelectionState>>,
    pub gate: Arc<Mutex<OwnerGate>>,
    /// Alerts queued for the view.
    pub notices: Arc<Mutex<NoticeBoard>>,
}

impl AppState {
    /// Creates state seeded with the built-in photo list.
    pub fn new() -> Result<Self> {
        Self::with_photos(seed::initial_photos()?)
    }

    /// Creates state over an explicit initial collection.
    ///
    /// Fails when a photo has no images or an id repeats.
    pub fn with_photos(photos: Vec<Photo>) -> Result<Self> {
        Ok(Self {
            store: Arc::new(Mutex::new(PhotoStore::new(photos)?)),
            selection: Arc::new(Mutex::new(SelectionState::new())),
            gate: Arc::new(Mutex::new(OwnerGate::new())),
            notices: Arc::new(Mutex::new(NoticeBoard::new())),
        })
    }
}

/// Locks `mutex`, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
