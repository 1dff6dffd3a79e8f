//! Service coordinating the photo store, the detail view and owner mode.
//!
//! Mutations check the owner gate when they are called. Uploads that are
//! still reading when owner mode is switched off insert anyway once
//! they settle, and two overlapping uploads insert in whichever order
//! they finish. Switching owner mode off drops an unsaved edit draft.

use crate::config::UPLOAD_FAILED_ALERT;
use crate::error::{AppError, Result};
use crate::photo::{EditableField, ImageRef, Photo};
use crate::services::import_service::{ImageReadReport, ImportReport, ImportService, SelectedFile};
use crate::state::{lock, AppState, DeleteOutcome, RemoveImageOutcome};
use log::{debug, info};
use std::future::Future;

/// High-level gallery operations used by UI handlers.
#[derive(Clone)]
pub struct GalleryService {
    state: AppState,
}

impl GalleryService {
    /// Creates a new gallery service over shared state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Snapshot of the collection in display order.
    pub fn photos(&self) -> Vec<Photo> {
        lock(&self.state.store).photos().to_vec()
    }

    pub fn hero(&self) -> ImageRef {
        lock(&self.state.store).hero().to_string()
    }

    pub fn is_owner_mode(&self) -> bool {
        lock(&self.state.gate).is_unlocked()
    }

    fn require_owner(&self) -> Result<()> {
        lock(&self.state.gate).require_unlocked()
    }

    // ---- detail view ----

    /// Opens a photo in the detail view. Unknown ids leave the view as is.
    pub fn open_photo(&self, id: &str) -> Option<Photo> {
        let photo = lock(&self.state.store).get(id).cloned()?;
        lock(&self.state.selection).open(id);
        Some(photo)
    }

    pub fn close_photo(&self) {
        lock(&self.state.selection).close();
    }

    /// The photo currently open, read fresh from the store.
    pub fn current_photo(&self) -> Option<Photo> {
        let store = lock(&self.state.store);
        let selection = lock(&self.state.selection);
        store.get(selection.open_id()?).cloned()
    }

    fn open_id(&self) -> Result<String> {
        lock(&self.state.selection)
            .open_id()
            .map(str::to_string)
            .ok_or(AppError::NoOpenPhoto)
    }

    fn open_image_count(&self) -> Option<usize> {
        self.current_photo().map(|p| p.image_count())
    }

    pub fn next_image(&self) -> Option<usize> {
        let len = self.open_image_count()?;
        Some(lock(&self.state.selection).next_image(len))
    }

    pub fn prev_image(&self) -> Option<usize> {
        let len = self.open_image_count()?;
        Some(lock(&self.state.selection).prev_image(len))
    }

    // ---- owner mode ----

    /// Handles the owner-mode chord.
    pub fn toggle_owner_mode(&self) {
        let unlocked = {
            let mut gate = lock(&self.state.gate);
            gate.toggle();
            gate.is_unlocked()
        };
        if !unlocked && lock(&self.state.selection).take_draft().is_some() {
            debug!("Owner mode left during edit, draft dropped");
        }
    }

    pub fn submit_passcode(&self, passcode: &str) -> Result<()> {
        lock(&self.state.gate).submit(passcode)
    }

    pub fn dismiss_passcode(&self) {
        lock(&self.state.gate).dismiss();
    }

    // ---- mutations ----

    /// Makes the open photo the hero background and closes the detail view.
    pub fn set_hero(&self) -> Result<Option<ImageRef>> {
        self.require_owner()?;
        let id = self.open_id()?;
        let hero = lock(&self.state.store).set_hero(&id);
        self.close_photo();
        Ok(hero)
    }

    /// Replaces a photo in place. Unknown ids are ignored.
    pub fn update_photo(&self, photo: Photo) -> Result<bool> {
        self.require_owner()?;
        Ok(lock(&self.state.store).update(photo))
    }

    /// Deletes a photo and closes the detail view.
    pub fn delete_photo(&self, id: &str) -> Result<Option<DeleteOutcome>> {
        self.require_owner()?;
        let outcome = lock(&self.state.store).delete(id);
        if outcome.is_some() {
            self.close_photo();
            info!("Photo {} deleted", id);
        }
        Ok(outcome)
    }

    /// Removes one image from a photo, deleting the photo with its last image.
    pub fn remove_image(&self, id: &str, image_index: usize) -> Result<RemoveImageOutcome> {
        self.require_owner()?;
        let mut store = lock(&self.state.store);
        let outcome = store.remove_image(id, image_index);

        let mut selection = lock(&self.state.selection);
        match &outcome {
            RemoveImageOutcome::PhotoDeleted(_) => selection.close(),
            RemoveImageOutcome::Removed { remaining } if selection.is_showing(id) => {
                selection.clamp_index(*remaining);
                if let (Some(draft), Some(photo)) = (selection.draft_mut(), store.get(id)) {
                    draft.images = photo.images.clone();
                }
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Reads `files` and appends them to a photo's images.
    ///
    /// The owner gate is checked on call, before the returned future runs.
    pub fn add_images<'a>(
        &'a self,
        id: &'a str,
        files: &'a [SelectedFile],
    ) -> impl Future<Output = Result<ImageReadReport>> + 'a {
        let permitted = self.require_owner();
        async move {
            permitted?;
            let report = ImportService::new().read_images(files).await;
            if report.has_failures() {
                lock(&self.state.notices).push(UPLOAD_FAILED_ALERT);
            }
            if report.images.is_empty() {
                return Ok(report);
            }

            let mut store = lock(&self.state.store);
            if store.add_images(id, &report.images) {
                let mut selection = lock(&self.state.selection);
                if selection.is_showing(id) {
                    if let (Some(draft), Some(photo)) = (selection.draft_mut(), store.get(id)) {
                        draft.images = photo.images.clone();
                    }
                }
            }
            Ok(report)
        }
    }

    /// Imports a batch of files and puts the new photos first.
    ///
    /// The owner gate is checked on call, before the returned future runs.
    /// Non-image files are skipped quietly. Read failures queue a single
    /// alert; everything that was read is still inserted. The returned
    /// report lists the photos as inserted, with any id renamed to stay
    /// unique in the collection.
    pub fn upload<'a>(
        &'a self,
        files: &'a [SelectedFile],
    ) -> impl Future<Output = Result<ImportReport>> + 'a {
        let permitted = self.require_owner();
        async move {
            permitted?;
            let mut report = ImportService::new().import_files(files).await;
            if report.has_failures() {
                lock(&self.state.notices).push(UPLOAD_FAILED_ALERT);
            }
            if !report.photos.is_empty() {
                let batch = std::mem::take(&mut report.photos);
                report.photos = lock(&self.state.store).insert_batch(batch);
                debug!("Upload inserted {} of {} file(s)", report.photos.len(), files.len());
            }
            Ok(report)
        }
    }

    // ---- edit session ----

    /// Starts editing the open photo.
    pub fn begin_edit(&self) -> Result<()> {
        self.require_owner()?;
        let photo = self.current_photo().ok_or(AppError::NoOpenPhoto)?;
        lock(&self.state.selection).begin_edit(photo);
        Ok(())
    }

    pub fn edit_field(&self, field: EditableField, value: impl Into<String>) -> Result<()> {
        self.require_owner()?;
        if lock(&self.state.selection).edit_field(field, value.into()) {
            Ok(())
        } else {
            Err(AppError::NotEditing)
        }
    }

    /// Commits the draft and leaves edit mode.
    pub fn save_edit(&self) -> Result<bool> {
        self.require_owner()?;
        let draft = lock(&self.state.selection)
            .take_draft()
            .ok_or(AppError::NotEditing)?;
        Ok(lock(&self.state.store).update(draft))
    }

    /// Drops the draft.
    pub fn cancel_edit(&self) {
        lock(&self.state.selection).take_draft();
    }
}
