//! Detail view state: the open photo, its active image and the edit draft.

use crate::photo::{EditableField, Photo};

/// Direction for carousel navigation.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Tracks which photo is open in the detail view.
///
/// Holds the photo id rather than a copy so the view always reads the
/// current record from the store.
#[derive(Debug, Default)]
pub struct SelectionState {
    open_id: Option<String>,
    image_index: usize,
    draft: Option<Photo>,
}

impl SelectionState {
    /// Creates a closed selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `id`. The image index restarts at 0 and any edit ends.
    pub fn open(&mut self, id: &str) {
        self.open_id = Some(id.to_string());
        self.image_index = 0;
        self.draft = None;
    }

    pub fn close(&mut self) {
        self.open_id = None;
        self.image_index = 0;
        self.draft = None;
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    /// Whether `id` is the photo on screen.
    pub fn is_showing(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Keeps the index inside a carousel of `len` images.
    pub fn clamp_index(&mut self, len: usize) {
        self.image_index = self.image_index.min(len.saturating_sub(1));
    }

    fn step(&mut self, len: usize, direction: Direction) -> usize {
        if len > 1 {
            self.image_index = match direction {
                Direction::Next if self.image_index + 1 >= len => 0,
                Direction::Next => self.image_index + 1,
                Direction::Previous if self.image_index == 0 => len - 1,
                Direction::Previous => self.image_index - 1,
            };
        }
        self.image_index
    }

    /// Advances the carousel, wrapping to the first image.
    pub fn next_image(&mut self, len: usize) -> usize {
        self.step(len, Direction::Next)
    }

    /// Moves the carousel back, wrapping to the last image.
    pub fn prev_image(&mut self, len: usize) -> usize {
        self.step(len, Direction::Previous)
    }

    /// Starts editing with a copy of the open record.
    pub fn begin_edit(&mut self, photo: Photo) {
        self.draft = Some(photo);
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&Photo> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Photo> {
        self.draft.as_mut()
    }

    /// Writes one field of the draft. Returns false when not editing.
    pub fn edit_field(&mut self, field: EditableField, value: String) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                field.set(draft, value);
                true
            }
            None => false,
        }
    }

    /// Ends the edit session, handing back the draft.
    pub fn take_draft(&mut self) -> Option<Photo> {
        self.draft.take()
    }
}
