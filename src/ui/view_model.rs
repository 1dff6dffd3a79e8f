//! Plain view data derived from application state.
//!
//! The renderer draws exactly what is here. Owner controls are `None`
//! while owner mode is locked so they never reach the screen.

use crate::config::{
    EXPORT_COPIED_LABEL, EXPORT_IDLE_LABEL, HERO_CURRENT_LABEL, HERO_SET_LABEL, OWNER_MODE_BANNER,
};
use crate::photo::{EditableField, ImageRef, Photo};
use crate::state::{lock, AppState, GateState};

/// One tile of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTile {
    pub id: String,
    pub title: String,
    pub cover: ImageRef,
    pub image_count: usize,
}

/// Owner-only controls of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerControls {
    pub hero_label: &'static str,
    /// Disabled when the photo already is the hero.
    pub hero_enabled: bool,
    /// Single-image removal is offered only for multi-image photos.
    pub can_remove_image: bool,
    pub delete_prompt: String,
}

/// The open photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub image: ImageRef,
    /// "2 / 3" style counter, only for multi-image photos.
    pub position: Option<String>,
    /// Read-only field values with placeholders for absent ones.
    pub fields: Vec<(EditableField, String)>,
    /// Draft values while editing.
    pub draft: Option<Vec<(EditableField, String)>>,
    pub owner: Option<OwnerControls>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasscodePrompt {
    pub error: Option<String>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub hero: ImageRef,
    pub tiles: Vec<PhotoTile>,
    pub banner: Option<&'static str>,
    /// Upload and export buttons.
    pub show_owner_buttons: bool,
    pub detail: Option<DetailView>,
    pub passcode_prompt: Option<PasscodePrompt>,
    pub notices: Vec<String>,
}

/// Builds the view for the current state. Pending notices are copied, not drained.
pub fn build_view(state: &AppState) -> GalleryView {
    let store = lock(&state.store);
    let selection = lock(&state.selection);
    let gate = lock(&state.gate);
    let owner = gate.is_unlocked();

    let tiles = store
        .photos()
        .iter()
        .map(|photo| PhotoTile {
            id: photo.id.clone(),
            title: photo.title.clone(),
            cover: photo.images.first().cloned().unwrap_or_default(),
            image_count: photo.image_count(),
        })
        .collect();

    let detail = selection
        .open_id()
        .and_then(|id| store.get(id))
        .map(|photo| {
            let index = selection.image_index().min(photo.image_count().saturating_sub(1));
            DetailView {
                id: photo.id.clone(),
                title: photo.title.clone(),
                image: photo.images.get(index).cloned().unwrap_or_default(),
                position: (photo.image_count() > 1)
                    .then(|| format!("{} / {}", index + 1, photo.image_count())),
                fields: field_values(photo, |f, p| f.display(p).to_string()),
                draft: selection
                    .draft()
                    .filter(|_| owner)
                    .map(|draft| field_values(draft, |f, p| f.get(p).unwrap_or_default().to_string())),
                owner: owner.then(|| {
                    let is_hero = store.is_hero(photo);
                    OwnerControls {
                        hero_label: if is_hero { HERO_CURRENT_LABEL } else { HERO_SET_LABEL },
                        hero_enabled: !is_hero,
                        can_remove_image: photo.image_count() > 1,
                        delete_prompt: delete_prompt(photo),
                    }
                }),
            }
        });

    let passcode_prompt = match gate.state() {
        GateState::Challenge { error } => Some(PasscodePrompt {
            error: error.clone(),
        }),
        _ => None,
    };

    GalleryView {
        hero: store.hero().to_string(),
        tiles,
        banner: owner.then_some(OWNER_MODE_BANNER),
        show_owner_buttons: owner,
        detail,
        passcode_prompt,
        notices: lock(&state.notices).pending().to_vec(),
    }
}

fn field_values(
    photo: &Photo,
    value: impl Fn(EditableField, &Photo) -> String,
) -> Vec<(EditableField, String)> {
    EditableField::ALL
        .iter()
        .filter(|f| **f != EditableField::Title)
        .map(|f| (*f, value(*f, photo)))
        .collect()
}

/// Confirmation text for deleting a whole photo.
pub fn delete_prompt(photo: &Photo) -> String {
    let count = if photo.image_count() > 1 {
        format!("（{}枚の画像を含む）", photo.image_count())
    } else {
        String::new()
    };
    format!(
        "「{}」{}を削除しますか？\nこの操作は元に戻せません。",
        photo.title, count
    )
}

/// Confirmation text for removing the image on screen.
pub const REMOVE_IMAGE_PROMPT: &str = "この画像をコレクションから削除しますか？\nこの操作は元に戻せません。";

/// Label of the export button.
pub fn export_label(copied: bool) -> &'static str {
    if copied {
        EXPORT_COPIED_LABEL
    } else {
        EXPORT_IDLE_LABEL
    }
}
