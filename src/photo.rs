//! Photo records and the hero resolution rule.

use crate::config::MISSING_FIELD_PLACEHOLDER;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Either a remote URL or a self-contained `data:` URI.
pub type ImageRef = String;

/// A gallery entry holding one or more images plus descriptive metadata.
///
/// Field names on the wire follow the seed literal format
/// (`src`, `alt`, `settings`, `highResSrc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(rename = "src")]
    pub images: Vec<ImageRef>,
    #[serde(rename = "highResSrc", default, skip_serializing_if = "Option::is_none")]
    pub high_res: Option<ImageRef>,
    #[serde(rename = "alt")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,
    #[serde(rename = "settings", default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Photo {
    /// Creates a photo with a single image and no optional metadata.
    pub fn new(id: impl Into<String>, image: impl Into<ImageRef>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            images: vec![image.into()],
            high_res: None,
            title: title.into(),
            location: None,
            date: None,
            camera: None,
            lens: None,
            exposure: None,
            description: None,
        }
    }

    /// Reference this photo contributes when chosen as hero:
    /// the high-resolution override if present, else the first image.
    pub fn hero_ref(&self) -> &str {
        match &self.high_res {
            Some(high_res) => high_res,
            None => self.images.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Number of images in the carousel.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Checks that every photo has at least one image and that ids are unique.
pub fn validate_collection(photos: &[Photo]) -> Result<()> {
    let mut seen = HashSet::with_capacity(photos.len());
    for photo in photos {
        if photo.images.is_empty() {
            return Err(AppError::EmptyImages(photo.id.clone()));
        }
        if !seen.insert(photo.id.as_str()) {
            return Err(AppError::DuplicateId(photo.id.clone()));
        }
    }
    Ok(())
}

/// Metadata fields an owner can edit from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Title,
    Location,
    Date,
    Camera,
    Lens,
    Settings,
    Description,
}

impl EditableField {
    pub const ALL: [EditableField; 7] = [
        EditableField::Title,
        EditableField::Location,
        EditableField::Date,
        EditableField::Camera,
        EditableField::Lens,
        EditableField::Settings,
        EditableField::Description,
    ];

    /// Input placeholder shown while editing.
    pub fn label(&self) -> &'static str {
        match self {
            EditableField::Title => "Title",
            EditableField::Location => "Location",
            EditableField::Date => "Date",
            EditableField::Camera => "Camera",
            EditableField::Lens => "Lens",
            EditableField::Settings => "Settings",
            EditableField::Description => "Description",
        }
    }

    /// Whether the field is edited as multi-line text.
    pub fn is_multiline(&self) -> bool {
        matches!(self, EditableField::Description)
    }

    pub fn get<'a>(&self, photo: &'a Photo) -> Option<&'a str> {
        match self {
            EditableField::Title => Some(photo.title.as_str()),
            EditableField::Location => photo.location.as_deref(),
            EditableField::Date => photo.date.as_deref(),
            EditableField::Camera => photo.camera.as_deref(),
            EditableField::Lens => photo.lens.as_deref(),
            EditableField::Settings => photo.exposure.as_deref(),
            EditableField::Description => photo.description.as_deref(),
        }
    }

    /// Stores `value` in the field. An empty value clears optional fields.
    pub fn set(&self, photo: &mut Photo, value: String) {
        let optional = (!value.is_empty()).then(|| value.clone());
        match self {
            EditableField::Title => photo.title = value,
            EditableField::Location => photo.location = optional,
            EditableField::Date => photo.date = optional,
            EditableField::Camera => photo.camera = optional,
            EditableField::Lens => photo.lens = optional,
            EditableField::Settings => photo.exposure = optional,
            EditableField::Description => photo.description = optional,
        }
    }

    /// Value as rendered in the read-only detail view.
    pub fn display<'a>(&self, photo: &'a Photo) -> &'a str {
        match self.get(photo) {
            Some(value) if !value.is_empty() => value,
            _ => MISSING_FIELD_PLACEHOLDER,
        }
    }
}
