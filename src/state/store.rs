//! Photo collection and hero pointer.

use crate::config::DEFAULT_HERO_URL;
use crate::error::Result;
use crate::photo::{validate_collection, ImageRef, Photo};
use log::{debug, warn};

/// Result of removing a photo from the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Photo,
    /// New hero pointer when the removed photo was the hero.
    pub hero_changed: Option<ImageRef>,
}

/// Result of removing a single image from a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveImageOutcome {
    /// The image was removed and the photo keeps `remaining` images.
    Removed { remaining: usize },
    /// The last image was removed, so the whole photo was deleted.
    PhotoDeleted(DeleteOutcome),
    /// No photo with that id, or the index was out of range.
    Unchanged,
}

/// Ordered collection of photos, newest first, plus the hero pointer.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    photos: Vec<Photo>,
    hero: ImageRef,
}

impl PhotoStore {
    /// Creates a store over `photos` with the default hero background.
    ///
    /// Rejects photos without images and repeated ids.
    pub fn new(photos: Vec<Photo>) -> Result<Self> {
        validate_collection(&photos)?;
        Ok(Self {
            photos,
            hero: DEFAULT_HERO_URL.to_string(),
        })
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.photos.iter().position(|p| p.id == id)
    }

    /// Currently displayed hero background.
    pub fn hero(&self) -> &str {
        &self.hero
    }

    /// Whether `photo` resolves to the held hero pointer.
    ///
    /// Compares references, not ids: two photos resolving to the same
    /// reference are both reported as hero.
    pub fn is_hero(&self, photo: &Photo) -> bool {
        photo.hero_ref() == self.hero
    }

    /// Designates the photo with `id` as hero and returns the new pointer.
    pub fn set_hero(&mut self, id: &str) -> Option<ImageRef> {
        let hero = self.get(id)?.hero_ref().to_string();
        debug!("Hero set to {} from photo {}", abbreviate(&hero), id);
        self.hero = hero.clone();
        Some(hero)
    }

    /// Places `batch` in front of the existing photos, keeping the batch order.
    ///
    /// An id that is already taken gets a `-2`, `-3`, ... suffix. Photos
    /// without images are dropped. Returns the photos as inserted.
    pub fn insert_batch(&mut self, batch: Vec<Photo>) -> Vec<Photo> {
        let mut accepted: Vec<Photo> = Vec::with_capacity(batch.len());
        for mut photo in batch {
            if photo.images.is_empty() {
                warn!("Skipped photo without images: {}", photo.id);
                continue;
            }
            let taken = |id: &str| self.get(id).is_some() || accepted.iter().any(|p| p.id == id);
            if taken(&photo.id) {
                let base = photo.id.clone();
                let mut n = 2;
                while taken(&format!("{}-{}", base, n)) {
                    n += 1;
                }
                photo.id = format!("{}-{}", base, n);
                debug!("Id {} already taken, inserting as {}", base, photo.id);
            }
            accepted.push(photo);
        }

        let inserted = accepted.clone();
        if !accepted.is_empty() {
            accepted.append(&mut self.photos);
            self.photos = accepted;
            debug!("Inserted {} photo(s), collection size {}", inserted.len(), self.photos.len());
        }
        inserted
    }

    /// Replaces the photo with the same id in place. Returns false when absent.
    pub fn update(&mut self, photo: Photo) -> bool {
        if photo.images.is_empty() {
            warn!("Refused update leaving photo {} without images", photo.id);
            return false;
        }
        match self.position(&photo.id) {
            Some(index) => {
                self.photos[index] = photo;
                true
            }
            None => {
                debug!("Update ignored, no photo with id {}", photo.id);
                false
            }
        }
    }

    /// Removes the photo with `id`, moving the hero pointer if it was the hero.
    pub fn delete(&mut self, id: &str) -> Option<DeleteOutcome> {
        let index = self.position(id)?;
        let was_hero = self.is_hero(&self.photos[index]);
        let removed = self.photos.remove(index);

        let hero_changed = was_hero.then(|| {
            self.hero = match self.photos.first() {
                Some(first) => first.hero_ref().to_string(),
                None => DEFAULT_HERO_URL.to_string(),
            };
            self.hero.clone()
        });

        debug!(
            "Deleted photo {} ({} remaining, hero changed: {})",
            id,
            self.photos.len(),
            hero_changed.is_some()
        );
        Some(DeleteOutcome {
            removed,
            hero_changed,
        })
    }

    /// Removes one image; deleting the last one deletes the photo.
    pub fn remove_image(&mut self, id: &str, image_index: usize) -> RemoveImageOutcome {
        let Some(index) = self.position(id) else {
            return RemoveImageOutcome::Unchanged;
        };
        let images = &self.photos[index].images;
        if image_index >= images.len() {
            warn!(
                "Image index {} out of range for photo {} ({} images)",
                image_index,
                id,
                images.len()
            );
            return RemoveImageOutcome::Unchanged;
        }

        if images.len() == 1 {
            return match self.delete(id) {
                Some(outcome) => RemoveImageOutcome::PhotoDeleted(outcome),
                None => RemoveImageOutcome::Unchanged,
            };
        }

        let images = &mut self.photos[index].images;
        images.remove(image_index);
        RemoveImageOutcome::Removed {
            remaining: images.len(),
        }
    }

    /// Appends images to a photo. Never touches the hero pointer.
    pub fn add_images(&mut self, id: &str, images: &[ImageRef]) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.photos[index].images.extend_from_slice(images);
        true
    }
}

/// Shortens data URIs for log output.
fn abbreviate(reference: &str) -> &str {
    match reference.char_indices().nth(64) {
        Some((cut, _)) => &reference[..cut],
        None => reference,
    }
}
