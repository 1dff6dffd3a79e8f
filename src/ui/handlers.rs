//! Event handlers for view callbacks.
//!
//! The host view forwards key presses and button clicks here; handlers
//! translate them into [`GalleryService`] calls and turn failures into
//! notices or passcode-prompt messages instead of propagating them.

use crate::config::OWNER_MODE_CHORD;
use crate::photo::EditableField;
use crate::services::export_service::ExportService;
use crate::services::GalleryService;
use crate::state::{lock, GateState};
use crate::ui::keys::{Key, KeyChord};
use log::{debug, warn};

/// Discrete user actions coming from the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenPhoto(String),
    ClosePhoto,
    NextImage,
    PrevImage,
    SubmitPasscode(String),
    DismissPasscode,
    SetHero,
    /// Confirmed delete of the open photo.
    DeleteOpenPhoto,
    /// Confirmed removal of the image shown in the carousel.
    RemoveActiveImage,
    BeginEdit,
    EditField(EditableField, String),
    SaveEdit,
    CancelEdit,
}

/// Handles a key press anywhere in the window. Returns true when consumed.
pub fn handle_key(service: &GalleryService, chord: KeyChord) -> bool {
    if chord == OWNER_MODE_CHORD {
        service.toggle_owner_mode();
        return true;
    }

    let challenge_open = matches!(
        lock(&service.state().gate).state(),
        GateState::Challenge { .. }
    );

    match chord.key {
        Key::Escape if challenge_open => {
            service.dismiss_passcode();
            true
        }
        Key::Escape if service.current_photo().is_some() => {
            service.close_photo();
            true
        }
        Key::ArrowLeft => service.prev_image().is_some(),
        Key::ArrowRight => service.next_image().is_some(),
        _ => false,
    }
}

/// Applies a view action. Errors are logged; the passcode error is kept
/// on the gate for the prompt to display.
pub fn handle_action(service: &GalleryService, action: UiAction) {
    debug!("UI action: {:?}", action);
    let result = match action {
        UiAction::OpenPhoto(id) => {
            if service.open_photo(&id).is_none() {
                warn!("Cannot open unknown photo {}", id);
            }
            Ok(())
        }
        UiAction::ClosePhoto => {
            service.close_photo();
            Ok(())
        }
        UiAction::NextImage => {
            service.next_image();
            Ok(())
        }
        UiAction::PrevImage => {
            service.prev_image();
            Ok(())
        }
        UiAction::SubmitPasscode(passcode) => service.submit_passcode(&passcode),
        UiAction::DismissPasscode => {
            service.dismiss_passcode();
            Ok(())
        }
        UiAction::SetHero => service.set_hero().map(|_| ()),
        UiAction::DeleteOpenPhoto => match service.current_photo() {
            Some(photo) => service.delete_photo(&photo.id).map(|_| ()),
            None => Ok(()),
        },
        UiAction::RemoveActiveImage => match service.current_photo() {
            Some(photo) => {
                let index = lock(&service.state().selection).image_index();
                service.remove_image(&photo.id, index).map(|_| ())
            }
            None => Ok(()),
        },
        UiAction::BeginEdit => service.begin_edit(),
        UiAction::EditField(field, value) => service.edit_field(field, value),
        UiAction::SaveEdit => service.save_edit().map(|_| ()),
        UiAction::CancelEdit => {
            service.cancel_edit();
            Ok(())
        }
    };

    if let Err(e) = result {
        warn!("Action failed: {}", e);
    }
}

/// Export button handler. Returns whether the copy succeeded.
pub fn handle_export(service: &GalleryService, exporter: &ExportService) -> bool {
    if !service.is_owner_mode() {
        warn!("Export requested outside owner mode");
        return false;
    }
    exporter.export()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OWNER_PASSCODE;
    use crate::photo::Photo;
    use crate::state::AppState;

    fn service() -> GalleryService {
        let mut multi = Photo::new("1", "a.jpg", "Castle Series");
        multi.images.push("b.jpg".to_string());
        GalleryService::new(AppState::with_photos(vec![multi]).unwrap())
    }

    #[test]
    fn chord_opens_challenge_then_relocks() {
        let service = service();
        assert!(handle_key(&service, OWNER_MODE_CHORD));
        handle_action(&service, UiAction::SubmitPasscode(OWNER_PASSCODE.to_string()));
        assert!(service.is_owner_mode());

        handle_key(&service, OWNER_MODE_CHORD);
        assert!(!service.is_owner_mode());
    }

    #[test]
    fn unshifted_e_is_ignored() {
        let service = service();
        assert!(!handle_key(&service, KeyChord::plain(Key::Char('E'))));
        assert_eq!(lock(&service.state().gate).state(), &GateState::Locked);
    }

    #[test]
    fn escape_dismisses_challenge_before_closing_photo() {
        let service = service();
        handle_action(&service, UiAction::OpenPhoto("1".to_string()));
        handle_key(&service, OWNER_MODE_CHORD);

        handle_key(&service, KeyChord::plain(Key::Escape));
        assert_eq!(lock(&service.state().gate).state(), &GateState::Locked);
        assert!(service.current_photo().is_some());

        handle_key(&service, KeyChord::plain(Key::Escape));
        assert!(service.current_photo().is_none());
    }

    #[test]
    fn arrows_walk_the_carousel() {
        let service = service();
        assert!(!handle_key(&service, KeyChord::plain(Key::ArrowRight)));
        handle_action(&service, UiAction::OpenPhoto("1".to_string()));
        assert!(handle_key(&service, KeyChord::plain(Key::ArrowRight)));
        assert_eq!(lock(&service.state().selection).image_index(), 1);
        handle_key(&service, KeyChord::plain(Key::ArrowRight));
        assert_eq!(lock(&service.state().selection).image_index(), 0);
    }

    #[test]
    fn locked_delete_action_changes_nothing() {
        let service = service();
        handle_action(&service, UiAction::OpenPhoto("1".to_string()));
        handle_action(&service, UiAction::DeleteOpenPhoto);
        assert_eq!(service.photos().len(), 1);
        assert!(service.current_photo().is_some());
    }
}
