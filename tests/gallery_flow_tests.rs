use async_std::task::block_on;
use photo_gallery::config::{
    DEFAULT_HERO_URL, EXPORT_FAILED_ALERT, OWNER_PASSCODE, UPLOAD_FAILED_ALERT,
};
use photo_gallery::services::export_service::parse_photo_literal;
use photo_gallery::services::{ClipboardSink, MemoryClipboard};
use photo_gallery::state::RemoveImageOutcome;
use photo_gallery::ui::{build_view, handle_export};
use photo_gallery::{AppError, AppState, ExportService, GalleryService, Photo, SelectedFile};
use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn photo(id: &str, images: &[&str]) -> Photo {
    let mut photo = Photo::new(id, images[0], format!("Photo {}", id));
    photo.images = images.iter().map(|s| s.to_string()).collect();
    photo
}

fn owner_service(photos: Vec<Photo>) -> GalleryService {
    init_logging();
    let service = GalleryService::new(AppState::with_photos(photos).unwrap());
    service.toggle_owner_mode();
    service.submit_passcode(OWNER_PASSCODE).unwrap();
    service
}

fn image_file(name: &str) -> SelectedFile {
    SelectedFile::from_bytes(name, "image/jpeg", name.as_bytes().to_vec())
}

fn ids(service: &GalleryService) -> Vec<String> {
    service.photos().into_iter().map(|p| p.id).collect()
}

fn titles(service: &GalleryService) -> Vec<String> {
    service.photos().into_iter().map(|p| p.title).collect()
}

#[test]
fn upload_batch_keeps_file_order_before_existing() {
    let service = owner_service(vec![photo("old", &["old.jpg"])]);
    let files = [image_file("A.jpg"), image_file("B.jpg"), image_file("C.jpg")];

    let report = block_on(service.upload(&files)).unwrap();
    assert_eq!(report.photos.len(), 3);
    assert_eq!(titles(&service), ["A", "B", "C", "Photo old"]);
}

#[test]
fn non_image_files_are_skipped_without_alert() {
    let service = owner_service(vec![]);
    let files = [
        image_file("first.jpg"),
        SelectedFile::from_bytes("notes.txt", "text/plain", b"hello".to_vec()),
        image_file("second.jpg"),
    ];

    let report = block_on(service.upload(&files)).unwrap();
    assert_eq!(report.skipped, ["notes.txt"]);
    assert_eq!(titles(&service), ["first", "second"]);
    assert!(build_view(service.state()).notices.is_empty());
}

#[test]
fn read_failure_keeps_other_files_and_alerts_once() {
    let service = owner_service(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let good_path = dir.path().join("harbor.png");
    std::fs::File::create(&good_path)
        .unwrap()
        .write_all(b"\x89PNG\r\n\x1a\n")
        .unwrap();

    let files = [
        SelectedFile::from_path(&good_path),
        SelectedFile::from_path(dir.path().join("missing-1.jpg")),
        SelectedFile::from_path(dir.path().join("missing-2.jpg")),
    ];

    let report = block_on(service.upload(&files)).unwrap();
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(report.failures[0], AppError::FileRead { .. }));
    assert_eq!(titles(&service), ["harbor"]);
    assert!(service.photos()[0].images[0].starts_with("data:image/png;base64,"));

    let notices = build_view(service.state()).notices;
    assert_eq!(notices, [UPLOAD_FAILED_ALERT]);
}

#[test]
fn upload_requires_owner_mode() {
    init_logging();
    let service = GalleryService::new(AppState::with_photos(vec![]).unwrap());
    let result = block_on(service.upload(&[image_file("a.jpg")]));
    assert!(matches!(result, Err(AppError::OwnerModeRequired)));
    assert!(service.photos().is_empty());
}

#[test]
fn deleting_hero_recomputes_from_new_first_photo() {
    let service = owner_service(vec![photo("p1", &["p1.jpg"]), photo("p2", &["p2.jpg"])]);
    service.open_photo("p1");
    service.set_hero().unwrap();
    assert_eq!(service.hero(), "p1.jpg");

    let outcome = service.delete_photo("p1").unwrap().unwrap();
    assert_eq!(outcome.hero_changed.as_deref(), Some("p2.jpg"));
    assert_eq!(ids(&service), ["p2"]);
    assert_eq!(service.hero(), "p2.jpg");
}

#[test]
fn deleting_only_hero_resets_to_default() {
    let service = owner_service(vec![photo("p1", &["p1.jpg"])]);
    service.open_photo("p1");
    service.set_hero().unwrap();

    service.delete_photo("p1").unwrap();
    assert!(service.photos().is_empty());
    assert_eq!(service.hero(), DEFAULT_HERO_URL);
}

#[test]
fn removing_only_image_cascades_to_delete() {
    let service = owner_service(vec![photo("p1", &["p1.jpg"]), photo("p2", &["p2.jpg"])]);
    service.open_photo("p1");
    service.set_hero().unwrap();
    service.open_photo("p1");

    let outcome = service.remove_image("p1", 0).unwrap();
    assert!(matches!(outcome, RemoveImageOutcome::PhotoDeleted(_)));
    assert_eq!(ids(&service), ["p2"]);
    assert_eq!(service.hero(), "p2.jpg");
    assert!(service.current_photo().is_none());
}

#[test]
fn removing_last_of_three_images_clamps_index() {
    let service = owner_service(vec![photo("p1", &["a.jpg", "b.jpg", "c.jpg"])]);
    service.open_photo("p1");
    service.prev_image();

    service.remove_image("p1", 2).unwrap();
    let detail = build_view(service.state()).detail.unwrap();
    assert_eq!(detail.position.as_deref(), Some("2 / 2"));
    assert_eq!(detail.image, "b.jpg");
}

#[test]
fn add_images_appends_without_moving_index_or_hero() {
    let service = owner_service(vec![photo("p1", &["a.jpg"])]);
    service.open_photo("p1");
    service.set_hero().unwrap();
    service.open_photo("p1");

    let report = block_on(service.add_images("p1", &[image_file("b.jpg")])).unwrap();
    assert_eq!(report.images.len(), 1);

    let current = service.current_photo().unwrap();
    assert_eq!(current.images.len(), 2);
    assert_eq!(current.images[0], "a.jpg");
    assert_eq!(service.hero(), "a.jpg");
    assert_eq!(build_view(service.state()).detail.unwrap().image, "a.jpg");
}

#[test]
fn wrong_passcode_leaves_everything_unchanged() {
    init_logging();
    let service = GalleryService::new(AppState::with_photos(vec![photo("p1", &["a.jpg"])]).unwrap());
    let before = service.photos();
    service.toggle_owner_mode();

    for attempt in ["0000", "135", "13560", ""] {
        assert!(matches!(
            service.submit_passcode(attempt),
            Err(AppError::WrongPasscode)
        ));
        assert!(!service.is_owner_mode());
    }
    assert_eq!(service.photos(), before);
    assert_eq!(service.hero(), DEFAULT_HERO_URL);
}

#[test]
fn export_round_trips_through_clipboard() {
    let service = owner_service(photo_gallery::seed::initial_photos().unwrap());
    block_on(service.upload(&[image_file("fresh.jpg")])).unwrap();
    service.open_photo("3");
    service.remove_image("3", 1).unwrap();

    let clipboard = Arc::new(Mutex::new(MemoryClipboard::new()));
    let exporter = ExportService::new(service.state().clone(), clipboard.clone());
    assert!(handle_export(&service, &exporter));

    let text = clipboard.lock().unwrap().contents().unwrap().to_string();
    let restored = parse_photo_literal(&text).unwrap();
    assert_eq!(restored, service.photos());
}

#[test]
fn clipboard_failure_reports_false_and_alerts() {
    let service = owner_service(vec![photo("p1", &["a.jpg"])]);
    let clipboard: Arc<Mutex<dyn ClipboardSink>> =
        Arc::new(Mutex::new(MemoryClipboard::failing("no display")));
    let exporter = ExportService::new(service.state().clone(), clipboard);

    assert!(!exporter.export());
    assert_eq!(build_view(service.state()).notices, [EXPORT_FAILED_ALERT]);
}

#[test]
fn export_is_refused_while_locked() {
    init_logging();
    let service = GalleryService::new(AppState::with_photos(vec![photo("p1", &["a.jpg"])]).unwrap());
    let clipboard = Arc::new(Mutex::new(MemoryClipboard::new()));
    let exporter = ExportService::new(service.state().clone(), clipboard.clone());

    assert!(!handle_export(&service, &exporter));
    assert!(clipboard.lock().unwrap().contents().is_none());
}

#[test]
fn back_to_back_uploads_of_same_name_all_land() {
    let service = owner_service(vec![]);
    let mut reported = Vec::new();
    for _ in 0..50 {
        let report = block_on(service.upload(&[image_file("dup.jpg")])).unwrap();
        assert_eq!(report.photos.len(), 1);
        reported.push(report.photos[0].id.clone());
    }

    let stored = ids(&service);
    assert_eq!(stored.len(), 50);
    assert_eq!(stored.iter().collect::<HashSet<_>>().len(), 50);
    for id in &reported {
        assert!(stored.contains(id), "reported id {} missing from store", id);
    }
}

#[test]
fn upload_started_before_relock_still_inserts() {
    let service = owner_service(vec![photo("old", &["old.jpg"])]);
    let files = [image_file("late.jpg")];

    let pending = service.upload(&files);
    service.toggle_owner_mode();
    assert!(!service.is_owner_mode());

    let report = block_on(pending).unwrap();
    assert_eq!(report.photos.len(), 1);
    assert_eq!(titles(&service), ["late", "Photo old"]);
}

#[test]
fn overlapping_uploads_keep_every_photo() {
    let service = owner_service(vec![photo("old", &["old.jpg"])]);
    let first = [image_file("a.jpg"), image_file("shared.jpg")];
    let second = [image_file("b.jpg"), image_file("shared.jpg")];

    let (left, right) = block_on(async {
        futures::join!(service.upload(&first), service.upload(&second))
    });
    assert_eq!(left.unwrap().photos.len(), 2);
    assert_eq!(right.unwrap().photos.len(), 2);

    let stored = ids(&service);
    assert_eq!(stored.len(), 5);
    assert_eq!(stored.iter().collect::<HashSet<_>>().len(), 5);
    let mut names = titles(&service);
    names.sort();
    assert_eq!(names, ["Photo old", "a", "b", "shared", "shared"]);
}

#[test]
fn initial_collection_without_images_is_rejected() {
    let mut empty = photo("p1", &["a.jpg"]);
    empty.images.clear();
    assert!(matches!(
        AppState::with_photos(vec![photo("p0", &["z.jpg"]), empty]),
        Err(AppError::EmptyImages(id)) if id == "p1"
    ));
    assert!(matches!(
        AppState::with_photos(vec![photo("p1", &["a.jpg"]), photo("p1", &["b.jpg"])]),
        Err(AppError::DuplicateId(id)) if id == "p1"
    ));
}

#[test]
fn relock_mid_edit_hides_and_drops_draft() {
    let service = owner_service(vec![photo("p1", &["a.jpg"])]);
    service.open_photo("p1");
    service.begin_edit().unwrap();
    service
        .edit_field(photo_gallery::EditableField::Title, "Unsaved")
        .unwrap();
    assert!(build_view(service.state()).detail.unwrap().draft.is_some());

    service.toggle_owner_mode();
    assert_eq!(build_view(service.state()).detail.unwrap().draft, None);
    assert!(matches!(
        service.edit_field(photo_gallery::EditableField::Title, "Locked"),
        Err(AppError::OwnerModeRequired)
    ));
    assert_eq!(titles(&service), ["Photo p1"]);
}
