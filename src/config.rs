//! Application configuration constants.

use crate::ui::keys::{Key, KeyChord};

/// Background shown when no photo has been designated hero.
pub const DEFAULT_HERO_URL: &str = "/images/loyal-companion-high-res.jpg";

/// Shared owner-mode passcode. Visible to anyone holding the build; UI gate only.
pub const OWNER_PASSCODE: &str = "1356";

/// Chord that opens the passcode challenge or leaves owner mode.
pub const OWNER_MODE_CHORD: KeyChord = KeyChord::shifted(Key::Char('E'));

/// Location assigned to freshly uploaded photos.
pub const UPLOAD_DEFAULT_LOCATION: &str = "Unknown";

/// Shown in the detail view for metadata fields that are absent.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Content types accepted by the importer start with this prefix.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// Supported image file extensions offered by the file picker.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// First line of the exported seed literal.
pub const EXPORT_HEADER: &str = "import { Photo } from '../types';";

/// Declaration the exported array is assigned to.
pub const EXPORT_DECLARATION: &str = "export const initialPhotos: Photo[] =";

pub const OWNER_MODE_BANNER: &str = "編集モードが有効です (Shift+Eで終了)";
pub const HERO_CURRENT_LABEL: &str = "現在の背景";
pub const HERO_SET_LABEL: &str = "背景に設定";
pub const EXPORT_IDLE_LABEL: &str = "データコピー";
pub const EXPORT_COPIED_LABEL: &str = "コピーしました！";
pub const UPLOAD_FAILED_ALERT: &str = "Could not upload some files. Please try again.";
pub const EXPORT_FAILED_ALERT: &str = "データのコピーに失敗しました。コンソールを確認してください。";
