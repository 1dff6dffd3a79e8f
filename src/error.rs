//! Unified error types for the gallery.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Reading a selected file failed
    FileRead { name: String, message: String },
    /// Passcode did not match the owner passcode
    WrongPasscode,
    /// A passcode was submitted while no challenge was open
    ChallengeNotOpen,
    /// Mutation attempted while owner mode is locked
    OwnerModeRequired,
    /// No photo is open in the detail view
    NoOpenPhoto,
    /// Edit operation without an active edit session
    NotEditing,
    /// Seed or export literal could not be parsed
    SeedParse(String),
    /// Seed contains a record with no images
    EmptyImages(String),
    /// Seed contains the same id twice
    DuplicateId(String),
    /// Serializing the collection failed
    Export(String),
    /// Writing to the clipboard failed
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileRead { name, message } => {
                write!(f, "ファイル読み込みエラー: {}: {}", name, message)
            }
            AppError::WrongPasscode => write!(f, "パスコードが違います。"),
            AppError::ChallengeNotOpen => write!(f, "パスコード入力が開かれていません"),
            AppError::OwnerModeRequired => write!(f, "オーナーモードが必要です"),
            AppError::NoOpenPhoto => write!(f, "写真が選択されていません"),
            AppError::NotEditing => write!(f, "編集中ではありません"),
            AppError::SeedParse(msg) => write!(f, "データ読み込みエラー: {}", msg),
            AppError::EmptyImages(id) => write!(f, "画像のない写真があります: {}", id),
            AppError::DuplicateId(id) => write!(f, "重複したIDがあります: {}", id),
            AppError::Export(msg) => write!(f, "エクスポートエラー: {}", msg),
            AppError::Clipboard(msg) => write!(f, "クリップボードエラー: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SeedParse(err.to_string())
    }
}

impl From<crate::services::clipboard_service::ClipboardError> for AppError {
    fn from(err: crate::services::clipboard_service::ClipboardError) -> Self {
        AppError::Clipboard(err.to_string())
    }
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, AppError>;
