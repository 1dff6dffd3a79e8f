//! Upload adapter turning selected files into photo records.
//!
//! Every file is read as its own future; a batch settles only after all
//! of them have finished, successfully or not, so one unreadable file
//! never discards the others.

use crate::config::{IMAGE_CONTENT_TYPE_PREFIX, SUPPORTED_IMAGE_EXTENSIONS, UPLOAD_DEFAULT_LOCATION};
use crate::error::{AppError, Result};
use crate::photo::{ImageRef, Photo};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use futures::future::join_all;
use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rfd::AsyncFileDialog;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("valid regex"));

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
enum FileSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file chosen by the user, with its declared content type.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    source: FileSource,
}

impl SelectedFile {
    /// A file on disk; the content type is derived from its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            content_type: content_type_for_path(&path),
            source: FileSource::Path(path),
        }
    }

    /// An in-memory file. An empty `content_type` is sniffed from the bytes.
    pub fn from_bytes(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut content_type = content_type.into();
        if content_type.is_empty() {
            content_type = image::guess_format(&bytes)
                .map(|format| format.to_mime_type().to_string())
                .unwrap_or_else(|_| FALLBACK_CONTENT_TYPE.to_string());
        }
        Self {
            name: name.into(),
            content_type,
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX)
    }

    /// Reads the file into a self-contained `data:` URI.
    pub async fn read_data_url(&self) -> Result<ImageRef> {
        let encoded = match &self.source {
            FileSource::Path(path) => {
                let bytes = async_std::fs::read(async_std::path::PathBuf::from(path.clone()))
                    .await
                    .map_err(|e| AppError::FileRead {
                        name: self.name.clone(),
                        message: e.to_string(),
                    })?;
                STANDARD.encode(bytes)
            }
            FileSource::Bytes(bytes) => STANDARD.encode(bytes),
        };
        Ok(format!("data:{};base64,{}", self.content_type, encoded))
    }
}

fn content_type_for_path(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    match image::ImageFormat::from_extension(&ext) {
        Some(format) => format.to_mime_type().to_string(),
        None if ext == "txt" => "text/plain".to_string(),
        None => FALLBACK_CONTENT_TYPE.to_string(),
    }
}

/// How one file of a batch settled.
#[derive(Debug)]
enum Settled {
    Read(ImageRef),
    Skipped,
    Failed(AppError),
}

async fn settle(file: &SelectedFile) -> Settled {
    if !file.is_image() {
        warn!("Skipped unsupported file: {} ({})", file.name, file.content_type);
        return Settled::Skipped;
    }
    match file.read_data_url().await {
        Ok(data_url) => Settled::Read(data_url),
        Err(e) => {
            error!("Error reading file: {}", e);
            Settled::Failed(e)
        }
    }
}

/// Outcome of an upload batch.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// New photos in original file order.
    pub photos: Vec<Photo>,
    /// Names of files skipped for not being images.
    pub skipped: Vec<String>,
    pub failures: Vec<AppError>,
}

impl ImportReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Outcome of reading extra images for an existing photo.
#[derive(Debug, Default)]
pub struct ImageReadReport {
    pub images: Vec<ImageRef>,
    pub skipped: Vec<String>,
    pub failures: Vec<AppError>,
}

impl ImageReadReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Converts selected files into photos or image references.
#[derive(Debug, Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Reads every file and builds one new photo per readable image.
    pub async fn import_files(&self, files: &[SelectedFile]) -> ImportReport {
        let settled = join_all(files.iter().map(settle)).await;
        let now = Local::now();

        let mut report = ImportReport::default();
        let mut ids = HashSet::new();
        for (file, outcome) in files.iter().zip(settled) {
            match outcome {
                Settled::Read(data_url) => {
                    let photo = new_upload_photo(&file.name, data_url, now, &mut ids);
                    report.photos.push(photo);
                }
                Settled::Skipped => report.skipped.push(file.name.clone()),
                Settled::Failed(e) => report.failures.push(e),
            }
        }

        debug!(
            "Import settled: {} read, {} skipped, {} failed",
            report.photos.len(),
            report.skipped.len(),
            report.failures.len()
        );
        report
    }

    /// Reads every image file into a reference, keeping file order.
    pub async fn read_images(&self, files: &[SelectedFile]) -> ImageReadReport {
        let settled = join_all(files.iter().map(settle)).await;

        let mut report = ImageReadReport::default();
        for (file, outcome) in files.iter().zip(settled) {
            match outcome {
                Settled::Read(data_url) => report.images.push(data_url),
                Settled::Skipped => report.skipped.push(file.name.clone()),
                Settled::Failed(e) => report.failures.push(e),
            }
        }
        report
    }
}

/// Title for an uploaded file: its name without the extension.
pub fn title_from_file_name(name: &str) -> String {
    EXTENSION.replace(name, "").into_owned()
}

fn new_upload_photo(
    name: &str,
    data_url: ImageRef,
    now: DateTime<Local>,
    ids: &mut HashSet<String>,
) -> Photo {
    let stamp = now
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let base = format!("{}-{}", stamp, name);
    let mut id = base.clone();
    let mut n = 2;
    while !ids.insert(id.clone()) {
        id = format!("{}-{}", base, n);
        n += 1;
    }

    let mut photo = Photo::new(id, data_url, title_from_file_name(name));
    photo.date = Some(now.format("%Y-%m-%d").to_string());
    photo.location = Some(UPLOAD_DEFAULT_LOCATION.to_string());
    photo
}

/// Opens the native multi-select picker restricted to image files.
pub async fn pick_image_files() -> Vec<SelectedFile> {
    let Some(handles) = AsyncFileDialog::new()
        .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS[..])
        .pick_files()
        .await
    else {
        debug!("File picker dismissed");
        return Vec::new();
    };

    handles
        .iter()
        .map(|handle| SelectedFile::from_path(handle.path().to_path_buf()))
        .collect()
}
