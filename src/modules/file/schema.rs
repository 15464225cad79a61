use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Documents,
    Images,
    Videos,
    Audio,
    Other,
}

impl FileCategory {
    /// Classifies by the lower-cased extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" => FileCategory::Documents,
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" => FileCategory::Images,
            "mp4" | "webm" | "avi" | "mov" | "mkv" => FileCategory::Videos,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" => FileCategory::Audio,
            _ => FileCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Documents => "documents",
            FileCategory::Images => "images",
            FileCategory::Videos => "videos",
            FileCategory::Audio => "audio",
            FileCategory::Other => "other",
        }
    }
}

/// Lower-cased text after the last dot, empty when the name has none.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).unwrap_or_default()
}

/// File metadata row. Content bytes are never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub category: FileCategory,
    pub mime_type: String,
    pub size: u64,
    pub folder_id: Option<String>,
    pub owner: String,
    pub tags: BTreeSet<String>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
