use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    modules::file::schema::{FileCategory, FileEntity},
    store::LocationFilter,
};

/// Metadata of an incoming file, gathered from the upload.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub name: String,
    pub size: u64,
    pub folder_id: Option<String>,
    /// Declared content type, if the client sent one.
    pub mime_type: Option<String>,
}

pub struct InsertFile {
    pub name: String,
    pub file_type: String,
    pub category: FileCategory,
    pub mime_type: String,
    pub size: u64,
    pub folder_id: Option<String>,
    pub owner: String,
}

pub struct RenameFile {
    pub name: String,
    pub file_type: String,
    pub category: FileCategory,
    pub mime_type: String,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { max_file_size: 10 * 1024 * 1024 }
    }
}

#[derive(Deserialize, Validate)]
pub struct ListFilesQuery {
    pub folder_id: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FileListFilter {
    pub folder: LocationFilter,
    pub category: Option<String>,
    /// Lower-cased needle, matched as given. Blank terms are dropped.
    pub search: Option<String>,
}

impl From<ListFilesQuery> for FileListFilter {
    fn from(query: ListFilesQuery) -> Self {
        FileListFilter {
            folder: LocationFilter::from_query(query.folder_id.as_deref()),
            category: query.category.filter(|c| !c.is_empty() && c != "all"),
            search: query
                .search
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_lowercase()),
        }
    }
}

impl FileListFilter {
    pub fn matches(&self, file: &FileEntity) -> bool {
        self.folder.matches(file.folder_id.as_deref())
            && self.category.as_deref().map_or(true, |c| file.category.as_str() == c)
            && self.search.as_deref().map_or(true, |s| file.name.to_lowercase().contains(s))
    }
}

#[derive(Deserialize, Validate)]
pub struct FileBatchModel {
    #[validate(length(min = 1, message = "file_ids must be a non-empty array"))]
    pub file_ids: Vec<String>,
    pub target_folder_id: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct RenameFileModel {
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchErrorKind {
    NotFound,
    Forbidden,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub file_id: String,
    pub kind: BatchErrorKind,
    pub error: String,
}

impl BatchFailure {
    pub fn new(file_id: &str, kind: BatchErrorKind) -> Self {
        let error = match kind {
            BatchErrorKind::NotFound => "File not found",
            BatchErrorKind::Forbidden => "Not authorized",
        };
        BatchFailure { file_id: file_id.to_string(), kind, error: error.to_string() }
    }
}

/// Result of a batch move or copy: every id either succeeded or is listed in `errors`.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub files: Vec<FileEntity>,
    pub errors: Vec<BatchFailure>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoveFilesResponse {
    pub moved_count: usize,
    pub moved_files: Vec<FileEntity>,
    pub errors: Vec<BatchFailure>,
}

impl From<BatchOutcome> for MoveFilesResponse {
    fn from(outcome: BatchOutcome) -> Self {
        MoveFilesResponse {
            moved_count: outcome.files.len(),
            moved_files: outcome.files,
            errors: outcome.errors,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CopyFilesResponse {
    pub copied_count: usize,
    pub copied_files: Vec<FileEntity>,
    pub errors: Vec<BatchFailure>,
}

impl From<BatchOutcome> for CopyFilesResponse {
    fn from(outcome: BatchOutcome) -> Self {
        CopyFilesResponse {
            copied_count: outcome.files.len(),
            copied_files: outcome.files,
            errors: outcome.errors,
        }
    }
}
