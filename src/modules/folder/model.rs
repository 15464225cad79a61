use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::LocationFilter;

#[derive(Deserialize, Validate)]
pub struct CreateFolderModel {
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
    pub parent_id: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct ListFoldersQuery {
    pub parent_id: Option<String>,
    pub tag: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct SummaryQuery {
    #[validate(length(min = 1, message = "folder_id parameter is required"))]
    pub folder_id: String,
}

#[derive(Deserialize, Validate)]
pub struct AddTagsModel {
    pub tags: Vec<String>,
}

#[derive(Deserialize, Validate)]
pub struct TagQuery {
    #[validate(length(min = 1, message = "Tag parameter required"))]
    pub tag: String,
}

pub struct InsertFolder {
    pub name: String,
    pub path: String,
    pub parent_id: Option<String>,
    pub owner: String,
}

#[derive(Debug, Clone, Default)]
pub struct FolderListFilter {
    pub parent: LocationFilter,
    pub tag: Option<String>,
}

impl From<ListFoldersQuery> for FolderListFilter {
    fn from(query: ListFoldersQuery) -> Self {
        FolderListFilter {
            parent: LocationFilter::from_query(query.parent_id.as_deref()),
            tag: query.tag.filter(|t| !t.is_empty() && t != "all"),
        }
    }
}

pub enum TagUpdate {
    Add(Vec<String>),
    Remove(String),
}

/// Aggregates over a folder and all of its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderStats {
    pub total_files: usize,
    pub total_size: u64,
    pub subfolder_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FolderSummaryResponse {
    pub folder_id: String,
    pub folder_name: String,
    pub folder_path: String,
    pub total_files: usize,
    pub total_size: u64,
    pub subfolder_count: usize,
    pub last_modified: chrono::DateTime<chrono::Utc>,
}
