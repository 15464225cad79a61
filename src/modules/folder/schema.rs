use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntity {
    pub id: String,
    pub name: String,
    /// Slash separated ancestor names, e.g. `/Projects/2025`. Unique per owner.
    pub path: String,
    pub parent_id: Option<String>,
    pub owner: String,
    pub tags: BTreeSet<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
