use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Tags offered to clients. Folders may still carry ids outside this list.
pub const TAG_CATALOG: [(&str, &str, &str); 5] = [
    ("work", "Work", "#3b82f6"),
    ("personal", "Personal", "#10b981"),
    ("important", "Important", "#ef4444"),
    ("archive", "Archive", "#6b7280"),
    ("finance", "Finance", "#f59e0b"),
];

pub fn available_tags() -> Vec<TagInfo> {
    TAG_CATALOG
        .iter()
        .map(|(id, name, color)| TagInfo {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}
