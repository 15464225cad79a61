use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::{
        file::schema::{extension_of, FileCategory, FileEntity},
        folder::schema::FolderEntity,
        user::schema::UserEntity,
    },
    store::MemoryStore,
    utils::hash_password,
};

pub const DEMO_USER: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

const DEMO_FOLDERS: [(&str, &str); 3] = [("1", "Documents"), ("2", "Images"), ("3", "Projects")];

const DEMO_FILES: [(&str, &str, u64, &str, &str); 5] = [
    ("1", "Invoice_2025_Q1.pdf", 251_904, "1", "2025-01-15T10:30:00Z"),
    ("2", "Project_Proposal.pdf", 1_258_291, "1", "2025-02-01T14:20:00Z"),
    ("3", "Contract_Template.pdf", 184_320, "1", "2025-02-10T09:15:00Z"),
    ("4", "logo.png", 45_678, "2", "2025-01-20T08:00:00Z"),
    ("5", "banner.jpg", 123_456, "2", "2025-01-22T10:30:00Z"),
];

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, error::SystemError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| error::SystemError::InternalError(Box::new(e)))
}

/// Replaces the store contents with the demo account and its sample rows.
pub async fn seed_demo_data(store: &MemoryStore) -> Result<(), error::SystemError> {
    let hash_password = hash_password(DEMO_PASSWORD)?;
    let now = Utc::now();

    let mut tables = store.write().await;
    tables.clear();

    tables.users.insert(
        DEMO_USER.to_string(),
        UserEntity {
            id: "1".to_string(),
            username: DEMO_USER.to_string(),
            hash_password,
            created_at: now,
        },
    );

    for (id, name) in DEMO_FOLDERS {
        tables.folders.insert(
            id.to_string(),
            FolderEntity {
                id: id.to_string(),
                name: name.to_string(),
                path: format!("/{name}"),
                parent_id: None,
                owner: DEMO_USER.to_string(),
                tags: BTreeSet::new(),
                created_at: now,
                updated_at: now,
            },
        );
    }

    for (id, name, size, folder_id, uploaded_at) in DEMO_FILES {
        let uploaded_at = parse_timestamp(uploaded_at)?;
        let file_type = extension_of(name);
        tables.files.insert(
            id.to_string(),
            FileEntity {
                id: id.to_string(),
                name: name.to_string(),
                category: FileCategory::from_extension(&file_type),
                mime_type: mime_guess::from_path(name).first_or_octet_stream().to_string(),
                file_type,
                size,
                folder_id: Some(folder_id.to_string()),
                owner: DEMO_USER.to_string(),
                tags: BTreeSet::new(),
                uploaded_at,
                updated_at: uploaded_at,
            },
        );
    }

    log::info!(
        "Seeded demo data: {} folders, {} files for user {}",
        tables.folders.len(),
        tables.files.len(),
        DEMO_USER
    );
    Ok(())
}
