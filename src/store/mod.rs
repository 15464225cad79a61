//! Process-wide in-memory tables shared by every repository.
//!
//! All tables sit behind a single lock, so a repository call that holds the
//! write guard is observed either fully applied or not at all.

use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::modules::{file::schema::FileEntity, folder::schema::FolderEntity, user::schema::UserEntity};

pub mod filter;

pub use filter::LocationFilter;

#[derive(Debug, Default)]
pub struct Tables {
    /// Keyed by username.
    pub users: HashMap<String, UserEntity>,
    pub folders: HashMap<String, FolderEntity>,
    pub files: HashMap<String, FileEntity>,
}

impl Tables {
    pub fn clear(&mut self) {
        self.users.clear();
        self.folders.clear();
        self.files.clear();
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Drops every row.
    #[allow(dead_code)]
    pub async fn reset(&self) {
        self.tables.write().await.clear();
    }
}
