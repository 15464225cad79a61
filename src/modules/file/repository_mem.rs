use std::{collections::BTreeSet, sync::Arc};

use crate::{
    api::error,
    modules::file::{
        model::{BatchErrorKind, BatchFailure, BatchOutcome, FileListFilter, InsertFile, RenameFile},
        repository::FileRepository,
        schema::FileEntity,
    },
    store::{MemoryStore, Tables},
    utils::new_id,
};

#[derive(Clone)]
pub struct FileRepositoryMem {
    store: Arc<MemoryStore>,
}

impl FileRepositoryMem {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

fn check_access(tables: &Tables, owner: &str, id: &str) -> Result<(), BatchErrorKind> {
    match tables.files.get(id) {
        None => Err(BatchErrorKind::NotFound),
        Some(file) if file.owner != owner => Err(BatchErrorKind::Forbidden),
        Some(_) => Ok(()),
    }
}

#[async_trait::async_trait]
impl FileRepository for FileRepositoryMem {
    async fn find_by_id(&self, id: &str) -> Result<Option<FileEntity>, error::SystemError> {
        let tables = self.store.read().await;
        Ok(tables.files.get(id).cloned())
    }

    async fn find_by_owner(
        &self,
        owner: &str,
        filter: &FileListFilter,
    ) -> Result<Vec<FileEntity>, error::SystemError> {
        let tables = self.store.read().await;
        let mut files: Vec<FileEntity> = tables
            .files
            .values()
            .filter(|f| f.owner == owner && filter.matches(f))
            .cloned()
            .collect();

        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at).then_with(|| b.id.cmp(&a.id)));
        Ok(files)
    }

    async fn create(&self, file: &InsertFile) -> Result<FileEntity, error::SystemError> {
        let now = chrono::Utc::now();
        let entity = FileEntity {
            id: new_id(),
            name: file.name.clone(),
            file_type: file.file_type.clone(),
            category: file.category,
            mime_type: file.mime_type.clone(),
            size: file.size,
            folder_id: file.folder_id.clone(),
            owner: file.owner.clone(),
            tags: BTreeSet::new(),
            uploaded_at: now,
            updated_at: now,
        };

        let mut tables = self.store.write().await;
        tables.files.insert(entity.id.clone(), entity.clone());
        Ok(entity)
    }

    async fn rename(&self, id: &str, rename: &RenameFile) -> Result<FileEntity, error::SystemError> {
        let mut tables = self.store.write().await;
        let file = tables
            .files
            .get_mut(id)
            .ok_or_else(|| error::SystemError::not_found("File not found"))?;

        file.name = rename.name.clone();
        file.file_type = rename.file_type.clone();
        file.category = rename.category;
        file.mime_type = rename.mime_type.clone();
        file.updated_at = chrono::Utc::now();
        Ok(file.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, error::SystemError> {
        let mut tables = self.store.write().await;
        Ok(tables.files.remove(id).is_some())
    }

    async fn move_many(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError> {
        let mut tables = self.store.write().await;
        let mut outcome = BatchOutcome::default();

        for id in ids {
            if let Err(kind) = check_access(&tables, owner, id) {
                outcome.errors.push(BatchFailure::new(id, kind));
                continue;
            }
            if let Some(file) = tables.files.get_mut(id) {
                file.folder_id = target_folder_id.map(str::to_string);
                file.updated_at = chrono::Utc::now();
                outcome.files.push(file.clone());
            }
        }
        Ok(outcome)
    }

    async fn copy_many(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError> {
        let mut tables = self.store.write().await;
        let mut outcome = BatchOutcome::default();

        for id in ids {
            if let Err(kind) = check_access(&tables, owner, id) {
                outcome.errors.push(BatchFailure::new(id, kind));
                continue;
            }
            let Some(source) = tables.files.get(id) else {
                continue;
            };

            let now = chrono::Utc::now();
            let copy = FileEntity {
                id: new_id(),
                name: format!("{} (copy)", source.name),
                folder_id: target_folder_id.map(str::to_string),
                uploaded_at: now,
                updated_at: now,
                ..source.clone()
            };
            tables.files.insert(copy.id.clone(), copy.clone());
            outcome.files.push(copy);
        }
        Ok(outcome)
    }
}
