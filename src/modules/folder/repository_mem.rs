use std::{collections::BTreeSet, sync::Arc};

use crate::{
    api::error,
    modules::folder::{
        model::{FolderListFilter, FolderStats, InsertFolder, TagUpdate},
        repository::FolderRepository,
        schema::FolderEntity,
        tree::folder_closure,
    },
    store::MemoryStore,
    utils::new_id,
};

#[derive(Clone)]
pub struct FolderRepositoryMem {
    store: Arc<MemoryStore>,
}

impl FolderRepositoryMem {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl FolderRepository for FolderRepositoryMem {
    async fn find_by_id(&self, id: &str) -> Result<Option<FolderEntity>, error::SystemError> {
        let tables = self.store.read().await;
        Ok(tables.folders.get(id).cloned())
    }

    async fn find_by_owner(
        &self,
        owner: &str,
        filter: &FolderListFilter,
    ) -> Result<Vec<FolderEntity>, error::SystemError> {
        let tables = self.store.read().await;
        let mut folders: Vec<FolderEntity> = tables
            .folders
            .values()
            .filter(|f| f.owner == owner)
            .filter(|f| filter.parent.matches(f.parent_id.as_deref()))
            .filter(|f| filter.tag.as_ref().map_or(true, |tag| f.tags.contains(tag)))
            .cloned()
            .collect();

        folders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(folders)
    }

    async fn create(&self, folder: &InsertFolder) -> Result<FolderEntity, error::SystemError> {
        let mut tables = self.store.write().await;
        let taken =
            tables.folders.values().any(|f| f.owner == folder.owner && f.path == folder.path);
        if taken {
            return Err(error::SystemError::conflict(
                "Folder with this name already exists in this location",
            ));
        }

        let now = chrono::Utc::now();
        let entity = FolderEntity {
            id: new_id(),
            name: folder.name.clone(),
            path: folder.path.clone(),
            parent_id: folder.parent_id.clone(),
            owner: folder.owner.clone(),
            tags: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        };
        tables.folders.insert(entity.id.clone(), entity.clone());
        Ok(entity)
    }

    async fn update_tags(
        &self,
        id: &str,
        update: TagUpdate,
    ) -> Result<FolderEntity, error::SystemError> {
        let mut tables = self.store.write().await;
        let folder = tables
            .folders
            .get_mut(id)
            .ok_or_else(|| error::SystemError::not_found("Folder not found"))?;

        match update {
            TagUpdate::Add(tags) => folder.tags.extend(tags),
            TagUpdate::Remove(tag) => {
                folder.tags.remove(&tag);
            }
        }
        folder.updated_at = chrono::Utc::now();
        Ok(folder.clone())
    }

    async fn stats(&self, owner: &str, id: &str) -> Result<FolderStats, error::SystemError> {
        let tables = self.store.read().await;
        let closure = folder_closure(&tables.folders, owner, id);

        let (total_files, total_size) = tables
            .files
            .values()
            .filter(|f| f.owner == owner)
            .filter(|f| f.folder_id.as_ref().is_some_and(|fid| closure.contains(fid)))
            .fold((0usize, 0u64), |(count, size), f| (count + 1, size + f.size));

        Ok(FolderStats { total_files, total_size, subfolder_count: closure.len() - 1 })
    }
}
