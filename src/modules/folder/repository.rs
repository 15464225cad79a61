use crate::{
    api::error,
    modules::folder::{
        model::{FolderListFilter, FolderStats, InsertFolder, TagUpdate},
        schema::FolderEntity,
    },
};

#[async_trait::async_trait]
pub trait FolderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FolderEntity>, error::SystemError>;

    /// Folders of `owner` matching `filter`, newest first.
    async fn find_by_owner(
        &self,
        owner: &str,
        filter: &FolderListFilter,
    ) -> Result<Vec<FolderEntity>, error::SystemError>;

    /// Fails with `Conflict` when `(owner, path)` is already taken.
    async fn create(&self, folder: &InsertFolder) -> Result<FolderEntity, error::SystemError>;

    async fn update_tags(
        &self,
        id: &str,
        update: TagUpdate,
    ) -> Result<FolderEntity, error::SystemError>;

    /// File and subfolder totals over the folder's closure, scoped to `owner`.
    async fn stats(&self, owner: &str, id: &str) -> Result<FolderStats, error::SystemError>;
}
