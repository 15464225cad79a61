use crate::{
    api::error,
    modules::file::{
        model::{BatchOutcome, FileListFilter, InsertFile, RenameFile},
        schema::FileEntity,
    },
};

#[async_trait::async_trait]
pub trait FileRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<FileEntity>, error::SystemError>;

    /// Files of `owner` matching `filter`, most recently uploaded first.
    async fn find_by_owner(
        &self,
        owner: &str,
        filter: &FileListFilter,
    ) -> Result<Vec<FileEntity>, error::SystemError>;

    async fn create(&self, file: &InsertFile) -> Result<FileEntity, error::SystemError>;

    async fn rename(&self, id: &str, rename: &RenameFile) -> Result<FileEntity, error::SystemError>;

    /// Returns false when no row was removed.
    async fn delete(&self, id: &str) -> Result<bool, error::SystemError>;

    /// Re-homes every listed file of `owner`. Ids that are missing or owned by
    /// someone else are reported in the outcome and left untouched.
    async fn move_many(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError>;

    /// Like `move_many`, but inserts fresh copies and leaves the sources as they are.
    async fn copy_many(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError>;
}
