use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::folder::{
    model::{FolderListFilter, FolderSummaryResponse, InsertFolder, TagUpdate},
    repository::FolderRepository,
    schema::FolderEntity,
};

#[derive(Clone)]
pub struct FolderService<R>
where
    R: FolderRepository + Send + Sync,
{
    folder_repo: Arc<R>,
}

impl<R> FolderService<R>
where
    R: FolderRepository + Send + Sync,
{
    pub fn with_dependencies(folder_repo: Arc<R>) -> Self {
        info!("FolderService initialized with dependencies");
        FolderService { folder_repo }
    }

    /// Loads a folder and checks that `owner` may touch it.
    async fn find_owned(&self, owner: &str, id: &str) -> Result<FolderEntity, error::SystemError> {
        let folder = self
            .folder_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Folder not found"))?;

        if folder.owner != owner {
            return Err(error::SystemError::forbidden("Not authorized to access this folder"));
        }
        Ok(folder)
    }

    pub async fn create_folder(
        &self,
        owner: &str,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<FolderEntity, error::SystemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(error::SystemError::bad_request("Folder name is required"));
        }
        if name.contains('/') {
            return Err(error::SystemError::bad_request("Folder name cannot contain '/'"));
        }

        let parent_id = parent_id.filter(|id| !id.is_empty());
        let path = match parent_id {
            Some(parent_id) => {
                let parent = self.folder_repo.find_by_id(parent_id).await?.ok_or_else(|| {
                    error::SystemError::not_found("Parent folder not found")
                })?;
                if parent.owner != owner {
                    return Err(error::SystemError::forbidden(
                        "Not authorized to access parent folder",
                    ));
                }
                format!("{}/{}", parent.path, name)
            }
            None => format!("/{name}"),
        };

        let folder = self
            .folder_repo
            .create(&InsertFolder {
                name: name.to_string(),
                path,
                parent_id: parent_id.map(str::to_string),
                owner: owner.to_string(),
            })
            .await?;

        info!("Folder {} created at {} for {}", folder.id, folder.path, owner);
        Ok(folder)
    }

    pub async fn get_folder(
        &self,
        owner: &str,
        id: &str,
    ) -> Result<FolderEntity, error::SystemError> {
        self.find_owned(owner, id).await
    }

    pub async fn list_folders(
        &self,
        owner: &str,
        filter: &FolderListFilter,
    ) -> Result<Vec<FolderEntity>, error::SystemError> {
        self.folder_repo.find_by_owner(owner, filter).await
    }

    pub async fn add_tags(
        &self,
        owner: &str,
        id: &str,
        tags: Vec<String>,
    ) -> Result<FolderEntity, error::SystemError> {
        self.find_owned(owner, id).await?;
        let tags = tags.into_iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        self.folder_repo.update_tags(id, TagUpdate::Add(tags.collect())).await
    }

    pub async fn remove_tag(
        &self,
        owner: &str,
        id: &str,
        tag: &str,
    ) -> Result<FolderEntity, error::SystemError> {
        self.find_owned(owner, id).await?;
        self.folder_repo.update_tags(id, TagUpdate::Remove(tag.to_string())).await
    }

    pub async fn folder_summary(
        &self,
        owner: &str,
        id: &str,
    ) -> Result<FolderSummaryResponse, error::SystemError> {
        let folder = self.find_owned(owner, id).await?;
        let stats = self.folder_repo.stats(owner, id).await?;

        Ok(FolderSummaryResponse {
            folder_id: folder.id,
            folder_name: folder.name,
            folder_path: folder.path,
            total_files: stats.total_files,
            total_size: stats.total_size,
            subfolder_count: stats.subfolder_count,
            last_modified: folder.updated_at,
        })
    }
}
