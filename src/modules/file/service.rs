use log::{info, warn};
use std::sync::Arc;

use crate::api::error;
use crate::modules::{
    file::{
        model::{BatchOutcome, FileListFilter, InsertFile, NewFile, RenameFile, UploadConfig},
        repository::FileRepository,
        schema::{extension_of, FileCategory, FileEntity},
    },
    folder::repository::FolderRepository,
};

#[derive(Clone)]
pub struct FileService<R, F>
where
    R: FileRepository + Send + Sync,
    F: FolderRepository + Send + Sync,
{
    file_repo: Arc<R>,
    folder_repo: Arc<F>,
    config: UploadConfig,
}

/// Type, category and MIME type derived from a file name.
fn classify(name: &str, declared_mime: Option<String>) -> (String, FileCategory, String) {
    let ext = extension_of(name);
    let category = FileCategory::from_extension(&ext);
    let mime = declared_mime
        .filter(|m| !m.is_empty() && m != "application/octet-stream")
        .unwrap_or_else(|| mime_guess::from_path(name).first_or_octet_stream().to_string());
    (ext, category, mime)
}

impl<R, F> FileService<R, F>
where
    R: FileRepository + Send + Sync,
    F: FolderRepository + Send + Sync,
{
    pub fn new(file_repo: Arc<R>, folder_repo: Arc<F>, config: UploadConfig) -> Self {
        info!("FileService initialized with dependencies");
        Self { file_repo, folder_repo, config }
    }

    #[allow(dead_code)]
    pub fn with_defaults(file_repo: Arc<R>, folder_repo: Arc<F>) -> Self {
        Self::new(file_repo, folder_repo, UploadConfig::default())
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    async fn find_owned(&self, owner: &str, id: &str) -> Result<FileEntity, error::SystemError> {
        let file = self
            .file_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("File not found"))?;

        if file.owner != owner {
            return Err(error::SystemError::forbidden("Not authorized to access this file"));
        }
        Ok(file)
    }

    /// Normalises a target folder reference. A folder id that does not exist
    /// is accepted as is; one that belongs to another owner is not.
    async fn resolve_target<'a>(
        &self,
        owner: &str,
        folder_id: Option<&'a str>,
    ) -> Result<Option<&'a str>, error::SystemError> {
        let Some(folder_id) = folder_id.map(str::trim).filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        if let Some(folder) = self.folder_repo.find_by_id(folder_id).await? {
            if folder.owner != owner {
                return Err(error::SystemError::forbidden("Not authorized to access target folder"));
            }
        }
        Ok(Some(folder_id))
    }

    pub async fn create_file(
        &self,
        owner: &str,
        file: NewFile,
    ) -> Result<FileEntity, error::SystemError> {
        let name = file.name.trim();
        if name.is_empty() {
            return Err(error::SystemError::bad_request("No file provided"));
        }
        if file.size > self.config.max_file_size as u64 {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        let folder_id = self.resolve_target(owner, file.folder_id.as_deref()).await?;
        let (file_type, category, mime_type) = classify(name, file.mime_type);

        let entity = self
            .file_repo
            .create(&InsertFile {
                name: name.to_string(),
                file_type,
                category,
                mime_type,
                size: file.size,
                folder_id: folder_id.map(str::to_string),
                owner: owner.to_string(),
            })
            .await?;

        info!("File {} ({} bytes) created for {}", entity.id, entity.size, owner);
        Ok(entity)
    }

    pub async fn get_file(&self, owner: &str, id: &str) -> Result<FileEntity, error::SystemError> {
        self.find_owned(owner, id).await
    }

    pub async fn list_files(
        &self,
        owner: &str,
        filter: &FileListFilter,
    ) -> Result<Vec<FileEntity>, error::SystemError> {
        self.file_repo.find_by_owner(owner, filter).await
    }

    pub async fn rename_file(
        &self,
        owner: &str,
        id: &str,
        name: &str,
    ) -> Result<FileEntity, error::SystemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(error::SystemError::bad_request("File name is required"));
        }
        self.find_owned(owner, id).await?;

        let (file_type, category, mime_type) = classify(name, None);
        let rename = RenameFile { name: name.to_string(), file_type, category, mime_type };
        self.file_repo.rename(id, &rename).await
    }

    pub async fn delete_file(&self, owner: &str, id: &str) -> Result<(), error::SystemError> {
        self.find_owned(owner, id).await?;

        if !self.file_repo.delete(id).await? {
            return Err(error::SystemError::not_found("File not found"));
        }
        info!("File {} deleted by {}", id, owner);
        Ok(())
    }

    pub async fn move_files(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError> {
        let target = self.resolve_target(owner, target_folder_id).await?;
        let outcome = self.file_repo.move_many(owner, ids, target).await?;

        info!("{} moved {} file(s) to {:?}", owner, outcome.files.len(), target);
        for failure in &outcome.errors {
            warn!("Move of {} failed: {}", failure.file_id, failure.error);
        }
        Ok(outcome)
    }

    pub async fn copy_files(
        &self,
        owner: &str,
        ids: &[String],
        target_folder_id: Option<&str>,
    ) -> Result<BatchOutcome, error::SystemError> {
        let target = self.resolve_target(owner, target_folder_id).await?;
        let outcome = self.file_repo.copy_many(owner, ids, target).await?;

        info!("{} copied {} file(s) to {:?}", owner, outcome.files.len(), target);
        for failure in &outcome.errors {
            warn!("Copy of {} failed: {}", failure.file_id, failure.error);
        }
        Ok(outcome)
    }
}
