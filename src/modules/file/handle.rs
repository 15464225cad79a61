use actix_multipart::Multipart;
use actix_web::{delete, get, patch, post, web, HttpRequest};
use futures_util::TryStreamExt;

use crate::{
    api::{error, success},
    middlewares::get_owner,
    modules::{
        file::{
            model::{
                CopyFilesResponse, FileBatchModel, ListFilesQuery, MoveFilesResponse, NewFile,
                RenameFileModel,
            },
            repository_mem::FileRepositoryMem,
            schema::FileEntity,
            service::FileService,
        },
        folder::repository_mem::FolderRepositoryMem,
    },
    utils::{ValidatedJson, ValidatedQuery},
};

pub type FileSvc = FileService<FileRepositoryMem, FolderRepositoryMem>;

#[get("")]
pub async fn list_files(
    file_svc: web::Data<FileSvc>,
    query: ValidatedQuery<ListFilesQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FileEntity>>, error::Error> {
    let owner = get_owner(&req)?;
    let files = file_svc.list_files(&owner, &query.0.into()).await?;
    Ok(success::Success::ok(Some(files)).message("Successfully retrieved files"))
}

/// Multipart upload: a `file` part plus an optional `folder_id` part. Only
/// the metadata is kept; the bytes are counted and dropped.
#[post("")]
pub async fn upload_file(
    file_svc: web::Data<FileSvc>,
    mut payload: Multipart,
    req: HttpRequest,
) -> Result<success::Success<FileEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let max_size = file_svc.config().max_file_size as u64;

    let mut upload: Option<(String, Option<String>, u64)> = None;
    let mut folder_id: Option<String> = None;

    while let Some(mut field) =
        payload.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .ok_or_else(|| error::Error::bad_request("Missing filename"))?
                    .to_string();
                let mime_type = field.content_type().map(|m| m.to_string());

                let mut size = 0u64;
                while let Some(chunk) =
                    field.try_next().await.map_err(|_| error::Error::InternalServer)?
                {
                    size += chunk.len() as u64;
                    if size > max_size {
                        return Err(error::Error::bad_request(format!(
                            "File size exceeds maximum allowed size of {} bytes",
                            max_size
                        )));
                    }
                }
                upload = Some((filename, mime_type, size));
            }
            "folder_id" => {
                let mut bytes = Vec::new();
                while let Some(chunk) =
                    field.try_next().await.map_err(|_| error::Error::InternalServer)?
                {
                    bytes.extend_from_slice(&chunk);
                }
                let value = String::from_utf8(bytes)
                    .map_err(|_| error::Error::bad_request("folder_id must be valid UTF-8"))?;
                folder_id = Some(value).filter(|v| !v.trim().is_empty());
            }
            _ => {
                while field.try_next().await.map_err(|_| error::Error::InternalServer)?.is_some() {}
            }
        }
    }

    let (name, mime_type, size) =
        upload.ok_or_else(|| error::Error::bad_request("No file provided"))?;
    let file = file_svc.create_file(&owner, NewFile { name, size, folder_id, mime_type }).await?;

    Ok(success::Success::created(Some(file)).message("File uploaded successfully"))
}

#[post("/move")]
pub async fn move_files(
    file_svc: web::Data<FileSvc>,
    body: ValidatedJson<FileBatchModel>,
    req: HttpRequest,
) -> Result<success::Success<MoveFilesResponse>, error::Error> {
    let owner = get_owner(&req)?;
    let body = body.0;
    let outcome =
        file_svc.move_files(&owner, &body.file_ids, body.target_folder_id.as_deref()).await?;
    Ok(success::Success::ok(Some(outcome.into())).message("Files moved"))
}

#[post("/copy")]
pub async fn copy_files(
    file_svc: web::Data<FileSvc>,
    body: ValidatedJson<FileBatchModel>,
    req: HttpRequest,
) -> Result<success::Success<CopyFilesResponse>, error::Error> {
    let owner = get_owner(&req)?;
    let body = body.0;
    let outcome =
        file_svc.copy_files(&owner, &body.file_ids, body.target_folder_id.as_deref()).await?;
    Ok(success::Success::ok(Some(outcome.into())).message("Files copied"))
}

#[get("/{file_id}")]
pub async fn get_file(
    file_svc: web::Data<FileSvc>,
    file_id: web::Path<String>,
    req: HttpRequest,
) -> Result<success::Success<FileEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let file = file_svc.get_file(&owner, &file_id).await?;
    Ok(success::Success::ok(Some(file)))
}

#[patch("/{file_id}")]
pub async fn rename_file(
    file_svc: web::Data<FileSvc>,
    file_id: web::Path<String>,
    body: ValidatedJson<RenameFileModel>,
    req: HttpRequest,
) -> Result<success::Success<FileEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let file = file_svc.rename_file(&owner, &file_id, &body.0.name).await?;
    Ok(success::Success::ok(Some(file)).message("File renamed successfully"))
}

#[delete("/{file_id}")]
pub async fn delete_file(
    file_svc: web::Data<FileSvc>,
    file_id: web::Path<String>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let owner = get_owner(&req)?;
    file_svc.delete_file(&owner, &file_id).await?;
    Ok(success::Success::no_content())
}
