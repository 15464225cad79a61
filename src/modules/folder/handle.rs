use actix_web::{delete, get, post, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_owner,
    modules::folder::{
        model::{
            AddTagsModel, CreateFolderModel, FolderSummaryResponse, ListFoldersQuery,
            SummaryQuery, TagQuery,
        },
        repository_mem::FolderRepositoryMem,
        schema::FolderEntity,
        service::FolderService,
    },
    utils::{ValidatedJson, ValidatedQuery},
};

pub type FolderSvc = FolderService<FolderRepositoryMem>;

#[get("")]
pub async fn list_folders(
    folder_svc: web::Data<FolderSvc>,
    query: ValidatedQuery<ListFoldersQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FolderEntity>>, error::Error> {
    let owner = get_owner(&req)?;
    let folders = folder_svc.list_folders(&owner, &query.0.into()).await?;
    Ok(success::Success::ok(Some(folders)).message("Successfully retrieved folders"))
}

#[post("")]
pub async fn create_folder(
    folder_svc: web::Data<FolderSvc>,
    body: ValidatedJson<CreateFolderModel>,
    req: HttpRequest,
) -> Result<success::Success<FolderEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let body = body.0;
    let folder = folder_svc.create_folder(&owner, &body.name, body.parent_id.as_deref()).await?;
    Ok(success::Success::created(Some(folder)).message("Folder created successfully"))
}

#[get("/summary")]
pub async fn folder_summary(
    folder_svc: web::Data<FolderSvc>,
    query: ValidatedQuery<SummaryQuery>,
    req: HttpRequest,
) -> Result<success::Success<FolderSummaryResponse>, error::Error> {
    let owner = get_owner(&req)?;
    let summary = folder_svc.folder_summary(&owner, &query.0.folder_id).await?;
    Ok(success::Success::ok(Some(summary)).message("Successfully retrieved folder summary"))
}

#[get("/{folder_id}")]
pub async fn get_folder(
    folder_svc: web::Data<FolderSvc>,
    folder_id: web::Path<String>,
    req: HttpRequest,
) -> Result<success::Success<FolderEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let folder = folder_svc.get_folder(&owner, &folder_id).await?;
    Ok(success::Success::ok(Some(folder)))
}

#[post("/{folder_id}/tags")]
pub async fn add_tags(
    folder_svc: web::Data<FolderSvc>,
    folder_id: web::Path<String>,
    body: ValidatedJson<AddTagsModel>,
    req: HttpRequest,
) -> Result<success::Success<FolderEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let folder = folder_svc.add_tags(&owner, &folder_id, body.0.tags).await?;
    Ok(success::Success::ok(Some(folder)).message("Tags added successfully"))
}

#[delete("/{folder_id}/tags")]
pub async fn remove_tag(
    folder_svc: web::Data<FolderSvc>,
    folder_id: web::Path<String>,
    query: ValidatedQuery<TagQuery>,
    req: HttpRequest,
) -> Result<success::Success<FolderEntity>, error::Error> {
    let owner = get_owner(&req)?;
    let folder = folder_svc.remove_tag(&owner, &folder_id, &query.0.tag).await?;
    Ok(success::Success::ok(Some(folder)).message("Tag removed successfully"))
}
