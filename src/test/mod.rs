use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use crate::{
    api::success::SuccessData,
    api_configure,
    configs::{seed_demo_data, DEMO_PASSWORD, DEMO_USER},
    modules::{
        file::{
            model::{BatchErrorKind, MoveFilesResponse},
            schema::{FileCategory, FileEntity},
        },
        folder::{model::FolderSummaryResponse, schema::FolderEntity},
    },
    store::MemoryStore,
    utils::Claims,
    AppServices, ENV,
};

macro_rules! init_app {
    ($store:expr) => {{
        let services = AppServices::new($store);
        test::init_service(
            App::new().configure(|cfg| services.configure(cfg)).configure(api_configure),
        )
        .await
    }};
}

fn bearer(owner: &str) -> (&'static str, String) {
    let token = Claims::new(owner, 60).encode(ENV.jwt_secret.as_bytes()).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed_demo_data(&store).await.unwrap();
    store
}

#[actix_web::test]
async fn health_and_tags_are_public() {
    let app = init_app!(Arc::new(MemoryStore::new()));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: SuccessData<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap()["status"], "ok");

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let body: SuccessData<Value> = test::call_and_read_body_json(&app, req).await;
    let tags = body.data.unwrap();
    assert_eq!(tags.as_array().unwrap().len(), 5);
    assert_eq!(tags[0]["id"], "work");
}

#[actix_web::test]
async fn store_routes_require_a_valid_token() {
    let app = init_app!(Arc::new(MemoryStore::new()));

    let req = test::TestRequest::get().uri("/api/folders").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/files")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_with_demo_account_and_browse_seed_data() {
    let app = init_app!(seeded_store().await);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": DEMO_USER, "password": DEMO_PASSWORD }))
        .to_request();
    let body: SuccessData<Value> = test::call_and_read_body_json(&app, req).await;
    let token = body.data.unwrap()["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/folders?parent_id=root")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: SuccessData<Vec<FolderEntity>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/files?folder_id=1")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: SuccessData<Vec<FileEntity>> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<_> = body.data.unwrap().into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Contract_Template.pdf", "Project_Proposal.pdf", "Invoice_2025_Q1.pdf"]);

    let req = test::TestRequest::get()
        .uri("/api/files?category=images&search=LOGO")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: SuccessData<Vec<FileEntity>> = test::call_and_read_body_json(&app, req).await;
    let files = body.data.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "logo.png");
}

#[actix_web::test]
async fn all_sentinel_disables_tag_and_category_filters() {
    let app = init_app!(seeded_store().await);
    let auth = bearer(DEMO_USER);

    let req = test::TestRequest::post()
        .uri("/api/folders/1/tags")
        .insert_header(auth.clone())
        .set_json(json!({ "tags": ["finance"] }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/folders?tag=all")
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<Vec<FolderEntity>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/folders?tag=finance")
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<Vec<FolderEntity>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/files?category=all")
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<Vec<FileEntity>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 5);

    let req = test::TestRequest::get()
        .uri("/api/files?search=logo%20")
        .insert_header(auth)
        .to_request();
    let body: SuccessData<Vec<FileEntity>> = test::call_and_read_body_json(&app, req).await;
    assert!(body.data.unwrap().is_empty());
}

#[actix_web::test]
async fn bad_login_is_rejected() {
    let app = init_app!(Arc::new(MemoryStore::new()));

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "ghost", "password": "whatever" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "al", "password": "secret1" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn folder_tree_summary_over_http() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store.clone());
    let auth = bearer("alice");

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "A" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: SuccessData<FolderEntity> = test::read_body_json(res).await;
    let a = body.data.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "B", "parent_id": &a.id }))
        .to_request();
    let body: SuccessData<FolderEntity> = test::call_and_read_body_json(&app, req).await;
    let b = body.data.unwrap();
    assert_eq!(b.path, "/A/B");

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "B", "parent_id": &a.id }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let services = AppServices::new(store);
    for (folder, size) in [(&a.id, 40u64), (&b.id, 2u64)] {
        services
            .file
            .create_file(
                "alice",
                crate::modules::file::model::NewFile {
                    name: "part.txt".into(),
                    size,
                    folder_id: Some(folder.clone()),
                    mime_type: None,
                },
            )
            .await
            .unwrap();
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/folders/summary?folder_id={}", a.id))
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<FolderSummaryResponse> = test::call_and_read_body_json(&app, req).await;
    let summary = body.data.unwrap();
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.total_size, 42);
    assert_eq!(summary.subfolder_count, 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/folders/summary?folder_id={}", a.id))
        .insert_header(bearer("mallory"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn folder_tags_over_http() {
    let app = init_app!(Arc::new(MemoryStore::new()));
    let auth = bearer("alice");

    let req = test::TestRequest::post()
        .uri("/api/folders")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Taxes" }))
        .to_request();
    let body: SuccessData<FolderEntity> = test::call_and_read_body_json(&app, req).await;
    let folder = body.data.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/folders/{}/tags", folder.id))
        .insert_header(auth.clone())
        .set_json(json!({ "tags": ["finance", "finance", "work"] }))
        .to_request();
    let body: SuccessData<FolderEntity> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().tags.len(), 2);

    let req = test::TestRequest::post()
        .uri(&format!("/api/folders/{}/tags", folder.id))
        .insert_header(auth.clone())
        .set_json(json!({ "tags": "finance" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/folders?tag=finance")
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<Vec<FolderEntity>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/folders/{}/tags?tag=finance", folder.id))
        .insert_header(auth.clone())
        .to_request();
    let body: SuccessData<FolderEntity> = test::call_and_read_body_json(&app, req).await;
    let tags: Vec<_> = body.data.unwrap().tags.into_iter().collect();
    assert_eq!(tags, vec!["work".to_string()]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/folders/{}/tags", folder.id))
        .insert_header(auth.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/folders/missing")
        .insert_header(auth)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn upload_then_move_and_delete() {
    let app = init_app!(Arc::new(MemoryStore::new()));
    let alice = bearer("alice");
    let boundary = "file-manager-boundary";
    let payload = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"folder_id\"\r\n\r\n\
         inbox\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notes.md\"\r\n\
         Content-Type: text/markdown\r\n\r\n\
         hello world\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let req = test::TestRequest::post()
        .uri("/api/files")
        .insert_header(alice.clone())
        .insert_header(("Content-Type", format!("multipart/form-data; boundary={boundary}")))
        .set_payload(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: SuccessData<FileEntity> = test::read_body_json(res).await;
    let notes = body.data.unwrap();
    assert_eq!(notes.size, 11);
    assert_eq!(notes.category, FileCategory::Documents);
    assert_eq!(notes.file_type, "md");
    assert_eq!(notes.folder_id.as_deref(), Some("inbox"));

    let req = test::TestRequest::post()
        .uri("/api/files/move")
        .insert_header(alice.clone())
        .set_json(json!({ "file_ids": [&notes.id, "missing"], "target_folder_id": null }))
        .to_request();
    let body: SuccessData<MoveFilesResponse> = test::call_and_read_body_json(&app, req).await;
    let moved = body.data.unwrap();
    assert_eq!(moved.moved_count, 1);
    assert!(moved.moved_files[0].folder_id.is_none());
    assert_eq!(moved.errors.len(), 1);
    assert_eq!(moved.errors[0].kind, BatchErrorKind::NotFound);

    let req = test::TestRequest::post()
        .uri("/api/files/move")
        .insert_header(alice.clone())
        .set_json(json!({ "file_ids": [] }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/files/{}", notes.id))
        .insert_header(bearer("bob"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/files/{}", notes.id))
        .insert_header(alice.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/files/{}", notes.id))
        .insert_header(alice)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
