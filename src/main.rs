use actix_cors::Cors;
use actix_web::{
    self,
    middleware::{from_fn, Logger},
    web, App, HttpServer,
};
use std::sync::{Arc, LazyLock};

use crate::{
    api::success,
    configs::seed_demo_data,
    middlewares::authentication,
    modules::{
        file::{handle::FileSvc, model::UploadConfig, repository_mem::FileRepositoryMem},
        folder::{handle::FolderSvc, repository_mem::FolderRepositoryMem},
        user::{repository_mem::UserRepositoryMem, service::UserService},
    },
    store::MemoryStore,
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod store;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

/// Services shared by every worker. All of them read and write the same store.
#[derive(Clone)]
pub struct AppServices {
    pub user: UserService,
    pub folder: FolderSvc,
    pub file: FileSvc,
}

impl AppServices {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        let user_repo = UserRepositoryMem::new(store.clone());
        let folder_repo = Arc::new(FolderRepositoryMem::new(store.clone()));
        let file_repo = Arc::new(FileRepositoryMem::new(store));

        let user = UserService::with_dependencies(
            Arc::new(user_repo),
            ENV.jwt_secret.as_bytes(),
            ENV.access_token_expiration,
        );
        let folder = FolderSvc::with_dependencies(folder_repo.clone());
        let file = FileSvc::new(
            file_repo,
            folder_repo,
            UploadConfig { max_file_size: ENV.max_upload_size },
        );

        AppServices { user, folder, file }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.user.clone()))
            .app_data(web::Data::new(self.folder.clone()))
            .app_data(web::Data::new(self.file.clone()));
    }
}

#[actix_web::get("/health")]
async fn health_check() -> success::Success<serde_json::Value> {
    success::Success::ok(Some(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "File Manager",
    })))
}

pub fn api_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(modules::user::route::public_api_configure)
            .configure(modules::tag::route::configure)
            .service(
                web::scope("")
                    .wrap(from_fn(authentication))
                    .configure(modules::folder::route::configure)
                    .configure(modules::file::route::configure),
            ),
    );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env = &*ENV;

    let store = Arc::new(MemoryStore::new());
    if env.seed_demo_data {
        seed_demo_data(&store)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to seed demo data: {e}")))?;
    }

    let services = AppServices::new(store);

    log::info!("Starting server at http://{}:{}", env.ip, env.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&env.frontend_url)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .configure(|cfg| services.configure(cfg))
            .configure(api_configure)
    })
    .bind((env.ip.as_str(), env.port))?
    .workers(2)
    .run()
    .await
}
