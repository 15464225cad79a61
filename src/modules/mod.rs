pub mod file;
pub mod folder;
pub mod tag;

pub mod user {
    pub mod handle;
    pub mod model;
    pub mod repository;
    pub mod repository_mem;
    pub mod route;
    pub mod schema;
    pub mod service;
}
