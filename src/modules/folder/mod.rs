pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_mem;
pub mod route;
pub mod schema;
pub mod service;
pub mod tree;
