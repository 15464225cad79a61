use std::sync::Arc;

use crate::{
    api::error,
    modules::user::{model::InsertUser, repository::UserRepository, schema::UserEntity},
    store::MemoryStore,
    utils::new_id,
};

#[derive(Clone)]
pub struct UserRepositoryMem {
    store: Arc<MemoryStore>,
}

impl UserRepositoryMem {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMem {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        let tables = self.store.read().await;
        Ok(tables.users.get(username).cloned())
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut tables = self.store.write().await;
        if tables.users.contains_key(&user.username) {
            return Err(error::SystemError::conflict("Username already exists"));
        }

        let entity = UserEntity {
            id: new_id(),
            username: user.username.clone(),
            hash_password: user.hash_password.clone(),
            created_at: chrono::Utc::now(),
        };
        tables.users.insert(entity.username.clone(), entity.clone());
        Ok(entity)
    }
}
