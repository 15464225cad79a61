use crate::{
    api::error,
    modules::user::{model::InsertUser, schema::UserEntity},
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;

    /// Fails with `Conflict` when the username is taken.
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;
}
