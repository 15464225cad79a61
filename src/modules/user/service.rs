use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::model::{InsertUser, LoginModel, LoginResponse, RegisterModel};
use crate::modules::user::repository::UserRepository;
use crate::utils::{hash_password, verify_password, Claims};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
    jwt_secret: Arc<[u8]>,
    token_expiration: u64,
}

impl UserService {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        jwt_secret: &[u8],
        token_expiration: u64,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo, jwt_secret: Arc::from(jwt_secret), token_expiration }
    }

    pub async fn register(&self, user: RegisterModel) -> Result<String, error::SystemError> {
        let username = user.username.trim().to_string();
        if username.chars().count() < 3 {
            return Err(error::SystemError::bad_request("Username must be at least 3 characters"));
        }

        let hash_password = hash_password(&user.password)?;
        let new_user = InsertUser { username, hash_password };

        let entity = self.repo.create(&new_user).await?;
        info!("User {} registered", entity.username);
        Ok(entity.username)
    }

    pub async fn login(&self, user: LoginModel) -> Result<LoginResponse, error::SystemError> {
        let user_entity = self
            .repo
            .find_by_username(user.username.trim())
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Invalid credentials"))?;

        let valid = verify_password(&user_entity.hash_password, &user.password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Invalid credentials"));
        }

        let access_token =
            Claims::new(&user_entity.username, self.token_expiration).encode(&self.jwt_secret)?;

        Ok(LoginResponse { access_token, username: user_entity.username })
    }
}
