use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct RegisterModel {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct LoginModel {
    #[validate(length(min = 1, message = "Username and password required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password required"))]
    pub password: String,
}

pub struct InsertUser {
    pub username: String,
    pub hash_password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
}
