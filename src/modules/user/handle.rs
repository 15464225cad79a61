use actix_web::{post, web};

use crate::api::{error, success};
use crate::modules::user::{model, service::UserService};
use crate::utils::ValidatedJson;

#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::RegisterModel>,
) -> Result<success::Success<model::RegisterResponse>, error::Error> {
    let username = user_service.register(user_data.0).await?;
    Ok(success::Success::created(Some(model::RegisterResponse { username }))
        .message("User registered successfully"))
}

#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::LoginModel>,
) -> Result<success::Success<model::LoginResponse>, error::Error> {
    let response = user_service.login(user_data.0).await?;
    Ok(success::Success::ok(Some(response)).message("Login successful"))
}
