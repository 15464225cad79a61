use actix_web::get;

use crate::{
    api::{error, success},
    modules::tag::model::{available_tags, TagInfo},
};

#[get("")]
pub async fn list_tags() -> Result<success::Success<Vec<TagInfo>>, error::Error> {
    Ok(success::Success::ok(Some(available_tags())))
}
