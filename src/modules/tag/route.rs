use actix_web::web::{scope, ServiceConfig};

use crate::modules::tag::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/tags").service(list_tags));
}
