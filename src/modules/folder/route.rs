use actix_web::web::{scope, ServiceConfig};

use crate::modules::folder::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/folders")
            .service(list_folders)
            .service(create_folder)
            .service(folder_summary)
            .service(get_folder)
            .service(add_tags)
            .service(remove_tag),
    );
}
