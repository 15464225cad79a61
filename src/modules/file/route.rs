use actix_web::web::{scope, ServiceConfig};

use crate::modules::file::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/files")
            .service(list_files)
            .service(upload_file)
            .service(move_files)
            .service(copy_files)
            .service(get_file)
            .service(rename_file)
            .service(delete_file),
    );
}
