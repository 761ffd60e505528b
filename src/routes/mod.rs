pub mod chat;
pub mod health_checks;

pub use health_checks::*;

use actix_web::web;

/// Mounts every endpoint. Shared by the server and the in-process tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health_check").service(health_check))
        .service(
            web::scope("/api/chat")
                .service(chat::add::item)
                .service(chat::get::list),
        );
}
