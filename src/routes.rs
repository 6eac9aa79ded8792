/// Route definitions
///
/// Shared between `main` and the integration tests so both exercise the
/// same route table.
use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/comments")
            .route("", web::get().to(handlers::list_comments))
            .route("", web::post().to(handlers::create_comment))
            .route("/{id}", web::get().to(handlers::get_comment))
            .route("/{id}", web::put().to(handlers::update_comment))
            .route("/{id}", web::delete().to(handlers::delete_comment)),
    );
}
