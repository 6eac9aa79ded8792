/// HTTP handlers for comment endpoints
///
/// Handlers are thin: extractors resolve the identity and parse the body,
/// `CommentService` applies the policy, and errors map to status codes via
/// `AppError`'s `ResponseError` impl.
pub mod comments;

pub use comments::{create_comment, delete_comment, get_comment, list_comments, update_comment};

use actix_web::HttpResponse;

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "comment-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
