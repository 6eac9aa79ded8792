/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::middleware::AuthenticatedUser;
use crate::models::{CreateCommentRequest, ListCommentsQuery, UpdateCommentRequest};
use crate::services::CommentService;

/// List comments, optionally filtered by exact owner
pub async fn list_comments(
    service: web::Data<CommentService>,
    query: web::Query<ListCommentsQuery>,
) -> Result<HttpResponse> {
    let comments = service.list(query.owner.as_deref()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Get a single comment
pub async fn get_comment(
    service: web::Data<CommentService>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let comment = service.get(&id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Create a new comment owned by the authenticated caller
pub async fn create_comment(
    service: web::Data<CommentService>,
    user: AuthenticatedUser,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service.create(&user, &req).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Update a comment's mutable fields
pub async fn update_comment(
    service: web::Data<CommentService>,
    id: web::Path<String>,
    _user: AuthenticatedUser,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service.update(&id, &req).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment
pub async fn delete_comment(
    service: web::Data<CommentService>,
    id: web::Path<String>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse> {
    service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": true })))
}
