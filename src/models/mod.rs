/// Data models for the comment resource
///
/// - Comment: the persisted entity, serialized camelCase on the wire
/// - CreateCommentRequest / UpdateCommentRequest: request bodies
/// - ListCommentsQuery: query-string filter for the list operation
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A remark attached to a post.
///
/// `id` is assigned by the document store at creation and never changes.
/// `owner` is derived from the authenticated identity at creation; it is
/// never taken from caller input on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub owner: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a comment
///
/// A client-supplied `owner` is accepted by the deserializer but ignored;
/// the service always records the authenticated identity instead.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "content must be non-empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "postId must be non-empty"))]
    pub post_id: String,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Request body for updating a comment
///
/// `owner` is applied when present, replacing the recorded owner.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "content must be non-empty"))]
    pub content: String,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Query parameters for listing comments
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub owner: Option<String>,
}
