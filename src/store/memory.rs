/// In-memory comment store
///
/// Keeps documents in a `tokio::sync::RwLock<Vec<_>>` so list order is the
/// insertion order. Each trait method takes the lock once, which gives the
/// per-document atomicity the service relies on.
use async_trait::async_trait;
use chrono::Utc;
use rand::RngCore;
use tokio::sync::RwLock;

use super::CommentStore;
use crate::error::Result;
use crate::models::Comment;

pub struct MemoryCommentStore {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self {
            comments: RwLock::new(Vec::new()),
        }
    }

    /// Generate a 24-hex document identifier.
    fn generate_id() -> String {
        let mut bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for MemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn insert(&self, post_id: &str, owner: &str, content: &str) -> Result<Comment> {
        let comment = Comment {
            id: Self::generate_id(),
            post_id: post_id.to_string(),
            owner: owner.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };

        let mut comments = self.comments.write().await;
        comments.push(comment.clone());

        Ok(comment)
    }

    async fn get(&self, id: &str) -> Result<Option<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, owner: Option<&str>) -> Result<Vec<Comment>> {
        let comments = self.comments.read().await;
        let listed = match owner {
            Some(owner) => comments.iter().filter(|c| c.owner == owner).cloned().collect(),
            None => comments.clone(),
        };
        Ok(listed)
    }

    async fn update(
        &self,
        id: &str,
        content: &str,
        owner: Option<&str>,
    ) -> Result<Option<Comment>> {
        let mut comments = self.comments.write().await;
        let Some(comment) = comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        comment.content = content.to_string();
        if let Some(owner) = owner {
            comment.owner = owner.to_string();
        }

        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }
}
