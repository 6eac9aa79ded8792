/// Comment service - ownership and identifier policy over the store
///
/// All policy lives here: identifier syntax is checked before any store
/// lookup, payload shape is validated before any write, and the recorded
/// owner always comes from the authenticated identity on create. Handlers
/// only translate the outcome to HTTP.
use std::sync::Arc;

use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::AuthenticatedUser;
use crate::models::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::store::{CommentStore, IdValidator};

pub struct CommentService {
    store: Arc<dyn CommentStore>,
    ids: Arc<dyn IdValidator>,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>, ids: Arc<dyn IdValidator>) -> Self {
        Self { store, ids }
    }

    /// List comments in insertion order, optionally filtered by exact owner.
    /// A filter matching nothing yields an empty list, not an error.
    pub async fn list(&self, owner: Option<&str>) -> Result<Vec<Comment>> {
        self.store.list(owner).await
    }

    /// Get a comment by identifier.
    pub async fn get(&self, id: &str) -> Result<Comment> {
        self.check_id(id)?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// Create a comment owned by the authenticated caller.
    ///
    /// Any `owner` in the payload is ignored; the identity from the token
    /// is recorded instead.
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        req: &CreateCommentRequest,
    ) -> Result<Comment> {
        req.validate()?;

        let comment = self
            .store
            .insert(&req.post_id, &user.username, &req.content)
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            owner = %comment.owner,
            "Comment created"
        );
        Ok(comment)
    }

    /// Replace the mutable fields of a comment.
    ///
    /// A supplied `owner` is applied as-is, transferring ownership; an
    /// absent `owner` keeps the recorded one.
    pub async fn update(&self, id: &str, req: &UpdateCommentRequest) -> Result<Comment> {
        self.check_id(id)?;
        req.validate()?;

        self.store
            .update(id, &req.content, req.owner.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {}", id)))
    }

    /// Delete a comment. Deletion is terminal; the identifier resolves to
    /// not-found on every subsequent read.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.check_id(id)?;

        if self.store.delete(id).await? {
            tracing::info!(comment_id = %id, "Comment deleted");
            Ok(())
        } else {
            Err(AppError::NotFound(format!("comment {}", id)))
        }
    }

    /// Reject malformed identifiers before the store is consulted.
    fn check_id(&self, id: &str) -> Result<()> {
        if self.ids.is_well_formed(id) {
            Ok(())
        } else {
            Err(AppError::InvalidIdentifier(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HexIdValidator, MemoryCommentStore};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service() -> CommentService {
        CommentService::new(
            Arc::new(MemoryCommentStore::new()),
            Arc::new(HexIdValidator::default()),
        )
    }

    fn user(name: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: format!("{}-id", name),
            username: name.to_string(),
        }
    }

    fn create_req(content: &str, post_id: &str, owner: Option<&str>) -> CreateCommentRequest {
        CreateCommentRequest {
            content: content.to_string(),
            post_id: post_id.to_string(),
            owner: owner.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_records_authenticated_identity_as_owner() {
        let service = service();
        let comment = service
            .create(&user("User1"), &create_req("hi", "post-1", Some("Spoofed")))
            .await
            .unwrap();

        assert_eq!(comment.owner, "User1");
    }

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let service = service();
        let err = service
            .create(&user("User1"), &create_req("", "post-1", None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidPayload(_)));
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn well_formed_absent_id_is_not_found() {
        let service = service();
        let err = service.get("675ad3702a7e6e3b1af92e8d").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_transfers_ownership_when_owner_supplied() {
        let service = service();
        let created = service
            .create(&user("User1"), &create_req("before", "post-1", None))
            .await
            .unwrap();

        let updated = service
            .update(
                &created.id,
                &UpdateCommentRequest {
                    content: "after".into(),
                    owner: Some("User2".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content, "after");
        assert_eq!(updated.owner, "User2");
        assert_eq!(updated.id, created.id);
    }

    /// Store wrapper that counts how often it is consulted.
    struct CountingStore {
        inner: MemoryCommentStore,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl CommentStore for CountingStore {
        async fn insert(&self, post_id: &str, owner: &str, content: &str) -> Result<Comment> {
            self.inner.insert(post_id, owner, content).await
        }

        async fn get(&self, id: &str) -> Result<Option<Comment>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.get(id).await
        }

        async fn list(&self, owner: Option<&str>) -> Result<Vec<Comment>> {
            self.inner.list(owner).await
        }

        async fn update(
            &self,
            id: &str,
            content: &str,
            owner: Option<&str>,
        ) -> Result<Option<Comment>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.update(id, content, owner).await
        }

        async fn delete(&self, id: &str) -> Result<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_the_store() {
        let store = Arc::new(CountingStore {
            inner: MemoryCommentStore::new(),
            lookups: AtomicUsize::new(0),
        });
        let service = CommentService::new(store.clone(), Arc::new(HexIdValidator::default()));

        assert!(matches!(
            service.get("fff").await.unwrap_err(),
            AppError::InvalidIdentifier(_)
        ));
        assert!(matches!(
            service.delete("not-hex").await.unwrap_err(),
            AppError::InvalidIdentifier(_)
        ));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }
}
