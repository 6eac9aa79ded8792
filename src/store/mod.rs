/// Document store seam for the comment resource
///
/// The service treats persistence as an external collaborator behind the
/// `CommentStore` trait: documents are keyed by an opaque identifier the
/// store assigns, and each trait method is one atomic store operation.
/// `MemoryCommentStore` is the bundled implementation; a database-backed
/// store only needs to implement the same trait.
pub mod memory;

pub use memory::MemoryCommentStore;

use crate::error::Result;
use crate::models::Comment;
use async_trait::async_trait;

/// Syntax check for raw identifiers, applied before any store lookup.
///
/// Malformed identifiers are rejected without touching the store, so they
/// can be reported distinctly from well-formed identifiers that simply have
/// no matching document.
pub trait IdValidator: Send + Sync {
    fn is_well_formed(&self, raw: &str) -> bool;
}

/// Fixed-length hexadecimal identifier scheme.
///
/// The reference store keys documents by 24 hex characters; other stores
/// can plug in a different length or a different `IdValidator` entirely.
#[derive(Debug, Clone)]
pub struct HexIdValidator {
    len: usize,
}

impl HexIdValidator {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for HexIdValidator {
    fn default() -> Self {
        Self::new(24)
    }
}

impl IdValidator for HexIdValidator {
    fn is_well_formed(&self, raw: &str) -> bool {
        raw.len() == self.len && raw.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// Persistence interface for comment documents.
///
/// Implementations own identifier assignment and per-document atomicity.
/// Callers never pass an `id` on insert and never mutate one afterwards.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist a new comment and return it with its assigned identifier.
    async fn insert(&self, post_id: &str, owner: &str, content: &str) -> Result<Comment>;

    /// Fetch a comment by identifier. `None` if no live document matches.
    async fn get(&self, id: &str) -> Result<Option<Comment>>;

    /// List comments in insertion order, optionally filtered by exact owner.
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Comment>>;

    /// Replace the mutable fields of a comment in one atomic operation.
    ///
    /// `owner` of `None` keeps the recorded owner. Returns the updated
    /// document, or `None` if no live document matches.
    async fn update(
        &self,
        id: &str,
        content: &str,
        owner: Option<&str>,
    ) -> Result<Option<Comment>>;

    /// Remove a comment. Returns `false` if no live document matched.
    /// Removal is terminal; the identifier is never reused.
    async fn delete(&self, id: &str) -> Result<bool>;
}
