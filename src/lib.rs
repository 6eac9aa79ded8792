/// Comment Service Library
///
/// Authorization-gated CRUD for comments attached to posts: reads are open,
/// writes require a bearer token, and the recorded owner always comes from
/// the authenticated identity. Persistence and identity validation are
/// collaborators behind seams (`store::CommentStore`, `auth::TokenValidator`)
/// so the policy core stays independent of any one backend.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: comment entity and request/response types
/// - `services`: ownership and identifier policy
/// - `store`: document store trait, id validation, in-memory backend
/// - `auth`: JWT issuance and validation
/// - `middleware`: bearer-token identity extractor
/// - `routes`: route table
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
