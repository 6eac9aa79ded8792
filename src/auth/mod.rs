/// JWT token issuance and validation
///
/// The identity provider and this service share an HS256 secret; a bearer
/// token presented on a request resolves to the identity recorded in its
/// claims. Token encode and decode live together so the integration tests
/// and operator tooling can mint tokens against the same claims shape the
/// validator checks.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims carried by an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Identity label recorded as comment owner
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Validates bearer tokens and resolves the acting identity.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
}

impl TokenValidator {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Decode and verify a token, returning its claims.
    ///
    /// Fails on bad signature, wrong algorithm, or expiry; all failures map
    /// to `AppError::Unauthorized`.
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(JWT_ALGORITHM))?;
        Ok(data.claims)
    }
}

/// Sign an access token for a user identity.
pub fn issue_access_token(
    secret: &str,
    user_id: &str,
    username: &str,
    expiry_mins: i64,
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(expiry_mins)).timestamp(),
    };

    let token = encode(
        &Header::new(JWT_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
