//! Session tokens
//!
//! JWT encode/decode plus the [`Session`] value handed to callers after
//! a successful login. The session is passed explicitly through calls;
//! there is no ambient current-user state anywhere in the crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::core::AppError;
use crate::entities::Role;

/// Token contents.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: String,
    pub role: Role,
}

/// Proof of an authenticated caller, returned by login and accepted by
/// everything session-scoped. The role is re-checked against the stored
/// user whenever a token is authorized, so a stale claim cannot widen
/// access.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    pub token: String,
}

#[instrument(skip(secret), fields(id = %id))]
pub fn encode_jwt(id: &str, role: Role, secret: &str) -> Result<String, AppError> {
    debug!("Encoding session token");
    let now = Utc::now();
    let expire = Duration::hours(24);
    let claims = Claims {
        exp: (now + expire).timestamp() as usize,
        iat: now.timestamp() as usize,
        id: id.to_string(),
        role,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Failed to encode session token: {:?}", e);
        AppError::internal_server_error("Failed to encode session token")
    })
}

#[instrument(skip(token, secret))]
pub fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, AppError> {
    debug!("Decoding session token");
    decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::unauthenticated("Unable to decode token"))
}
