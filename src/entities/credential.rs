//! Credential entity - email/password pair backing a user account

use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credential {
    pub credential_id: String,
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
}

impl Credential {
    /// Verify a candidate password against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        verify(candidate, &self.password_hash).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost.
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, DEFAULT_COST)
    }
}
