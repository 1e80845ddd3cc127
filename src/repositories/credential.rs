//! CredentialRepository - email-keyed login credentials

use crate::entities::Credential;
use crate::store::Collection;

pub struct CredentialRepository {
    collection: Collection<Credential>,
}

impl CredentialRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("credentials"),
        }
    }

    /// Store the credential backing a newly registered user. The
    /// password arrives already hashed.
    pub async fn create(&self, user_id: &str, email: &str, password_hash: &str) -> Credential {
        self.collection.insert_with(|id, _now| Credential {
            credential_id: id,
            user_id: user_id.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Emails are unique, so first match is the only match.
    pub async fn find_by_email(&self, email: &str) -> Option<Credential> {
        let email = email.to_string();
        self.collection.find_first(|c| c.email == email)
    }
}

impl Default for CredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}
