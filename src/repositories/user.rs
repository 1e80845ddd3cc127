//! UserRepository - profile records

use chrono::Utc;

use super::traits::Read;
use crate::entities::{CycleSettings, Role, User, DEFAULT_AVATAR_TAG};
use crate::store::{Collection, StoreError};

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("users"),
        }
    }

    /// Create the profile record for a fresh registration. Called
    /// exactly once per registration; role defaults to Member and the
    /// login timestamp starts at creation time.
    pub async fn create_record(&self, email: &str, display_name: &str) -> User {
        self.collection.insert_with(|id, now| User {
            user_id: id,
            email: email.to_string(),
            display_name: display_name.to_string(),
            role: Role::Member,
            avatar_tag: DEFAULT_AVATAR_TAG.to_string(),
            last_login_at: now,
            cycle_settings: None,
        })
    }

    /// All profiles, most recently logged in first (admin overview).
    pub async fn list_by_last_login(&self) -> Vec<User> {
        self.collection
            .query(|_| true, |a, b| b.last_login_at.cmp(&a.last_login_at))
    }

    /// Replace the embedded cycle settings wholesale.
    pub async fn set_cycle_settings(
        &self,
        id: &str,
        settings: CycleSettings,
    ) -> Result<User, StoreError> {
        self.collection
            .update(id, |user| user.cycle_settings = Some(settings))
    }

    /// Bump the login timestamp to now.
    pub async fn touch_last_login(&self, id: &str) -> Result<(), StoreError> {
        self.collection
            .update(id, |user| user.last_login_at = Utc::now())?;
        Ok(())
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Read<User, String> for UserRepository {
    async fn read(&self, id: &String) -> Result<Option<User>, StoreError> {
        Ok(self.collection.get(id))
    }
}
