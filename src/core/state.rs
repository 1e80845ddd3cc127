//! Application state
//!
//! Holds every repository, the object store and the session secret.
//! Shared behind an `Arc` between the library surface and the resources
//! router.

use crate::core::Config;
use crate::repositories::{
    ArticleRepository, CredentialRepository, MessageRepository, NoteRepository, ThreadRepository,
    UserRepository,
};
use crate::store::{ObjectStore, StoreError};

pub struct AppState {
    pub users: UserRepository,
    pub credentials: CredentialRepository,
    pub notes: NoteRepository,
    pub articles: ArticleRepository,
    pub threads: ThreadRepository,
    pub messages: MessageRepository,
    /// Object store backing the `/resources` surface.
    pub resources: ObjectStore,
    pub jwt_secret: String,
}

impl AppState {
    /// Build the state from a configuration: fresh collections plus the
    /// object store rooted at `config.data_dir`.
    pub async fn new(config: &Config) -> Result<Self, StoreError> {
        let resources = ObjectStore::new(
            config.data_dir.clone(),
            config.public_base_url.clone(),
        )
        .await?;

        Ok(Self {
            users: UserRepository::new(),
            credentials: CredentialRepository::new(),
            notes: NoteRepository::new(),
            articles: ArticleRepository::new(),
            threads: ThreadRepository::new(),
            messages: MessageRepository::new(),
            resources,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}
