//! ThreadRepository - chat threads between members and the staff pool

use std::collections::HashSet;

use chrono::Utc;

use super::traits::Read;
use crate::entities::ChatThread;
use crate::store::{Collection, StoreError, Subscription};

pub struct ThreadRepository {
    collection: Collection<ChatThread>,
}

/// Collapse duplicate threads to one per member. Input must already be
/// sorted newest-`updated_at` first; the first occurrence wins.
fn dedupe_by_member(rows: Vec<ChatThread>) -> Vec<ChatThread> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|thread| seen.insert(thread.member_id.clone()))
        .collect()
}

fn updated_desc(a: &ChatThread, b: &ChatThread) -> std::cmp::Ordering {
    b.updated_at.cmp(&a.updated_at)
}

impl ThreadRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("chat_threads"),
        }
    }

    /// Unguarded create, the raw store path. Prefer [`get_or_create`]:
    /// this one can manufacture the duplicate threads the read paths
    /// then have to collapse.
    ///
    /// [`get_or_create`]: ThreadRepository::get_or_create
    pub async fn create(
        &self,
        member_id: &str,
        display_name: &str,
        avatar_tag: &str,
    ) -> ChatThread {
        self.collection.insert_with(|id, now| ChatThread {
            thread_id: id,
            member_id: member_id.to_string(),
            member_display_name: display_name.to_string(),
            member_avatar_tag: avatar_tag.to_string(),
            last_message_preview: String::new(),
            updated_at: now,
            unread_count: 0,
        })
    }

    /// The member's thread, creating it on first contact. Lookup and
    /// insert run under the collection's creation lock, so concurrent
    /// first messages resolve to a single thread.
    pub async fn get_or_create(
        &self,
        member_id: &str,
        display_name: &str,
        avatar_tag: &str,
    ) -> ChatThread {
        let member_key = member_id.to_string();
        self.collection.get_or_insert_matching(
            move |thread| thread.member_id == member_key,
            |id, now| ChatThread {
                thread_id: id,
                member_id: member_id.to_string(),
                member_display_name: display_name.to_string(),
                member_avatar_tag: avatar_tag.to_string(),
                last_message_preview: String::new(),
                updated_at: now,
                unread_count: 0,
            },
        )
    }

    /// Member-side lookup; earliest thread wins when duplicates exist.
    pub async fn find_by_member(&self, member_id: &str) -> Option<ChatThread> {
        let member_id = member_id.to_string();
        self.collection
            .find_first(|thread| thread.member_id == member_id)
    }

    /// Fold a newly appended message into the thread header: preview,
    /// bump `updated_at`, and count it as unread only when it came from
    /// the member. The whole step runs as one atomic document update.
    pub async fn apply_message(
        &self,
        thread_id: &str,
        preview: &str,
        from_member: bool,
    ) -> Result<ChatThread, StoreError> {
        self.collection.update(thread_id, |thread| {
            thread.last_message_preview = preview.to_string();
            thread.updated_at = Utc::now();
            if from_member {
                thread.unread_count += 1;
            }
        })
    }

    /// Staff opened the thread: clear the unread counter, whatever it
    /// was. Individual message read flags are not touched.
    pub async fn mark_read(&self, thread_id: &str) -> Result<ChatThread, StoreError> {
        self.collection
            .update(thread_id, |thread| thread.unread_count = 0)
    }

    /// Staff listing: newest activity first, one thread per member even
    /// when the store still holds duplicates.
    pub async fn list_deduped(&self) -> Vec<ChatThread> {
        dedupe_by_member(self.collection.query(|_| true, updated_desc))
    }

    /// Live staff listing with the same ordering and dedupe as
    /// [`list_deduped`].
    ///
    /// [`list_deduped`]: ThreadRepository::list_deduped
    pub fn watch_deduped(&self) -> Subscription<Vec<ChatThread>> {
        self.collection
            .watch_view(|_| true, updated_desc, dedupe_by_member)
    }
}

impl Default for ThreadRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Read<ChatThread, String> for ThreadRepository {
    async fn read(&self, id: &String) -> Result<Option<ChatThread>, StoreError> {
        Ok(self.collection.get(id))
    }
}
