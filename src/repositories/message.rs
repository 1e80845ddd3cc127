//! MessageRepository - messages within a thread

use crate::entities::{ChatMessage, Role};
use crate::store::{Collection, Subscription};

pub struct MessageRepository {
    collection: Collection<ChatMessage>,
}

fn sent_asc(a: &ChatMessage, b: &ChatMessage) -> std::cmp::Ordering {
    // Equal timestamps fall back to insertion order in the collection.
    a.sent_at.cmp(&b.sent_at)
}

impl MessageRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("chat_messages"),
        }
    }

    /// Append a message. Timestamp is server-assigned; messages are
    /// immutable from here on.
    pub async fn append(
        &self,
        thread_id: &str,
        sender_id: &str,
        sender_role: Role,
        text: &str,
    ) -> ChatMessage {
        self.collection.insert_with(|id, now| ChatMessage {
            message_id: id,
            thread_id: thread_id.to_string(),
            sender_id: sender_id.to_string(),
            sender_role,
            text: text.to_string(),
            sent_at: now,
            read_flag: false,
        })
    }

    /// All messages of a thread, oldest first.
    pub async fn list_for_thread(&self, thread_id: &str) -> Vec<ChatMessage> {
        let thread_id = thread_id.to_string();
        self.collection
            .query(move |msg| msg.thread_id == thread_id, sent_asc)
    }

    /// Live per-thread feed, oldest first; delivered in non-decreasing
    /// `sent_at` order within every snapshot.
    pub fn watch_thread(&self, thread_id: &str) -> Subscription<Vec<ChatMessage>> {
        let thread_id = thread_id.to_string();
        self.collection
            .watch(move |msg| msg.thread_id == thread_id, sent_asc)
    }
}

impl Default for MessageRepository {
    fn default() -> Self {
        Self::new()
    }
}
