//! Integration tests for the chat subsystem: thread lifecycle, unread
//! counters, ordering and live subscriptions

mod common;

use axum::http::StatusCode;
use lunara_server::entities::Role;
use lunara_server::services::{
    get_or_create_thread, list_threads, mark_thread_read, member_thread, send_message,
    subscribe_messages, subscribe_threads, thread_messages,
};

const MEMBER: &str = "member-1";
const STAFF: &str = "staff-1";

// ============================================================
// Thread lifecycle
// ============================================================

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let (state, _dir) = common::create_test_state().await;

    let first = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;
    let second = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    assert_eq!(first.thread_id, second.thread_id);
    assert_eq!(first.unread_count, 0);
    assert_eq!(first.last_message_preview, "");
    assert_eq!(list_threads(&state).await.len(), 1);
}

#[tokio::test]
async fn member_thread_finds_own_thread_only() {
    let (state, _dir) = common::create_test_state().await;

    assert!(member_thread(&state, MEMBER).await.is_none());
    let created = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    let found = member_thread(&state, MEMBER).await.unwrap();
    assert_eq!(found.thread_id, created.thread_id);
    assert!(member_thread(&state, "someone-else").await.is_none());
}

#[tokio::test]
async fn staff_listing_collapses_duplicate_threads() {
    let (state, _dir) = common::create_test_state().await;

    // Force the duplicate the unguarded store path can produce.
    let older = state.threads.create(MEMBER, "Ada", "👩").await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let newer = state.threads.create(MEMBER, "Ada", "👩").await;
    state.threads.create("member-2", "Grace", "👩").await;

    let listed = list_threads(&state).await;
    assert_eq!(listed.len(), 2);

    let for_member = listed
        .iter()
        .find(|t| t.member_id == MEMBER)
        .expect("member thread listed");
    assert_eq!(for_member.thread_id, newer.thread_id);
    assert_ne!(for_member.thread_id, older.thread_id);
}

// ============================================================
// Messages and unread counters (end-to-end scenario)
// ============================================================

#[tokio::test]
async fn member_message_then_staff_reply_then_mark_read() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    send_message(&state, &thread.thread_id, MEMBER, Role::Member, "Hello")
        .await
        .unwrap();
    let after_member = member_thread(&state, MEMBER).await.unwrap();
    assert_eq!(after_member.unread_count, 1);
    assert_eq!(after_member.last_message_preview, "Hello");

    send_message(&state, &thread.thread_id, STAFF, Role::Staff, "Hi")
        .await
        .unwrap();
    let after_staff = member_thread(&state, MEMBER).await.unwrap();
    assert_eq!(after_staff.unread_count, 1, "staff replies never count");
    assert_eq!(after_staff.last_message_preview, "Hi");

    let read = mark_thread_read(&state, &thread.thread_id).await.unwrap();
    assert_eq!(read.unread_count, 0);

    // Read reset does not lose or reorder messages.
    let messages = thread_messages(&state, &thread.thread_id).await;
    let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Hello", "Hi"]);
}

#[tokio::test]
async fn unread_accumulates_per_member_message() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    for text in ["one", "two", "three"] {
        send_message(&state, &thread.thread_id, MEMBER, Role::Member, text)
            .await
            .unwrap();
    }

    assert_eq!(member_thread(&state, MEMBER).await.unwrap().unread_count, 3);
    mark_thread_read(&state, &thread.thread_id).await.unwrap();
    assert_eq!(member_thread(&state, MEMBER).await.unwrap().unread_count, 0);
}

#[tokio::test]
async fn messages_are_ordered_and_immutable_fields_set() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    for (sender, role, text) in [
        (MEMBER, Role::Member, "m1"),
        (STAFF, Role::Staff, "s1"),
        (MEMBER, Role::Member, "m2"),
    ] {
        send_message(&state, &thread.thread_id, sender, role, text)
            .await
            .unwrap();
    }

    let messages = thread_messages(&state, &thread.thread_id).await;
    assert_eq!(messages.len(), 3);
    for pair in messages.windows(2) {
        assert!(pair[0].sent_at <= pair[1].sent_at);
    }
    let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["m1", "s1", "m2"]);
    assert!(messages.iter().all(|m| !m.read_flag));
    assert_eq!(messages[1].sender_role, Role::Staff);
}

#[tokio::test]
async fn send_to_missing_thread_fails_without_appending() {
    let (state, _dir) = common::create_test_state().await;

    let err = send_message(&state, "no-such-thread", MEMBER, Role::Member, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert!(thread_messages(&state, "no-such-thread").await.is_empty());
}

#[tokio::test]
async fn empty_message_rejected_before_store() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    let err = send_message(&state, &thread.thread_id, MEMBER, Role::Member, "")
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(thread_messages(&state, &thread.thread_id).await.is_empty());
}

// ============================================================
// Live subscriptions
// ============================================================

#[tokio::test]
async fn thread_subscription_fires_immediately_then_on_change() {
    let (state, _dir) = common::create_test_state().await;
    let mut threads = subscribe_threads(&state);

    let initial = threads.recv().await.unwrap();
    assert!(initial.is_empty());

    let created = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;
    let snapshot = threads.recv().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].thread_id, created.thread_id);
}

#[tokio::test]
async fn message_subscription_coalesces_to_latest_snapshot() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    let mut feed = subscribe_messages(&state, &thread.thread_id);
    assert!(feed.recv().await.unwrap().is_empty());

    for text in ["one", "two", "three"] {
        send_message(&state, &thread.thread_id, MEMBER, Role::Member, text)
            .await
            .unwrap();
    }

    // Slow consumer: one delivery carrying the full final state.
    let snapshot = feed.recv().await.unwrap();
    assert_eq!(snapshot.len(), 3);
    let texts: Vec<_> = snapshot.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
}

#[tokio::test]
async fn thread_subscription_tracks_unread_and_preview() {
    let (state, _dir) = common::create_test_state().await;
    let thread = get_or_create_thread(&state, MEMBER, "Ada", "👩").await;

    let mut threads = subscribe_threads(&state);
    let _ = threads.recv().await;

    send_message(&state, &thread.thread_id, MEMBER, Role::Member, "Hello")
        .await
        .unwrap();
    let snapshot = threads.recv().await.unwrap();
    assert_eq!(snapshot[0].unread_count, 1);
    assert_eq!(snapshot[0].last_message_preview, "Hello");

    mark_thread_read(&state, &thread.thread_id).await.unwrap();
    let snapshot = threads.recv().await.unwrap();
    assert_eq!(snapshot[0].unread_count, 0);
}

#[tokio::test]
async fn subscription_snapshots_are_deduplicated() {
    let (state, _dir) = common::create_test_state().await;

    state.threads.create(MEMBER, "Ada", "👩").await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let newer = state.threads.create(MEMBER, "Ada", "👩").await;

    let mut threads = subscribe_threads(&state);
    let snapshot = threads.recv().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].thread_id, newer.thread_id);
}
