//! Integration tests for notes, profiles, cycle settings and articles

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use lunara_server::cycle::Phase;
use lunara_server::dtos::{
    CreateArticleDTO, CreateNoteDTO, CycleSettingsDTO, RegisterDTO, UpdateArticleDTO,
    UpdateNoteDTO,
};
use lunara_server::entities::note::NOTE_COLOR_PALETTE;
use lunara_server::services::{
    create_article, create_note, cycle_status, delete_article, delete_note, get_article,
    get_profile, list_all_notes, list_articles, list_notes, list_profiles, login, register,
    set_cycle_settings, update_article, update_note,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn note_dto(title: &str, body: &str) -> CreateNoteDTO {
    CreateNoteDTO {
        title: title.to_string(),
        body: body.to_string(),
    }
}

async fn register_user(
    state: &lunara_server::core::AppState,
    email: &str,
    name: &str,
) -> String {
    register(
        state,
        RegisterDTO {
            email: email.to_string(),
            display_name: name.to_string(),
            password: "correct-horse".to_string(),
        },
    )
    .await
    .unwrap()
    .user_id
}

// ============================================================
// Notes
// ============================================================

#[tokio::test]
async fn note_roundtrip_preserves_fields_and_draws_palette_color() {
    let (state, _dir) = common::create_test_state().await;

    let created = create_note(&state, "owner-1", note_dto("Groceries", "milk, eggs"))
        .await
        .unwrap();

    let listed = list_notes(&state, "owner-1").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].note_id, created.note_id);
    assert_eq!(listed[0].title, "Groceries");
    assert_eq!(listed[0].body, "milk, eggs");
    assert_eq!(listed[0].owner_id, "owner-1");
    assert!(NOTE_COLOR_PALETTE.contains(&listed[0].color_tag.as_str()));
}

#[tokio::test]
async fn notes_list_newest_first_per_owner() {
    let (state, _dir) = common::create_test_state().await;

    for title in ["first", "second", "third"] {
        create_note(&state, "owner-1", note_dto(title, "")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    create_note(&state, "owner-2", note_dto("other", "")).await.unwrap();

    let listed = list_notes(&state, "owner-1").await;
    let titles: Vec<_> = listed.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["third", "second", "first"]);

    assert_eq!(list_all_notes(&state).await.len(), 4);
}

#[tokio::test]
async fn note_partial_update_leaves_other_fields_alone() {
    let (state, _dir) = common::create_test_state().await;
    let note = create_note(&state, "owner-1", note_dto("Title", "Body"))
        .await
        .unwrap();

    let updated = update_note(
        &state,
        &note.note_id,
        UpdateNoteDTO {
            title: Some("New title".to_string()),
            body: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.body, "Body");
    assert_eq!(updated.color_tag, note.color_tag);
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn note_update_and_delete_missing_are_not_found() {
    let (state, _dir) = common::create_test_state().await;

    let err = update_note(&state, "ghost", UpdateNoteDTO::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = delete_note(&state, "ghost").await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_note_disappears_from_listing() {
    let (state, _dir) = common::create_test_state().await;
    let note = create_note(&state, "owner-1", note_dto("bye", ""))
        .await
        .unwrap();

    delete_note(&state, &note.note_id).await.unwrap();
    assert!(list_notes(&state, "owner-1").await.is_empty());
}

#[tokio::test]
async fn empty_note_title_rejected() {
    let (state, _dir) = common::create_test_state().await;
    let err = create_note(&state, "owner-1", note_dto("", "body"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

// ============================================================
// Profiles and cycle settings
// ============================================================

#[tokio::test]
async fn profiles_list_most_recent_login_first() {
    let (state, _dir) = common::create_test_state().await;
    register_user(&state, "ada@example.com", "Ada").await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    register_user(&state, "grace@example.com", "Grace").await;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    login(&state, "ada@example.com", "correct-horse")
        .await
        .unwrap();

    let profiles = list_profiles(&state).await;
    let names: Vec<_> = profiles.iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(names, ["Ada", "Grace"]);
}

#[tokio::test]
async fn cycle_settings_are_replaced_wholesale() {
    let (state, _dir) = common::create_test_state().await;
    let user_id = register_user(&state, "ada@example.com", "Ada").await;

    set_cycle_settings(
        &state,
        &user_id,
        CycleSettingsDTO {
            last_period_start: date(2026, 1, 1),
            cycle_length_days: 30,
            period_length_days: 6,
        },
    )
    .await
    .unwrap();

    let updated = set_cycle_settings(
        &state,
        &user_id,
        CycleSettingsDTO {
            last_period_start: date(2026, 2, 10),
            cycle_length_days: 28,
            period_length_days: 5,
        },
    )
    .await
    .unwrap();

    let settings = updated.cycle_settings.unwrap();
    assert_eq!(settings.last_period_start, date(2026, 2, 10));
    assert_eq!(settings.cycle_length_days, 28);
    assert_eq!(settings.period_length_days, 5);
}

#[tokio::test]
async fn cycle_settings_out_of_range_rejected() {
    let (state, _dir) = common::create_test_state().await;
    let user_id = register_user(&state, "ada@example.com", "Ada").await;

    let err = set_cycle_settings(
        &state,
        &user_id,
        CycleSettingsDTO {
            last_period_start: date(2026, 1, 1),
            cycle_length_days: 50,
            period_length_days: 5,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cycle_status_follows_the_configured_settings() {
    let (state, _dir) = common::create_test_state().await;
    let user_id = register_user(&state, "ada@example.com", "Ada").await;

    // No settings yet.
    let err = cycle_status(&state, &user_id, date(2026, 2, 12))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    set_cycle_settings(
        &state,
        &user_id,
        CycleSettingsDTO {
            last_period_start: date(2026, 2, 10),
            cycle_length_days: 28,
            period_length_days: 5,
        },
    )
    .await
    .unwrap();

    let status = cycle_status(&state, &user_id, date(2026, 2, 12)).await.unwrap();
    assert_eq!(status.day_of_cycle, 3);
    assert_eq!(status.position, 3);
    assert_eq!(status.phase, Phase::Period);

    let status = cycle_status(&state, &user_id, date(2026, 2, 24)).await.unwrap();
    assert_eq!(status.position, 15);
    assert_eq!(status.phase, Phase::Fertile);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let (state, _dir) = common::create_test_state().await;
    let err = get_profile(&state, "ghost").await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

// ============================================================
// Articles
// ============================================================

fn article_dto(title: &str) -> CreateArticleDTO {
    CreateArticleDTO {
        title: title.to_string(),
        content: "Full rich text".to_string(),
        excerpt: "Short teaser".to_string(),
        category: "wellness".to_string(),
        video_ref: Some("dQw4w9WgXcQ".to_string()),
    }
}

#[tokio::test]
async fn article_feed_is_newest_first_and_gettable() {
    let (state, _dir) = common::create_test_state().await;

    let first = create_article(&state, article_dto("First")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_article(&state, article_dto("Second")).await.unwrap();

    let feed = list_articles(&state).await;
    let titles: Vec<_> = feed.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);

    let fetched = get_article(&state, &first.article_id).await.unwrap();
    assert_eq!(fetched.title, "First");
    assert_eq!(fetched.video_ref.as_deref(), Some("dQw4w9WgXcQ"));
}

#[tokio::test]
async fn article_partial_update_and_video_clear() {
    let (state, _dir) = common::create_test_state().await;
    let article = create_article(&state, article_dto("Original")).await.unwrap();

    let updated = update_article(
        &state,
        &article.article_id,
        UpdateArticleDTO {
            title: Some("Edited".to_string()),
            video_ref: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.content, "Full rich text");
    assert!(updated.video_ref.is_none());
}

#[tokio::test]
async fn deleted_article_is_gone() {
    let (state, _dir) = common::create_test_state().await;
    let article = create_article(&state, article_dto("Ephemeral")).await.unwrap();

    delete_article(&state, &article.article_id).await.unwrap();
    let err = get_article(&state, &article.article_id).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert!(list_articles(&state).await.is_empty());
}
