//! Content services - staff-authored article feed
//!
//! Staff-only authoring is enforced at the caller boundary by the
//! storage layer's access rules; the adapter takes any caller.

use tracing::{info, instrument};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::dtos::{CreateArticleDTO, UpdateArticleDTO};
use crate::entities::Article;
use crate::repositories::{Create, Delete, Read, Update};

#[instrument(skip(state))]
pub async fn list_articles(state: &AppState) -> Vec<Article> {
    state.articles.list().await
}

#[instrument(skip(state), fields(article_id = %article_id))]
pub async fn get_article(state: &AppState, article_id: &str) -> Result<Article, AppError> {
    state
        .articles
        .read(&article_id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Article not found"))
}

/// Creation is immediate publication: no draft state exists.
#[instrument(skip(state, body))]
pub async fn create_article(state: &AppState, body: CreateArticleDTO) -> Result<Article, AppError> {
    body.validate()?;
    let article = state.articles.create(&body).await?;
    info!(article_id = %article.article_id, "Article published");
    Ok(article)
}

#[instrument(skip(state, body), fields(article_id = %article_id))]
pub async fn update_article(
    state: &AppState,
    article_id: &str,
    body: UpdateArticleDTO,
) -> Result<Article, AppError> {
    body.validate()?;
    Ok(state.articles.update(&article_id.to_string(), &body).await?)
}

#[instrument(skip(state), fields(article_id = %article_id))]
pub async fn delete_article(state: &AppState, article_id: &str) -> Result<(), AppError> {
    state.articles.delete(&article_id.to_string()).await?;
    info!("Article deleted");
    Ok(())
}
