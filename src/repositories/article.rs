//! ArticleRepository - staff-authored content

use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{CreateArticleDTO, UpdateArticleDTO};
use crate::entities::Article;
use crate::store::{Collection, StoreError};

pub struct ArticleRepository {
    collection: Collection<Article>,
}

impl ArticleRepository {
    pub fn new() -> Self {
        Self {
            collection: Collection::new("articles"),
        }
    }

    /// Full feed, newest first. Creation is immediate publication, so
    /// there is no draft filter.
    pub async fn list(&self) -> Vec<Article> {
        self.collection
            .query(|_| true, |a, b| b.created_at.cmp(&a.created_at))
    }
}

impl Default for ArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Create<Article, CreateArticleDTO> for ArticleRepository {
    async fn create(&self, data: &CreateArticleDTO) -> Result<Article, StoreError> {
        Ok(self.collection.insert_with(|id, now| Article {
            article_id: id,
            title: data.title.clone(),
            content: data.content.clone(),
            excerpt: data.excerpt.clone(),
            category: data.category.clone(),
            video_ref: data.video_ref.clone(),
            created_at: now,
        }))
    }
}

impl Read<Article, String> for ArticleRepository {
    async fn read(&self, id: &String) -> Result<Option<Article>, StoreError> {
        Ok(self.collection.get(id))
    }
}

impl Update<Article, UpdateArticleDTO, String> for ArticleRepository {
    async fn update(&self, id: &String, data: &UpdateArticleDTO) -> Result<Article, StoreError> {
        self.collection.update(id, |article| {
            if let Some(ref title) = data.title {
                article.title = title.clone();
            }
            if let Some(ref content) = data.content {
                article.content = content.clone();
            }
            if let Some(ref excerpt) = data.excerpt {
                article.excerpt = excerpt.clone();
            }
            if let Some(ref category) = data.category {
                article.category = category.clone();
            }
            if let Some(ref video_ref) = data.video_ref {
                article.video_ref = video_ref.clone();
            }
        })
    }
}

impl Delete<String> for ArticleRepository {
    async fn delete(&self, id: &String) -> Result<(), StoreError> {
        self.collection.remove(id)
    }
}
