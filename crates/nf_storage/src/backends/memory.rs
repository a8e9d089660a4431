use async_trait::async_trait;
use nf_core::{Article, ArticleCatalog, Comment, Result, UserProfile};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::CatalogData;

/// Read-mostly catalog held in memory.
#[derive(Clone)]
pub struct MemoryCatalog {
    store: Arc<RwLock<CatalogData>>,
}

impl MemoryCatalog {
    /// A catalog seeded with the bundled mock data.
    pub fn new() -> Result<Self> {
        Ok(Self::with_data(CatalogData::bundled()?))
    }

    pub fn with_data(data: CatalogData) -> Self {
        Self {
            store: Arc::new(RwLock::new(data)),
        }
    }

    /// Replaces the whole catalog at once.
    pub async fn replace(&self, data: CatalogData) {
        *self.store.write().await = data;
    }
}

#[async_trait]
impl ArticleCatalog for MemoryCatalog {
    async fn articles(&self) -> Result<Vec<Article>> {
        Ok(self.store.read().await.articles.clone())
    }

    async fn article(&self, id: &str) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        let store = self.store.read().await;
        Ok(store.comments.get(article_id).cloned().unwrap_or_default())
    }

    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_catalog() {
        let catalog = MemoryCatalog::new().unwrap();

        let articles = catalog.articles().await.unwrap();
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        let article = catalog.article("3").await.unwrap().unwrap();
        assert_eq!(article.votes, 312);
        assert!(catalog.article("missing").await.unwrap().is_none());

        assert_eq!(catalog.comments("1").await.unwrap().len(), 3);
        assert!(catalog.comments("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profiles_and_posts() {
        let catalog = MemoryCatalog::new().unwrap();
        let profile = catalog.profile("user1").await.unwrap().unwrap();
        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.badges.len(), 3);

        let posts = catalog.posts_by("user1").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "5");
        assert!(catalog.posts_by("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace() {
        let catalog = MemoryCatalog::new().unwrap();
        catalog.replace(CatalogData::default()).await;
        assert!(catalog.articles().await.unwrap().is_empty());
    }
}
