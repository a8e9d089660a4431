use async_trait::async_trait;
use crate::types::{Article, Comment, UserProfile};
use crate::Result;

#[async_trait]
pub trait ArticleCatalog: Send + Sync {
    /// All articles in catalog order
    async fn articles(&self) -> Result<Vec<Article>>;

    /// Look up a single article by id
    async fn article(&self, id: &str) -> Result<Option<Article>>;

    /// Comment threads attached to an article
    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>>;

    /// Look up a user profile by id
    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Articles posted by a user, in catalog order
    async fn posts_by(&self, user_id: &str) -> Result<Vec<Article>> {
        Ok(self
            .articles()
            .await?
            .into_iter()
            .filter(|article| article.author.id == user_id)
            .collect())
    }
}
