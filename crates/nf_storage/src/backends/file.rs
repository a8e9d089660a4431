use async_trait::async_trait;
use nf_core::{Article, ArticleCatalog, Comment, Error, Result, UserProfile};
use std::path::{Path, PathBuf};
use tracing::info;

use super::memory::MemoryCatalog;
use crate::data::CatalogData;

/// Catalog loaded once from a JSON file on disk.
pub struct FileCatalog {
    path: PathBuf,
    inner: MemoryCatalog,
}

impl FileCatalog {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let json = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let data = CatalogData::from_json(&json)?;
        info!("📂 Loaded {} articles from {}", data.articles.len(), path.display());
        Ok(Self {
            path,
            inner: MemoryCatalog::with_data(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the file and swaps the catalog in one step.
    pub async fn reload(&self) -> Result<()> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        self.inner.replace(CatalogData::from_json(&json)?).await;
        Ok(())
    }
}

#[async_trait]
impl ArticleCatalog for FileCatalog {
    async fn articles(&self) -> Result<Vec<Article>> {
        self.inner.articles().await
    }

    async fn article(&self, id: &str) -> Result<Option<Article>> {
        self.inner.article(id).await
    }

    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        self.inner.comments(article_id).await
    }

    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.inner.profile(user_id).await
    }
}
