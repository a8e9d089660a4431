use nf_core::{ArticleCatalog, Error, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub mod backends;
pub mod data;

pub use backends::*;
pub use data::CatalogData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogKind {
    /// The bundled mock catalog
    #[default]
    Memory,
    /// A JSON file in the same shape as the bundled catalog
    File,
}

impl std::str::FromStr for CatalogKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(Error::Catalog(format!(
                "Unknown catalog backend: {} (expected memory or file)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub kind: CatalogKind,
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn new(kind: CatalogKind) -> Self {
        Self { kind, path: None }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

pub async fn create_catalog(config: &CatalogConfig) -> Result<Arc<dyn ArticleCatalog>> {
    let catalog: Arc<dyn ArticleCatalog> = match config.kind {
        CatalogKind::Memory => Arc::new(MemoryCatalog::new()?),
        CatalogKind::File => {
            let path = config.path.as_ref().ok_or_else(|| {
                Error::Catalog("The file catalog needs a path".to_string())
            })?;
            Arc::new(FileCatalog::open(path).await?)
        }
    };
    let count = catalog.articles().await?.len();
    info!("📚 Catalog ready with {} articles ({:?})", count, config.kind);
    Ok(catalog)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_catalog, CatalogConfig, CatalogData, CatalogKind};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_kind() {
        assert_eq!("memory".parse::<CatalogKind>().unwrap(), CatalogKind::Memory);
        assert_eq!("FILE".parse::<CatalogKind>().unwrap(), CatalogKind::File);
        assert!("qdrant".parse::<CatalogKind>().is_err());
    }

    #[tokio::test]
    async fn test_create_memory_catalog() {
        let catalog = create_catalog(&CatalogConfig::default()).await.unwrap();
        assert_eq!(catalog.articles().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_file_catalog_requires_path() {
        let result = create_catalog(&CatalogConfig::new(CatalogKind::File)).await;
        assert!(matches!(result, Err(Error::Catalog(_))));
    }
}
