use nf_core::ArticleCatalog;
use nf_inference::ContentAnalyzer;
use std::sync::Arc;

pub struct AppState {
    pub catalog: Arc<dyn ArticleCatalog>,
    pub analyzer: ContentAnalyzer,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ArticleCatalog>, analyzer: ContentAnalyzer) -> Self {
        Self { catalog, analyzer }
    }
}
