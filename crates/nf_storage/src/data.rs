//! The catalog document: articles, comment threads keyed by article id, and users.

use nf_core::{Article, Comment, Result, UserProfile};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// The mock catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub comments: HashMap<String, Vec<Comment>>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    articles: Vec<Value>,
    #[serde(default)]
    comments: HashMap<String, Vec<Value>>,
    #[serde(default)]
    users: Vec<Value>,
}

impl CatalogData {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parses a catalog document, skipping records that do not deserialize.
    ///
    /// Only a document that is not a JSON object of the expected shape is an
    /// error; a single bad article, comment or user is logged and dropped.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let articles = keep_valid(raw.articles, "article");
        let comments = raw
            .comments
            .into_iter()
            .map(|(article_id, thread)| {
                let thread = keep_valid_comments(thread);
                (article_id, thread)
            })
            .collect();
        let users = keep_valid(raw.users, "user");

        Ok(Self {
            articles,
            comments,
            users,
        })
    }
}

fn keep_valid<T: DeserializeOwned>(values: Vec<Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("⚠️ Skipping malformed {} record #{}: {}", kind, i, e);
                None
            }
        })
        .collect()
}

/// Like [`keep_valid`], but replies are checked one by one so a bad reply
/// drops only itself and its own subtree.
fn keep_valid_comments(values: Vec<Value>) -> Vec<Comment> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, mut value)| {
            let replies = match value.as_object_mut().and_then(|o| o.remove("replies")) {
                Some(Value::Array(replies)) => replies,
                Some(other) => {
                    warn!("⚠️ Ignoring non-list replies on comment #{}: {}", i, other);
                    Vec::new()
                }
                None => Vec::new(),
            };
            match serde_json::from_value::<Comment>(value) {
                Ok(mut comment) => {
                    comment.replies = keep_valid_comments(replies);
                    Some(comment)
                }
                Err(e) => {
                    warn!("⚠️ Skipping malformed comment record #{}: {}", i, e);
                    None
                }
            }
        })
        .collect()
}
