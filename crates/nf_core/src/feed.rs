//! Feed selection: tag/search/time filtering followed by a stable sort.
//!
//! Everything here is a pure projection of a borrowed catalog. The catalog
//! order is the tie-break for every sort key, so callers that want a
//! deterministic feed only need to supply a deterministic catalog.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Article;
use crate::Error;

/// Tags offered by the feed sidebar and the submission form.
pub const ALL_TAGS: [&str; 10] = [
    "Technology",
    "Health",
    "Science",
    "Business",
    "Politics",
    "World",
    "Environment",
    "Education",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    ByVotesDescending,
    ByRecencyDescending,
    ByCredibilityDescending,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByVotesDescending => "votes",
            Self::ByRecencyDescending => "newest",
            Self::ByCredibilityDescending => "credibility",
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "votes" => Ok(Self::ByVotesDescending),
            "newest" | "recent" => Ok(Self::ByRecencyDescending),
            "credibility" => Ok(Self::ByCredibilityDescending),
            other => Err(Error::InvalidInput(format!(
                "unknown sort option '{}', expected one of: votes, newest, credibility",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rolling time window applied before sorting. `All` keeps every article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Earliest instant still inside the window, `None` for `All`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let span = match self {
            Self::All => return None,
            Self::Today => Duration::days(1),
            Self::Week => Duration::days(7),
            Self::Month => Duration::days(30),
        };
        Some(now - span)
    }

    /// Articles whose timestamp does not parse fall outside every bounded window.
    pub fn contains(&self, article: &Article, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            None => true,
            Some(cutoff) => article.published_at().is_some_and(|at| at >= cutoff),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(Error::InvalidInput(format!(
                "unknown time window '{}', expected one of: all, today, week, month",
                other
            ))),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Empty means no tag filter; otherwise an article must carry any one of them.
    #[serde(default)]
    pub selected_tags: BTreeSet<String>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub time_window: TimeWindow,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = time_window;
        self
    }

    /// Selects the tag if it is not selected yet, deselects it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Clears the tag selection and the search query. Sort and window are kept.
    pub fn reset(&mut self) {
        self.selected_tags.clear();
        self.search_query.clear();
    }

    fn matches(&self, article: &Article, needle: &str, now: DateTime<Utc>) -> bool {
        let matches_tags = self.selected_tags.is_empty()
            || article.tags.iter().any(|tag| self.selected_tags.contains(tag));

        let matches_search = needle.is_empty()
            || article.title.to_lowercase().contains(needle)
            || article.description.to_lowercase().contains(needle);

        matches_tags && matches_search && self.time_window.contains(article, now)
    }
}

/// Filters and orders `catalog` according to `config`, using the current time
/// for the time window.
pub fn select(catalog: &[Article], config: &FilterConfig) -> Vec<Article> {
    select_with_now(catalog, config, Utc::now())
}

/// Same as [`select`] with an explicit clock.
pub fn select_with_now(
    catalog: &[Article],
    config: &FilterConfig,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let needle = config.search_query.to_lowercase();

    let mut selected: Vec<Article> = catalog
        .iter()
        .filter(|article| config.matches(article, &needle, now))
        .cloned()
        .collect();

    // `sort_by` is stable, equal keys keep catalog order.
    match config.sort_key {
        SortKey::ByVotesDescending => selected.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortKey::ByRecencyDescending => {
            selected.sort_by(|a, b| recency_key(b).cmp(&recency_key(a)))
        }
        SortKey::ByCredibilityDescending => {
            selected.sort_by(|a, b| credibility_key(b).total_cmp(&credibility_key(a)))
        }
    }

    tracing::debug!(
        "selected {} of {} articles (sort: {}, window: {})",
        selected.len(),
        catalog.len(),
        config.sort_key,
        config.time_window
    );

    selected
}

fn recency_key(article: &Article) -> DateTime<Utc> {
    article.published_at().unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn credibility_key(article: &Article) -> f64 {
    let score = article.verification_score();
    if score.is_nan() {
        0.0
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AiVerification, Author, VerificationStatus};
    use chrono::TimeZone;

    fn article(id: &str, votes: i64, tags: &[&str], created_at: &str, score: Option<f64>) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            description: format!("Description for {}", id),
            content: None,
            image_url: None,
            source: "test".to_string(),
            url: format!("https://example.com/{}", id),
            author: Author {
                id: "author1".to_string(),
                name: "Test Author".to_string(),
                avatar: None,
            },
            created_at: created_at.to_string(),
            votes,
            comment_count: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ai_verification: score.map(|score| AiVerification {
                status: VerificationStatus::Verified,
                score,
            }),
            analysis: None,
        }
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 16, 8, 0, 0).unwrap()
    }

    fn catalog() -> Vec<Article> {
        vec![
            article("1", 342, &["Technology", "Health"], "2025-02-15T09:23:00Z", Some(0.89)),
            article("2", 287, &["Environment", "Politics"], "2025-02-14T16:45:00Z", Some(0.95)),
            article("3", 312, &["Technology", "Business"], "2025-02-13T11:30:00Z", Some(0.65)),
            article("4", 198, &["Health", "Science"], "2025-01-12T14:15:00Z", None),
        ]
    }

    #[test]
    fn test_tag_filter_then_votes() {
        let catalog = vec![
            article("a", 10, &["Tech"], "2025-02-10T00:00:00Z", None),
            article("b", 50, &["Health"], "2025-02-11T00:00:00Z", None),
            article("c", 30, &["Tech"], "2025-02-12T00:00:00Z", None),
        ];
        let config = FilterConfig::new()
            .with_tags(["Tech"])
            .with_sort(SortKey::ByVotesDescending);

        let selected = select_with_now(&catalog, &config, now());
        let votes: Vec<i64> = selected.iter().map(|a| a.votes).collect();
        assert_eq!(votes, vec![30, 10]);
    }

    #[test]
    fn test_empty_config_is_permutation() {
        let catalog = catalog();
        let selected = select_with_now(&catalog, &FilterConfig::new(), now());
        assert_eq!(selected.len(), catalog.len());
        for a in &catalog {
            assert!(selected.contains(a));
        }
        assert_eq!(ids(&selected), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_single_tag_only_returns_tagged() {
        let catalog = catalog();
        let config = FilterConfig::new().with_tags(["Health"]);
        let selected = select_with_now(&catalog, &config, now());
        assert!(!selected.is_empty());
        assert!(selected.iter().all(|a| a.tags.iter().any(|t| t == "Health")));
    }

    #[test]
    fn test_tags_match_any() {
        let catalog = catalog();
        let config = FilterConfig::new().with_tags(["Politics", "Business"]);
        let selected = select_with_now(&catalog, &config, now());
        assert_eq!(ids(&selected), vec!["3", "2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let mut catalog = catalog();
        catalog[1].title = "Climate Summit Reaches Agreement".to_string();
        catalog[2].description = "A QUANTUM leap in computing".to_string();

        let by_title = FilterConfig::new().with_query("climate");
        assert_eq!(ids(&select_with_now(&catalog, &by_title, now())), vec!["2"]);

        let by_description = FilterConfig::new().with_query("Quantum");
        assert_eq!(ids(&select_with_now(&catalog, &by_description, now())), vec!["3"]);

        let none = FilterConfig::new().with_query("nothing like this");
        assert!(select_with_now(&catalog, &none, now()).is_empty());
    }

    #[test]
    fn test_tags_and_search_combine_with_and() {
        let mut catalog = catalog();
        catalog[0].title = "Medical AI breakthrough".to_string();
        catalog[3].title = "Medical study".to_string();

        let config = FilterConfig::new().with_tags(["Technology"]).with_query("medical");
        assert_eq!(ids(&select_with_now(&catalog, &config, now())), vec!["1"]);
    }

    #[test]
    fn test_votes_sort_is_stable() {
        let catalog = vec![
            article("x", 5, &["Tech"], "2025-02-10T00:00:00Z", None),
            article("y", 9, &["Tech"], "2025-02-10T00:00:00Z", None),
            article("z", 5, &["Tech"], "2025-02-10T00:00:00Z", None),
            article("w", 5, &["Tech"], "2025-02-10T00:00:00Z", None),
        ];
        let selected = select_with_now(&catalog, &FilterConfig::new(), now());
        assert_eq!(ids(&selected), vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn test_negative_votes_sort_last() {
        let catalog = vec![
            article("neg", -3, &["Tech"], "2025-02-10T00:00:00Z", None),
            article("zero", 0, &["Tech"], "2025-02-10T00:00:00Z", None),
        ];
        let selected = select_with_now(&catalog, &FilterConfig::new(), now());
        assert_eq!(ids(&selected), vec!["zero", "neg"]);
    }

    #[test]
    fn test_recency_sort_puts_malformed_timestamps_last() {
        let mut catalog = catalog();
        catalog.push(article("bad", 1000, &["Technology"], "yesterday-ish", None));
        let config = FilterConfig::new().with_sort(SortKey::ByRecencyDescending);
        let selected = select_with_now(&catalog, &config, now());
        assert_eq!(ids(&selected), vec!["1", "2", "3", "4", "bad"]);
    }

    #[test]
    fn test_recency_sort_compares_instants_not_strings() {
        let catalog = vec![
            article("utc", 1, &[], "2025-02-10T10:00:00Z", None),
            // 09:00 UTC written with a +02:00 offset, earlier than the UTC one.
            article("offset", 1, &[], "2025-02-10T11:00:00+02:00", None),
        ];
        let config = FilterConfig::new().with_sort(SortKey::ByRecencyDescending);
        assert_eq!(ids(&select_with_now(&catalog, &config, now())), vec!["utc", "offset"]);
    }

    #[test]
    fn test_credibility_sort_treats_missing_score_as_zero() {
        let mut catalog = catalog();
        catalog.push(article("zero", 1, &[], "2025-02-10T00:00:00Z", Some(0.0)));
        let config = FilterConfig::new().with_sort(SortKey::ByCredibilityDescending);
        let selected = select_with_now(&catalog, &config, now());
        // "4" has no score and ties with the explicit zero, keeping catalog order.
        assert_eq!(ids(&selected), vec!["2", "1", "3", "4", "zero"]);
    }

    #[test]
    fn test_time_window_excludes_old_and_malformed() {
        let mut catalog = catalog();
        catalog.push(article("bad", 1, &[], "not a date", None));

        let week = FilterConfig::new().with_window(TimeWindow::Week);
        assert_eq!(ids(&select_with_now(&catalog, &week, now())), vec!["1", "3", "2"]);

        let today = FilterConfig::new().with_window(TimeWindow::Today);
        assert_eq!(ids(&select_with_now(&catalog, &today, now())), vec!["1"]);

        let all = FilterConfig::new().with_window(TimeWindow::All);
        assert_eq!(select_with_now(&catalog, &all, now()).len(), catalog.len());
    }

    #[test]
    fn test_select_is_pure_and_repeatable() {
        let catalog = catalog();
        let before = catalog.clone();
        let config = FilterConfig::new()
            .with_tags(["Technology", "Health"])
            .with_sort(SortKey::ByCredibilityDescending);

        let first = select_with_now(&catalog, &config, now());
        let second = select_with_now(&catalog, &config, now());
        assert_eq!(first, second);
        assert_eq!(catalog, before);

        let again = select_with_now(&first, &config, now());
        assert_eq!(again, first);
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut config = FilterConfig::new().with_query("ai").with_sort(SortKey::ByRecencyDescending);
        config.toggle_tag("Health");
        config.toggle_tag("Science");
        assert_eq!(config.selected_tags.len(), 2);
        config.toggle_tag("Health");
        assert!(!config.selected_tags.contains("Health"));

        config.reset();
        assert!(config.selected_tags.is_empty());
        assert!(config.search_query.is_empty());
        assert_eq!(config.sort_key, SortKey::ByRecencyDescending);
    }

    #[test]
    fn test_parse_sort_and_window() {
        assert_eq!("votes".parse::<SortKey>().unwrap(), SortKey::ByVotesDescending);
        assert_eq!("Newest".parse::<SortKey>().unwrap(), SortKey::ByRecencyDescending);
        assert_eq!("credibility".parse::<SortKey>().unwrap(), SortKey::ByCredibilityDescending);
        assert!("hot".parse::<SortKey>().is_err());

        assert_eq!("".parse::<TimeWindow>().unwrap(), TimeWindow::All);
        assert_eq!("month".parse::<TimeWindow>().unwrap(), TimeWindow::Month);
        assert!("year".parse::<TimeWindow>().is_err());
    }
}
