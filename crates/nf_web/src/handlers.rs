use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nf_core::{
    select, AnalysisReport, Article, Assessment, CardBadge, Classification, Comment,
    FilterConfig, MetricReadout, Metrics, SortKey, SubmissionDraft, TimeWindow,
    UserProfile, VerificationStatus, VoteDirection, VoteState, ALL_TAGS,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    /// Comma separated tag list
    pub tags: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub window: Option<String>,
}

impl FeedParams {
    pub fn to_filter(&self) -> nf_core::Result<FilterConfig> {
        let tags = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let sort_key = match self.sort.as_deref() {
            Some(s) => s.parse::<SortKey>()?,
            None => SortKey::default(),
        };
        let time_window = match self.window.as_deref() {
            Some(w) => w.parse::<TimeWindow>()?,
            None => TimeWindow::default(),
        };

        Ok(FilterConfig::new()
            .with_tags(tags)
            .with_query(self.q.clone().unwrap_or_default())
            .with_sort(sort_key)
            .with_window(time_window))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub article: Article,
    pub badge: CardBadge,
}

pub async fn feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> ApiResult<Json<Vec<FeedItem>>> {
    let config = params.to_filter()?;
    let catalog = state.catalog.articles().await?;
    let items = select(&catalog, &config)
        .into_iter()
        .map(|article| FeedItem {
            badge: article.badge(),
            article,
        })
        .collect();
    Ok(Json(items))
}

pub async fn list_tags() -> impl IntoResponse {
    Json(ALL_TAGS)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub badge: CardBadge,
    pub assessment: Option<Assessment>,
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArticleDetail>> {
    let article = state
        .catalog
        .article(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("article {}", id)))?;
    Ok(Json(ArticleDetail {
        badge: article.badge(),
        assessment: article.assessment(),
        article,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreads {
    pub total: usize,
    pub comments: Vec<Comment>,
}

pub async fn get_comments(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentThreads>> {
    if state.catalog.article(&id).await?.is_none() {
        return Err(ApiError::not_found(format!("article {}", id)));
    }
    let comments = state.catalog.comments(&id).await?;
    Ok(Json(CommentThreads {
        total: nf_core::comments::total_comments(&comments),
        comments,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub credibility: f64,
    pub bias: f64,
    pub sentiment: f64,
    pub toxicity: f64,
    #[serde(default)]
    pub status: Option<VerificationStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Derived from credibility
    pub status: VerificationStatus,
    pub supplied_status: Option<VerificationStatus>,
    pub display_status: VerificationStatus,
    pub tiers: Classification,
    pub readouts: Vec<MetricReadout>,
}

pub async fn classify(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let metrics = Metrics::new(req.credibility, req.bias, req.sentiment, req.toxicity);
    let assessment = Assessment::new(metrics, req.status);
    Json(ClassifyResponse {
        status: assessment.classification.status,
        supplied_status: assessment.supplied_status,
        display_status: assessment.display_status(),
        tiers: assessment.classification,
        readouts: assessment.readouts,
    })
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SubmissionDraft>,
) -> ApiResult<Json<AnalysisReport>> {
    Ok(Json(state.analyzer.analyze_draft(&draft).await?))
}

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub draft: SubmissionDraft,
    #[serde(default)]
    pub analysis: Option<AnalysisReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub status: String,
    pub message: String,
}

pub async fn create_submission(
    Json(req): Json<SubmissionRequest>,
) -> ApiResult<(StatusCode, Json<SubmissionReceipt>)> {
    req.draft.validate_for_submit(req.analysis.as_ref())?;
    info!("📝 Submission accepted for review ({} tags)", req.draft.tags.len());
    Ok((
        StatusCode::ACCEPTED,
        Json(SubmissionReceipt {
            status: "pending_review".to_string(),
            message: "Your post is now pending review and will be published soon".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub count: i64,
    #[serde(default)]
    pub user_vote: Option<VoteDirection>,
    pub direction: VoteDirection,
}

pub async fn vote(Json(req): Json<VoteRequest>) -> Json<VoteState> {
    let state = VoteState {
        count: req.count,
        user_vote: req.user_vote,
    };
    Json(state.toggle(req.direction))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    state
        .catalog
        .profile(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("user {}", id)))
}

pub async fn get_user_posts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Article>>> {
    if state.catalog.profile(&id).await?.is_none() {
        return Err(ApiError::not_found(format!("user {}", id)));
    }
    Ok(Json(state.catalog.posts_by(&id).await?))
}

pub async fn health() -> &'static str {
    "ok"
}
