//! Axum route handlers for tweets, threads, reply generation, brand settings,
//! feedback, simulation, and analytics.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::engagement::analytics::AnalyticsReport;
use crate::engagement::prompts::DEFAULT_TONE;
use crate::engagement::simulate::{random_tweet_text, random_username};
use crate::errors::AppError;
use crate::models::feedback::FeedbackEntry;
use crate::models::settings::BrandSettings;
use crate::models::timestamp_now;
use crate::models::tweet::{Reply, ReplyHistoryEntry, Tweet};
use crate::state::AppState;
use crate::store::NewTweet;

const DEFAULT_REPLY_USERNAME: &str = "@brand_support";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TweetListResponse {
    pub tweets: Vec<Tweet>,
    pub total: usize,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ThreadReplyRequest {
    pub username: Option<String>,
    pub text: Option<String>,
    pub timestamp: Option<String>,
    pub auto_generated: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReplyRequest {
    pub tweet_id: Option<String>,
    pub tweet_text: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReplyResponse {
    pub reply: String,
    /// `success` when the model answered, `fallback` when the stock reply was substituted.
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct BrandSettingsUpdateResponse {
    pub message: &'static str,
    pub settings: BrandSettings,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimulateTweetRequest {
    pub tweet_text: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimulateTweetResponse {
    pub message: &'static str,
    pub tweet: Tweet,
}

/// Treats a missing or whitespace-only string as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/tweets
pub async fn handle_list_tweets(State(state): State<AppState>) -> Json<TweetListResponse> {
    let tweets = state.store.tweets().await;
    Json(TweetListResponse {
        total: tweets.len(),
        tweets,
        timestamp: timestamp_now(),
    })
}

/// GET /api/tweets/:id
pub async fn handle_get_tweet(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> Result<Json<Tweet>, AppError> {
    state
        .store
        .tweet(&tweet_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tweet {tweet_id} not found")))
}

/// POST /api/tweets/:id/thread
///
/// Appends a reply to the tweet's thread and to the reply history.
/// Nothing is mutated unless the reply text is non-blank and the tweet exists.
pub async fn handle_add_reply(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
    payload: Result<Json<ThreadReplyRequest>, JsonRejection>,
) -> Result<Json<Tweet>, AppError> {
    let Json(request) = payload?;

    let text = non_blank(request.text)
        .ok_or_else(|| AppError::Validation("Reply text cannot be empty".to_string()))?;

    let reply = Reply {
        username: non_blank(request.username).unwrap_or_else(|| DEFAULT_REPLY_USERNAME.to_string()),
        text,
        timestamp: non_blank(request.timestamp).unwrap_or_else(timestamp_now),
        auto_generated: request.auto_generated.unwrap_or(false),
    };

    state
        .store
        .append_reply(&tweet_id, reply)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tweet {tweet_id} not found")))
}

/// POST /api/generate-reply
///
/// Resolves the tweet text from `tweet_id` (preferred) or `tweet_text`, then
/// asks the assistant for a reply in the requested tone.
pub async fn handle_generate_reply(
    State(state): State<AppState>,
    payload: Result<Json<GenerateReplyRequest>, JsonRejection>,
) -> Result<Json<GenerateReplyResponse>, AppError> {
    let Json(request) = payload?;

    let tweet_text = match (non_blank(request.tweet_id), non_blank(request.tweet_text)) {
        (Some(tweet_id), _) => state
            .store
            .tweet(&tweet_id)
            .await
            .map(|t| t.text)
            .ok_or_else(|| AppError::NotFound(format!("Tweet {tweet_id} not found")))?,
        (None, Some(text)) => text,
        (None, None) => {
            return Err(AppError::Validation(
                "Missing tweet_id or tweet_text".to_string(),
            ))
        }
    };

    let settings = state.store.brand_settings().await;
    let tone = non_blank(request.tone)
        .or_else(|| settings.default_tone.clone())
        .unwrap_or_else(|| DEFAULT_TONE.to_string());
    let settings = (!settings.is_empty()).then_some(settings);

    let outcome = state
        .assistant
        .generate_reply(&tweet_text, settings.as_ref(), &tone)
        .await;

    let status = if outcome.is_fallback() { "fallback" } else { "success" };
    Ok(Json(GenerateReplyResponse {
        reply: outcome.into_value(),
        status,
        timestamp: timestamp_now(),
    }))
}

/// GET /api/brand-settings
pub async fn handle_get_brand_settings(State(state): State<AppState>) -> Json<BrandSettings> {
    Json(state.store.brand_settings().await)
}

/// POST /api/brand-settings
///
/// Replaces the stored settings wholesale.
pub async fn handle_update_brand_settings(
    State(state): State<AppState>,
    payload: Result<Json<BrandSettings>, JsonRejection>,
) -> Result<Json<BrandSettingsUpdateResponse>, AppError> {
    let Json(settings) = payload?;
    if settings.is_empty() {
        return Err(AppError::Validation(
            "No settings data provided".to_string(),
        ));
    }

    let settings = state.store.replace_brand_settings(settings).await;

    Ok(Json(BrandSettingsUpdateResponse {
        message: "Brand settings updated successfully",
        settings,
        timestamp: timestamp_now(),
    }))
}

/// GET /api/replies
pub async fn handle_list_replies(State(state): State<AppState>) -> Json<Vec<ReplyHistoryEntry>> {
    Json(state.store.replies().await)
}

/// POST /api/feedback
pub async fn handle_record_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackEntry>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(entry) = payload?;
    if entry.is_empty() {
        return Err(AppError::Validation(
            "No feedback data provided".to_string(),
        ));
    }

    state.store.append_feedback(entry).await;

    Ok(Json(FeedbackResponse {
        message: "Feedback recorded successfully",
        status: "success",
        timestamp: timestamp_now(),
    }))
}

/// GET /api/feedback
pub async fn handle_list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackEntry>> {
    Json(state.store.feedback().await)
}

/// POST /api/simulate-new-tweet
///
/// Body is optional. Missing text is drawn from the demo templates, a missing
/// username becomes `@userNNNN`; sentiment always comes from the assistant.
/// A body that is present but not a valid request is rejected.
pub async fn handle_simulate_tweet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SimulateTweetResponse>, AppError> {
    let request = parse_optional_body::<SimulateTweetRequest>(&body)?;

    let (text, username) = {
        let mut rng = rand::rng();
        let text = non_blank(request.tweet_text).unwrap_or_else(|| random_tweet_text(&mut rng));
        let username = non_blank(request.username).unwrap_or_else(|| random_username(&mut rng));
        (text, username)
    };

    let sentiment = state.assistant.classify_sentiment(&text).await.into_value();

    let tweet = state
        .store
        .append_tweet(NewTweet {
            username,
            text,
            sentiment,
        })
        .await;

    Ok(Json(SimulateTweetResponse {
        message: "New tweet created successfully",
        tweet,
    }))
}

/// Empty or whitespace-only bodies yield the default request.
fn parse_optional_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

/// GET /api/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let report = state.store.analytics().await;
    info!(
        "Analytics computed over {} tweets, {} replies",
        report.total_tweets, report.total_replies
    );
    Json(report)
}
