//! In-memory store for settings, tweets, reply history, and feedback,
//! mirrored to one JSON file per collection.
//!
//! Every mutation runs mutate-then-persist while holding the store lock, so
//! concurrent writers are serialized. A failed save is logged and the
//! in-memory change is kept.

pub mod persist;
pub mod seed;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::engagement::analytics::{summarize, AnalyticsReport};
use crate::engagement::sentiment::Sentiment;
use crate::engagement::simulate::new_tweet_id;
use crate::models::feedback::FeedbackEntry;
use crate::models::settings::BrandSettings;
use crate::models::timestamp_now;
use crate::models::tweet::{Reply, ReplyHistoryEntry, Tweet};

use self::persist::{load_json, save_json, StoreError};

const SETTINGS_FILE: &str = "brand_settings.json";
const TWEETS_FILE: &str = "tweets.json";
const REPLIES_FILE: &str = "replies.json";
const FEEDBACK_FILE: &str = "feedback.json";

#[derive(Debug)]
struct StorePaths {
    settings: PathBuf,
    tweets: PathBuf,
    replies: PathBuf,
    feedback: PathBuf,
}

impl StorePaths {
    fn new(data_dir: &Path) -> Self {
        Self {
            settings: data_dir.join(SETTINGS_FILE),
            tweets: data_dir.join(TWEETS_FILE),
            replies: data_dir.join(REPLIES_FILE),
            feedback: data_dir.join(FEEDBACK_FILE),
        }
    }
}

#[derive(Debug)]
struct Collections {
    brand_settings: BrandSettings,
    tweets: Vec<Tweet>,
    replies: Vec<ReplyHistoryEntry>,
    feedback: Vec<FeedbackEntry>,
}

/// A tweet about to be appended; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewTweet {
    pub username: String,
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Collections>>,
    paths: Arc<StorePaths>,
}

impl Store {
    /// Loads every collection from `data_dir`. A missing or unreadable file
    /// leaves that collection at its default (seed tweets, otherwise empty).
    pub async fn load(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: data_dir.to_path_buf(),
                source,
            })?;

        let paths = StorePaths::new(data_dir);

        let brand_settings: BrandSettings = load_or_default(&paths.settings, BrandSettings::default).await;
        if !brand_settings.is_empty() {
            info!(
                "Loaded brand settings: {}",
                brand_settings.brand_name.as_deref().unwrap_or("Unknown")
            );
        }

        let tweets: Vec<Tweet> = load_or_default(&paths.tweets, seed::seed_tweets).await;
        let replies: Vec<ReplyHistoryEntry> = load_or_default(&paths.replies, Vec::new).await;
        let feedback: Vec<FeedbackEntry> = load_or_default(&paths.feedback, Vec::new).await;

        info!(
            "Store ready: {} tweets, {} replies, {} feedback entries",
            tweets.len(),
            replies.len(),
            feedback.len()
        );

        Ok(Self {
            inner: Arc::new(Mutex::new(Collections {
                brand_settings,
                tweets,
                replies,
                feedback,
            })),
            paths: Arc::new(paths),
        })
    }

    pub async fn tweets(&self) -> Vec<Tweet> {
        self.inner.lock().await.tweets.clone()
    }

    pub async fn tweet(&self, id: &str) -> Option<Tweet> {
        self.inner
            .lock()
            .await
            .tweets
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn brand_settings(&self) -> BrandSettings {
        self.inner.lock().await.brand_settings.clone()
    }

    pub async fn replies(&self) -> Vec<ReplyHistoryEntry> {
        self.inner.lock().await.replies.clone()
    }

    pub async fn feedback(&self) -> Vec<FeedbackEntry> {
        self.inner.lock().await.feedback.clone()
    }

    pub async fn analytics(&self) -> AnalyticsReport {
        let guard = self.inner.lock().await;
        summarize(&guard.tweets, &guard.replies, &guard.feedback)
    }

    /// Appends `reply` to the tweet's thread and a copy to the reply history.
    /// Returns the updated tweet, or `None` if `tweet_id` is unknown.
    pub async fn append_reply(&self, tweet_id: &str, reply: Reply) -> Option<Tweet> {
        let mut guard = self.inner.lock().await;

        let tweet = guard.tweets.iter_mut().find(|t| t.id == tweet_id)?;
        let entry = ReplyHistoryEntry::for_reply(tweet, &reply);
        tweet.thread.push(reply);
        let updated = tweet.clone();
        guard.replies.push(entry);

        persist(&self.paths.tweets, &guard.tweets).await;
        persist(&self.paths.replies, &guard.replies).await;

        info!("Added reply to tweet {tweet_id}");
        Some(updated)
    }

    /// Replaces the settings wholesale; no field-level merge.
    pub async fn replace_brand_settings(&self, settings: BrandSettings) -> BrandSettings {
        let mut guard = self.inner.lock().await;
        guard.brand_settings = settings;
        persist(&self.paths.settings, &guard.brand_settings).await;

        info!(
            "Updated brand settings for {}",
            guard.brand_settings.brand_name.as_deref().unwrap_or("Unknown")
        );
        guard.brand_settings.clone()
    }

    /// Appends a tweet under a fresh 8-character id that no stored tweet uses.
    pub async fn append_tweet(&self, draft: NewTweet) -> Tweet {
        let mut guard = self.inner.lock().await;

        let taken: HashSet<String> = guard.tweets.iter().map(|t| t.id.clone()).collect();
        let tweet = Tweet {
            id: new_tweet_id(&taken),
            username: draft.username,
            text: draft.text,
            timestamp: timestamp_now(),
            sentiment: draft.sentiment,
            thread: Vec::new(),
        };
        guard.tweets.push(tweet.clone());
        persist(&self.paths.tweets, &guard.tweets).await;

        info!("Simulated new tweet {} from {}", tweet.id, tweet.username);
        tweet
    }

    /// Appends feedback, stamping it with the current time if it has none.
    pub async fn append_feedback(&self, mut entry: FeedbackEntry) -> FeedbackEntry {
        if entry.timestamp.is_none() {
            entry.timestamp = Some(Value::String(timestamp_now()));
        }

        let mut guard = self.inner.lock().await;
        guard.feedback.push(entry.clone());
        persist(&self.paths.feedback, &guard.feedback).await;

        info!("Feedback received: {entry:?}");
        entry
    }
}

async fn load_or_default<T, F>(path: &Path, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match load_json(path).await {
        Ok(Some(value)) => {
            info!("Loaded {}", path.display());
            value
        }
        Ok(None) => default(),
        Err(e) => {
            error!("Error loading {}: {e}", path.display());
            default()
        }
    }
}

async fn persist<T: serde::Serialize + ?Sized>(path: &Path, value: &T) {
    if let Err(e) = save_json(path, value).await {
        error!("Error saving {}: {e}", path.display());
    }
}
