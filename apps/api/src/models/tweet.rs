use serde::{Deserialize, Serialize};

use crate::engagement::sentiment::Sentiment;

/// A tweet-like record served to the dashboard. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub username: String,
    pub text: String,
    /// ISO-8601 string, kept verbatim so seed and caller-supplied values round-trip.
    pub timestamp: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub thread: Vec<Reply>,
}

/// A reply attached to exactly one tweet's thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub username: String,
    pub text: String,
    pub timestamp: String,
    #[serde(default)]
    pub auto_generated: bool,
}

/// Denormalized, append-only copy of a reply kept for the history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyHistoryEntry {
    pub tweet_id: String,
    pub tweet_text: String,
    pub reply: String,
    pub timestamp: String,
    #[serde(default)]
    pub auto_generated: bool,
}

impl ReplyHistoryEntry {
    pub fn for_reply(tweet: &Tweet, reply: &Reply) -> Self {
        Self {
            tweet_id: tweet.id.clone(),
            tweet_text: tweet.text.clone(),
            reply: reply.text.clone(),
            timestamp: reply.timestamp.clone(),
            auto_generated: reply.auto_generated,
        }
    }
}
