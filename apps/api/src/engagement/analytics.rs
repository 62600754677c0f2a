//! Engagement analytics computed over the stored collections.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::engagement::sentiment::Sentiment;
use crate::models::feedback::FeedbackEntry;
use crate::models::tweet::{ReplyHistoryEntry, Tweet};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub urgent: usize,
}

impl SentimentCounts {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Urgent => self.urgent += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_tweets: usize,
    pub total_replies: usize,
    pub total_feedback: usize,
    pub sentiment_counts: SentimentCounts,
    /// Mean minutes from tweet to reply; `None` when no reply has usable timestamps.
    pub avg_response_minutes: Option<f64>,
    /// Percentage of rated feedback that is positive; `None` when nothing is rated.
    pub satisfaction_rate: Option<f64>,
}

pub fn summarize(
    tweets: &[Tweet],
    replies: &[ReplyHistoryEntry],
    feedback: &[FeedbackEntry],
) -> AnalyticsReport {
    let mut sentiment_counts = SentimentCounts::default();
    for tweet in tweets {
        sentiment_counts.record(tweet.sentiment);
    }

    AnalyticsReport {
        total_tweets: tweets.len(),
        total_replies: replies.len(),
        total_feedback: feedback.len(),
        sentiment_counts,
        avg_response_minutes: average_response_minutes(tweets, replies),
        satisfaction_rate: satisfaction_rate(feedback),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

fn average_response_minutes(tweets: &[Tweet], replies: &[ReplyHistoryEntry]) -> Option<f64> {
    let posted: HashMap<&str, DateTime<FixedOffset>> = tweets
        .iter()
        .filter_map(|t| parse_timestamp(&t.timestamp).map(|ts| (t.id.as_str(), ts)))
        .collect();

    let minutes: Vec<f64> = replies
        .iter()
        .filter_map(|r| {
            let tweeted = posted.get(r.tweet_id.as_str())?;
            let replied = parse_timestamp(&r.timestamp)?;
            Some((replied - *tweeted).num_seconds() as f64 / 60.0)
        })
        .collect();

    if minutes.is_empty() {
        return None;
    }
    Some(minutes.iter().sum::<f64>() / minutes.len() as f64)
}

fn satisfaction_rate(feedback: &[FeedbackEntry]) -> Option<f64> {
    let rated = feedback.iter().filter(|f| f.feedback.is_some()).count();
    if rated == 0 {
        return None;
    }
    let positive = feedback.iter().filter(|f| f.is_positive()).count();
    Some((positive as f64 / rated as f64 * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_tweets;

    fn history(tweet_id: &str, timestamp: &str) -> ReplyHistoryEntry {
        ReplyHistoryEntry {
            tweet_id: tweet_id.to_string(),
            tweet_text: String::new(),
            reply: "ok".to_string(),
            timestamp: timestamp.to_string(),
            auto_generated: false,
        }
    }

    fn rated(label: &str) -> FeedbackEntry {
        FeedbackEntry {
            feedback: Some(serde_json::json!(label)),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_sentiment_counts() {
        let report = summarize(&seed_tweets(), &[], &[]);
        assert_eq!(report.total_tweets, 6);
        assert_eq!(
            report.sentiment_counts,
            SentimentCounts {
                positive: 2,
                negative: 2,
                neutral: 2,
                urgent: 0,
            }
        );
        assert_eq!(report.avg_response_minutes, None);
        assert_eq!(report.satisfaction_rate, None);
    }

    #[test]
    fn test_average_response_minutes() {
        // 001 posted 10:12, 002 posted 11:45
        let replies = vec![
            history("001", "2025-05-17T10:22:00Z"),
            history("002", "2025-05-17T12:15:00Z"),
            history("unknown", "2025-05-17T12:15:00Z"),
            history("003", "not a timestamp"),
        ];
        let report = summarize(&seed_tweets(), &replies, &[]);
        assert_eq!(report.total_replies, 4);
        let avg = report.avg_response_minutes.unwrap();
        assert!((avg - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_satisfaction_ignores_unrated_feedback() {
        let feedback = vec![
            rated("positive"),
            rated("positive"),
            rated("negative"),
            FeedbackEntry::default(),
        ];
        let report = summarize(&[], &[], &feedback);
        assert_eq!(report.total_feedback, 4);
        assert_eq!(report.satisfaction_rate, Some(67.0));
    }
}
