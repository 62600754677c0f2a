use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Caller-supplied feedback on a generated reply. Append-only.
///
/// The payload is an arbitrary JSON object: the keys the server reads are
/// pulled out, but their values keep whatever JSON type the caller sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<Value>,
    /// Rating label, `"positive"` or `"negative"` from the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedbackEntry {
    pub fn is_empty(&self) -> bool {
        self.tweet_id.is_none()
            && self.reply.is_none()
            && self.feedback.is_none()
            && self.tone.is_none()
            && self.timestamp.is_none()
            && self.extra.is_empty()
    }

    pub fn is_positive(&self) -> bool {
        self.feedback.as_ref() == Some(&json!("positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_value_types_round_trip() {
        let input = json!({
            "tweet_id": 1,
            "feedback": true,
            "timestamp": 1700000000,
            "rating": 5
        });
        let entry: FeedbackEntry = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(entry.timestamp, Some(json!(1700000000)));
        assert_eq!(entry.extra["rating"], json!(5));
        assert!(!entry.is_positive());
        assert_eq!(serde_json::to_value(&entry).unwrap(), input);
    }

    #[test]
    fn test_positive_label() {
        let entry: FeedbackEntry =
            serde_json::from_value(json!({"feedback": "positive"})).unwrap();
        assert!(entry.is_positive());
    }
}
