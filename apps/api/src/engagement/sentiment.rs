use serde::{Deserialize, Serialize};

/// Fixed label set every tweet is classified into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
    Urgent,
}

impl Sentiment {
    /// Scan order used when coercing free-form model output.
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Urgent => "urgent",
        }
    }

    /// Normalizes raw classifier output into a label.
    ///
    /// Exact match wins; otherwise the first label contained in the text;
    /// otherwise `Neutral`.
    pub fn from_model_output(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();

        if let Some(exact) = Self::ALL.iter().find(|s| s.as_str() == normalized) {
            return *exact;
        }

        Self::ALL
            .iter()
            .find(|s| normalized.contains(s.as_str()))
            .copied()
            .unwrap_or_default()
    }
}
