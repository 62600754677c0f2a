//! Reply assistant — pluggable, trait-based seam over the language model.
//!
//! Default: `LlmAssistant`, backed by `LlmClient`. Handlers only see the
//! trait, so tests swap in a deterministic stub.
//!
//! Failures never propagate as errors. Each operation returns an
//! `AiOutcome` carrying either the generated value or a fallback value plus
//! the reason, and the caller decides whether to surface the degradation.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::engagement::prompts::{build_reply_prompts, build_sentiment_prompts};
use crate::engagement::sentiment::Sentiment;
use crate::llm_client::{ChatRequest, LlmClient};
use crate::models::settings::BrandSettings;

pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm unable to generate a response at this time. Please try again later.";

const REPLY_MAX_TOKENS: u32 = 150;
const REPLY_TEMPERATURE: f32 = 0.7;
const SENTIMENT_MAX_TOKENS: u32 = 20;
const SENTIMENT_TEMPERATURE: f32 = 0.3;

/// Result of an assistant call: the model's answer, or a substitute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AiOutcome<T> {
    Generated(T),
    Fallback { value: T, reason: String },
}

impl<T> AiOutcome<T> {
    pub fn into_value(self) -> T {
        match self {
            AiOutcome::Generated(value) | AiOutcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AiOutcome::Fallback { .. })
    }
}

/// Carried in `AppState` as `Arc<dyn ReplyAssistant>`.
#[async_trait]
pub trait ReplyAssistant: Send + Sync {
    /// Whether the backing model is reachable in principle (API key present).
    fn is_configured(&self) -> bool;

    async fn generate_reply(
        &self,
        tweet_text: &str,
        settings: Option<&BrandSettings>,
        tone: &str,
    ) -> AiOutcome<String>;

    async fn classify_sentiment(&self, text: &str) -> AiOutcome<Sentiment>;
}

pub struct LlmAssistant {
    llm: LlmClient,
}

impl LlmAssistant {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ReplyAssistant for LlmAssistant {
    fn is_configured(&self) -> bool {
        self.llm.is_configured()
    }

    async fn generate_reply(
        &self,
        tweet_text: &str,
        settings: Option<&BrandSettings>,
        tone: &str,
    ) -> AiOutcome<String> {
        let prompts = build_reply_prompts(tweet_text, settings, tone);
        let request = ChatRequest {
            system: &prompts.system,
            user: &prompts.user,
            max_tokens: REPLY_MAX_TOKENS,
            temperature: REPLY_TEMPERATURE,
        };

        match self.llm.chat(request).await {
            Ok(reply) => {
                info!(
                    "Generated reply with tone '{tone}' for tweet: {}...",
                    preview(tweet_text)
                );
                AiOutcome::Generated(reply)
            }
            Err(e) => {
                warn!("Reply generation failed, using fallback: {e}");
                AiOutcome::Fallback {
                    value: FALLBACK_REPLY.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn classify_sentiment(&self, text: &str) -> AiOutcome<Sentiment> {
        let prompts = build_sentiment_prompts(text);
        let request = ChatRequest {
            system: &prompts.system,
            user: &prompts.user,
            max_tokens: SENTIMENT_MAX_TOKENS,
            temperature: SENTIMENT_TEMPERATURE,
        };

        match self.llm.chat(request).await {
            Ok(raw) => AiOutcome::Generated(Sentiment::from_model_output(&raw)),
            Err(e) => {
                warn!("Sentiment classification failed, defaulting to neutral: {e}");
                AiOutcome::Fallback {
                    value: Sentiment::Neutral,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// First 50 characters, for log lines.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(50) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

    fn unconfigured_assistant() -> LlmAssistant {
        let llm =
            LlmClient::new(None, DEFAULT_API_URL.to_string(), DEFAULT_MODEL.to_string()).unwrap();
        LlmAssistant::new(llm)
    }

    #[tokio::test]
    async fn test_generate_reply_falls_back_without_key() {
        let assistant = unconfigured_assistant();
        assert!(!assistant.is_configured());

        let outcome = assistant.generate_reply("hello", None, "Friendly").await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_value(), FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_classify_sentiment_falls_back_to_neutral() {
        let assistant = unconfigured_assistant();
        let outcome = assistant.classify_sentiment("my order is late").await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_value(), Sentiment::Neutral);
    }

    #[test]
    fn test_outcome_accessors() {
        let generated = AiOutcome::Generated(3);
        assert!(!generated.is_fallback());
        assert_eq!(generated.into_value(), 3);

        let fallback = AiOutcome::Fallback {
            value: 0,
            reason: "timeout".to_string(),
        };
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_value(), 0);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(60);
        assert_eq!(preview(&text).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
