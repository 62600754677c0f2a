// Prompt templates for reply generation and sentiment classification.
// All prompts for the engagement module are defined here.

use crate::models::settings::BrandSettings;

pub const DEFAULT_TONE: &str = "Friendly";
const DEFAULT_BRAND_NAME: &str = "our brand";
const DEFAULT_INDUSTRY: &str = "Technology";

/// Hard ceiling communicated to the model; replies must fit in one tweet.
pub const MAX_REPLY_CHARS: usize = 280;

pub const SENTIMENT_SYSTEM: &str =
    "You are a sentiment analysis tool that only responds with a single word.";

/// System + user prompt pair sent to the completion API.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds the reply-generation prompts from brand settings, tone, and tweet text.
///
/// Tone is free-form; it is lower-cased only where it appears in the user prompt.
pub fn build_reply_prompts(
    tweet_text: &str,
    settings: Option<&BrandSettings>,
    tone: &str,
) -> PromptPair {
    let brand_name = settings
        .and_then(|s| s.brand_name.as_deref())
        .unwrap_or(DEFAULT_BRAND_NAME);
    let industry = settings
        .and_then(|s| s.industry.as_deref())
        .unwrap_or(DEFAULT_INDUSTRY);
    let keywords = settings.map(BrandSettings::keywords).unwrap_or_default();

    let mut system = format!(
        "You are an AI social media manager for {brand_name}, a company in the {industry} industry.\n\
         Your task is to respond to tweets in a way that:\n\
         1. Reflects the brand's voice and values\n\
         2. Addresses the user's specific question or comment\n\
         3. Is empathetic and personable\n\
         4. Is concise (under {MAX_REPLY_CHARS} characters)\n\
         5. Uses a {tone} tone\n"
    );

    if !keywords.is_empty() {
        system.push_str(&format!(
            "\nPay special attention to these keywords that are important to our brand: {}",
            keywords.join(", ")
        ));
    }

    let user = format!(
        "A Twitter user posted the following tweet:\n\"{tweet_text}\"\n\n\
         Please craft a response in a {} tone that addresses their message and represents {brand_name} well.",
        tone.to_lowercase()
    );

    PromptPair { system, user }
}

/// Builds the single-label classification prompts.
pub fn build_sentiment_prompts(text: &str) -> PromptPair {
    PromptPair {
        system: SENTIMENT_SYSTEM.to_string(),
        user: format!(
            "Analyze the sentiment of this tweet and classify it as one of: positive, negative, neutral, or urgent.\n\
             Tweet: \"{text}\"\n\n\
             Only respond with one word: positive, negative, neutral, or urgent."
        ),
    }
}
