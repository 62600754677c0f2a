// Engagement: prompt building, the reply assistant, sentiment labels,
// tweet simulation, and analytics.
// All LLM calls go through llm_client via the ReplyAssistant trait.

pub mod analytics;
pub mod assistant;
pub mod handlers;
pub mod prompts;
pub mod sentiment;
pub mod simulate;
