use std::sync::Arc;

use crate::engagement::assistant::ReplyAssistant;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// Pluggable reply assistant. Default: LlmAssistant over the chat-completion API.
    pub assistant: Arc<dyn ReplyAssistant>,
}
