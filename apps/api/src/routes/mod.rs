pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::engagement::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Tweets and threads
        .route("/api/tweets", get(handlers::handle_list_tweets))
        .route("/api/tweets/:id", get(handlers::handle_get_tweet))
        .route("/api/tweets/:id/thread", post(handlers::handle_add_reply))
        .route(
            "/api/simulate-new-tweet",
            post(handlers::handle_simulate_tweet),
        )
        // Assistant
        .route("/api/generate-reply", post(handlers::handle_generate_reply))
        // Brand settings, history, feedback
        .route(
            "/api/brand-settings",
            get(handlers::handle_get_brand_settings).post(handlers::handle_update_brand_settings),
        )
        .route("/api/replies", get(handlers::handle_list_replies))
        .route(
            "/api/feedback",
            get(handlers::handle_list_feedback).post(handlers::handle_record_feedback),
        )
        .route("/api/analytics", get(handlers::handle_analytics))
        .with_state(state)
}
