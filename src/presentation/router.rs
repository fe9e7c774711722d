use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chatbot_handler, diabetes_handler, emergency_info_handler, health_handler,
    health_tips_handler, heart_handler, kidney_handler, nearby_doctors_handler, status_handler,
};
use crate::presentation::state::AppState;

/// Slack on top of the upload ceiling so multipart framing overhead does not
/// trip the transport-level limit before the intake policy can answer.
const BODY_LIMIT_SLACK: usize = 1_048_576;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = (state.settings.uploads.max_content_length as usize)
        .saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/status", get(status_handler))
        .route("/chatbot", post(chatbot_handler))
        .route("/api/nearby-doctors", post(nearby_doctors_handler))
        .route("/diabetes", post(diabetes_handler))
        .route("/heart", post(heart_handler))
        .route("/kidney", post(kidney_handler))
        .route("/emergency_info", get(emergency_info_handler))
        .route("/health_tips", get(health_tips_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
