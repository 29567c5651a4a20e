use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let cors = if app_state.config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/test", get(handlers::api_test))
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/rate", post(handlers::rate_handler))
        .route("/api/analytics", get(handlers::analytics_handler))
        .route("/api/export/{kind}", get(handlers::export_handler))
        .route(
            "/api/research-summary",
            get(handlers::research_summary_handler),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
