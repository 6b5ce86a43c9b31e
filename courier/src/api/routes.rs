use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let places = Router::new()
        .route("/restaurants", get(handlers::places::search_restaurants))
        .route("/autocomplete", get(handlers::places::autocomplete));
    let shipping = Router::new().route("/calculate", get(handlers::shipping::calculate_shipping));
    let shares = Router::new().route("/files", post(handlers::shares::share_file));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        .nest("/places", places)
        .nest("/shipping", shipping)
        .nest("/shares", shares)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
