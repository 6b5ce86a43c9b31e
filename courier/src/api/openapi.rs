use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courier API",
        version = "0.1.0",
        description = "Restaurant search, place autocomplete, shipping quotes and file conversion shares.",
    ),
    paths(
        handlers::health::health_check,
        handlers::places::search_restaurants,
        handlers::places::autocomplete,
        handlers::shipping::calculate_shipping,
        handlers::shares::share_file,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Places
        dto::places::RestaurantResponse,
        dto::places::LocationResponse,
        dto::places::SuggestionResponse,
        // Shipping
        dto::shipping::CitySummary,
        dto::shipping::ShippingQuoteResponse,
        // Shares
        dto::shares::ShareFileRequest,
        dto::shares::SharedFileResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::UpstreamsStatus,
        handlers::health::UpstreamStatus,
        crate::config::PlacesApiVersion,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "places", description = "Restaurant search and place autocomplete"),
        (name = "shipping", description = "Distance and weight based shipping quotes"),
        (name = "shares", description = "Convert a remote file and share the result"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
