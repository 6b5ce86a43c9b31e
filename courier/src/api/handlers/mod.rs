pub mod health;
pub mod places;
pub mod shares;
pub mod shipping;

pub use health::health_check;

use axum::http::Uri;

use crate::api::response::{ApiResponse, ErrorCode};

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiResponse<()> {
    ApiResponse::error(ErrorCode::NotFound, format!("No route for {}", uri.path()))
}
