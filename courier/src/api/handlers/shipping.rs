use axum::extract::State;
use validator::Validate;

use crate::api::dto::{ShippingQuery, ShippingQuoteResponse};
use crate::api::extractors::AppQuery;
use crate::api::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::CourierError;

/// `GET /shipping/calculate`
#[utoipa::path(
    get,
    path = "/shipping/calculate",
    tag = "shipping",
    operation_id = "shipping.calculate",
    params(ShippingQuery),
    responses(
        (status = 200, description = "Shipping quote", body = ShippingQuoteResponse),
        (status = 400, description = "Invalid query or unknown city", body = ApiError),
        (status = 500, description = "Location API failure", body = ApiError),
    )
)]
pub async fn calculate_shipping(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ShippingQuery>,
) -> ApiResponse<ShippingQuoteResponse> {
    if let Err(errors) = query.validate() {
        return CourierError::from(errors).into();
    }

    match state.shipping.quote(query.into()).await {
        Ok(quote) => ApiResponse::success(ShippingQuoteResponse::from(quote)),
        Err(e) => e.into(),
    }
}
