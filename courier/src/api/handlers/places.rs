//! Restaurant search and autocomplete handlers.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::{
    AutocompleteQuery, RestaurantResponse, RestaurantSearchQuery, SuggestionResponse,
};
use crate::api::extractors::AppQuery;
use crate::api::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::CourierError;

/// `GET /places/restaurants`
#[utoipa::path(
    get,
    path = "/places/restaurants",
    tag = "places",
    operation_id = "places.searchRestaurants",
    params(RestaurantSearchQuery),
    responses(
        (status = 200, description = "Restaurants, best rated first", body = Vec<RestaurantResponse>),
        (status = 400, description = "Invalid query", body = ApiError),
        (status = 500, description = "Places API failure", body = ApiError),
    )
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RestaurantSearchQuery>,
) -> ApiResponse<Vec<RestaurantResponse>> {
    if let Err(errors) = query.validate() {
        return CourierError::from(errors).into();
    }

    match state.places.search_restaurants(query.into()).await {
        Ok(places) => {
            ApiResponse::success(places.into_iter().map(RestaurantResponse::from).collect())
        }
        Err(e) => e.into(),
    }
}

/// `GET /places/autocomplete`
#[utoipa::path(
    get,
    path = "/places/autocomplete",
    tag = "places",
    operation_id = "places.autocomplete",
    params(AutocompleteQuery),
    responses(
        (status = 200, description = "Suggestions with matched text in <b> tags", body = Vec<SuggestionResponse>),
        (status = 400, description = "Invalid query", body = ApiError),
        (status = 500, description = "Places API failure", body = ApiError),
    )
)]
pub async fn autocomplete(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AutocompleteQuery>,
) -> ApiResponse<Vec<SuggestionResponse>> {
    if let Err(errors) = query.validate() {
        return CourierError::from(errors).into();
    }

    match state
        .places
        .autocomplete(query.trimmed_input(), query.limit_or_default())
        .await
    {
        Ok(suggestions) => ApiResponse::success(
            suggestions
                .into_iter()
                .map(SuggestionResponse::from)
                .collect(),
        ),
        Err(e) => e.into(),
    }
}
