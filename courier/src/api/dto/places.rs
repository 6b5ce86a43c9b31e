//! Restaurant search and autocomplete DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{not_blank, trimmed_max_200};
use crate::models::{LatLng, Place, RestaurantSearch, Suggestion};

pub const DEFAULT_RESTAURANT_LIMIT: usize = 20;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Query string for `GET /places/restaurants`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RestaurantSearchQuery {
    /// Free-text search, e.g. `sushi in Lisbon`.
    #[validate(
        custom(function = "not_blank", message = "query is required"),
        custom(function = "trimmed_max_200", message = "query must be at most 200 characters")
    )]
    pub query: String,
    /// Drop restaurants rated below this value (0.0–5.0).
    #[validate(range(min = 0.0, max = 5.0, message = "minRating must be between 0 and 5"))]
    pub min_rating: Option<f32>,
    /// Only return restaurants currently reported as open.
    pub open_now: Option<bool>,
    /// Maximum number of results (1–20, default 20).
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: Option<usize>,
}

impl From<RestaurantSearchQuery> for RestaurantSearch {
    fn from(query: RestaurantSearchQuery) -> Self {
        RestaurantSearch {
            query: query.query.trim().to_string(),
            min_rating: query.min_rating,
            open_now: query.open_now.unwrap_or(false),
            limit: query.limit.unwrap_or(DEFAULT_RESTAURANT_LIMIT),
        }
    }
}

/// Query string for `GET /places/autocomplete`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AutocompleteQuery {
    /// Partial text typed by the user.
    #[validate(
        custom(function = "not_blank", message = "input is required"),
        custom(function = "trimmed_max_200", message = "input must be at most 200 characters")
    )]
    pub input: String,
    /// Maximum number of suggestions (1–10, default 5).
    #[validate(range(min = 1, max = 10, message = "limit must be between 1 and 10"))]
    pub limit: Option<usize>,
}

impl AutocompleteQuery {
    pub fn trimmed_input(&self) -> &str {
        self.input.trim()
    }

    pub fn limit_or_default(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct LocationResponse {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for LocationResponse {
    fn from(location: LatLng) -> Self {
        Self {
            lat: location.lat,
            lng: location.lng,
        }
    }
}

/// A restaurant in search results.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub rating_count: u32,
    /// 0 (free) to 4 (very expensive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

impl From<Place> for RestaurantResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            address: place.address,
            rating: place.rating,
            rating_count: place.rating_count,
            price_level: place.price_level,
            location: place.location.map(LocationResponse::from),
            open_now: place.open_now,
        }
    }
}

/// An autocomplete suggestion with matched text wrapped in `<b>` tags.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub place_id: String,
    pub text: String,
    pub highlighted: String,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            place_id: suggestion.place_id,
            text: suggestion.text,
            highlighted: suggestion.highlighted,
        }
    }
}
