//! Shipping quote DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{not_blank, trimmed_max_100};
use crate::models::{City, ShippingQuote, ShippingRequest};

/// Query string for `GET /shipping/calculate`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShippingQuery {
    #[validate(
        custom(function = "not_blank", message = "originCity is required"),
        custom(function = "trimmed_max_100", message = "originCity must be at most 100 characters")
    )]
    pub origin_city: String,
    #[validate(
        custom(function = "not_blank", message = "destinationCity is required"),
        custom(function = "trimmed_max_100", message = "destinationCity must be at most 100 characters")
    )]
    pub destination_city: String,
    /// Actual parcel weight in kilograms.
    #[validate(range(
        exclusive_min = 0.0,
        max = 1000.0,
        message = "weightKg must be greater than 0 and at most 1000"
    ))]
    pub weight_kg: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "lengthCm must be greater than 0 and at most 500"
    ))]
    pub length_cm: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "widthCm must be greater than 0 and at most 500"
    ))]
    pub width_cm: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "heightCm must be greater than 0 and at most 500"
    ))]
    pub height_cm: f64,
}

impl From<ShippingQuery> for ShippingRequest {
    fn from(query: ShippingQuery) -> Self {
        ShippingRequest {
            origin_city: query.origin_city.trim().to_string(),
            destination_city: query.destination_city.trim().to_string(),
            weight_kg: query.weight_kg,
            length_cm: query.length_cm,
            width_cm: query.width_cm,
            height_cm: query.height_cm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CitySummary {
    pub id: String,
    pub name: String,
    /// State or province code.
    pub state: String,
}

impl From<City> for CitySummary {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            state: city.state_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuoteResponse {
    pub origin: CitySummary,
    pub destination: CitySummary,
    /// Shipments inside one state or province are free.
    pub same_state: bool,
    pub distance_km: f64,
    /// Larger of actual and volumetric weight.
    pub billable_weight_kg: f64,
    pub cost: f64,
    pub currency: String,
}

impl From<ShippingQuote> for ShippingQuoteResponse {
    fn from(quote: ShippingQuote) -> Self {
        Self {
            origin: quote.origin.into(),
            destination: quote.destination.into(),
            same_state: quote.same_state,
            distance_km: quote.distance_km,
            billable_weight_kg: quote.billable_weight_kg,
            cost: quote.cost,
            currency: quote.currency,
        }
    }
}
