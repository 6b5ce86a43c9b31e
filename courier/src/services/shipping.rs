use tracing::{debug, info};

use crate::config::ShippingConfig;
use crate::error::{CourierError, Result};
use crate::location::LocationApiClient;
use crate::models::{City, ShippingQuote, ShippingRequest};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Shipping quotes: two city lookups followed by a pure pricing formula.
#[derive(Clone)]
pub struct ShippingService {
    location: LocationApiClient,
    pricing: ShippingConfig,
}

impl ShippingService {
    pub fn new(location: LocationApiClient, pricing: ShippingConfig) -> Self {
        Self { location, pricing }
    }

    pub fn location(&self) -> &LocationApiClient {
        &self.location
    }

    pub async fn quote(&self, request: ShippingRequest) -> Result<ShippingQuote> {
        let origin_matches = self.location.find_cities(&request.origin_city).await?;
        let origin = resolve_city(origin_matches, &request.origin_city)
            .ok_or(CourierError::CityNotFound("Origin"))?;

        let destination_matches = self.location.find_cities(&request.destination_city).await?;
        let destination = resolve_city(destination_matches, &request.destination_city)
            .ok_or(CourierError::CityNotFound("Destination"))?;

        debug!(
            origin = %origin.name,
            origin_state = %origin.state_code,
            destination = %destination.name,
            destination_state = %destination.state_code,
            "Resolved shipping cities"
        );

        let quote = price_shipment(origin, destination, &request, &self.pricing);
        info!(
            distance_km = quote.distance_km,
            billable_weight_kg = quote.billable_weight_kg,
            cost = quote.cost,
            "Shipping quote computed"
        );
        Ok(quote)
    }
}

/// Prefer a case-insensitive exact name match, else the first candidate.
pub fn resolve_city(candidates: Vec<City>, name: &str) -> Option<City> {
    let wanted = name.trim().to_lowercase();
    let exact = candidates
        .iter()
        .position(|city| city.name.trim().to_lowercase() == wanted);

    match exact {
        Some(index) => candidates.into_iter().nth(index),
        None => candidates.into_iter().next(),
    }
}

/// Great-circle distance in kilometres.
pub fn haversine_km(from: &City, to: &City) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Larger of the actual weight and the dimensional weight.
pub fn billable_weight_kg(request: &ShippingRequest, volumetric_divisor: f64) -> f64 {
    let volumetric = request.length_cm * request.width_cm * request.height_cm / volumetric_divisor;
    request.weight_kg.max(volumetric)
}

/// Shipping within one state is free; otherwise
/// `base_fee + distance_km * billable_weight_kg * rate_per_kg_km`.
pub fn price_shipment(
    origin: City,
    destination: City,
    request: &ShippingRequest,
    pricing: &ShippingConfig,
) -> ShippingQuote {
    let same_state = origin.same_state_as(&destination);
    let distance_km = round2(haversine_km(&origin, &destination));
    let billable_weight_kg = round2(billable_weight_kg(request, pricing.volumetric_divisor));

    let cost = if same_state {
        0.0
    } else {
        round2(pricing.base_fee + distance_km * billable_weight_kg * pricing.rate_per_kg_km)
    };

    ShippingQuote {
        origin,
        destination,
        same_state,
        distance_km,
        billable_weight_kg,
        cost,
        currency: pricing.currency.clone(),
    }
}
