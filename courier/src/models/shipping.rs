use super::City;

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRequest {
    pub origin_city: String,
    pub destination_city: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingQuote {
    pub origin: City,
    pub destination: City,
    pub same_state: bool,
    pub distance_km: f64,
    pub billable_weight_kg: f64,
    pub cost: f64,
    pub currency: String,
}
