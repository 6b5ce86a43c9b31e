//! Upstream-independent domain models.
//!
//! Upstream clients reshape their JSON into these types; services operate on
//! them; the API layer converts them into response DTOs.

mod city;
mod conversion;
mod place;
mod share;
mod shipping;

pub use city::City;
pub use conversion::{Conversion, ConversionResult, ConversionStatus, CreateConversionRequest};
pub use place::{LatLng, MatchRange, Place, PlacePrediction, RestaurantSearch, Suggestion};
pub use share::{ShareRequest, SharedFile};
pub use shipping::{ShippingQuote, ShippingRequest};
