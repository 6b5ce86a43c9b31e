//! Client for the location/geocoding service used by shipping quotes.

mod api;

pub use api::LocationApiClient;
