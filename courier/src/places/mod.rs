//! Upstream Places API clients.
//!
//! Two wire shapes are supported and selected by `PLACES_API_VERSION`:
//! - `v1`: the legacy web service (`GET /maps/api/place/{textsearch,autocomplete}/json`
//!   with the key in the query string and a `status` field in the body)
//! - `v2`: the newer API (`POST /v1/places:searchText`, `POST /v1/places:autocomplete`
//!   with `X-Goog-Api-Key` / `X-Goog-FieldMask` headers)
//!
//! Both are reshaped into [`crate::models::Place`] and
//! [`crate::models::PlacePrediction`] so services never see upstream JSON.

mod api;
mod provider;

pub use api::{LegacyPlacesClient, NewPlacesClient};
pub use provider::PlacesProvider;
