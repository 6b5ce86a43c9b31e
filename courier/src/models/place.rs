use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A place returned by a text search, normalized across API versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub rating: Option<f32>,
    pub rating_count: u32,
    /// 0 (free) to 4 (very expensive).
    pub price_level: Option<u8>,
    pub location: Option<LatLng>,
    pub open_now: Option<bool>,
}

/// A matched span inside a prediction, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub offset: usize,
    pub length: usize,
}

impl MatchRange {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Build from a half-open `[start, end)` span.
    pub fn from_span(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            length: end.saturating_sub(start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub text: String,
    pub matches: Vec<MatchRange>,
}

/// Autocomplete output: the prediction text plus its `<b>`-highlighted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub place_id: String,
    pub text: String,
    pub highlighted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSearch {
    pub query: String,
    pub min_rating: Option<f32>,
    pub open_now: bool,
    pub limit: usize,
}
