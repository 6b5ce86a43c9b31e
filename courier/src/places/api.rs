use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlacesConfig;
use crate::error::{CourierError, Result};
use crate::models::{LatLng, MatchRange, Place, PlacePrediction};
use crate::upstream::{build_client, decode_json};

const SERVICE: &str = "places";

const TEXT_SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.rating,places.userRatingCount,places.priceLevel,places.location,\
places.currentOpeningHours.openNow";

const AUTOCOMPLETE_FIELD_MASK: &str =
    "suggestions.placePrediction.placeId,suggestions.placePrediction.text";

/// Legacy statuses that carry a usable (possibly empty) payload.
fn check_legacy_status(status: &str, error_message: Option<&str>) -> Result<()> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(CourierError::Upstream(format!(
            "places API returned status {other}: {}",
            error_message.unwrap_or("no error message")
        ))),
    }
}

// ---------------------------------------------------------------------------
// v1: legacy web service
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct LegacyTextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<LegacyPlace>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyPlace {
    place_id: String,
    name: String,
    formatted_address: Option<String>,
    vicinity: Option<String>,
    rating: Option<f32>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
    geometry: Option<LegacyGeometry>,
    opening_hours: Option<LegacyOpeningHours>,
}

#[derive(Debug, Deserialize)]
struct LegacyGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LegacyOpeningHours {
    open_now: Option<bool>,
}

impl From<LegacyPlace> for Place {
    fn from(place: LegacyPlace) -> Self {
        Place {
            id: place.place_id,
            name: place.name,
            address: place.formatted_address.or(place.vicinity),
            rating: place.rating,
            rating_count: place.user_ratings_total.unwrap_or(0),
            price_level: place.price_level.filter(|level| *level <= 4),
            location: place.geometry.map(|g| g.location),
            open_now: place.opening_hours.and_then(|h| h.open_now),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LegacyAutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<LegacyPrediction>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyPrediction {
    place_id: String,
    description: String,
    #[serde(default)]
    matched_substrings: Vec<MatchRange>,
}

impl From<LegacyPrediction> for PlacePrediction {
    fn from(prediction: LegacyPrediction) -> Self {
        PlacePrediction {
            place_id: prediction.place_id,
            text: prediction.description,
            matches: prediction.matched_substrings,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LegacyPlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LegacyPlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            CourierError::UpstreamUnavailable("PLACES_API_KEY is not set".to_string())
        })?;

        Ok(Self {
            client: build_client(SERVICE, config.timeout_secs)?,
            api_key,
            base_url: config.base_url().to_string(),
        })
    }

    pub async fn text_search(&self, query: &str) -> Result<Vec<Place>> {
        let url = format!("{}/maps/api/place/textsearch/json", self.base_url);
        debug!(%url, query, "Legacy places text search");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("type", "restaurant"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let body: LegacyTextSearchResponse = decode_json(SERVICE, resp).await?;
        check_legacy_status(&body.status, body.error_message.as_deref())?;

        Ok(body.results.into_iter().map(Place::from).collect())
    }

    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlacePrediction>> {
        let url = format!("{}/maps/api/place/autocomplete/json", self.base_url);
        debug!(%url, input, "Legacy places autocomplete");

        let resp = self
            .client
            .get(&url)
            .query(&[("input", input), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let body: LegacyAutocompleteResponse = decode_json(SERVICE, resp).await?;
        check_legacy_status(&body.status, body.error_message.as_deref())?;

        Ok(body
            .predictions
            .into_iter()
            .map(PlacePrediction::from)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// v2: POST + field mask API
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextSearchRequest<'a> {
    text_query: &'a str,
    included_type: &'a str,
}

#[derive(Debug, Serialize)]
struct AutocompleteRequest<'a> {
    input: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    places: Vec<NewPlace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewPlace {
    id: String,
    display_name: Option<LocalizedText>,
    formatted_address: Option<String>,
    rating: Option<f32>,
    user_rating_count: Option<u32>,
    price_level: Option<String>,
    location: Option<NewLatLng>,
    current_opening_hours: Option<NewOpeningHours>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    text: String,
}

#[derive(Debug, Deserialize)]
struct NewLatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewOpeningHours {
    open_now: Option<bool>,
}

/// Map a v2 `PRICE_LEVEL_*` enum name onto the 0..=4 scale.
pub(crate) fn price_level_from_name(name: &str) -> Option<u8> {
    match name {
        "PRICE_LEVEL_FREE" => Some(0),
        "PRICE_LEVEL_INEXPENSIVE" => Some(1),
        "PRICE_LEVEL_MODERATE" => Some(2),
        "PRICE_LEVEL_EXPENSIVE" => Some(3),
        "PRICE_LEVEL_VERY_EXPENSIVE" => Some(4),
        _ => None,
    }
}

impl From<NewPlace> for Place {
    fn from(place: NewPlace) -> Self {
        Place {
            name: place
                .display_name
                .map(|n| n.text)
                .unwrap_or_else(|| place.id.clone()),
            id: place.id,
            address: place.formatted_address,
            rating: place.rating,
            rating_count: place.user_rating_count.unwrap_or(0),
            price_level: place.price_level.as_deref().and_then(price_level_from_name),
            location: place.location.map(|l| LatLng {
                lat: l.latitude,
                lng: l.longitude,
            }),
            open_now: place.current_opening_hours.and_then(|h| h.open_now),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct NewAutocompleteResponse {
    #[serde(default)]
    suggestions: Vec<NewSuggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewSuggestion {
    place_prediction: Option<NewPlacePrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewPlacePrediction {
    place_id: String,
    text: FormattableText,
}

#[derive(Debug, Deserialize)]
struct FormattableText {
    text: String,
    #[serde(default)]
    matches: Vec<StringRange>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StringRange {
    #[serde(default)]
    start_offset: usize,
    end_offset: usize,
}

impl From<NewPlacePrediction> for PlacePrediction {
    fn from(prediction: NewPlacePrediction) -> Self {
        PlacePrediction {
            place_id: prediction.place_id,
            matches: prediction
                .text
                .matches
                .iter()
                .map(|m| MatchRange::from_span(m.start_offset, m.end_offset))
                .collect(),
            text: prediction.text.text,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewPlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewPlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            CourierError::UpstreamUnavailable("PLACES_API_KEY is not set".to_string())
        })?;

        Ok(Self {
            client: build_client(SERVICE, config.timeout_secs)?,
            api_key,
            base_url: config.base_url().to_string(),
        })
    }

    pub async fn text_search(&self, query: &str) -> Result<Vec<Place>> {
        let url = format!("{}/v1/places:searchText", self.base_url);
        debug!(%url, query, "Places text search");

        let resp = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", TEXT_SEARCH_FIELD_MASK)
            .json(&TextSearchRequest {
                text_query: query,
                included_type: "restaurant",
            })
            .send()
            .await?;

        let body: TextSearchResponse = decode_json(SERVICE, resp).await?;
        Ok(body.places.into_iter().map(Place::from).collect())
    }

    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlacePrediction>> {
        let url = format!("{}/v1/places:autocomplete", self.base_url);
        debug!(%url, input, "Places autocomplete");

        let resp = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", AUTOCOMPLETE_FIELD_MASK)
            .json(&AutocompleteRequest { input })
            .send()
            .await?;

        let body: NewAutocompleteResponse = decode_json(SERVICE, resp).await?;
        Ok(body
            .suggestions
            .into_iter()
            .filter_map(|s| s.place_prediction)
            .map(PlacePrediction::from)
            .collect())
    }
}
