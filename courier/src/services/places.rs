use std::cmp::Ordering;

use tracing::debug;

use crate::error::Result;
use crate::models::{Place, RestaurantSearch, Suggestion};
use crate::places::PlacesProvider;

use super::highlight::bold_matches;

/// Restaurant search and autocomplete on top of the configured Places API.
#[derive(Clone)]
pub struct PlacesService {
    places: PlacesProvider,
}

impl PlacesService {
    pub fn new(places: PlacesProvider) -> Self {
        Self { places }
    }

    pub fn provider(&self) -> &PlacesProvider {
        &self.places
    }

    pub async fn search_restaurants(&self, search: RestaurantSearch) -> Result<Vec<Place>> {
        let places = self.places.text_search(&search.query).await?;
        debug!(
            query = %search.query,
            upstream = places.len(),
            "Restaurant search returned"
        );
        Ok(rank_restaurants(places, &search))
    }

    pub async fn autocomplete(&self, input: &str, limit: usize) -> Result<Vec<Suggestion>> {
        let predictions = self.places.autocomplete(input).await?;
        debug!(input, upstream = predictions.len(), "Autocomplete returned");

        Ok(predictions
            .into_iter()
            .take(limit)
            .map(|prediction| Suggestion {
                highlighted: bold_matches(&prediction.text, &prediction.matches),
                place_id: prediction.place_id,
                text: prediction.text,
            })
            .collect())
    }
}

/// Filter, order and truncate search results.
///
/// Order: rating descending (unrated last), rating count descending, then
/// name ascending ignoring case.
pub fn rank_restaurants(places: Vec<Place>, search: &RestaurantSearch) -> Vec<Place> {
    let mut places: Vec<Place> = places
        .into_iter()
        .filter(|place| match search.min_rating {
            Some(min) => place.rating.is_some_and(|rating| rating >= min),
            None => true,
        })
        .filter(|place| !search.open_now || place.open_now == Some(true))
        .collect();

    places.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.rating_count.cmp(&a.rating_count))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    places.truncate(search.limit);
    places
}
