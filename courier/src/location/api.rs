use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::LocationConfig;
use crate::error::Result;
use crate::models::City;
use crate::upstream::{build_client, decode_json};

const SERVICE: &str = "location";

/// The location service answers with a bare list on older deployments and
/// wraps it in `data` on newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CitiesPayload {
    List(Vec<LocationCity>),
    Wrapped { data: Vec<LocationCity> },
}

impl CitiesPayload {
    fn into_cities(self) -> Vec<LocationCity> {
        match self {
            CitiesPayload::List(cities) => cities,
            CitiesPayload::Wrapped { data } => data,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocationCity {
    id: Value,
    name: String,
    state: LocationState,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct LocationState {
    code: String,
    #[serde(default)]
    name: String,
}

fn id_to_string(id: Value) -> String {
    match id {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl From<LocationCity> for City {
    fn from(city: LocationCity) -> Self {
        City {
            id: id_to_string(city.id),
            name: city.name,
            state_code: city.state.code,
            state_name: city.state.name,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LocationApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LocationApiClient {
    pub fn new(config: &LocationConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(SERVICE, config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up cities by name. An empty list means no match.
    pub async fn find_cities(&self, name: &str) -> Result<Vec<City>> {
        let url = format!("{}/cities", self.base_url);
        debug!(%url, name, "Location city lookup");

        let mut request = self.client.get(&url).query(&[("name", name)]);
        if let Some(ref api_key) = self.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        let payload: CitiesPayload = decode_json(SERVICE, request.send().await?).await?;
        Ok(payload
            .into_cities()
            .into_iter()
            .map(City::from)
            .collect())
    }
}
