use tracing::{info, warn};

use crate::config::{PlacesApiVersion, PlacesConfig};
use crate::error::{CourierError, Result};
use crate::models::{Place, PlacePrediction};

use super::api::{LegacyPlacesClient, NewPlacesClient};

#[derive(Clone)]
enum PlacesBackend {
    Legacy(LegacyPlacesClient),
    New(NewPlacesClient),
    Unavailable { reason: String },
}

/// Version-agnostic entry point to the upstream Places API.
#[derive(Clone)]
pub struct PlacesProvider {
    backend: PlacesBackend,
    version: PlacesApiVersion,
    base_url: String,
}

impl PlacesProvider {
    pub fn new(config: &PlacesConfig) -> Self {
        let backend = match config.version {
            PlacesApiVersion::V1 => match LegacyPlacesClient::new(config) {
                Ok(client) => {
                    info!(base_url = config.base_url(), "Places v1 backend initialized");
                    PlacesBackend::Legacy(client)
                }
                Err(e) => {
                    let reason = format!("Places v1 backend unavailable: {e}");
                    warn!("{}", reason);
                    PlacesBackend::Unavailable { reason }
                }
            },
            PlacesApiVersion::V2 => match NewPlacesClient::new(config) {
                Ok(client) => {
                    info!(base_url = config.base_url(), "Places v2 backend initialized");
                    PlacesBackend::New(client)
                }
                Err(e) => {
                    let reason = format!("Places v2 backend unavailable: {e}");
                    warn!("{}", reason);
                    PlacesBackend::Unavailable { reason }
                }
            },
        };

        Self {
            backend,
            version: config.version,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, PlacesBackend::Unavailable { .. })
    }

    pub fn version(&self) -> PlacesApiVersion {
        self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn text_search(&self, query: &str) -> Result<Vec<Place>> {
        match &self.backend {
            PlacesBackend::Legacy(client) => client.text_search(query).await,
            PlacesBackend::New(client) => client.text_search(query).await,
            PlacesBackend::Unavailable { reason } => {
                Err(CourierError::UpstreamUnavailable(reason.clone()))
            }
        }
    }

    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlacePrediction>> {
        match &self.backend {
            PlacesBackend::Legacy(client) => client.autocomplete(input).await,
            PlacesBackend::New(client) => client.autocomplete(input).await,
            PlacesBackend::Unavailable { reason } => {
                Err(CourierError::UpstreamUnavailable(reason.clone()))
            }
        }
    }
}
