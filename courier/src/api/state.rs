use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::conversion::ConversionApiClient;
use crate::error::Result;
use crate::location::LocationApiClient;
use crate::places::PlacesProvider;
use crate::services::{PlacesService, ShareService, ShippingService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub places: PlacesService,
    pub shipping: ShippingService,
    pub shares: ShareService,
}

impl AppState {
    /// Build every upstream client once. A missing Places key leaves that
    /// provider unavailable instead of failing startup.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let places = PlacesService::new(PlacesProvider::new(&config.places));
        let shipping = ShippingService::new(
            LocationApiClient::new(&config.location)?,
            config.shipping.clone(),
        );
        let shares = ShareService::new(
            ConversionApiClient::new(&config.conversion)?,
            &config.conversion,
        );

        Ok(Self {
            config,
            places,
            shipping,
            shares,
        })
    }

    /// Tie long-running request work to the server's shutdown token.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shares = self.shares.with_shutdown(token);
        self
    }
}
