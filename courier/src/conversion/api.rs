use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::config::ConversionConfig;
use crate::error::{CourierError, Result};
use crate::models::{Conversion, CreateConversionRequest};
use crate::upstream::{build_client, decode_json};

const SERVICE: &str = "conversion";

#[derive(Clone, Debug)]
pub struct ConversionApiClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ConversionApiClient {
    pub fn new(config: &ConversionConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(SERVICE, config.timeout_secs)?,
            base_url: Url::parse(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `{base}/conversions[/{id}]`, with the id percent-encoded as one segment.
    fn conversions_url(&self, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CourierError::Internal(format!(
                    "Conversion base URL cannot be a base: {}",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("conversions");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key {
            Some(ref api_key) => request.bearer_auth(api_key),
            None => request,
        }
    }

    /// Start a conversion job.
    pub async fn create(&self, request: &CreateConversionRequest) -> Result<Conversion> {
        let url = self.conversions_url(None)?;
        debug!(%url, format = %request.target_format, "Creating conversion job");

        let resp = self
            .authorize(self.client.post(url))
            .json(request)
            .send()
            .await?;

        decode_json(SERVICE, resp).await
    }

    /// Fetch the current state of a conversion job.
    pub async fn status(&self, id: &str) -> Result<Conversion> {
        let url = self.conversions_url(Some(id))?;
        let resp = self.authorize(self.client.get(url)).send().await?;
        decode_json(SERVICE, resp).await
    }
}
