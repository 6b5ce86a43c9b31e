use axum::extract::State;
use serde::Serialize;
use url::Url;

use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::config::PlacesApiVersion;

/// Health data returned inside the envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub places_api: PlacesApiVersion,
    pub upstreams: UpstreamsStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UpstreamsStatus {
    pub places: UpstreamStatus,
    pub location: UpstreamStatus,
    pub conversion: UpstreamStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamStatus {
    /// `configured` or `unavailable`.
    pub status: String,
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl UpstreamStatus {
    fn new(available: bool, api_key_configured: bool, base_url: &str) -> Self {
        let status = if available { "configured" } else { "unavailable" };
        Self {
            status: status.to_string(),
            api_key_configured,
            host: host_of(base_url),
        }
    }
}

fn host_of(base_url: &str) -> Option<String> {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let places = state.places.provider();
    let location = state.shipping.location();
    let conversion = state.shares.conversion();

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        places_api: places.version(),
        upstreams: UpstreamsStatus {
            places: UpstreamStatus::new(
                places.is_available(),
                state.config.places.api_key.is_some(),
                places.base_url(),
            ),
            location: UpstreamStatus::new(true, location.has_api_key(), location.base_url()),
            conversion: UpstreamStatus::new(
                true,
                conversion.has_api_key(),
                conversion.base_url(),
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_extracted_from_base_url() {
        assert_eq!(
            host_of("https://places.googleapis.com").as_deref(),
            Some("places.googleapis.com")
        );
        assert_eq!(host_of("http://127.0.0.1:8081/").as_deref(), Some("127.0.0.1"));
        assert_eq!(host_of("not a url"), None);
    }

    #[test]
    fn unavailable_upstream_status() {
        let status = UpstreamStatus::new(false, false, "https://maps.googleapis.com");
        assert_eq!(status.status, "unavailable");
        assert!(!status.api_key_configured);
    }
}
