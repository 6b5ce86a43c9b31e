//! Shared plumbing for outbound calls to third-party services.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{CourierError, Result};

pub(crate) fn build_client(service: &str, timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| CourierError::Internal(format!("Failed to create {service} HTTP client: {e}")))
}

/// Check the status of an upstream response and decode its JSON body.
///
/// Non-2xx statuses and bodies that do not match `T` both become
/// upstream errors.
pub(crate) async fn decode_json<T: DeserializeOwned>(service: &str, resp: Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        warn!(service, %status, "Upstream request failed");
        return Err(CourierError::Upstream(format!(
            "{service} request failed: {status} - {body}"
        )));
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!(service, error = %e, "Unexpected upstream response shape");
        CourierError::Upstream(format!("Failed to parse {service} response: {e}"))
    })
}
