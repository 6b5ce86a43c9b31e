use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ConversionConfig;
use crate::conversion::ConversionApiClient;
use crate::error::{CourierError, Result};
use crate::models::{Conversion, ConversionStatus, CreateConversionRequest, ShareRequest, SharedFile};

const FALLBACK_STEM: &str = "file";

/// File shares backed by the asynchronous conversion service.
#[derive(Clone)]
pub struct ShareService {
    conversion: ConversionApiClient,
    poll_interval: Duration,
    max_poll_attempts: u32,
    shutdown: CancellationToken,
}

impl ShareService {
    pub fn new(conversion: ConversionApiClient, config: &ConversionConfig) -> Self {
        Self {
            conversion,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_poll_attempts: config.max_poll_attempts,
            shutdown: CancellationToken::new(),
        }
    }

    /// Stop waiting on conversion jobs once `token` is cancelled.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn conversion(&self) -> &ConversionApiClient {
        &self.conversion
    }

    pub async fn share_file(&self, request: ShareRequest) -> Result<SharedFile> {
        let file_name = output_file_name(
            request.file_name.as_deref(),
            &request.source_url,
            &request.target_format,
        );

        let created = self
            .conversion
            .create(&CreateConversionRequest {
                source_url: request.source_url.to_string(),
                target_format: request.target_format.clone(),
                file_name: file_name.clone(),
            })
            .await?;
        info!(conversion_id = %created.id, status = ?created.status, "Conversion job created");

        let finished = self.wait_for_completion(created).await?;

        match finished.status {
            ConversionStatus::Completed => {
                let result = finished.result.ok_or_else(|| {
                    CourierError::Upstream(format!(
                        "conversion {} completed without a result",
                        finished.id
                    ))
                })?;

                let format = result
                    .format
                    .map(|f| f.trim().to_lowercase())
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| request.target_format.clone());

                Ok(SharedFile {
                    file_name: with_extension(&file_name, &format),
                    id: finished.id,
                    format,
                    url: result.url,
                    size_bytes: result.size,
                    created_at: Utc::now(),
                })
            }
            _ => {
                let reason = finished
                    .error
                    .unwrap_or_else(|| "no error detail".to_string());
                warn!(conversion_id = %finished.id, reason = %reason, "Conversion failed");
                Err(CourierError::ConversionFailed(reason))
            }
        }
    }

    /// Poll the job status on a fixed interval until it is COMPLETED or ERROR.
    async fn wait_for_completion(&self, mut conversion: Conversion) -> Result<Conversion> {
        let mut attempts = 0;

        while !conversion.status.is_terminal() {
            if attempts >= self.max_poll_attempts {
                return Err(CourierError::ConversionTimeout { attempts });
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    return Err(CourierError::Internal(format!(
                        "shutdown while waiting on conversion {}",
                        conversion.id
                    )));
                }
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
            attempts += 1;

            conversion = self.conversion.status(&conversion.id).await?;
            debug!(
                conversion_id = %conversion.id,
                status = ?conversion.status,
                attempt = attempts,
                "Polled conversion status"
            );
        }

        Ok(conversion)
    }
}

/// Stem of the requested name, else of the source URL's last path segment.
fn file_stem(file_name: Option<&str>, source_url: &Url) -> String {
    let candidate = file_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| {
            source_url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
        });

    let Some(name) = candidate else {
        return FALLBACK_STEM.to_string();
    };

    let stem = match name.rfind('.') {
        Some(0) | None => name.as_str(),
        Some(dot) => &name[..dot],
    };

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

fn with_extension(file_name: &str, format: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };
    format!("{stem}.{format}")
}

/// Name of the converted file: `<stem>.<format>`.
pub fn output_file_name(file_name: Option<&str>, source_url: &Url, format: &str) -> String {
    format!("{}.{}", file_stem(file_name, source_url), format)
}
