//! File share DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::error::CourierError;
use crate::models::{ShareRequest, SharedFile};

/// Target formats accepted by the conversion service.
pub const SUPPORTED_FORMATS: &[&str] = &["pdf", "docx", "odt", "txt", "html", "png", "jpg"];

fn http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::new("http_url")),
    }
}

fn supported_format(value: &str) -> Result<(), ValidationError> {
    let format = value.trim().to_lowercase();
    if SUPPORTED_FORMATS.contains(&format.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_format"))
    }
}

/// Request body for `POST /shares/files`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareFileRequest {
    /// Publicly reachable http(s) URL of the file to convert.
    #[validate(custom(
        function = "http_url",
        message = "sourceUrl must be an absolute http or https URL"
    ))]
    pub source_url: String,
    /// One of `pdf`, `docx`, `odt`, `txt`, `html`, `png`, `jpg`.
    #[validate(custom(
        function = "supported_format",
        message = "targetFormat must be one of: pdf, docx, odt, txt, html, png, jpg"
    ))]
    pub target_format: String,
    /// Name for the shared file; its extension is replaced by the target format.
    #[validate(length(min = 1, max = 255, message = "fileName must be 1 to 255 characters"))]
    pub file_name: Option<String>,
}

impl TryFrom<ShareFileRequest> for ShareRequest {
    type Error = CourierError;

    fn try_from(request: ShareFileRequest) -> Result<Self, Self::Error> {
        let source_url = Url::parse(request.source_url.trim())
            .map_err(|e| CourierError::Validation(format!("Invalid sourceUrl: {e}")))?;

        Ok(ShareRequest {
            source_url,
            target_format: request.target_format.trim().to_lowercase(),
            file_name: request.file_name,
        })
    }
}

/// Descriptor of a converted, shareable file.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedFileResponse {
    /// Conversion job id assigned by the upstream service.
    pub id: String,
    pub file_name: String,
    pub format: String,
    /// Download URL of the converted file.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl From<SharedFile> for SharedFileResponse {
    fn from(file: SharedFile) -> Self {
        Self {
            id: file.id,
            file_name: file.file_name,
            format: file.format,
            url: file.url,
            size_bytes: file.size_bytes,
            created_at: file.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source_url: &str, target_format: &str) -> ShareFileRequest {
        ShareFileRequest {
            source_url: source_url.to_string(),
            target_format: target_format.to_string(),
            file_name: None,
        }
    }

    #[test]
    fn accepts_http_urls_and_known_formats() {
        assert!(request("https://files.example.com/a.docx", "PDF")
            .validate()
            .is_ok());
        assert!(request("http://10.0.0.1/a", "png").validate().is_ok());
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(request("ftp://files.example.com/a.docx", "pdf")
            .validate()
            .is_err());
        assert!(request("not a url", "pdf").validate().is_err());
        assert!(request("mailto:someone@example.com", "pdf")
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_unknown_formats() {
        let errors = request("https://example.com/a", "exe")
            .validate()
            .expect_err("should fail");
        assert!(errors.field_errors().contains_key("target_format"));
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let mut req = request("https://example.com/a", "pdf");
        req.file_name = Some(String::new());
        assert!(req.validate().is_err());
    }

    #[test]
    fn conversion_normalizes_format() {
        let share = ShareRequest::try_from(request(" https://example.com/a.odt ", " DOCX "))
            .expect("convert");
        assert_eq!(share.target_format, "docx");
        assert_eq!(share.source_url.as_str(), "https://example.com/a.odt");
    }
}
