use chrono::{DateTime, Utc};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    pub source_url: Url,
    /// Lowercased target extension, e.g. `pdf`.
    pub target_format: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SharedFile {
    pub id: String,
    pub file_name: String,
    pub format: String,
    pub url: String,
    pub size_bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
}
