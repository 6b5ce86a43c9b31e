//! Client for the asynchronous file-conversion service.
//!
//! Jobs are created with `POST /conversions` and observed with
//! `GET /conversions/{id}`; waiting for completion is the share service's job.

mod api;

pub use api::ConversionApiClient;
