//! Courier: a small HTTP gateway in front of third-party places, location
//! and file-conversion APIs.

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod location;
pub mod models;
pub mod places;
pub mod services;
mod upstream;

pub use api::{create_router, AppState};
