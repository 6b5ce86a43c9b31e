//! Data Transfer Objects.
//!
//! These types define the wire format of the public API. They are separate
//! from the domain models in `src/models/` and own query/body validation and
//! the conversion to and from domain types.

pub mod places;
pub mod shares;
pub mod shipping;

use validator::ValidationError;

pub use places::{
    AutocompleteQuery, LocationResponse, RestaurantResponse, RestaurantSearchQuery,
    SuggestionResponse,
};
pub use shares::{ShareFileRequest, SharedFileResponse, SUPPORTED_FORMATS};
pub use shipping::{CitySummary, ShippingQuery, ShippingQuoteResponse};

fn trimmed_at_most(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() > max {
        Err(ValidationError::new("length"))
    } else {
        Ok(())
    }
}

/// Free-text fields: at most 200 characters once trimmed.
pub(crate) fn trimmed_max_200(value: &str) -> Result<(), ValidationError> {
    trimmed_at_most(value, 200)
}

/// City names: at most 100 characters once trimmed.
pub(crate) fn trimmed_max_100(value: &str) -> Result<(), ValidationError> {
    trimmed_at_most(value, 100)
}

/// Rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_limits_ignore_surrounding_whitespace() {
        let padded = format!("{}{}{}", " ".repeat(10), "a".repeat(200), "\t");
        assert!(trimmed_max_200(&padded).is_ok());
        assert!(trimmed_max_200(&"a".repeat(201)).is_err());
        assert!(trimmed_max_100(&"é".repeat(100)).is_ok());
        assert!(trimmed_max_100(&"é".repeat(101)).is_err());
    }
}
