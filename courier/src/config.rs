use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Like [`parse_env_or`], but finite values failing `valid` also fall back.
fn parse_env_f64(var: &str, default: f64, valid: fn(f64) -> bool, requirement: &str) -> f64 {
    let value = parse_env_or(var, default);
    if value.is_finite() && valid(value) {
        value
    } else {
        tracing::warn!(
            "Invalid value '{}' for {}: must be {}. Using default.",
            value,
            var,
            requirement
        );
        default
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Default base URL of the legacy (v1) Places web service.
pub const LEGACY_PLACES_BASE_URL: &str = "https://maps.googleapis.com";

/// Default base URL of the new (v2) Places API.
pub const NEW_PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Which upstream Places API shape to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlacesApiVersion {
    /// Legacy query-string API (`/maps/api/place/*/json`).
    V1,
    /// POST + field-mask API (`/v1/places:*`).
    V2,
}

impl FromStr for PlacesApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" | "legacy" => Ok(Self::V1),
            "v2" | "2" | "new" => Ok(Self::V2),
            other => Err(format!("unknown places API version '{other}'")),
        }
    }
}

impl fmt::Display for PlacesApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub places: PlacesConfig,
    pub location: LocationConfig,
    pub conversion: ConversionConfig,
    pub shipping: ShippingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    pub version: PlacesApiVersion,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Configured base URL, or the public default for the selected version.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) => url.trim_end_matches('/'),
            None => match self.version {
                PlacesApiVersion::V1 => LEGACY_PLACES_BASE_URL,
                PlacesApiVersion::V2 => NEW_PLACES_BASE_URL,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// File conversion service settings, including the status poll cadence.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            api_key: None,
            timeout_secs: 30,
            poll_interval_ms: 1000,
            max_poll_attempts: 60,
        }
    }
}

/// Pricing constants for shipping quotes.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingConfig {
    pub base_fee: f64,
    pub rate_per_kg_km: f64,
    pub volumetric_divisor: f64,
    pub currency: String,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            base_fee: 5.0,
            rate_per_kg_km: 0.01,
            volumetric_divisor: 6000.0,
            currency: "USD".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let conversion_defaults = ConversionConfig::default();
        let shipping_defaults = ShippingConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("COURIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("COURIER_PORT", 3000),
            },
            places: PlacesConfig {
                version: parse_env_or("PLACES_API_VERSION", PlacesApiVersion::V1),
                api_key: non_empty_env("PLACES_API_KEY"),
                base_url: non_empty_env("PLACES_BASE_URL"),
                timeout_secs: parse_env_or("PLACES_TIMEOUT", 10),
            },
            location: LocationConfig {
                base_url: non_empty_env("LOCATION_BASE_URL")
                    .unwrap_or_else(|| "http://localhost:8081".to_string()),
                api_key: non_empty_env("LOCATION_API_KEY"),
                timeout_secs: parse_env_or("LOCATION_TIMEOUT", 10),
            },
            conversion: ConversionConfig {
                base_url: non_empty_env("CONVERSION_BASE_URL")
                    .unwrap_or(conversion_defaults.base_url),
                api_key: non_empty_env("CONVERSION_API_KEY"),
                timeout_secs: parse_env_or("CONVERSION_TIMEOUT", conversion_defaults.timeout_secs),
                poll_interval_ms: parse_env_or(
                    "CONVERSION_POLL_INTERVAL_MS",
                    conversion_defaults.poll_interval_ms,
                ),
                max_poll_attempts: parse_env_or(
                    "CONVERSION_MAX_POLL_ATTEMPTS",
                    conversion_defaults.max_poll_attempts,
                ),
            },
            shipping: ShippingConfig {
                base_fee: parse_env_f64(
                    "SHIPPING_BASE_FEE",
                    shipping_defaults.base_fee,
                    |v| v >= 0.0,
                    "zero or positive",
                ),
                rate_per_kg_km: parse_env_f64(
                    "SHIPPING_RATE_PER_KG_KM",
                    shipping_defaults.rate_per_kg_km,
                    |v| v >= 0.0,
                    "zero or positive",
                ),
                volumetric_divisor: parse_env_f64(
                    "SHIPPING_VOLUMETRIC_DIVISOR",
                    shipping_defaults.volumetric_divisor,
                    |v| v > 0.0,
                    "positive",
                ),
                currency: non_empty_env("SHIPPING_CURRENCY")
                    .unwrap_or(shipping_defaults.currency),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_places_version_parsing() {
        assert_eq!("v1".parse::<PlacesApiVersion>(), Ok(PlacesApiVersion::V1));
        assert_eq!(" V2 ".parse::<PlacesApiVersion>(), Ok(PlacesApiVersion::V2));
        assert_eq!("legacy".parse::<PlacesApiVersion>(), Ok(PlacesApiVersion::V1));
        assert!("v3".parse::<PlacesApiVersion>().is_err());
    }

    #[test]
    fn test_places_base_url_defaults_per_version() {
        let mut places = PlacesConfig {
            version: PlacesApiVersion::V1,
            api_key: None,
            base_url: None,
            timeout_secs: 10,
        };
        assert_eq!(places.base_url(), LEGACY_PLACES_BASE_URL);

        places.version = PlacesApiVersion::V2;
        assert_eq!(places.base_url(), NEW_PLACES_BASE_URL);

        places.base_url = Some("http://127.0.0.1:9000/".to_string());
        assert_eq!(places.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_shipping_config_defaults() {
        let shipping = ShippingConfig::default();
        assert_eq!(shipping.base_fee, 5.0);
        assert_eq!(shipping.rate_per_kg_km, 0.01);
        assert_eq!(shipping.volumetric_divisor, 6000.0);
        assert_eq!(shipping.currency, "USD");
    }

    #[test]
    #[serial]
    fn test_conversion_poll_defaults() {
        std::env::remove_var("CONVERSION_POLL_INTERVAL_MS");
        std::env::remove_var("CONVERSION_MAX_POLL_ATTEMPTS");

        let config = Config::default();
        assert_eq!(config.conversion.poll_interval_ms, 1000);
        assert_eq!(config.conversion.max_poll_attempts, 60);
    }

    #[test]
    #[serial]
    fn test_places_version_from_env() {
        std::env::set_var("PLACES_API_VERSION", "v2");
        let config = Config::default();
        assert_eq!(config.places.version, PlacesApiVersion::V2);

        std::env::set_var("PLACES_API_VERSION", "bogus");
        let config = Config::default();
        assert_eq!(config.places.version, PlacesApiVersion::V1);

        std::env::remove_var("PLACES_API_VERSION");
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_ignored() {
        std::env::set_var("PLACES_API_KEY", "   ");
        let config = Config::default();
        assert!(config.places.api_key.is_none());
        std::env::remove_var("PLACES_API_KEY");
    }

    #[test]
    #[serial]
    fn test_parse_env_or_invalid_value_falls_back() {
        std::env::set_var("__TEST_PARSE_RATE", "not-a-number");
        let result: f64 = parse_env_or("__TEST_PARSE_RATE", 0.5);
        assert_eq!(result, 0.5);
        std::env::remove_var("__TEST_PARSE_RATE");
    }

    #[test]
    #[serial]
    fn test_shipping_values_must_be_usable() {
        std::env::set_var("SHIPPING_VOLUMETRIC_DIVISOR", "0");
        std::env::set_var("SHIPPING_BASE_FEE", "-1");
        std::env::set_var("SHIPPING_RATE_PER_KG_KM", "inf");
        let config = Config::default();
        assert_eq!(config.shipping.volumetric_divisor, 6000.0);
        assert_eq!(config.shipping.base_fee, 5.0);
        assert_eq!(config.shipping.rate_per_kg_km, 0.01);

        std::env::set_var("SHIPPING_VOLUMETRIC_DIVISOR", "-5000");
        std::env::set_var("SHIPPING_BASE_FEE", "0");
        let config = Config::default();
        assert_eq!(config.shipping.volumetric_divisor, 6000.0);
        assert_eq!(config.shipping.base_fee, 0.0);

        std::env::remove_var("SHIPPING_VOLUMETRIC_DIVISOR");
        std::env::remove_var("SHIPPING_BASE_FEE");
        std::env::remove_var("SHIPPING_RATE_PER_KG_KM");
    }
}
