#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use courier::config::{
    Config, ConversionConfig, LocationConfig, PlacesApiVersion, PlacesConfig, ServerConfig,
    ShippingConfig,
};
use courier::{create_router, AppState};

/// Config with every upstream pointed at `upstream_url` (a wiremock server).
pub fn test_config(upstream_url: &str, version: PlacesApiVersion) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        places: PlacesConfig {
            version,
            api_key: Some("places-test-key".to_string()),
            base_url: Some(upstream_url.to_string()),
            timeout_secs: 5,
        },
        location: LocationConfig {
            base_url: upstream_url.to_string(),
            api_key: None,
            timeout_secs: 5,
        },
        conversion: ConversionConfig {
            base_url: upstream_url.to_string(),
            api_key: Some("conversion-test-key".to_string()),
            timeout_secs: 5,
            poll_interval_ms: 5,
            max_poll_attempts: 5,
        },
        shipping: ShippingConfig::default(),
    }
}

pub fn app(config: Config) -> Router {
    create_router(AppState::new(config).expect("app state"))
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}
