use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use courier::config::PlacesApiVersion;

mod common;
use common::{app, get, test_config};

fn legacy_place(id: &str, name: &str, rating: f64, count: u32, open_now: bool) -> serde_json::Value {
    json!({
        "place_id": id,
        "name": name,
        "formatted_address": format!("{name} street 1"),
        "rating": rating,
        "user_ratings_total": count,
        "price_level": 2,
        "geometry": { "location": { "lat": 38.71, "lng": -9.14 } },
        "opening_hours": { "open_now": open_now }
    })
}

#[tokio::test]
async fn test_v1_restaurant_search_filters_and_sorts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .and(query_param("query", "sushi lisbon"))
        .and(query_param("type", "restaurant"))
        .and(query_param("key", "places-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                legacy_place("a", "Aburi", 4.3, 120, true),
                legacy_place("b", "Bonsai", 4.8, 40, false),
                legacy_place("c", "Cosmo", 3.9, 900, true),
                legacy_place("d", "Daikoku", 4.8, 300, true),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let (status, body) = get(
        app,
        "/places/restaurants?query=sushi%20lisbon&minRating=4.0&limit=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Daikoku", "Bonsai"]);
    assert_eq!(body["data"][0]["ratingCount"], 300);
    assert_eq!(body["data"][0]["priceLevel"], 2);
    assert_eq!(body["data"][0]["location"]["lat"], 38.71);
}

#[tokio::test]
async fn test_v1_open_now_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                legacy_place("a", "Aburi", 4.3, 120, true),
                legacy_place("b", "Bonsai", 4.8, 40, false),
            ]
        })))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let (status, body) = get(app, "/places/restaurants?query=sushi&openNow=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], "a");
}

#[tokio::test]
async fn test_v1_zero_results_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let (status, body) = get(app, "/places/restaurants?query=nothing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_v1_request_denied_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let (status, body) = get(app, "/places/restaurants?query=sushi").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": { "code": "internal_error", "message": "Internal server error" } })
    );
}

#[tokio::test]
async fn test_v2_restaurant_search_sends_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "places-test-key"))
        .and(body_json(json!({
            "textQuery": "tapas",
            "includedType": "restaurant"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "places": [
                {
                    "id": "p1",
                    "displayName": { "text": "El Bulli", "languageCode": "es" },
                    "formattedAddress": "Cala Montjoi",
                    "rating": 4.9,
                    "userRatingCount": 5000,
                    "priceLevel": "PRICE_LEVEL_VERY_EXPENSIVE",
                    "location": { "latitude": 42.25, "longitude": 3.22 },
                    "currentOpeningHours": { "openNow": false }
                },
                {
                    "id": "p2",
                    "displayName": { "text": "Bar Pinotxo" },
                    "rating": 4.5
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V2));
    let (status, body) = get(app, "/places/restaurants?query=tapas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"][0],
        json!({
            "id": "p1",
            "name": "El Bulli",
            "address": "Cala Montjoi",
            "rating": 4.9,
            "ratingCount": 5000,
            "priceLevel": 4,
            "location": { "lat": 42.25, "lng": 3.22 },
            "openNow": false
        })
    );
    assert_eq!(body["data"][1]["ratingCount"], 0);
}

#[tokio::test]
async fn test_v2_upstream_failure_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V2));
    let (status, body) = get(app, "/places/restaurants?query=tapas").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_missing_api_key_is_internal_error() {
    let server = MockServer::start().await;
    let mut config = test_config(&server.uri(), PlacesApiVersion::V2);
    config.places.api_key = None;

    let (status, body) = get(app(config), "/places/restaurants?query=tapas").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_restaurant_search_validation() {
    let server = MockServer::start().await;
    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));

    let (status, body) = get(app.clone(), "/places/restaurants").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert_eq!(body["error"]["message"], "Missing required field: query");

    let (status, body) = get(app.clone(), "/places/restaurants?query=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "query is required");

    let (status, body) = get(app.clone(), "/places/restaurants?query=ramen&limit=21").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "limit must be between 1 and 20");

    let (status, _) = get(app, "/places/restaurants?query=ramen&minRating=high").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_v1_autocomplete_bolds_matches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/autocomplete/json"))
        .and(query_param("input", "lis"))
        .and(query_param("key", "places-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "predictions": [
                {
                    "place_id": "lisbon",
                    "description": "Lisbon, Portugal",
                    "matched_substrings": [{ "offset": 0, "length": 3 }]
                },
                {
                    "place_id": "lisburn",
                    "description": "Lisburn, UK",
                    "matched_substrings": [{ "offset": 0, "length": 3 }]
                },
                {
                    "place_id": "la-lis",
                    "description": "Praça da Lis, Leiria",
                    "matched_substrings": [{ "offset": 9, "length": 3 }]
                }
            ]
        })))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let (status, body) = get(app, "/places/autocomplete?input=lis&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                {
                    "placeId": "lisbon",
                    "text": "Lisbon, Portugal",
                    "highlighted": "<b>Lis</b>bon, Portugal"
                },
                {
                    "placeId": "lisburn",
                    "text": "Lisburn, UK",
                    "highlighted": "<b>Lis</b>burn, UK"
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_v2_autocomplete_uses_character_offsets() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:autocomplete"))
        .and(body_json(json!({ "input": "são" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": [
                {
                    "placePrediction": {
                        "placeId": "sp",
                        "text": {
                            "text": "São Paulo, Brazil",
                            "matches": [{ "endOffset": 3 }]
                        }
                    }
                },
                { "queryPrediction": { "text": { "text": "são restaurants" } } }
            ]
        })))
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V2));
    let (status, body) = get(app, "/places/autocomplete?input=s%C3%A3o").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["highlighted"], "<b>São</b> Paulo, Brazil");
}

#[tokio::test]
async fn test_autocomplete_requires_input() {
    let server = MockServer::start().await;
    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));

    let (status, body) = get(app, "/places/autocomplete?input=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "input is required");
}

#[tokio::test]
async fn test_autocomplete_length_limit_applies_after_trimming() {
    let server = MockServer::start().await;
    let input = "a".repeat(195);

    Mock::given(method("GET"))
        .and(path("/maps/api/place/autocomplete/json"))
        .and(query_param("input", input.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "predictions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(test_config(&server.uri(), PlacesApiVersion::V1));
    let uri = format!("/places/autocomplete?input={}{}", "%20".repeat(10), input);
    let (status, body) = get(app.clone(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));

    let uri = format!("/places/autocomplete?input={}", "a".repeat(201));
    let (status, body) = get(app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "input must be at most 200 characters");
}
