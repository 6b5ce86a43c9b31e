use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum_extra::extract::QueryRejection;
use validator::ValidationErrors;

use crate::error::CourierError;

/// JSON body extractor whose rejections use the response envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CourierError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor whose rejections use the response envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(CourierError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for CourierError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

impl From<QueryRejection> for CourierError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.to_string();
        match extract_missing_field(&message) {
            Some(field) => CourierError::Validation(format!("Missing required field: {field}")),
            None => CourierError::Validation(format!("Invalid query string: {message}")),
        }
    }
}

impl From<ValidationErrors> for CourierError {
    fn from(errors: ValidationErrors) -> Self {
        CourierError::Validation(validation_message(&errors))
    }
}

fn map_json_rejection(rejection: JsonRejection) -> CourierError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                CourierError::Validation(format!("Missing required field: {field}"))
            } else {
                CourierError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            CourierError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => CourierError::Validation(
            "Missing `Content-Type: application/json` header".to_string(),
        ),
        JsonRejection::BytesRejection(_) => {
            CourierError::Internal("Failed to read request body".to_string())
        }
        _ => CourierError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

/// Flatten validator errors into one deterministic, user-facing sentence.
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {field}"),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if messages.is_empty() {
        return "Invalid request".to_string();
    }

    messages.sort();
    messages.dedup();
    messages.join("; ")
}
