//! File share handler.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::{ShareFileRequest, SharedFileResponse};
use crate::api::extractors::AppJson;
use crate::api::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::CourierError;
use crate::models::ShareRequest;

/// `POST /shares/files`
///
/// Blocks until the conversion job finishes, fails, or runs out of poll
/// attempts.
#[utoipa::path(
    post,
    path = "/shares/files",
    tag = "shares",
    operation_id = "shares.createFile",
    request_body = ShareFileRequest,
    responses(
        (status = 201, description = "File converted and shared", body = SharedFileResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Conversion failed or timed out", body = ApiError),
    )
)]
pub async fn share_file(
    State(state): State<AppState>,
    AppJson(req): AppJson<ShareFileRequest>,
) -> ApiResponse<SharedFileResponse> {
    if let Err(errors) = req.validate() {
        return CourierError::from(errors).into();
    }

    let request = match ShareRequest::try_from(req) {
        Ok(request) => request,
        Err(e) => return e.into(),
    };

    match state.shares.share_file(request).await {
        Ok(file) => ApiResponse::created(SharedFileResponse::from(file)),
        Err(e) => e.into(),
    }
}
