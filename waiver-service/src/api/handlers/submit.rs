use crate::api::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error};
use waiver_core::model::{SubmissionResult, WaiverSubmission};

/// The submission endpoint. A body that does not parse as a waiver is
/// the only hard failure (500, `success=false`); every archival
/// outcome, including total failure, comes back as 200 with
/// `success=true` and the saved flags telling the real story.
pub async fn handle_submit(State(state): State<AppState>, body: Bytes) -> Response {
    let waiver: WaiverSubmission = match serde_json::from_slice(&body) {
        Ok(waiver) => waiver,
        Err(err) => {
            error!("waiver body parse failed error={}", err);
            let result = SubmissionResult {
                success: false,
                message: "Failed to submit waiver".to_string(),
                sharepoint_saved: false,
                screenshot_saved: false,
                error: Some(err.to_string()),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response();
        }
    };

    debug!(
        "waiver received full_name={} language={} screenshot={}",
        waiver.full_name,
        waiver.language,
        waiver.screenshot_data.is_some()
    );
    let result = state.archive.archive(&waiver).await;
    Json(result).into_response()
}
