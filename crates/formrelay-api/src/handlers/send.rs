use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::SubmissionForm;

/// Relay a submitted comment form to the configured recipient.
///
/// Responds 200 `{success: true, result}` when the provider accepted the email and
/// 500 `{success: false, result}` when it rejected it. Internal failures become
/// 500 `{success: false, error}` through [`HttpAppError`].
#[tracing::instrument(skip_all, fields(submission_id = %uuid::Uuid::new_v4()))]
pub async fn send_submission(
    State(state): State<Arc<AppState>>,
    SubmissionForm(submission): SubmissionForm,
) -> Result<Response, HttpAppError> {
    tracing::info!(
        name = ?submission.name,
        comment = ?submission.comment,
        files = ?submission.image_names(),
        "New submission received"
    );

    let result = state.relay.relay(submission).await?;

    let status =
        StatusCode::from_u16(result.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if !result.success {
        tracing::warn!(response = %result.result, "Email provider rejected the message");
    }

    Ok((status, Json(result)).into_response())
}
