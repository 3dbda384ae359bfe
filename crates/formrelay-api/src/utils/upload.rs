//! Multipart parsing for the submission form.
//!
//! File parts under `images` are streamed straight into uniquely named files under the
//! upload directory. A text part under `images` is ignored like any unknown text field.
//! The image limit is enforced here, before any handler runs.

use std::path::Path;
use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::{FromRef, FromRequest, Multipart, Request};
use formrelay_core::{RelayError, Submission, UploadedFile};
use tokio::io::AsyncWriteExt;

use crate::constants::{COMMENT_FIELD, IMAGES_FIELD, NAME_FIELD, UPLOAD_PREFIX};
use crate::error::HttpAppError;
use crate::state::AppState;

/// Extractor yielding a parsed [`Submission`] with its images already on disk.
pub struct SubmissionForm(pub Submission);

impl<S> FromRequest<S> for SubmissionForm
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = Arc::<AppState>::from_ref(state);
        let multipart = Multipart::from_request(req, state).await?;
        let submission = extract_submission(
            multipart,
            app_state.config.upload_dir(),
            app_state.config.max_images,
        )
        .await?;
        Ok(SubmissionForm(submission))
    }
}

/// Read every form field. On failure, files written so far are deleted before returning.
pub async fn extract_submission(
    mut multipart: Multipart,
    upload_dir: &Path,
    max_images: usize,
) -> Result<Submission, HttpAppError> {
    let mut submission = Submission::default();
    match read_fields(&mut multipart, &mut submission, upload_dir, max_images).await {
        Ok(()) => Ok(submission),
        Err(e) => {
            submission.release();
            Err(e)
        }
    }
}

async fn read_fields(
    multipart: &mut Multipart,
    submission: &mut Submission,
    upload_dir: &Path,
    max_images: usize,
) -> Result<(), HttpAppError> {
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            IMAGES_FIELD if field.file_name().is_some() => {
                if submission.images.len() >= max_images {
                    return Err(RelayError::TooManyFiles { max: max_images }.into());
                }
                let original_name = sanitize_original_name(field.file_name());
                let upload = store_field(field, upload_dir, original_name).await?;
                tracing::debug!(
                    original_name = %upload.original_name(),
                    size_bytes = upload.size_bytes(),
                    "Stored upload"
                );
                submission.images.push(upload);
            }
            NAME_FIELD => submission.name = Some(field.text().await?),
            COMMENT_FIELD => submission.comment = Some(field.text().await?),
            _ if field.file_name().is_some() => {
                return Err(RelayError::InvalidInput(format!(
                    "Unexpected field '{}'",
                    field_name
                ))
                .into());
            }
            _ => {
                tracing::debug!(field = %field_name, "Ignoring unknown form field");
            }
        }
    }
    Ok(())
}

/// Stream one file part into a fresh temporary file.
async fn store_field(
    mut field: Field<'_>,
    upload_dir: &Path,
    original_name: String,
) -> Result<UploadedFile, HttpAppError> {
    let temp = tempfile::Builder::new()
        .prefix(UPLOAD_PREFIX)
        .tempfile_in(upload_dir)
        .map_err(RelayError::from)?;
    // `path` removes the file on drop, so early returns below clean up after themselves.
    let (file, path) = temp.into_parts();
    let mut file = tokio::fs::File::from_std(file);

    let mut size_bytes: u64 = 0;
    while let Some(chunk) = field.chunk().await? {
        size_bytes += chunk.len() as u64;
        file.write_all(&chunk).await.map_err(RelayError::from)?;
    }
    file.flush().await.map_err(RelayError::from)?;

    Ok(UploadedFile::new(original_name, path, size_bytes))
}

/// Keep only the final path component of a client-supplied filename.
pub fn sanitize_original_name(filename: Option<&str>) -> String {
    const FALLBACK: &str = "image";

    let Some(filename) = filename else {
        return FALLBACK.to_string();
    };
    let last = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename)
        .trim();

    if last.is_empty() || last == "." || last == ".." {
        FALLBACK.to_string()
    } else {
        last.to_string()
    }
}
