use base64::Engine;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::submission::{Submission, UploadedFile};
use crate::template::render_submission_html;

/// One image packaged for the provider, content base64-encoded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

impl Attachment {
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: filename.into(),
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Read an uploaded file fully from temporary storage.
    pub async fn read(upload: &UploadedFile) -> Result<Self, RelayError> {
        let bytes = tokio::fs::read(upload.path()).await?;
        Ok(Self::from_bytes(upload.original_name(), &bytes))
    }
}

/// Outbound email, serialized as the provider's JSON send request.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    /// Compose the email for a submission, reading each image into memory.
    ///
    /// The attachment list has exactly one entry per uploaded image, in upload order.
    pub async fn compose(config: &RelayConfig, submission: &Submission) -> Result<Self, RelayError> {
        let html = render_submission_html(
            submission.name.as_deref(),
            submission.comment.as_deref(),
            submission.image_count(),
            config.escape_html,
        );

        let mut attachments = Vec::with_capacity(submission.image_count());
        for upload in &submission.images {
            attachments.push(Attachment::read(upload).await?);
        }

        Ok(Self {
            from: config.email_from.clone(),
            to: config.email_to.clone(),
            subject: config.email_subject.clone(),
            html,
            attachments,
        })
    }
}
