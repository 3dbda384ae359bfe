//! Submission relay: compose the email, send it once, release temporary storage.

use std::sync::Arc;

use formrelay_core::{EmailMessage, RelayConfig, RelayError, RelayResult, Submission};

use super::email::EmailProvider;

#[derive(Clone)]
pub struct SubmissionRelay {
    config: Arc<RelayConfig>,
    provider: Arc<dyn EmailProvider>,
}

impl SubmissionRelay {
    pub fn new(config: Arc<RelayConfig>, provider: Arc<dyn EmailProvider>) -> Self {
        Self { config, provider }
    }

    /// Relay one submission.
    ///
    /// The submission's temporary files are released before this returns, whether the
    /// provider accepted the email, rejected it, or the relay failed on the way.
    #[tracing::instrument(skip_all, fields(images = submission.image_count()))]
    pub async fn relay(&self, submission: Submission) -> Result<RelayResult, RelayError> {
        let outcome = self.deliver(&submission).await;
        submission.release();
        outcome
    }

    async fn deliver(&self, submission: &Submission) -> Result<RelayResult, RelayError> {
        let message = EmailMessage::compose(&self.config, submission).await?;

        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            attachments_count = message.attachments.len(),
            "Sending to email provider"
        );

        let reply = self.provider.send(&message).await?;
        Ok(RelayResult::from(reply))
    }
}
