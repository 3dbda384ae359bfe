//! Outbound email provider client.

use async_trait::async_trait;
use formrelay_core::{EmailMessage, ProviderReply, RelayConfig, RelayError};
use reqwest::Client;

/// Sends a composed email and reports what the provider answered.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<ProviderReply, RelayError>;
}

/// Resend transactional email API (`POST <base>/emails`, JSON body, bearer auth).
pub struct ResendProvider {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for ResendProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendProvider")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ResendProvider {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.provider_endpoint(), config.provider_api_key.clone())
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, message: &EmailMessage) -> Result<ProviderReply, RelayError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| RelayError::Provider(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RelayError::ProviderResponse(e.to_string()))?;

        tracing::info!(status = status.as_u16(), response = %body, "Provider response");

        Ok(ProviderReply {
            status: status.as_u16(),
            body,
        })
    }
}
