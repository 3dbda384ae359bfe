//! Configuration module
//!
//! The relay reads its configuration once at startup. The resulting [`RelayConfig`] is
//! immutable and handed to the HTTP layer inside the application state.

use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_FROM: &str = "Comment Form <no-reply@yourdomain.com>";
const DEFAULT_SUBJECT: &str = "Nuevo comentario con fotos";
const DEFAULT_PROVIDER_URL: &str = "https://api.resend.com";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const MAX_IMAGES: usize = 3;
const MAX_REQUEST_BODY_MB: usize = 25;

/// Relay configuration
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub log_format: String,
    // Email composition
    pub email_to: String,
    pub email_from: String,
    pub email_subject: String,
    pub escape_html: bool,
    // Provider
    pub provider_api_key: String,
    pub provider_base_url: String,
    // Uploads
    pub upload_dir: PathBuf,
    pub max_images: usize,
    pub max_request_body_bytes: usize,
}

impl RelayConfig {
    /// Load configuration from the process environment (and `.env` when present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let email_to = lookup("EMAIL_TO")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("EMAIL_TO must be set to the recipient address"))?;

        let provider_api_key = lookup("RESEND_API_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("RESEND_API_KEY must be set for the email provider"))?;

        let max_images = parse_positive(&lookup, "MAX_IMAGES", MAX_IMAGES)?;

        let max_request_body_bytes =
            parse_positive(&lookup, "MAX_REQUEST_BODY_MB", MAX_REQUEST_BODY_MB)?
                .checked_mul(1024 * 1024)
                .ok_or_else(|| anyhow::anyhow!("MAX_REQUEST_BODY_MB is too large"))?;

        Ok(RelayConfig {
            server_port,
            environment,
            cors_origins,
            log_format: lookup("LOG_FORMAT")
                .unwrap_or_else(|| "compact".to_string())
                .to_lowercase(),
            email_to,
            email_from: lookup("EMAIL_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
            email_subject: lookup("EMAIL_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            escape_html: lookup("ESCAPE_HTML")
                .map(|s| s.to_lowercase().parse().unwrap_or(false))
                .unwrap_or(false),
            provider_api_key,
            provider_base_url: lookup("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            upload_dir: PathBuf::from(
                lookup("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_images,
            max_request_body_bytes,
        })
    }

    /// Check if the relay is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Full URL of the provider's send endpoint.
    pub fn provider_endpoint(&self) -> String {
        format!("{}/emails", self.provider_base_url)
    }
}

/// Parse an optional positive integer, failing startup on anything else.
fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(anyhow::anyhow!("{} must be a positive number", key)),
        },
        None => Ok(default),
    }
}
