//! Formrelay Core Library
//!
//! Configuration, error types, per-request models and body rendering shared by the
//! relay's HTTP service.

pub mod config;
pub mod error;
pub mod models;
pub mod template;

// Re-export commonly used types
pub use config::RelayConfig;
pub use error::{LogLevel, RelayError};
pub use models::{
    Attachment, EmailMessage, ProviderReply, RelayResult, Submission, UploadedFile,
};
