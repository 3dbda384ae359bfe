//! Formrelay API Library
//!
//! HTTP surface of the relay: the `/send` route, multipart parsing into temporary
//! storage, the outbound email provider client and application setup.

pub mod constants;
pub mod error;
mod handlers;
pub mod services;
pub mod setup;
pub mod state;
mod telemetry;
pub mod utils;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::{EmailProvider, ResendProvider, SubmissionRelay};
pub use state::AppState;
