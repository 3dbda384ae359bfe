//! Application state shared by all requests. Read-only after startup.

use std::sync::Arc;

use formrelay_core::RelayConfig;

use crate::services::relay::SubmissionRelay;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub relay: SubmissionRelay,
}
