//! Test helpers: build the relay router against a mock email provider.
//!
//! Run from workspace root: `cargo test -p formrelay-api`.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use formrelay_api::{setup, ResendProvider};
use formrelay_core::RelayConfig;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "re_test_key";
pub const TEST_RECIPIENT: &str = "owner@example.com";

/// Test application: server, mock provider and the isolated upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub provider: mockito::ServerGuard,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently left in the upload directory.
    pub fn leftover_uploads(&self) -> usize {
        count_files(self.upload_dir.path())
    }
}

pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(Result::ok).count())
        .unwrap_or(0)
}

pub fn test_config(provider_url: &str, upload_dir: &Path) -> RelayConfig {
    let mut vars = HashMap::new();
    vars.insert("EMAIL_TO", TEST_RECIPIENT.to_string());
    vars.insert("RESEND_API_KEY", TEST_API_KEY.to_string());
    vars.insert("RESEND_API_URL", provider_url.to_string());
    vars.insert("UPLOAD_DIR", upload_dir.display().to_string());
    RelayConfig::from_lookup(|key| vars.get(key).cloned()).expect("test config")
}

/// Setup a relay whose provider is a fresh mockito server.
pub async fn setup_test_app() -> TestApp {
    let provider = mockito::Server::new_async().await;
    let url = provider.url();
    setup_test_app_with_url(provider, &url).await
}

/// Setup a relay pointing at an arbitrary provider URL.
pub async fn setup_test_app_with_url(provider: mockito::ServerGuard, url: &str) -> TestApp {
    build_test_app(provider, url, |_| {}).await
}

/// Setup a relay against a fresh mockito server with adjusted configuration.
pub async fn setup_test_app_with_config<F>(configure: F) -> TestApp
where
    F: FnOnce(&mut RelayConfig),
{
    let provider = mockito::Server::new_async().await;
    let url = provider.url();
    build_test_app(provider, &url, configure).await
}

async fn build_test_app<F>(provider: mockito::ServerGuard, url: &str, configure: F) -> TestApp
where
    F: FnOnce(&mut RelayConfig),
{
    let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
    let mut config = test_config(url, upload_dir.path());
    configure(&mut config);
    let email_provider = Arc::new(ResendProvider::from_config(&config));

    let (_state, router) = setup::build_app(config, email_provider)
        .await
        .expect("Failed to build app");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        provider,
        upload_dir,
    }
}
