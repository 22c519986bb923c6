//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which starts a wiremock server standing in for
//! the Squeeze Server and builds an [`EncodingService`] pointed at it with
//! the stock preset catalog.

use sorenson_client::config::Config;
use sorenson_client::service::EncodingService;
use wiremock::MockServer;

/// Canned submit response carrying the job id the server assigned.
pub const START_RESPONSE: &str = r#"{"JobId": "1234-2345-abcd"}"#;

/// Canned status response for a job sitting in the Hold queue.
pub const HOLD_STATUS_RESPONSE: &str =
    r#"{"Status": {"Status": 9, "Progress": 55.810001373291016}}"#;

pub struct TestHarness {
    pub server: MockServer,
    pub service: EncodingService,
}

impl TestHarness {
    /// Start a mock server and build a service with default presets against it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let mut config = Config::default();
        config.server.base_url = server.uri();

        let service = EncodingService::from_config(&config).expect("failed to build service");

        Self { server, service }
    }
}
