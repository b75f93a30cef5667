use std::time::Duration;

use crate::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Connection settings for the quantify-data service.
///
/// The endpoint is decided at construction time, not baked in as a
/// process-wide constant. `Default` keeps the service's historical address
/// and a 30 second bound per in-flight call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URI of the gRPC endpoint, e.g. `http://[::1]:50051`.
    pub endpoint: String,
    /// Upper bound on how long one call may stay outstanding.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
