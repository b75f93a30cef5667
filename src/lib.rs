pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod grpc;

pub const DEFAULT_ENDPOINT: &str = "http://[::1]:50051";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
