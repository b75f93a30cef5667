use std::time::Duration;

use thiserror::Error;

/// Failures of a single call. A batch never aborts on one of these; the
/// error becomes the outcome of the call that produced it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("rpc: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("no response after {0:?}")]
    Timeout(Duration),

    #[error("call task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}
