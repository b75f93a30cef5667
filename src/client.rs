use log::{info, warn};
use tokio::time::timeout;

use crate::batch::{self, Outcome};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::grpc::QuantifyClient;

/// Acknowledgment from the service for one ticker.
#[derive(Debug, Clone)]
pub struct Ack {
    pub success: bool,
    pub info: Option<String>,
}

/// The remote surface the batch operations need. Implemented over gRPC in
/// [`crate::grpc`]; tests substitute their own.
#[tonic::async_trait]
pub trait TickerApi: Clone + Send + Sync + 'static {
    async fn add_ticker(&self, name: &str) -> Result<Ack, Error>;
}

/// Adds every ticker with one concurrent call each and reports all outcomes
/// in input order. Each call is bounded by the configured request timeout.
pub async fn add_tickers<A>(
    api: &A,
    config: &ClientConfig,
    tickers: Vec<String>,
) -> Vec<Outcome<Ack>>
where
    A: TickerApi,
{
    let per_call = config.request_timeout;
    let api = api.clone();

    batch::submit_all(tickers, move |name| {
        let api = api.clone();
        async move {
            match timeout(per_call, api.add_ticker(&name)).await {
                Ok(result) => result,
                Err(_) => Err(Error::Timeout(per_call)),
            }
        }
    })
    .await
}

/// Removing tickers is accepted on the CLI but not wired to the service yet.
/// Every identifier gets an explicit unimplemented outcome instead of a
/// silent no-op; no request leaves the process.
pub fn remove_tickers(tickers: Vec<String>) -> Vec<Outcome<Ack>> {
    if !tickers.is_empty() {
        warn!(
            "RemoveTicker requested for {} symbols but is not implemented",
            tickers.len()
        );
    }
    tickers
        .into_iter()
        .map(|name| Outcome {
            id: name,
            result: Err(Error::Unimplemented("RemoveTicker")),
        })
        .collect()
}

/// One printable line per outcome, tagged so failures are distinguishable
/// from successes in the same stream.
pub fn render(outcome: &Outcome<Ack>) -> String {
    match &outcome.result {
        Ok(ack) if ack.success => format!(
            "OK   {}: {}",
            outcome.id,
            ack.info.as_deref().unwrap_or("done")
        ),
        Ok(ack) => format!(
            "FAIL {}: {}",
            outcome.id,
            ack.info.as_deref().unwrap_or("rejected by service")
        ),
        Err(e) => format!("FAIL {}: {}", outcome.id, e),
    }
}

/// Entry point used by the binary. Connects only when there is something to
/// add, runs both batches, and prints outcomes in submission order.
pub async fn run(
    config: ClientConfig,
    add: Vec<String>,
    delete: Vec<String>,
) -> Result<(), Error> {
    if !add.is_empty() {
        let api = QuantifyClient::connect(config.endpoint.clone()).await?;
        info!("Submitting batch add of {} tickers", add.len());

        for outcome in add_tickers(&api, &config, add).await {
            println!("{}", render(&outcome));
        }
    }

    for outcome in remove_tickers(delete) {
        println!("{}", render(&outcome));
    }

    Ok(())
}
