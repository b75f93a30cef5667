use log::{debug, info};
use tonic::transport::Channel;

use crate::client::{Ack, TickerApi};
use crate::error::Error;

pub mod proto {
    tonic::include_proto!("quantify");
}

use proto::quantify_data_client::QuantifyDataClient;

/// gRPC stub for the quantify-data service.
///
/// One channel serves the whole batch; tonic channels multiplex, so each
/// spawned call clones the stub instead of opening its own connection.
#[derive(Clone)]
pub struct QuantifyClient {
    client: QuantifyDataClient<Channel>,
}

impl QuantifyClient {
    pub async fn connect(endpoint: String) -> Result<QuantifyClient, Error> {
        info!("Connecting to quantify-data at {}", endpoint);
        let client = QuantifyDataClient::connect(endpoint).await?;
        Ok(QuantifyClient { client })
    }
}

#[tonic::async_trait]
impl TickerApi for QuantifyClient {
    async fn add_ticker(&self, name: &str) -> Result<Ack, Error> {
        debug!("AddTicker {}", name);

        let request = tonic::Request::new(proto::AddTickerRequest {
            ticker: Some(proto::Ticker {
                name: name.to_string(),
            }),
        });

        let mut client = self.client.clone();
        let response = client.add_ticker(request).await?;

        Ok(Ack::from(response.into_inner()))
    }
}

impl From<proto::StatusResponse> for Ack {
    fn from(status: proto::StatusResponse) -> Self {
        Ack {
            success: status.success,
            info: status.info,
        }
    }
}
