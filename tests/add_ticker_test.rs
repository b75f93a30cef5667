use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

use quantify_client::client;
use quantify_client::config::ClientConfig;
use quantify_client::grpc::proto::quantify_data_server::{QuantifyData, QuantifyDataServer};
use quantify_client::grpc::proto::{AddTickerRequest, RemoveTickerRequest, StatusResponse};
use quantify_client::grpc::QuantifyClient;

struct RecordingService {
    seen: Arc<Mutex<Vec<String>>>,
    reject: Option<&'static str>,
}

#[tonic::async_trait]
impl QuantifyData for RecordingService {
    async fn add_ticker(
        &self,
        request: Request<AddTickerRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let name = request
            .into_inner()
            .ticker
            .map(|t| t.name)
            .ok_or_else(|| Status::invalid_argument("Ticker not provided"))?;

        if self.reject == Some(name.as_str()) {
            return Err(Status::unavailable("upstream offline"));
        }

        self.seen.lock().await.push(name.clone());

        Ok(Response::new(StatusResponse {
            success: true,
            info: Some(format!("Subscribed to {}", name)),
        }))
    }

    async fn remove_ticker(
        &self,
        _request: Request<RemoveTickerRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        Err(Status::unimplemented("RemoveTicker"))
    }
}

async fn spawn_service(service: RecordingService) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(QuantifyDataServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .expect("Failed to serve grpc");
    });

    addr
}

#[tokio::test]
async fn batch_add_reaches_the_service_and_acks_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let addr = spawn_service(RecordingService {
        seen: seen.clone(),
        reject: None,
    })
    .await;

    let config = ClientConfig {
        endpoint: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    let api = QuantifyClient::connect(config.endpoint.clone()).await.unwrap();

    let tickers = vec!["AAPL".to_string(), "GOOG".to_string(), "TSLA".to_string()];
    let outcomes = client::add_tickers(&api, &config, tickers).await;

    let ids: Vec<&str> = outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["AAPL", "GOOG", "TSLA"]);
    for outcome in &outcomes {
        match &outcome.result {
            Ok(ack) => {
                assert!(ack.success);
                assert_eq!(ack.info.as_deref(), Some(&*format!("Subscribed to {}", outcome.id)));
            }
            Err(e) => panic!("unexpected failure for {}: {}", outcome.id, e),
        }
    }

    // every symbol made it to the service exactly once
    let mut recorded = seen.lock().await.clone();
    recorded.sort();
    assert_eq!(recorded, vec!["AAPL", "GOOG", "TSLA"]);
}

#[tokio::test]
async fn rejected_ticker_fails_alone() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let addr = spawn_service(RecordingService {
        seen: seen.clone(),
        reject: Some("GOOG"),
    })
    .await;

    let config = ClientConfig {
        endpoint: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    let api = QuantifyClient::connect(config.endpoint.clone()).await.unwrap();

    let outcomes = client::add_tickers(
        &api,
        &config,
        vec!["AAPL".to_string(), "GOOG".to_string(), "TSLA".to_string()],
    )
    .await;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());
    assert!(outcomes[2].result.is_ok());
}
