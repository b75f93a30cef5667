use clap::Parser;
use quantify_client::client;
use quantify_client::config::ClientConfig;
use quantify_client::DEFAULT_ENDPOINT;

/// A minimal CLI client for the quantify-data financial data aggregation
/// service. Can also be used as a library.
#[derive(Parser)]
#[clap(name = "quantify-cli")]
struct Cli {
    #[clap(short, long, multiple_values = true, min_values = 0, help = "Ticker symbols to add")]
    add: Vec<String>,

    #[clap(short, long, multiple_values = true, min_values = 0, help = "Ticker symbols to remove")]
    delete: Vec<String>,

    #[clap(short, long, help = "(Optional) Address of the quantify-data gRPC service. Default: http://[::1]:50051")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    let config = ClientConfig {
        endpoint: args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        ..ClientConfig::default()
    };

    client::run(config, args.add, args.delete).await?;

    Ok(())
}
