use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use book_store::{start_server, Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = match start_server(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start the server: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.await {
        error!("Server stopped unexpectedly: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
