mod api;
mod config;
mod database;
mod models;
mod repo;
mod schema;

use axum::{serve::Serve, Router};
use tokio::net::TcpListener;
use tracing::info;

pub use api::build_app;
pub use config::{Config, ConfigError, DEFAULT_LISTEN_ADDR};
pub use database::{connect, seed, ConnectionFailure, DatabaseError};
pub use models::{Book, BookRow};
pub use repo::BookRepository;

pub async fn start_server(
    config: Config,
) -> Result<Serve<TcpListener, Router, Router>, std::io::Error> {
    let router = build_app(config.database_url);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Listening on {}", local_addr);

    Ok(axum::serve(listener, router))
}
