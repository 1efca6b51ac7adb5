//! A development account service for the signup form.

/// Errors returned from handlers
mod error;

/// Route handlers
mod handlers;

/// Shared state
mod state;

use axum::Router;
use clap::Parser;
use std::{io, num::ParseIntError, time::Duration};
use tokio::net::TcpListener;
use tower_http::{limit, timeout, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[clap(version)]
struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "65536")]
    body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,
}

/// Parse a whole number of seconds.
fn duration_parser(s: &str) -> Result<Duration, ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = app(&config, state::Accounts::new());

    let listener = TcpListener::bind(&config.address).await?;
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await
}

/// The routes plus the middleware every request goes through.
fn app(config: &Config, accounts: state::Accounts) -> Router {
    handlers::router(accounts)
        .layer(timeout::TimeoutLayer::new(config.request_timeout))
        .layer(limit::RequestBodyLimitLayer::new(config.body_limit))
        .layer(trace::TraceLayer::new_for_http())
}
