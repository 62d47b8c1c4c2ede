use clap::Parser;
use inmax_gateway::utils::{logger, validation::Validate};
use inmax_gateway::{build_router, AppState, AtprotoClient, GatewayConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting INMAX gateway");
    if config.verbose {
        tracing::debug!("Gateway config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr: SocketAddr = config.bind_address.parse()?;
    let atproto = AtprotoClient::new(
        config.upstream_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    );
    let state = Arc::new(AppState { atproto });
    let app = build_router(state, &config.allowed_origins);

    tracing::info!("Forwarding signups to {}", config.upstream_url);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
