use std::net::SocketAddr;

use axum::{routing::get, Router};
use tracing::{error, info};

pub const ALIVE_TEXT: &str = "I'm alive!";

pub fn build_router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_TEXT
}

/// Serves the uptime check on every interface. Shares nothing with the bot.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Liveness endpoint listening on {addr}");
    axum::serve(listener, build_router()).await
}

pub fn spawn(port: u16) {
    tokio::spawn(async move {
        if let Err(e) = serve(port).await {
            error!("Liveness server stopped: {e}");
        }
    });
}
