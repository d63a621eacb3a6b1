mod config;
mod routes;
mod services;
mod state;

use tracing::{info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to read .env"),
    }

    let config = config::Config::from_env().expect("invalid relay configuration");
    let addr = config.bind_addr();
    let client_url = config.client_url.clone();

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");

    info!(%addr, %client_url, "notebook relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
