use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use timetable_server::timetable::Timetable;
use timetable_server::web::{AppState, create_router};

/// Origin station used when BASE_STATION is not set.
const DEFAULT_BASE_STATION: &str = "Amsterdam";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The one piece of configuration the board needs
    let base_station = std::env::var("BASE_STATION").unwrap_or_else(|_| {
        warn!("BASE_STATION not set, using {DEFAULT_BASE_STATION}");
        DEFAULT_BASE_STATION.to_string()
    });

    let state = AppState::new(Timetable::new(base_station.as_str()));
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!(%addr, %base_station, "departure board listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
