//! Serves the two read-only endpoints the portal client reads from.
//!
//! The data is the same fixed sample set the client falls back to, so the
//! client renders identically whether or not this service is running.

use std::env;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use intern_portal::fallback::{sample_leaderboard, sample_profile};
use intern_portal::model::{InternProfile, LeaderboardEntry};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let port = load_port();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/intern", get(intern_handler))
        .route("/api/leaderboard", get(leaderboard_handler))
        .layer(cors);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn intern_handler() -> Json<InternProfile> {
    Json(sample_profile())
}

async fn leaderboard_handler() -> Json<Vec<LeaderboardEntry>> {
    Json(sample_leaderboard())
}

fn load_port() -> u16 {
    let Ok(raw) = env::var("PORTAL_API_PORT") else {
        info!("PORTAL_API_PORT not set, using default: {DEFAULT_PORT}");
        return DEFAULT_PORT;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid PORTAL_API_PORT value {raw:?}: {e}, using default: {DEFAULT_PORT}");
        DEFAULT_PORT
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("Failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
