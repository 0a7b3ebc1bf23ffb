pub mod handlers;
pub mod types;

use crate::{Result, config::Config, relay::AnthropicClient};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// The production chat widget is served from GitHub Pages.
const ALLOWED_ORIGIN: &str = "https://alnowatzki.github.io";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/chat", post(handlers::chat))
        .route("/api/health", get(handlers::health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let upstream = AnthropicClient::new(&config)?;
    let state = AppState {
        upstream: Arc::new(upstream),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().map(origin_allowed).unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Browser origins allowed to call the API: the production widget, local
/// development hosts on any port, and the literal `null` origin that pages
/// opened from `file://` send.
fn origin_allowed(origin: &str) -> bool {
    if origin == ALLOWED_ORIGIN || origin == "null" {
        return true;
    }
    match origin.strip_prefix("http://") {
        Some(rest) => {
            let host = rest.split(':').next().unwrap_or(rest);
            host == "localhost" || host == "127.0.0.1"
        }
        None => false,
    }
}
