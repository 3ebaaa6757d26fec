use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use maud::Markup;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

mod components;
mod config;
mod err_responses;
mod icons;
mod news;
mod search;

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    http_client: reqwest::Client,
}

async fn home() -> Markup {
    components::index_page()
}

fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(home))
        .route("/search", get(search::search))
        .with_state(state)
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_args(std::env::args_os())?;

    if !config.assets_dir.is_dir() {
        tracing::warn!(
            dir = %config.assets_dir.display(),
            "assets directory not found, static files will not be served"
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState {
        config: Arc::new(config),
        http_client: reqwest::Client::new(),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
