// Framework bootstrap for the pokedex server runtime.

use crate::frameworks::config::{self, UpstreamUrls};
use crate::interface_adapters::clients::{SpeciesClient, TranslationClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::{Error, ErrorKind, Result};
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, upstreams: UpstreamUrls) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&upstreams)?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, UpstreamUrls::from_env()).await
}

fn build_state(upstreams: &UpstreamUrls) -> Result<Arc<AppState>> {
    tracing::debug!(
        species_url = %upstreams.species,
        translation_url = %upstreams.translation,
        "upstream clients configured."
    );

    let fetcher = SpeciesClient::new(&upstreams.species).map_err(|e| {
        tracing::error!(error = %e, "invalid species service url");
        Error::new(ErrorKind::InvalidInput, e)
    })?;
    let translator = TranslationClient::new(upstreams.translation.clone());

    Ok(Arc::new(AppState {
        fetcher: Arc::new(fetcher),
        translator: Arc::new(translator),
    }))
}
