// portreset: power-cycle the switch port behind a client MAC, over HTTP.

use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use portreset::{config, http};

const LISTEN_ADDR: &str = "0.0.0.0:9000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("reading SWITCHPORTRESET_* environment")?;

    init_tracing(config.debug);

    let settings = Arc::new(config.controller_settings());
    let app = if config.debug {
        http::router(settings).layer(TraceLayer::new_for_http())
    } else {
        http::router(settings)
    };

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        controller = %config.baseurl,
        "portreset listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        "portreset=debug,portreset_core=debug,portreset_api=debug,tower_http=debug"
    } else {
        "portreset=info,portreset_core=info,portreset_api=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
