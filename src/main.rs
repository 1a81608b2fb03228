//! prism-server - reference profile API backed by the in-memory store.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prism_profiler::adapters::api::InMemoryProfileApi;
use prism_profiler::adapters::http::{prism_router, PrismHandlers};
use prism_profiler::adapters::objective::TemplateSuggester;
use prism_profiler::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;

    let handlers = PrismHandlers::new(
        Arc::new(InMemoryProfileApi::seeded()),
        Arc::new(TemplateSuggester::new()),
    );
    let app = prism_router(handlers, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    info!("PRISM profile API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
