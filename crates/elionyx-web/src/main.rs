//! Elionyx API server.
//!
//! Run with: cargo run -p elionyx-web

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use elionyx_llm::{
    EndpointRef, ServiceAccountKey, ServiceAccountTokenProvider, StaticTokenProvider,
    TokenProvider, VertexGateway,
};
use elionyx_predict::PredictionPipeline;
use elionyx_web::config::Config;
use elionyx_web::router::build_router;
use elionyx_web::state::AppState;

/// Resolve credential material: config-file path first, then the inline JSON
/// environment variable, then the well-known key-file path variable.
fn credentials(config: &Config) -> anyhow::Result<ServiceAccountKey> {
    if let Some(path) = &config.vertex.credentials_file {
        let material = std::fs::read_to_string(path)
            .with_context(|| format!("reading credentials file {path}"))?;
        return Ok(ServiceAccountKey::parse(&material)?);
    }
    if let Ok(material) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS_JSON") {
        return Ok(ServiceAccountKey::parse(&material)?);
    }
    if let Ok(path) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS") {
        let material = std::fs::read_to_string(&path)
            .with_context(|| format!("reading credentials file {path}"))?;
        return Ok(ServiceAccountKey::parse(&material)?);
    }
    anyhow::bail!(
        "No Vertex AI credentials: set vertex.credentials_file in elionyx.toml, or the \
         GOOGLE_APPLICATION_CREDENTIALS_JSON / GOOGLE_APPLICATION_CREDENTIALS environment variable"
    )
}

fn token_provider(config: &Config) -> anyhow::Result<Arc<dyn TokenProvider>> {
    // Local development against a tunnel: skip the OAuth flow entirely.
    if let Ok(token) = std::env::var("ELIONYX_ACCESS_TOKEN") {
        info!("using static access token from ELIONYX_ACCESS_TOKEN");
        return Ok(Arc::new(StaticTokenProvider::new(token)));
    }
    let key = credentials(config)?;
    Ok(Arc::new(ServiceAccountTokenProvider::new(key)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Elionyx API server...");

    let config = Config::load()?;
    let tokens = token_provider(&config)?;

    let gateway = VertexGateway::new(
        &config.vertex.project_id,
        EndpointRef::new(&config.vertex.region, &config.vertex.endpoint_id),
        EndpointRef::new(config.vertex.chat_region(), config.vertex.chat_endpoint_id()),
        config.vertex.serving_stack,
        tokens,
    );
    let pipeline = PredictionPipeline::new(Arc::new(gateway));

    let app = build_router(AppState::new(pipeline));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
