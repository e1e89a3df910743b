use anyhow::Result;
use axum::Router;
use tracing::info;
mod infra;
mod rss;
mod status;

// Fixed bind address; the consumers under test expect the mock here.
const ADDRESS: &str = "0.0.0.0:5050";

#[tokio::main]
async fn main() -> Result<()> {
    infra::telemetry::init()?;

    let router = app();

    info!(address = ADDRESS, "initialized router");

    axum::Server::bind(&ADDRESS.parse()?)
        .serve(router.into_make_service())
        .with_graceful_shutdown(infra::os::shutdown_signal())
        .await?;

    Ok(())
}

fn app() -> Router {
    Router::new()
        .nest(rss::PATH, rss::router())
        .nest(status::PATH, status::router())
        .layer(infra::telemetry::tracing_middleware())
}
