//! Axum router configuration and server startup.
//!
//! Static assets for the landing page are served from the configured
//! `web.static_dir` under `/static`.

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::WebConfig;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::web::handlers;

/// Build the web front end router
pub fn build_router(services: ServiceFactory) -> Router {
    let static_dir = ServeDir::new(&services.settings.web.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/participate", post(handlers::participate))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(services)
}

/// Bind the configured address.
///
/// Done before any front end starts so an occupied port fails startup.
pub async fn bind(config: &WebConfig) -> Result<TcpListener> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Web front end listening");
    Ok(listener)
}

/// Serve on an already bound listener until Ctrl+C
pub async fn serve(listener: TcpListener, services: ServiceFactory) -> Result<()> {
    axum::serve(listener, build_router(services))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web front end stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
