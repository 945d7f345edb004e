//! `serve` command handler.

use slidecast::{chat_service, router, BackendError, SlidecastConfig, SlidecastResult};

/// Serve the HTTP API until the process is stopped.
pub async fn serve(config: &SlidecastConfig, bind: Option<String>) -> SlidecastResult<()> {
    let service = chat_service(config)?;
    let addr = bind.unwrap_or_else(|| config.server.bind.clone());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BackendError::new(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, "Slidecast API listening. Press Ctrl+C to stop.");

    axum::serve(listener, router(service))
        .await
        .map_err(|e| BackendError::new(format!("Server error: {}", e)))?;
    Ok(())
}
