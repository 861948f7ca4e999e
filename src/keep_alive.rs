//! Minimal HTTP liveness endpoint. External process monitors ping this to see
//! the process as up; no business data is exposed here.

use axum::{routing::get, Router};

async fn home() -> &'static str {
    "✅ Bot de telas activo"
}

pub fn router() -> Router {
    Router::new().route("/", get(home))
}

/// Bind `0.0.0.0:port` and serve the liveness route in a background task.
/// A bind failure is logged but does not stop the bot itself.
pub async fn spawn(port: u16) {
    match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => {
            tracing::info!(port, "keep-alive endpoint listening");
            tokio::spawn(async move {
                if let Err(e) = axum::serve(listener, router()).await {
                    tracing::error!(error = ?e, "keep-alive server stopped");
                }
            });
        }
        Err(e) => {
            tracing::error!(error = ?e, port, "failed to bind keep-alive port");
        }
    }
}
