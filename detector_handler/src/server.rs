use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use lib::service::CommonService;
use tracing::{error, info};

use crate::handlers::{emotion_detector_route, render_index_page};


pub fn make_app(service: CommonService) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/emotionDetector", post(emotion_detector_route))
        .with_state(service)
}

pub async fn run_server(app: Router, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Error binding to {}:{}", host, port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(error) => {
            error!("Unable to listen for Ctrl-C: {}", error);
            std::future::pending::<()>().await;
        },
    }
}
