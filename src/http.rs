//! Streamable HTTP transport: the MCP endpoint at `/mcp` plus `/health`.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tower_http::trace::TraceLayer;

use crate::mcp::WeztermMcpServer;
use crate::wezterm::CliRunner;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Build the HTTP router. Every MCP session shares one dispatcher.
pub fn router<R: CliRunner>(server: WeztermMcpServer<R>) -> Router {
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http())
}
