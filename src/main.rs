//! wezterm-mcp - WezTerm as an MCP tool server
//!
//! ## Modes
//!
//! **Default** / `wezterm-mcp stdio`: serves MCP over stdin/stdout, the way
//! desktop AI hosts launch tool servers.
//!
//! **HTTP** (`wezterm-mcp http`): serves MCP over Streamable HTTP at `/mcp`.

use clap::{Parser as ClapParser, Subcommand};
use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wezterm_mcp::{
    config::{Config, ConfigError},
    http,
    mcp::WeztermMcpServer,
    wezterm::WeztermCli,
};

/// wezterm-mcp - WezTerm panes, tabs, windows and workspaces as MCP tools
#[derive(ClapParser, Debug)]
#[command(name = "wezterm-mcp", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the wezterm executable (defaults to `wezterm` on PATH)
    #[arg(long, env = "WEZTERM_MCP_BIN", global = true)]
    wezterm: Option<PathBuf>,

    /// Config file (defaults to <config dir>/wezterm-mcp/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve MCP over stdin/stdout (the default)
    Stdio,

    /// Serve MCP over Streamable HTTP at /mcp
    Http {
        /// Address to bind the HTTP server
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mcp transport error: {0}")]
    Transport(String),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    let filter = config.log_filter(std::env::var("RUST_LOG").ok());

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => {
            init_tracing_stderr(&filter);
            let program = config.wezterm_program(cli.wezterm);
            run_stdio(WeztermCli::new(program)).await
        }
        Commands::Http { bind } => {
            init_tracing(&filter);
            let program = config.wezterm_program(cli.wezterm);
            run_http(WeztermCli::new(program), config.http_bind(bind)).await
        }
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize tracing with stderr output.
///
/// Stdio mode uses stdout for the JSON-RPC protocol, so all tracing MUST go
/// to stderr to avoid corrupting the protocol stream.
fn init_tracing_stderr(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ── Stdio mode ─────────────────────────────────────────────────────

/// Serve until the client closes stdin.
async fn run_stdio(cli: WeztermCli) -> Result<(), AppError> {
    tracing::info!(program = %cli.program().display(), "wezterm-mcp server running on stdio");

    let service = WeztermMcpServer::new(cli)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    tracing::info!(?reason, "wezterm-mcp stdio server exiting");
    Ok(())
}

// ── HTTP mode ──────────────────────────────────────────────────────

/// Serve Streamable HTTP until Ctrl+C.
async fn run_http(cli: WeztermCli, bind: SocketAddr) -> Result<(), AppError> {
    tracing::info!(program = %cli.program().display(), "wezterm-mcp http server starting");

    let app = http::router(WeztermMcpServer::new(cli));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "MCP endpoint listening at /mcp");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(?e, "failed to listen for Ctrl+C");
            }
            tracing::info!("received Ctrl+C");
        })
        .await?;

    tracing::info!("wezterm-mcp http server exiting");
    Ok(())
}
