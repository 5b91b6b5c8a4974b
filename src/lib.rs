//! wezterm-mcp - WezTerm's multiplexer control surface as MCP tools.
//!
//! Every tool call becomes exactly one `wezterm cli <subcommand>` invocation.
//! Output is returned to the caller as opaque text; nothing here models panes,
//! tabs or windows.

pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod wezterm;
