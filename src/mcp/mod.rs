pub mod catalog;
pub mod dispatch;
pub mod tools;

use std::sync::Arc;

use rmcp::{
    model::*,
    service::RequestContext,
    RoleServer,
    ServerHandler,
};

use crate::wezterm::{CliRunner, WeztermCli};
use dispatch::Dispatcher;

// ── MCP server ─────────────────────────────────────────────────────

/// MCP front end for the tool catalog.
///
/// Tool failures never surface as JSON-RPC errors: every `tools/call`
/// produces exactly one `CallToolResult`, error-flagged when dispatch fails.
pub struct WeztermMcpServer<R = WeztermCli> {
    dispatcher: Arc<Dispatcher<R>>,
}

impl<R> Clone for WeztermMcpServer<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R: CliRunner> WeztermMcpServer<R> {
    pub fn new(runner: R) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(runner)),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }

    /// Run one tool call and fold any failure into an error result.
    pub async fn call(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        match self.dispatcher.dispatch(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }
}

impl<R: CliRunner> ServerHandler for WeztermMcpServer<R> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wezterm-mcp".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Control WezTerm panes, tabs, windows and workspaces through `wezterm cli`."
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Use list_panes to discover window, tab and pane IDs (JSON). Most tools take \
                 an optional pane_id and otherwise act on the pane wezterm-mcp was started \
                 from. split_pane and spawn return the new pane ID; get_text reads a pane's \
                 screen or scrollback verbatim; send_text types into a pane."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(catalog::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.call(&request.name, arguments).await)
    }
}
