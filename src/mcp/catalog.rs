//! The static tool registry.
//!
//! Each entry ties a tool name to its typed parameter struct: the JSON input
//! schema advertised through `tools/list` and the argument-list builder used
//! by the dispatcher are both derived from that one type.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use schemars::generate::SchemaSettings;
use serde_json::Value;

use super::tools::*;
use crate::error::ToolError;

/// How a tool's subprocess output is placed into the result envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Leading and trailing whitespace removed.
    Trimmed,
    /// Returned exactly as wezterm printed it. Screen content is
    /// whitespace-significant.
    Verbatim,
}

impl Output {
    pub fn envelope(self, text: String) -> CallToolResult {
        let text = match self {
            Self::Trimmed => text.trim().to_string(),
            Self::Verbatim => text,
        };
        CallToolResult::success(vec![Content::text(text)])
    }
}

/// An enumerated field checked before the argument bag is deserialized.
pub struct EnumField {
    pub field: &'static str,
    check: fn(&Value) -> Result<(), ToolError>,
}

impl EnumField {
    const fn of<C: Choice>(field: &'static str) -> Self {
        Self {
            field,
            check: check_choice::<C>,
        }
    }
}

/// Membership check against a closed set. Non-string values are compared by
/// their JSON text, so `5` is reported as `Invalid direction: 5`.
fn check_choice<C: Choice>(value: &Value) -> Result<(), ToolError> {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match C::parse(&text) {
        Some(_) => Ok(()),
        None => Err(ToolError::InvalidEnumValue {
            label: C::LABEL,
            value: text,
        }),
    }
}

/// One callable operation.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub enum_fields: &'static [EnumField],
    pub output: Output,
    schema: fn() -> JsonObject,
    build: fn(JsonObject) -> Result<Vec<String>, serde_json::Error>,
}

impl ToolSpec {
    const fn new<P: CliArgs>(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            enum_fields: &[],
            output: Output::Trimmed,
            schema: input_schema::<P>,
            build: build_args::<P>,
        }
    }

    const fn with_enums(mut self, enum_fields: &'static [EnumField]) -> Self {
        self.enum_fields = enum_fields;
        self
    }

    const fn verbatim(mut self) -> Self {
        self.output = Output::Verbatim;
        self
    }

    pub fn input_schema(&self) -> JsonObject {
        (self.schema)()
    }

    /// The MCP tool descriptor advertised to clients.
    pub fn tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(self.input_schema()))
    }

    /// Check every declared enumerated field that is present (and not null).
    pub fn validate(&self, bag: &JsonObject) -> Result<(), ToolError> {
        for field in self.enum_fields {
            match bag.get(field.field) {
                None | Some(Value::Null) => {}
                Some(value) => (field.check)(value)?,
            }
        }
        Ok(())
    }

    /// Translate the argument bag into the `wezterm cli` argument list.
    pub fn build_args(&self, bag: JsonObject) -> Result<Vec<String>, ToolError> {
        (self.build)(bag).map_err(|source| ToolError::InvalidArguments {
            tool: self.name,
            source,
        })
    }
}

fn build_args<P: CliArgs>(bag: JsonObject) -> Result<Vec<String>, serde_json::Error> {
    let params: P = serde_json::from_value(Value::Object(bag))?;
    Ok(params.to_args())
}

/// Draft-07 schema with enums inlined, as MCP clients expect a flat object.
fn input_schema<P: CliArgs>() -> JsonObject {
    let generator = SchemaSettings::draft07()
        .with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        })
        .into_generator();
    let schema = generator.into_root_schema_for::<P>();
    match serde_json::to_value(schema) {
        Ok(Value::Object(mut map)) => {
            map.remove("title");
            map.remove("description");
            map
        }
        _ => {
            let mut map = JsonObject::new();
            map.insert("type".into(), Value::String("object".into()));
            map
        }
    }
}

static PANE_DIRECTION: &[EnumField] = &[EnumField::of::<PaneDirection>("direction")];
static SPLIT_DIRECTION: &[EnumField] = &[EnumField::of::<SplitDirection>("direction")];
static ZOOM_MODE: &[EnumField] = &[EnumField::of::<ZoomMode>("mode")];

static CATALOG: &[ToolSpec] = &[
    // ── Query ────────────────────────────────────────────────────
    ToolSpec::new::<ListPanesParams>(
        "list_panes",
        "List all WezTerm windows, tabs and panes (JSON).",
    ),
    ToolSpec::new::<ListClientsParams>("list_clients", "List connected WezTerm clients (JSON)."),
    ToolSpec::new::<GetTextParams>(
        "get_text",
        "Retrieve textual content of a pane's terminal screen/scrollback.",
    )
    .verbatim(),
    ToolSpec::new::<GetPaneDirectionParams>(
        "get_pane_direction",
        "Get the pane ID of the adjacent pane in the given direction.",
    )
    .with_enums(PANE_DIRECTION),
    // ── Pane management ──────────────────────────────────────────
    ToolSpec::new::<SplitPaneParams>("split_pane", "Split a pane. Returns the new pane ID.")
        .with_enums(SPLIT_DIRECTION),
    ToolSpec::new::<SpawnParams>(
        "spawn",
        "Spawn a command in a new window or tab. Returns the new pane ID.",
    ),
    ToolSpec::new::<SendTextParams>(
        "send_text",
        "Send text to a pane as though it were pasted (bracketed paste).",
    ),
    ToolSpec::new::<ActivatePaneParams>("activate_pane", "Activate (focus) a specific pane."),
    ToolSpec::new::<ActivatePaneDirectionParams>(
        "activate_pane_direction",
        "Activate the adjacent pane in the given direction.",
    )
    .with_enums(PANE_DIRECTION),
    ToolSpec::new::<KillPaneParams>("kill_pane", "Kill a pane."),
    ToolSpec::new::<AdjustPaneSizeParams>(
        "adjust_pane_size",
        "Resize a pane in the given direction.",
    )
    .with_enums(PANE_DIRECTION),
    ToolSpec::new::<ZoomPaneParams>("zoom_pane", "Zoom, unzoom, or toggle zoom on a pane.")
        .with_enums(ZOOM_MODE),
    ToolSpec::new::<MovePaneToNewTabParams>("move_pane_to_new_tab", "Move a pane into a new tab."),
    // ── Tab management ───────────────────────────────────────────
    ToolSpec::new::<ActivateTabParams>(
        "activate_tab",
        "Activate a tab by id, index, or relative offset.",
    ),
    ToolSpec::new::<SetTabTitleParams>("set_tab_title", "Change the title of a tab."),
    // ── Window / workspace ───────────────────────────────────────
    ToolSpec::new::<SetWindowTitleParams>("set_window_title", "Change the title of a window."),
    ToolSpec::new::<RenameWorkspaceParams>("rename_workspace", "Rename a workspace."),
];

/// All tools, in advertisement order.
pub fn catalog() -> &'static [ToolSpec] {
    CATALOG
}

pub fn find(name: &str) -> Option<&'static ToolSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

/// MCP descriptors for `tools/list`.
pub fn tools() -> Vec<Tool> {
    CATALOG.iter().map(ToolSpec::tool).collect()
}
