// MCP tool parameter types and their `wezterm cli` argument lists

use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

// ── Enumerated fields ────────────────────────────────────────────

/// A closed set of accepted spellings for one enumerated field.
pub trait Choice: Copy + Sized + 'static {
    /// Field label used in validation messages.
    const LABEL: &'static str;
    const ALL: &'static [Self];

    /// The spelling accepted from callers.
    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Direction for pane navigation and resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
pub enum PaneDirection {
    Up,
    Down,
    Left,
    Right,
    Next,
    Prev,
}

impl Choice for PaneDirection {
    const LABEL: &'static str = "direction";
    const ALL: &'static [Self] = &[
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Next,
        Self::Prev,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Next => "Next",
            Self::Prev => "Prev",
        }
    }
}

/// Where `split_pane` places the new pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Left,
    Right,
    Top,
    Bottom,
}

impl Choice for SplitDirection {
    const LABEL: &'static str = "direction";
    const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Top, Self::Bottom];

    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    Zoom,
    Unzoom,
    #[default]
    Toggle,
}

impl Choice for ZoomMode {
    const LABEL: &'static str = "mode";
    const ALL: &'static [Self] = &[Self::Zoom, Self::Unzoom, Self::Toggle];

    fn as_str(self) -> &'static str {
        match self {
            Self::Zoom => "zoom",
            Self::Unzoom => "unzoom",
            Self::Toggle => "toggle",
        }
    }
}

// ── Numeric fields ───────────────────────────────────────────────

/// An ID, count or offset handed to wezterm as text.
///
/// Accepts any JSON number, or a string, and keeps it unchecked: wezterm
/// owns the range rules. Whole floats such as `1.0` are written as `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliNumber(String);

impl Display for CliNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => number.to_string(),
    }
}

impl<'de> Deserialize<'de> for CliNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawNumber::deserialize(deserializer)? {
            RawNumber::Number(number) => Self(number_text(&number)),
            RawNumber::Text(text) => Self(text),
        })
    }
}

impl schemars::JsonSchema for CliNumber {
    fn schema_name() -> Cow<'static, str> {
        "CliNumber".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({ "type": "number" })
    }
}

// ── Argument list construction ───────────────────────────────────

/// Ordered argument list for one `wezterm cli` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    pub fn new(subcommand: &str) -> Self {
        Self(vec![subcommand.to_string()])
    }

    /// Append a bare flag when `on` is set.
    pub fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.0.push(name.to_string());
        }
        self
    }

    /// Append `name value` when a value is present.
    pub fn value<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.0.push(name.to_string());
            self.0.push(value.to_string());
        }
        self
    }

    /// Like [`ArgList::value`], but empty strings count as absent.
    pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        self.value(name, value.filter(|v| !v.is_empty()))
    }

    pub fn positional(&mut self, value: impl Into<String>) -> &mut Self {
        self.0.push(value.into());
        self
    }

    /// Append `-- value` so a payload starting with `-` is never read as a flag.
    pub fn trailing(&mut self, value: impl Into<String>) -> &mut Self {
        self.0.push("--".to_string());
        self.0.push(value.into());
        self
    }

    /// Append `-- prog args...`; an empty program means the default shell.
    pub fn program(&mut self, program: &[String]) -> &mut Self {
        if !program.is_empty() {
            self.0.push("--".to_string());
            self.0.extend(program.iter().cloned());
        }
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Typed parameters of one tool, translated into a `wezterm cli` call.
pub trait CliArgs: DeserializeOwned + schemars::JsonSchema {
    const SUBCOMMAND: &'static str;

    /// Target pane, emitted as `--pane-id` ahead of every other flag.
    fn pane_id(&self) -> Option<&CliNumber> {
        None
    }

    /// Operation-specific flags and positionals, in emission order.
    fn push_args(&self, args: &mut ArgList);

    fn to_args(&self) -> Vec<String> {
        let mut args = ArgList::new(Self::SUBCOMMAND);
        args.value("--pane-id", self.pane_id());
        self.push_args(&mut args);
        args.into_vec()
    }
}

// ── Query ────────────────────────────────────────────────────────

/// Parameters for `list_panes`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPanesParams {}

impl CliArgs for ListPanesParams {
    const SUBCOMMAND: &'static str = "list";

    fn push_args(&self, args: &mut ArgList) {
        args.value("--format", Some("json"));
    }
}

/// Parameters for `list_clients`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListClientsParams {}

impl CliArgs for ListClientsParams {
    const SUBCOMMAND: &'static str = "list-clients";

    fn push_args(&self, args: &mut ArgList) {
        args.value("--format", Some("json"));
    }
}

/// Parameters for `get_text`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTextParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    /// Negative values address scrollback and are passed through unchanged.
    #[schemars(description = "Starting line. 0 = first screen line, negative = scrollback.")]
    pub start_line: Option<CliNumber>,

    #[schemars(description = "Ending line. 0 = first screen line, negative = scrollback.")]
    pub end_line: Option<CliNumber>,

    #[schemars(description = "Include color/style escape sequences.")]
    pub escapes: Option<bool>,
}

impl CliArgs for GetTextParams {
    const SUBCOMMAND: &'static str = "get-text";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--start-line", self.start_line.as_ref())
            .value("--end-line", self.end_line.as_ref())
            .flag("--escapes", self.escapes.unwrap_or(false));
    }
}

/// Parameters for `get_pane_direction`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPaneDirectionParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Direction.")]
    pub direction: PaneDirection,
}

impl CliArgs for GetPaneDirectionParams {
    const SUBCOMMAND: &'static str = "get-pane-direction";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.positional(self.direction.as_str());
    }
}

// ── Pane management ──────────────────────────────────────────────

/// Parameters for `split_pane`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitPaneParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Where to place the new pane relative to the target. Default: bottom.")]
    pub direction: Option<SplitDirection>,

    #[schemars(description = "Split the entire window instead of the active pane.")]
    pub top_level: Option<bool>,

    #[schemars(description = "Number of cells for the new split.")]
    pub cells: Option<CliNumber>,

    #[schemars(description = "Percentage of available space for the new split.")]
    pub percent: Option<CliNumber>,

    #[schemars(description = "Working directory for the spawned program.")]
    pub cwd: Option<String>,

    #[schemars(description = "Instead of spawning a new command, move this pane into the split.")]
    pub move_pane_id: Option<CliNumber>,

    /// Empty means the default shell.
    #[schemars(description = "Command and args to run instead of the default shell.")]
    pub program: Option<Vec<String>>,
}

impl CliArgs for SplitPaneParams {
    const SUBCOMMAND: &'static str = "split-pane";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        if let Some(direction) = self.direction {
            args.positional(format!("--{}", direction.as_str()));
        }
        args.flag("--top-level", self.top_level.unwrap_or(false))
            .value("--cells", self.cells.as_ref())
            .value("--percent", self.percent.as_ref())
            .text("--cwd", self.cwd.as_deref())
            .value("--move-pane-id", self.move_pane_id.as_ref())
            .program(self.program.as_deref().unwrap_or_default());
    }
}

/// Parameters for `spawn`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SpawnParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Domain name.")]
    pub domain_name: Option<String>,

    #[schemars(description = "Window to spawn into. Omit for current window.")]
    pub window_id: Option<CliNumber>,

    #[schemars(description = "Spawn into a new window instead of a new tab.")]
    pub new_window: Option<bool>,

    #[schemars(description = "Working directory for the spawned program.")]
    pub cwd: Option<String>,

    #[schemars(description = "Workspace name for the new window. Requires new_window. Default: \"default\".")]
    pub workspace: Option<String>,

    #[schemars(description = "Command and args to run instead of the default shell.")]
    pub program: Option<Vec<String>>,
}

impl CliArgs for SpawnParams {
    const SUBCOMMAND: &'static str = "spawn";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.text("--domain-name", self.domain_name.as_deref())
            .value("--window-id", self.window_id.as_ref())
            .flag("--new-window", self.new_window.unwrap_or(false))
            .text("--cwd", self.cwd.as_deref())
            .text("--workspace", self.workspace.as_deref())
            .program(self.program.as_deref().unwrap_or_default());
    }
}

/// Parameters for `send_text`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SendTextParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Text to send.")]
    pub text: String,

    #[schemars(description = "Send directly instead of bracketed paste.")]
    pub no_paste: Option<bool>,
}

impl CliArgs for SendTextParams {
    const SUBCOMMAND: &'static str = "send-text";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.flag("--no-paste", self.no_paste.unwrap_or(false))
            .trailing(self.text.as_str());
    }
}

/// Parameters for `activate_pane`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ActivatePaneParams {
    #[schemars(description = "Pane to focus.")]
    pub pane_id: CliNumber,
}

impl CliArgs for ActivatePaneParams {
    const SUBCOMMAND: &'static str = "activate-pane";

    fn pane_id(&self) -> Option<&CliNumber> {
        Some(&self.pane_id)
    }

    fn push_args(&self, _args: &mut ArgList) {}
}

/// Parameters for `kill_pane`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct KillPaneParams {
    #[schemars(description = "Pane to kill.")]
    pub pane_id: CliNumber,
}

impl CliArgs for KillPaneParams {
    const SUBCOMMAND: &'static str = "kill-pane";

    fn pane_id(&self) -> Option<&CliNumber> {
        Some(&self.pane_id)
    }

    fn push_args(&self, _args: &mut ArgList) {}
}

/// Parameters for `activate_pane_direction`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ActivatePaneDirectionParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Direction.")]
    pub direction: PaneDirection,
}

impl CliArgs for ActivatePaneDirectionParams {
    const SUBCOMMAND: &'static str = "activate-pane-direction";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.positional(self.direction.as_str());
    }
}

/// Parameters for `adjust_pane_size`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AdjustPaneSizeParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Direction.")]
    pub direction: PaneDirection,

    /// Not range-checked; wezterm decides what to do with it.
    #[schemars(description = "Number of cells to resize by. Default: 1.")]
    pub amount: Option<CliNumber>,
}

impl CliArgs for AdjustPaneSizeParams {
    const SUBCOMMAND: &'static str = "adjust-pane-size";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--amount", self.amount.as_ref())
            .positional(self.direction.as_str());
    }
}

/// Parameters for `zoom_pane`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ZoomPaneParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Zoom mode. Default: \"toggle\".")]
    pub mode: Option<ZoomMode>,
}

impl CliArgs for ZoomPaneParams {
    const SUBCOMMAND: &'static str = "zoom-pane";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        let mode = self.mode.unwrap_or_default();
        args.positional(format!("--{}", mode.as_str()));
    }
}

/// Parameters for `move_pane_to_new_tab`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MovePaneToNewTabParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Target window. Omit for current window.")]
    pub window_id: Option<CliNumber>,

    #[schemars(description = "Create the tab in a new window.")]
    pub new_window: Option<bool>,

    #[schemars(description = "Workspace name if creating a new window.")]
    pub workspace: Option<String>,
}

impl CliArgs for MovePaneToNewTabParams {
    const SUBCOMMAND: &'static str = "move-pane-to-new-tab";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--window-id", self.window_id.as_ref())
            .flag("--new-window", self.new_window.unwrap_or(false))
            .text("--workspace", self.workspace.as_deref());
    }
}

// ── Tab management ───────────────────────────────────────────────

/// Parameters for `activate_tab`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ActivateTabParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Target tab ID.")]
    pub tab_id: Option<CliNumber>,

    #[schemars(description = "Tab index (0-based). Negative values count from the right (-1 = last).")]
    pub tab_index: Option<CliNumber>,

    #[schemars(description = "Relative offset. -1 = left, 1 = right, etc.")]
    pub tab_relative: Option<CliNumber>,

    #[schemars(description = "Prevent wrapping when using tab_relative.")]
    pub no_wrap: Option<bool>,
}

impl CliArgs for ActivateTabParams {
    const SUBCOMMAND: &'static str = "activate-tab";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--tab-id", self.tab_id.as_ref())
            .value("--tab-index", self.tab_index.as_ref())
            .value("--tab-relative", self.tab_relative.as_ref())
            .flag("--no-wrap", self.no_wrap.unwrap_or(false));
    }
}

/// Parameters for `set_tab_title`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetTabTitleParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Target tab ID.")]
    pub tab_id: Option<CliNumber>,

    #[schemars(description = "New title.")]
    pub title: String,
}

impl CliArgs for SetTabTitleParams {
    const SUBCOMMAND: &'static str = "set-tab-title";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--tab-id", self.tab_id.as_ref())
            .positional(self.title.as_str());
    }
}

// ── Window / workspace ───────────────────────────────────────────

/// Parameters for `set_window_title`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetWindowTitleParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Target window ID.")]
    pub window_id: Option<CliNumber>,

    #[schemars(description = "New title.")]
    pub title: String,
}

impl CliArgs for SetWindowTitleParams {
    const SUBCOMMAND: &'static str = "set-window-title";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.value("--window-id", self.window_id.as_ref())
            .positional(self.title.as_str());
    }
}

/// Parameters for `rename_workspace`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenameWorkspaceParams {
    #[schemars(description = "Target pane ID. Defaults to the current pane (WEZTERM_PANE).")]
    pub pane_id: Option<CliNumber>,

    #[schemars(description = "Current workspace name to rename.")]
    pub workspace: Option<String>,

    #[schemars(description = "The new name for the workspace.")]
    pub new_workspace: String,
}

impl CliArgs for RenameWorkspaceParams {
    const SUBCOMMAND: &'static str = "rename-workspace";

    fn pane_id(&self) -> Option<&CliNumber> {
        self.pane_id.as_ref()
    }

    fn push_args(&self, args: &mut ArgList) {
        args.text("--workspace", self.workspace.as_deref())
            .positional(self.new_workspace.as_str());
    }
}
