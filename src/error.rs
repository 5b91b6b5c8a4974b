use thiserror::Error;

use crate::wezterm::CliError;

/// Failures raised while dispatching a single tool call.
///
/// The MCP boundary turns every variant into an error-flagged result
/// carrying `to_string()` as its only text item.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid {label}: {value}")]
    InvalidEnumValue { label: &'static str, value: String },

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Subprocess(#[from] CliError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_message() {
        let err = ToolError::UnknownTool("frobnicate".into());
        assert_eq!(err.to_string(), "Unknown tool: frobnicate");
    }

    #[test]
    fn invalid_enum_message_names_label_and_value() {
        let err = ToolError::InvalidEnumValue {
            label: "direction",
            value: "Sideways".into(),
        };
        assert_eq!(err.to_string(), "Invalid direction: Sideways");
    }

    #[test]
    fn subprocess_error_is_transparent() {
        let err: ToolError = CliError::Spawn {
            program: "wezterm".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert!(err.to_string().starts_with("failed to run wezterm:"));
    }
}
