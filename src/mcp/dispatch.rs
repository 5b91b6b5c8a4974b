use rmcp::model::{CallToolResult, JsonObject};

use super::catalog;
use crate::error::ToolError;
use crate::wezterm::CliRunner;

/// Validates, translates and runs tool calls against one [`CliRunner`].
///
/// Stateless between calls; concurrent dispatches each spawn their own
/// subprocess.
#[derive(Debug)]
pub struct Dispatcher<R> {
    runner: R,
}

impl<R: CliRunner> Dispatcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let spec =
            catalog::find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        spec.validate(&arguments)?;
        let args = spec.build_args(arguments)?;

        tracing::debug!(tool = spec.name, ?args, "running wezterm cli");
        let stdout = self.runner.run(args).await?;

        Ok(spec.output.envelope(stdout))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::Value;

    use super::*;
    use crate::wezterm::CliError;

    /// Records each argument list and answers with canned stdout.
    #[derive(Clone, Default)]
    struct RecordingRunner {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        stdout: Arc<Mutex<String>>,
    }

    impl RecordingRunner {
        fn replying(stdout: &str) -> Self {
            let runner = Self::default();
            *runner.stdout.lock() = stdout.to_string();
            runner
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().clone()
        }
    }

    impl CliRunner for RecordingRunner {
        async fn run(&self, args: Vec<String>) -> Result<String, CliError> {
            self.calls.lock().push(args);
            Ok(self.stdout.lock().clone())
        }
    }

    struct FailingRunner;

    impl CliRunner for FailingRunner {
        async fn run(&self, _args: Vec<String>) -> Result<String, CliError> {
            Err(CliError::Spawn {
                program: "wezterm".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn bag(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn activate_pane_direction_scenario() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch(
                "activate_pane_direction",
                bag(serde_json::json!({"pane_id": 3, "direction": "Left"})),
            )
            .await
            .unwrap();
        assert_eq!(
            runner.calls(),
            vec![vec!["activate-pane-direction", "--pane-id", "3", "Left"]]
        );
    }

    #[tokio::test]
    async fn send_text_scenario() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch("send_text", bag(serde_json::json!({"text": "ls\n", "pane_id": 7})))
            .await
            .unwrap();
        assert_eq!(
            runner.calls(),
            vec![vec!["send-text", "--pane-id", "7", "--", "ls\n"]]
        );
    }

    #[tokio::test]
    async fn rename_workspace_scenario() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch("rename_workspace", bag(serde_json::json!({"new_workspace": "work"})))
            .await
            .unwrap();
        assert_eq!(runner.calls(), vec![vec!["rename-workspace", "work"]]);
    }

    #[tokio::test]
    async fn invalid_direction_never_reaches_subprocess() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        let err = dispatcher
            .dispatch("get_pane_direction", bag(serde_json::json!({"direction": "Sideways"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidEnumValue { label: "direction", .. }));
        assert!(err.to_string().contains("Invalid direction: Sideways"));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        let err = dispatcher
            .dispatch("open_the_pod_bay_doors", JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: open_the_pod_bay_doors");
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn zoom_pane_default_matches_toggle() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch("zoom_pane", bag(serde_json::json!({"pane_id": 1})))
            .await
            .unwrap();
        dispatcher
            .dispatch("zoom_pane", bag(serde_json::json!({"pane_id": 1, "mode": "toggle"})))
            .await
            .unwrap();
        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn get_text_is_not_trimmed() {
        let runner = RecordingRunner::replying("  $ ls\n  file.txt\n\n");
        let dispatcher = Dispatcher::new(runner);
        let result = dispatcher.dispatch("get_text", JsonObject::new()).await.unwrap();
        assert_eq!(text(&result), "  $ ls\n  file.txt\n\n");
    }

    #[tokio::test]
    async fn other_tools_are_trimmed() {
        let runner = RecordingRunner::replying("\n42\n");
        let dispatcher = Dispatcher::new(runner);
        for (name, args) in [
            ("split_pane", serde_json::json!({})),
            ("spawn", serde_json::json!({})),
            ("list_panes", serde_json::json!({})),
            ("get_pane_direction", serde_json::json!({"direction": "Next"})),
        ] {
            let result = dispatcher.dispatch(name, bag(args)).await.unwrap();
            assert_eq!(text(&result), "42", "{name}");
            assert_ne!(result.is_error, Some(true));
        }
    }

    #[tokio::test]
    async fn empty_program_emits_no_separator() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch("split_pane", bag(serde_json::json!({"program": []})))
            .await
            .unwrap();
        dispatcher
            .dispatch("spawn", bag(serde_json::json!({"program": []})))
            .await
            .unwrap();
        assert_eq!(runner.calls(), vec![vec!["split-pane"], vec!["spawn"]]);
    }

    #[tokio::test]
    async fn loose_values_reach_the_cli() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        dispatcher
            .dispatch(
                "split_pane",
                bag(serde_json::json!({"pane_id": "3", "cells": -5, "program": null})),
            )
            .await
            .unwrap();
        dispatcher
            .dispatch("activate_tab", bag(serde_json::json!({"tab_index": 1.0})))
            .await
            .unwrap();
        assert_eq!(
            runner.calls(),
            vec![
                vec!["split-pane", "--pane-id", "3", "--cells", "-5"],
                vec!["activate-tab", "--tab-index", "1"],
            ]
        );
    }

    #[tokio::test]
    async fn missing_required_field_is_invalid_arguments() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        let err = dispatcher
            .dispatch("kill_pane", JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { tool: "kill_pane", .. }));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn subprocess_failure_propagates() {
        let dispatcher = Dispatcher::new(FailingRunner);
        let err = dispatcher
            .dispatch("list_clients", JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Subprocess(CliError::Spawn { .. })));
    }

    #[tokio::test]
    async fn one_subprocess_call_per_dispatch() {
        let runner = RecordingRunner::default();
        let dispatcher = Dispatcher::new(runner.clone());
        for name in ["list_panes", "list_clients", "get_text", "activate_tab"] {
            dispatcher.dispatch(name, JsonObject::new()).await.unwrap();
        }
        assert_eq!(runner.calls().len(), 4);
    }
}
