//! Subprocess invoker for the `wezterm cli` client.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;

/// Default program name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "wezterm";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} ({status}){}", stderr_suffix(.stderr))]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}

/// Runs one `cli` subcommand and returns its standard output.
///
/// Implementations must spawn exactly one process per call and must not
/// retry. The returned text is the child's stdout, untrimmed.
pub trait CliRunner: Send + Sync + 'static {
    fn run(&self, args: Vec<String>) -> impl Future<Output = Result<String, CliError>> + Send;
}

/// The real runner: `<program> cli <args...>`.
#[derive(Debug, Clone)]
pub struct WeztermCli {
    program: PathBuf,
}

impl WeztermCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn describe(&self, args: &[String]) -> String {
        let mut command = format!("{} cli", self.program.display());
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl Default for WeztermCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CliRunner for WeztermCli {
    async fn run(&self, args: Vec<String>) -> Result<String, CliError> {
        let output = Command::new(&self.program)
            .arg("cli")
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CliError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CliError::Exit {
                command: self.describe(&args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_is_wezterm() {
        assert_eq!(WeztermCli::default().program(), Path::new("wezterm"));
    }

    #[test]
    fn describe_joins_arguments() {
        let cli = WeztermCli::new("/opt/wezterm/bin/wezterm");
        let described = cli.describe(&["zoom-pane".into(), "--toggle".into()]);
        assert_eq!(described, "/opt/wezterm/bin/wezterm cli zoom-pane --toggle");
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let cli = WeztermCli::new("/nonexistent/wezterm-mcp-test-binary");
        let err = cli.run(vec!["list".into()]).await.unwrap_err();
        assert!(matches!(err, CliError::Spawn { .. }));
        assert!(
            err.to_string()
                .starts_with("failed to run /nonexistent/wezterm-mcp-test-binary:"),
            "unexpected message: {err}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_error_message_includes_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let err = CliError::Exit {
            command: "wezterm cli kill-pane --pane-id 9".into(),
            status: ExitStatus::from_raw(1 << 8),
            stderr: "pane 9 not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: wezterm cli kill-pane --pane-id 9 (exit status: 1)\npane 9 not found"
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_error_message_without_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let err = CliError::Exit {
            command: "wezterm cli list".into(),
            status: ExitStatus::from_raw(2 << 8),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Command failed: wezterm cli list (exit status: 2)");
    }
}
