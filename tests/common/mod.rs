#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use wezterm_mcp::wezterm::{CliError, CliRunner};

/// In-process runner: records every argument list, replies with canned stdout.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    stdout: Arc<Mutex<String>>,
}

impl RecordingRunner {
    pub fn replying(stdout: &str) -> Self {
        let runner = Self::default();
        *runner.stdout.lock() = stdout.to_string();
        runner
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

impl CliRunner for RecordingRunner {
    async fn run(&self, args: Vec<String>) -> Result<String, CliError> {
        self.calls.lock().push(args);
        Ok(self.stdout.lock().clone())
    }
}

/// Write an executable shell script standing in for `wezterm`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let path = dir.join(name);
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o755)
        .open(&path)
        .expect("failed to create fake wezterm script");
    writeln!(file, "#!/bin/sh").unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.sync_all().unwrap();
    drop(file);
    path
}
