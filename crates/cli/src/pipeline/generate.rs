// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage 1: run the external generator and gate on its completion code.

use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::result::{StageFailure, StageName, StageReport};

/// How the generator process finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Exited with a code.
    Code(i32),
    /// Terminated by a signal, no code available.
    Signalled,
}

/// Launches the generator and waits for it to finish.
///
/// The wait is unbounded: the harness has no timeout or cancellation, it
/// suspends until the child terminates.
#[async_trait]
pub trait GeneratorLauncher: Send + Sync {
    async fn launch(&self) -> io::Result<Completion>;
}

/// Real launcher: spawns the generator command from the project root with
/// inherited stdio so its own diagnostics stream live to the console.
#[derive(Clone, Debug)]
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl CommandLauncher {
    /// Create a launcher for `program args..` run from `cwd`.
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }
}

#[async_trait]
impl GeneratorLauncher for CommandLauncher {
    async fn launch(&self) -> io::Result<Completion> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(match status.code() {
            Some(code) => Completion::Code(code),
            None => Completion::Signalled,
        })
    }
}

/// Run the generate stage.
///
/// Exit code zero passes; any other completion is a structured failure for
/// the driver to act on. The generator's artifacts on disk are its own side
/// effect, not inspected here.
pub async fn run(launcher: &impl GeneratorLauncher) -> StageReport {
    match launcher.launch().await {
        Ok(Completion::Code(0)) => StageReport::passed(StageName::Generate, vec![]),
        Ok(Completion::Code(code)) => StageReport::failed(
            StageName::Generate,
            vec![],
            StageFailure::GeneratorExit { code },
        ),
        Ok(Completion::Signalled) => {
            StageReport::failed(StageName::Generate, vec![], StageFailure::GeneratorKilled)
        }
        Err(e) => StageReport::failed(
            StageName::Generate,
            vec![],
            StageFailure::Spawn(e.to_string()),
        ),
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
