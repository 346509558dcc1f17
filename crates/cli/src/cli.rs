// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.
//!
//! Every flag is optional; the defaults reproduce the harness's canonical
//! invocation from the project root with no arguments.

use std::path::PathBuf;

use clap::Parser;

/// Generator command used when `--generator` is not given.
pub const DEFAULT_GENERATOR: &str = "node scripts/generate-mermaid.mjs";

/// Mermaid generator smoke harness
#[derive(Parser, Clone, Debug)]
#[command(
    name = "mermsmoke",
    version,
    about = "Smoke-test harness for the Mermaid diagram generator"
)]
pub struct Cli {
    /// Project root the generator runs in (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Generator command line, split on whitespace
    #[arg(long)]
    pub generator: Option<String>,
}

impl Cli {
    /// Split the generator command line into program and arguments.
    ///
    /// Returns `None` when the command line is empty or all whitespace.
    pub fn generator_command(&self) -> Option<(String, Vec<String>)> {
        let raw = self.generator.as_deref().unwrap_or(DEFAULT_GENERATOR);
        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
