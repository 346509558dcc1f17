// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable progress and diagnostic lines.
//!
//! Output is for people watching a smoke run, not machines: one header per
//! stage, one `✓`/`✗` line per checked item, one summary per stage, and a
//! final verdict line. Write failures to the console are ignored.

use std::io::{self, IsTerminal, Write};

use super::result::{RunVerdict, StageName, StageReport};

/// Write the banner printed before any stage runs.
pub fn write_banner<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "Smoke-testing Mermaid generator...");
    let _ = writeln!(writer);
}

/// Write the progress header for a stage about to run.
pub fn write_stage_header<W: Write>(writer: &mut W, ordinal: usize, stage: StageName) {
    let _ = writeln!(writer, "Stage {}: {}...", ordinal, stage);
}

/// Write a completed stage's per-item lines and its summary.
pub fn write_stage_report<W: Write>(writer: &mut W, report: &StageReport) {
    for item in &report.items {
        let mark = if item.passed { '✓' } else { '✗' };
        let _ = writeln!(writer, "  {} {} {}", mark, item.subject, item.detail);
    }

    match &report.failure {
        None => {
            let _ = writeln!(writer, "✓ {}", success_line(report.stage));
        }
        Some(failure) => {
            let _ = writeln!(writer, "✗ {}", failure);
        }
    }
    let _ = writeln!(writer);
}

/// Write the final verdict line.
pub fn write_verdict<W: Write>(writer: &mut W, verdict: &RunVerdict) {
    if verdict.passed() {
        let _ = writeln!(writer, "✅ All smoke checks passed");
    } else {
        let _ = writeln!(writer, "✗ Smoke checks failed");
    }
}

fn success_line(stage: StageName) -> &'static str {
    match stage {
        StageName::Generate => "Generator executed successfully",
        StageName::Existence => "All output files exist",
        StageName::Content => "All content validations passed",
    }
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
