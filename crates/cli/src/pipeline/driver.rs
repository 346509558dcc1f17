// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline driver: runs the stages in order and decides short-circuiting.

use std::io::Write;
use std::path::PathBuf;

use crate::fsio::ArtifactFs;
use crate::manifest::ArtifactRule;

use super::generate::GeneratorLauncher;
use super::report;
use super::result::{RunVerdict, StageName, StageReport};
use super::{content, existence, generate};

/// Three-stage validation pipeline over injected capabilities.
///
/// Each stage is a hard gate: a failed stage ends the run before the next
/// stage starts. Within the existence and content stages every item is still
/// checked and reported before the stage's verdict.
pub struct Pipeline<L, F> {
    launcher: L,
    fs: F,
    root: PathBuf,
    rules: Vec<ArtifactRule>,
}

impl<L: GeneratorLauncher, F: ArtifactFs> Pipeline<L, F> {
    /// Create a pipeline rooted at `root` over the given manifest.
    pub fn new(launcher: L, fs: F, root: impl Into<PathBuf>, rules: Vec<ArtifactRule>) -> Self {
        Self {
            launcher,
            fs,
            root: root.into(),
            rules,
        }
    }

    /// Run the stages in order, writing diagnostics as each completes.
    pub async fn run<W: Write>(&self, writer: &mut W) -> RunVerdict {
        report::write_banner(writer);
        let mut verdict = RunVerdict::default();

        report::write_stage_header(writer, 1, StageName::Generate);
        let generated = generate::run(&self.launcher).await;
        if self.record(writer, &mut verdict, generated) {
            report::write_stage_header(writer, 2, StageName::Existence);
            let existence = existence::run(&self.fs, &self.root, &self.rules).await;
            if self.record(writer, &mut verdict, existence) {
                report::write_stage_header(writer, 3, StageName::Content);
                let content = content::run(&self.fs, &self.root, &self.rules).await;
                self.record(writer, &mut verdict, content);
            }
        }

        report::write_verdict(writer, &verdict);
        verdict
    }

    /// Report a completed stage and record it; returns whether to continue.
    fn record<W: Write>(&self, writer: &mut W, verdict: &mut RunVerdict, stage: StageReport) -> bool {
        report::write_stage_report(writer, &stage);
        let passed = stage.is_pass();
        verdict.reports.push(stage);
        passed
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
