// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured results produced by pipeline stages.
//!
//! Stages never terminate the process themselves; they hand one of these
//! reports back to the driver, which decides short-circuiting and the final
//! exit code.

use thiserror::Error;

/// Process exit codes for the harness.
pub mod exit_codes {
    /// Every stage passed.
    pub const SUCCESS: i32 = 0;
    /// A stage failed: generator error, missing artifact, or content mismatch.
    pub const FAILURE: i32 = 1;
}

/// Pipeline stage identity, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageName {
    /// Run the external generator.
    Generate,
    /// Confirm every expected artifact exists.
    Existence,
    /// Validate artifact text against each content rule.
    Content,
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageName::Generate => write!(f, "Running generator"),
            StageName::Existence => write!(f, "Checking output files"),
            StageName::Content => write!(f, "Validating content"),
        }
    }
}

/// Why a stage failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StageFailure {
    #[error("failed to launch generator: {0}")]
    Spawn(String),

    #[error("generator failed with code {code}")]
    GeneratorExit { code: i32 },

    #[error("generator was terminated by a signal")]
    GeneratorKilled,

    #[error("{count} output file(s) are missing")]
    MissingArtifacts { count: usize },

    #[error("{count} content validation(s) failed")]
    ContentMismatch { count: usize },
}

/// Outcome of one checked item within a stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCheck {
    /// Artifact path relative to the project root.
    pub subject: String,
    /// Whether the check passed.
    pub passed: bool,
    /// One-line detail appended to the diagnostic.
    pub detail: String,
}

impl ItemCheck {
    /// A passed item check.
    pub fn pass(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    /// A failed item check.
    pub fn fail(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Result of one pipeline stage.
#[derive(Clone, Debug)]
pub struct StageReport {
    /// Which stage produced this report.
    pub stage: StageName,
    /// Per-item outcomes. Empty for the generate stage.
    pub items: Vec<ItemCheck>,
    /// Present when the stage failed.
    pub failure: Option<StageFailure>,
}

impl StageReport {
    /// A passed stage.
    pub fn passed(stage: StageName, items: Vec<ItemCheck>) -> Self {
        Self {
            stage,
            items,
            failure: None,
        }
    }

    /// A failed stage.
    pub fn failed(stage: StageName, items: Vec<ItemCheck>, failure: StageFailure) -> Self {
        Self {
            stage,
            items,
            failure: Some(failure),
        }
    }

    /// Whether the stage passed.
    pub fn is_pass(&self) -> bool {
        self.failure.is_none()
    }
}

/// Ordered stage reports for one run.
///
/// A run that short-circuited holds fewer than three reports, and its last
/// report carries the failure.
#[derive(Clone, Debug, Default)]
pub struct RunVerdict {
    /// Reports in execution order.
    pub reports: Vec<StageReport>,
}

impl RunVerdict {
    /// Whether every stage ran and passed.
    pub fn passed(&self) -> bool {
        !self.reports.is_empty() && self.reports.iter().all(StageReport::is_pass)
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
