// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected artifact manifest.
//!
//! The fixed list of files the generator must produce, paired with the
//! content pattern each must satisfy. The manifest is compile-time data; it
//! is never persisted or mutated at runtime.

use regex::Regex;

/// Content pattern for a generated artifact.
///
/// A pattern is a plain text test, never a structural parse of the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Substring test.
    Contains(&'static str),
    /// Regular-expression test. An invalid pattern never matches.
    Regex(&'static str),
}

impl Pattern {
    /// Test the pattern against artifact text.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Contains(needle) => text.contains(needle),
            Pattern::Regex(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(text))
                .unwrap_or(false),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Contains(needle) => write!(f, "contains {:?}", needle),
            Pattern::Regex(pattern) => write!(f, "matches /{}/", pattern),
        }
    }
}

/// One expected artifact and its content rule.
#[derive(Clone, Copy, Debug)]
pub struct ArtifactRule {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Pattern the artifact text must satisfy.
    pub pattern: Pattern,
}

/// Artifacts the generator must write, in report order.
///
/// Each entry checks the diagram header the generator emits for that file.
pub const EXPECTED_ARTIFACTS: [ArtifactRule; 5] = [
    ArtifactRule {
        path: "mermaid/flowchart.mmd",
        pattern: Pattern::Contains("flowchart TB"),
    },
    ArtifactRule {
        path: "mermaid/er.mmd",
        pattern: Pattern::Contains("erDiagram"),
    },
    ArtifactRule {
        path: "mermaid/architecture.mmd",
        pattern: Pattern::Contains("architecture-beta"),
    },
    ArtifactRule {
        path: "mermaid/ci-sequence.mmd",
        pattern: Pattern::Contains("sequenceDiagram"),
    },
    ArtifactRule {
        path: "mermaid/bpmnish.mmd",
        pattern: Pattern::Contains("flowchart LR"),
    },
];

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
