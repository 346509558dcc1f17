// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage 3: validate artifact text against each content rule.
//!
//! Same check-all policy as the existence stage: every rule is evaluated and
//! reported before the stage's verdict. A file that cannot be read counts as
//! a failed rule, not a crash.

use std::path::Path;

use crate::fsio::ArtifactFs;
use crate::manifest::ArtifactRule;

use super::result::{ItemCheck, StageFailure, StageName, StageReport};

/// Run the content stage over the manifest.
pub async fn run(fs: &impl ArtifactFs, root: &Path, rules: &[ArtifactRule]) -> StageReport {
    let mut items = Vec::with_capacity(rules.len());
    for rule in rules {
        let full = root.join(rule.path);
        let item = match fs.read_to_string(&full).await {
            Ok(text) if rule.pattern.matches(&text) => {
                ItemCheck::pass(rule.path, "has correct diagram type")
            }
            Ok(_) => ItemCheck::fail(rule.path, "missing expected pattern"),
            Err(e) => ItemCheck::fail(rule.path, format!("could not be read: {e}")),
        };
        items.push(item);
    }

    let mismatched = items.iter().filter(|item| !item.passed).count();
    if mismatched == 0 {
        StageReport::passed(StageName::Content, items)
    } else {
        StageReport::failed(
            StageName::Content,
            items,
            StageFailure::ContentMismatch { count: mismatched },
        )
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
