// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage 2: confirm every expected artifact exists.
//!
//! Check-all-then-report: every entry is probed even after a failure, so a
//! single run surfaces every missing file. Content is not read here.

use std::path::Path;

use crate::fsio::ArtifactFs;
use crate::manifest::ArtifactRule;

use super::result::{ItemCheck, StageFailure, StageName, StageReport};

/// Run the existence stage over the manifest.
pub async fn run(fs: &impl ArtifactFs, root: &Path, rules: &[ArtifactRule]) -> StageReport {
    let mut items = Vec::with_capacity(rules.len());
    for rule in rules {
        let full = root.join(rule.path);
        if fs.exists(&full).await {
            items.push(ItemCheck::pass(rule.path, "found"));
        } else {
            items.push(ItemCheck::fail(rule.path, "not found"));
        }
    }

    let missing = items.iter().filter(|item| !item.passed).count();
    if missing == 0 {
        StageReport::passed(StageName::Existence, items)
    } else {
        StageReport::failed(
            StageName::Existence,
            items,
            StageFailure::MissingArtifacts { count: missing },
        )
    }
}

#[cfg(test)]
#[path = "existence_tests.rs"]
mod tests;
