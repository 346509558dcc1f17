// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for end-to-end smoke runs.
//!
//! Each test builds a throwaway project root containing a shell script that
//! stands in for the real Mermaid generator, then drives the harness binary
//! against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Generator body that writes every expected artifact with a valid header.
pub const GOOD_GENERATOR: &str = r#"mkdir -p mermaid
printf 'flowchart TB\n  a --> b\n' > mermaid/flowchart.mmd
printf 'erDiagram\n  A ||--o{ B : has\n' > mermaid/er.mmd
printf 'architecture-beta\n  group api\n' > mermaid/architecture.mmd
printf 'sequenceDiagram\n  A->>B: ping\n' > mermaid/ci-sequence.mmd
printf 'flowchart LR\n  start --> done\n' > mermaid/bpmnish.mmd
"#;

/// Create a project root whose `scripts/generate.sh` runs the given body.
pub fn project_with_generator(body: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let scripts = dir.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("generate.sh"), format!("#!/bin/sh\n{body}\n")).unwrap();
    dir
}

pub fn mermsmoke_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mermsmoke"))
}

/// Run the harness against `root` with the project's stand-in generator.
pub fn run_harness(root: &Path) -> Output {
    Command::new(mermsmoke_bin())
        .args([
            "--root",
            root.to_str().unwrap(),
            "--generator",
            "sh scripts/generate.sh",
        ])
        .output()
        .expect("failed to run mermsmoke")
}
