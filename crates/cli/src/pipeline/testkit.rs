// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! In-memory fakes shared by the pipeline unit tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::fsio::ArtifactFs;
use crate::manifest::{ArtifactRule, Pattern, EXPECTED_ARTIFACTS};

use super::generate::{Completion, GeneratorLauncher};

/// Scripted generator launcher.
pub(crate) enum FakeLauncher {
    Exits(i32),
    Signalled,
    FailsToSpawn,
}

#[async_trait]
impl GeneratorLauncher for FakeLauncher {
    async fn launch(&self) -> io::Result<Completion> {
        match self {
            FakeLauncher::Exits(code) => Ok(Completion::Code(*code)),
            FakeLauncher::Signalled => Ok(Completion::Signalled),
            FakeLauncher::FailsToSpawn => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file or directory",
            )),
        }
    }
}

/// In-memory filesystem. An entry with no text exists but cannot be read.
#[derive(Default)]
pub(crate) struct FakeFs {
    files: HashMap<PathBuf, Option<String>>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), Some(text.into()));
        self
    }

    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }
}

#[async_trait]
impl ArtifactFs for FakeFs {
    async fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

/// Text that satisfies a rule's pattern.
pub(crate) fn satisfying_text(rule: &ArtifactRule) -> String {
    match rule.pattern {
        Pattern::Contains(needle) => format!("{}\n  a --> b\n", needle),
        Pattern::Regex(pattern) => format!("{}\n", pattern),
    }
}

/// Fake filesystem holding every expected artifact with valid content.
pub(crate) fn all_valid_fs() -> FakeFs {
    let mut fs = FakeFs::new();
    for rule in &EXPECTED_ARTIFACTS {
        fs = fs.with_file(rule.path, &satisfying_text(rule));
    }
    fs
}
