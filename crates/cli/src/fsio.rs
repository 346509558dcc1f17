// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem access seam for the artifact checks.
//!
//! The existence and content stages only ever probe and read files, so the
//! capability is a small read-only trait with a real `tokio::fs`
//! implementation. Tests substitute an in-memory fake.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Read-only filesystem capability used by the existence and content stages.
#[async_trait]
pub trait ArtifactFs: Send + Sync {
    /// Whether the file exists and is accessible.
    async fn exists(&self, path: &Path) -> bool;

    /// Read the full text of the file.
    ///
    /// The underlying handle is opened and closed around this single read.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem access through tokio.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFs;

#[async_trait]
impl ArtifactFs for DiskFs {
    async fn exists(&self, path: &Path) -> bool {
        // An inaccessible path counts as missing.
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[cfg(test)]
#[path = "fsio_tests.rs"]
mod tests;
