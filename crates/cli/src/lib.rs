// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mermaid generator smoke harness
//!
//! Runs the external Mermaid diagram generator as a subprocess, then gates on
//! three sequential checks: the generator's completion code, existence of
//! every expected artifact, and a content pattern per artifact. Any stage
//! failure stops the run and the process exits non-zero.
//!
//! Stages return structured reports; the pipeline driver alone decides
//! short-circuiting and the final exit code. That keeps each stage a pure
//! function over injected process and filesystem capabilities, testable
//! without spawning real processes or touching disk.

pub mod cli;
pub mod fsio;
pub mod manifest;
pub mod pipeline;
