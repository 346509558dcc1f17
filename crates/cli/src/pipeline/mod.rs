// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Three-stage validation pipeline: generate, existence, content.

pub mod content;
pub mod existence;
pub mod generate;
pub mod report;
pub mod result;

mod driver;

pub use driver::Pipeline;
pub use generate::{CommandLauncher, Completion, GeneratorLauncher};
pub use result::{exit_codes, ItemCheck, RunVerdict, StageFailure, StageName, StageReport};

#[cfg(test)]
pub(crate) mod testkit;
