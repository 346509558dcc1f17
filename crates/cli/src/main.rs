// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke harness binary entry point.

use std::io;

use clap::Parser;

use mermsmoke::cli::Cli;
use mermsmoke::fsio::DiskFs;
use mermsmoke::manifest::EXPECTED_ARTIFACTS;
use mermsmoke::pipeline::report::print_error;
use mermsmoke::pipeline::{exit_codes, CommandLauncher, Pipeline};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let root = match cli.root.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                print_error(format_args!("cannot determine project root: {}", e));
                std::process::exit(exit_codes::FAILURE);
            }
        },
    };

    let Some((program, args)) = cli.generator_command() else {
        print_error("generator command is empty");
        std::process::exit(exit_codes::FAILURE);
    };

    let launcher = CommandLauncher::new(program, args, root.clone());
    let pipeline = Pipeline::new(launcher, DiskFs, root, EXPECTED_ARTIFACTS.to_vec());

    let verdict = pipeline.run(&mut io::stdout()).await;
    std::process::exit(verdict.exit_code());
}
