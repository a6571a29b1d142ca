// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `peek-checkpkg` - package-configuration linter.
//!
//! Checks that the manifest and `.gitattributes` of a package (or workspace)
//! agree about what ships in a release: workspace members exist and carry
//! the required metadata, and development-only directories are export-ignored.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use peek_core::color::{color, Color};

mod checks;

/// Check package metadata and export configuration.
#[derive(Parser)]
#[command(name = "peek-checkpkg", version)]
struct Args {
    /// Package root to check
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("Checking package configuration");
    match checks::run(&args.root) {
        Ok(problems) if problems.is_empty() => {
            println!("OK");
            ExitCode::SUCCESS
        }
        Ok(problems) => {
            for problem in &problems {
                println!(" {}", color(problem, Color::Yellow));
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("peek-checkpkg: {e:#}");
            ExitCode::FAILURE
        }
    }
}
