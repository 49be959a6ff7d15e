//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

/// Top-level CLI parser for `mint-release-tasks`.
#[derive(Debug, Parser)]
#[command(
    name = "mint-release-tasks",
    version,
    about = "Generate the Mint CLI release task list for the CI orchestrator"
)]
pub struct Cli {
    /// The command to execute. Defaults to `generate`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the build, notarize, and upload tasks for every release platform.
    Generate {
        /// Serialization format of the task list.
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Write the task list to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Release version to embed and upload to (overrides `FULL_VERSION`).
        #[arg(long)]
        release_version: Option<String>,
    },
    /// Check that task keys are unique and every dependency resolves.
    Check,
}
