//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Icongen
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Scan the project for icon usage and write the manifest

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::DEFAULT_OUTPUT_FILE;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Angular project directory containing angular.json
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,

    /// Project name (overrides the angular.json defaultProject field)
    #[arg(long)]
    pub project: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Manifest filename, written under the project source root
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Glob patterns to exclude from the scan
    /// Can be specified multiple times: --ignore "**/dist/**" --ignore "**/*.spec.ts"
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Compute and preview the manifest without writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the project for icon usage and generate the manifest file
    Generate(GenerateCommand),
}
