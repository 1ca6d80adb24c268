//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Roboconf - check for tools and provision dependencies for setup scripts.
#[derive(Debug, Parser)]
#[command(name = "roboconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to run installation commands in (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print commands without executing them (probes still run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether programs are installed
    Check(CheckArgs),

    /// Initialize, sync and update git submodules
    GitModules,

    /// Install bundler if missing, then run bundle install
    Bundler(BundlerArgs),

    /// Require node and install npm if missing
    Npm,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Programs to look for
    #[arg(required = true, value_name = "PROGRAM")]
    pub programs: Vec<String>,

    /// Also print whether each program was found
    #[arg(long)]
    pub verbal: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `bundler` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BundlerArgs {
    /// Bundler version to install when bundler is missing
    #[arg(long, env = "ROBOCONF_BUNDLER_VERSION", value_name = "VERSION")]
    pub bundler_version: Option<String>,

    /// Extra arguments appended to `bundle install`
    #[arg(last = true, value_name = "ARGS")]
    pub bundle_args: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
