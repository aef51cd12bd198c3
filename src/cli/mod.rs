//! CLI argument parsing for propgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::HeaderStyle;

/// Propgen: build a project proposal from one YAML config and a folder of
/// section templates.
///
/// The session calendar and the payment plan are computed from the config
/// and made available to every section as `programmazione_calcolata` and
/// `costi_calcolati`.
#[derive(Parser, Debug)]
#[command(name = "propgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for propgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the full document.
    ///
    /// Computes schedule and costs, renders every section in name order,
    /// and writes the document plus a JSON dump of the computed values.
    Build(BuildArgs),

    /// Print the computed schedule and costs as JSON.
    ///
    /// Nothing is rendered or written.
    Calc(CalcArgs),
}

/// Header style as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderArg {
    Markdown,
    Pandoc,
}

impl From<HeaderArg> for HeaderStyle {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Markdown => HeaderStyle::Markdown,
            HeaderArg::Pandoc => HeaderStyle::Pandoc,
        }
    }
}

/// Arguments for the `build` command.
///
/// Flags left unset fall back to the `generatore` section of the config.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the YAML config.
    #[arg(short, long, default_value = "config.yml")]
    pub config: PathBuf,

    /// Directory holding the section templates.
    #[arg(long)]
    pub sections: Option<PathBuf>,

    /// Glob selecting section files by name.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Path of the assembled document.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path of the JSON dump of computed values.
    #[arg(long)]
    pub debug_output: Option<PathBuf>,

    /// Header style.
    #[arg(long, value_enum)]
    pub header: Option<HeaderArg>,
}

/// Arguments for the `calc` command.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Path to the YAML config.
    #[arg(short, long, default_value = "config.yml")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
