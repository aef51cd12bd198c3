//! Implementation of the `propgen build` command.
//!
//! 1. Loads the config
//! 2. Computes schedule and costs
//! 3. Renders every section file, in name order, against the merged context
//! 4. Writes the document, then the JSON dump of the computed values
//!
//! Nothing is written unless every section rendered.

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::pipeline;
use crate::render::{DirectorySource, HandlebarsRenderer};
use std::path::PathBuf;

/// Execute the `propgen build` command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    log::info!("config loaded from {}", args.config.display());

    let settings = &config.generator;
    let sections = args
        .sections
        .unwrap_or_else(|| PathBuf::from(&settings.sections_dir));
    let pattern = args.pattern.unwrap_or_else(|| settings.pattern.clone());
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.output));
    let debug_output = args
        .debug_output
        .unwrap_or_else(|| PathBuf::from(&settings.debug_output));

    let mut options = pipeline::assemble_options(&config);
    if let Some(header) = args.header {
        options.header = header.into();
    }

    let source = DirectorySource::new(sections, &pattern)?;
    let assembly = pipeline::run(&config, &source, &HandlebarsRenderer::new(), &options)?;

    atomic_write_file(&output, &assembly.document)?;
    log::info!("document written: {}", output.display());

    atomic_write_file(&debug_output, &assembly.diagnostics.to_json()?)?;
    log::info!("diagnostics written: {}", debug_output.display());

    println!("Document generated: {}", output.display());
    Ok(())
}
