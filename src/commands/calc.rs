//! Implementation of the `propgen calc` command.

use crate::cli::CalcArgs;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline;

/// Execute the `propgen calc` command: print the computed values as JSON.
pub fn cmd_calc(args: CalcArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let diagnostics = pipeline::compute(&config)?;
    println!("{}", diagnostics.to_json()?);
    Ok(())
}
