//! Propgen: project proposal generator.
//!
//! Builds one Markdown document from a YAML config and a folder of section
//! templates. Two calculators derive values the sections can reference:
//!
//! - [`schedule`]: the weekly session calendar, minus holidays
//! - [`costs`]: the payment plan, billed per pair of months
//!
//! [`pipeline`] merges them with the config into a render context and
//! [`render`] assembles the document.

pub mod cli;
pub mod commands;
pub mod config;
pub mod costs;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod pipeline;
pub mod render;
pub mod schedule;

#[cfg(test)]
mod test_support;
