//! Configuration model for propgen.
//!
//! This module defines the Config struct that represents `config.yml`.
//! Unknown keys are accepted and stay visible to templates through the raw
//! document; the typed sections feed the calculators and the generator.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{GeneratorSettings, HeaderStyle};
