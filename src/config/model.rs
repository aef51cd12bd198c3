//! Config struct definition.

use super::types::*;
use serde::{Deserialize, Serialize};

/// The project configuration document (`config.yml`).
///
/// Only the sections the calculators and the generator need are typed.
/// `progetto` and `maestri` are read by the header from `raw`, which holds the
/// whole document, unknown keys included, because templates may reference any
/// of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "programmazione")]
    pub programme: Programme,

    /// Holiday intervals with no sessions.
    #[serde(rename = "vacanze", default)]
    pub holidays: Holidays,

    #[serde(rename = "costi")]
    pub costs: Costs,

    #[serde(rename = "generatore", default)]
    pub generator: GeneratorSettings,

    /// The document as parsed, for the render context.
    #[serde(skip)]
    pub(super) raw: serde_json::Value,
}
