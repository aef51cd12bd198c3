//! Configuration types and defaults for propgen.
//!
//! This module defines the sections of the config document, the header style
//! enum, and the default value functions used by serde.

use crate::costs::Amount;
use crate::schedule::Exclusion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the document header is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// `# title` / `### subtitle - year` Markdown headings (default).
    #[default]
    Markdown,
    /// A YAML metadata block for Pandoc, with authors and LaTeX includes.
    Pandoc,
}

/// `programmazione`: the weekly recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programme {
    #[serde(rename = "inizio")]
    pub start: NaiveDate,

    #[serde(rename = "fine")]
    pub end: NaiveDate,

    #[serde(rename = "giorno_settimana")]
    pub weekday: String,
}

/// `costi`: the billing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    #[serde(rename = "mesi_inclusi", default)]
    pub included_months: Vec<String>,

    #[serde(rename = "quota_bimestrale")]
    pub rate_per_pair: Amount,
}

/// `generatore`: where fragments come from and where outputs go.
///
/// Every field has a default, so the whole section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Directory holding the section fragments.
    #[serde(rename = "sezioni", default = "default_sections_dir")]
    pub sections_dir: String,

    /// Glob matched against fragment file names.
    #[serde(default = "default_fragment_pattern")]
    pub pattern: String,

    /// Path of the assembled document.
    #[serde(default = "default_output")]
    pub output: String,

    /// Path of the JSON dump of the computed values.
    #[serde(default = "default_debug_output")]
    pub debug_output: String,

    #[serde(rename = "intestazione", default)]
    pub header: HeaderStyle,

    /// LaTeX package loaded by the Pandoc header.
    #[serde(rename = "stile_latex", default = "default_latex_style")]
    pub latex_style: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sections_dir: default_sections_dir(),
            pattern: default_fragment_pattern(),
            output: default_output(),
            debug_output: default_debug_output(),
            header: HeaderStyle::default(),
            latex_style: default_latex_style(),
        }
    }
}

/// Exclusions are written under `vacanze`.
pub type Holidays = Vec<Exclusion>;

// Default value functions for serde
pub(crate) fn default_sections_dir() -> String {
    "docs/sezioni".to_string()
}
pub(crate) fn default_fragment_pattern() -> String {
    "*.md".to_string()
}
pub(crate) fn default_output() -> String {
    "progetto-completo.md".to_string()
}
pub(crate) fn default_debug_output() -> String {
    "debug-programmazione.json".to_string()
}
pub(crate) fn default_latex_style() -> String {
    "styles/mystyle".to_string()
}
