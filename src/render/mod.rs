//! Document rendering subsystem.
//!
//! This module provides:
//!
//! - **Context**: merges the config document with the computed schedule and
//!   costs ([`build_context`])
//! - **Fragments**: ordered named section templates ([`FragmentSource`])
//! - **Template**: the Handlebars renderer ([`FragmentRenderer`])
//! - **Assemble**: header + rendered fragments + separators ([`assemble`])
//!
//! # Context keys
//!
//! The computed values are available to fragments under two top-level keys:
//!
//! ```text
//! {{programmazione_calcolata.totale_incontri}}
//! {{programmazione_calcolata.media_per_mese}}
//! {{costi_calcolati.costo_totale}}
//! ```

mod assemble;
mod context;
mod fragments;
mod header;
mod template;

pub use assemble::{AssembleOptions, Assembly, Diagnostics, SEPARATOR, assemble};
pub use context::{COST_KEY, RenderContext, SCHEDULE_KEY, build_context};
pub use fragments::{DirectorySource, Fragment, FragmentSource};
pub use header::{PandocOptions, render_header};
pub use template::{FragmentRenderer, HandlebarsRenderer};
