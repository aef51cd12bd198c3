//! Template rendering for fragments.
//!
//! Fragments are Handlebars templates rendered against the
//! [`RenderContext`]:
//!
//! ```text
//! Il laboratorio prevede {{programmazione_calcolata.totale_incontri}} incontri.
//!
//! {{#each costi_calcolati.dettaglio_pagamenti}}
//! - {{periodo}}: € {{importo}} ({{scadenza}})
//! {{/each}}
//! ```
//!
//! # Error Handling
//!
//! Rendering runs in strict mode: a reference to a field that does not exist
//! is an error rather than an empty string, so a typo in a section never
//! silently drops a number from the document.

use super::context::RenderContext;
use super::fragments::Fragment;
use crate::error::{PropgenError, Result};
use handlebars::Handlebars;

/// Expands one fragment against the context.
pub trait FragmentRenderer {
    fn render(&self, fragment: &Fragment, context: &RenderContext) -> Result<String>;
}

/// Handlebars-backed renderer.
pub struct HandlebarsRenderer {
    hbs: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Strict mode on, HTML escaping off (the output is Markdown).
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentRenderer for HandlebarsRenderer {
    fn render(&self, fragment: &Fragment, context: &RenderContext) -> Result<String> {
        self.hbs
            .render_template(&fragment.text, context.value())
            .map_err(|e| PropgenError::Render {
                fragment: fragment.name.clone(),
                message: e.to_string(),
            })
    }
}
