//! Document assembly.

use super::context::RenderContext;
use super::fragments::Fragment;
use super::header::{PandocOptions, render_header};
use super::template::FragmentRenderer;
use crate::config::HeaderStyle;
use crate::costs::CostResult;
use crate::error::{PropgenError, Result};
use crate::schedule::ScheduleResult;
use serde::Serialize;

/// Appended after every rendered fragment.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// The computed values, dumped next to the document for inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    #[serde(rename = "programmazione")]
    pub schedule: ScheduleResult,
    #[serde(rename = "costi")]
    pub cost: CostResult,
}

impl Diagnostics {
    pub fn new(schedule: ScheduleResult, cost: CostResult) -> Self {
        Self { schedule, cost }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PropgenError::Config(format!("cannot serialize diagnostics: {}", e)))
    }
}

/// Output of [`assemble`].
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: String,
    pub diagnostics: Diagnostics,
}

/// Header options for [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    pub header: HeaderStyle,
    pub pandoc: PandocOptions,
}

/// Render `fragments` in order under the header.
///
/// The document is `header + render(f1) + SEPARATOR + render(f2) + SEPARATOR
/// + ...`. The first fragment that fails to render aborts the whole
/// assembly.
pub fn assemble(
    context: &RenderContext,
    fragments: &[Fragment],
    renderer: &dyn FragmentRenderer,
    options: &AssembleOptions,
) -> Result<Assembly> {
    let mut document = render_header(options.header, context, &options.pandoc)?;

    for fragment in fragments {
        log::info!("rendering {}", fragment.name);
        let rendered = renderer.render(fragment, context)?;
        document.push_str(&rendered);
        document.push_str(SEPARATOR);
    }

    Ok(Assembly {
        document,
        diagnostics: Diagnostics::new(context.schedule().clone(), context.cost().clone()),
    })
}
