//! The generation pipeline.
//!
//! Calculators first, then the context, then assembly. Each stage is a pure
//! function of the previous one; any error stops the run.

use crate::config::Config;
use crate::costs::compute_costs;
use crate::error::Result;
use crate::render::{
    AssembleOptions, Assembly, Diagnostics, FragmentRenderer, FragmentSource, PandocOptions,
    assemble, build_context,
};
use crate::schedule::compute_schedule;

/// Run both calculators.
pub fn compute(config: &Config) -> Result<Diagnostics> {
    let schedule = compute_schedule(&config.schedule_config())?;
    log::info!(
        "schedule computed: {} sessions, {} per month, first {}, last {}",
        schedule.total_sessions,
        schedule.average_per_month,
        schedule.first_session.as_deref().unwrap_or("-"),
        schedule.last_session.as_deref().unwrap_or("-")
    );

    let cost = compute_costs(&config.cost_config());
    log::info!(
        "costs computed: {} pairs, total {}",
        cost.pair_count,
        cost.total_cost
    );

    Ok(Diagnostics::new(schedule, cost))
}

/// Header options taken from the `generatore` section.
pub fn assemble_options(config: &Config) -> AssembleOptions {
    AssembleOptions {
        header: config.generator.header,
        pandoc: PandocOptions {
            latex_style: config.generator.latex_style.clone(),
        },
    }
}

/// Compute, build the context, and assemble the fragments from `source`.
pub fn run(
    config: &Config,
    source: &dyn FragmentSource,
    renderer: &dyn FragmentRenderer,
    options: &AssembleOptions,
) -> Result<Assembly> {
    log::info!("config sections: {:?}", config.section_names());

    let Diagnostics { schedule, cost } = compute(config)?;
    let context = build_context(config.raw(), schedule, cost)?;

    let fragments = source.fragments()?;
    assemble(&context, &fragments, renderer, options)
}
