//! Live cost aggregation over the graph and catalog.
//!
//! Pure functions, recomputed on every render pass. A tool or pricing
//! model reference that no longer resolves contributes zero; a stale
//! record never crashes the view.

use toolverse_core::{Catalog, ToolConfig, WorkflowStep};

fn config_cost(config: &ToolConfig, catalog: &Catalog) -> f64 {
    let Some(model_id) = config.pricing_model_id.as_deref() else {
        return 0.0;
    };
    match catalog.pricing_model(&config.tool_id, model_id) {
        Some(model) => model.price_per_unit * config.quantity,
        None => 0.0,
    }
}

/// Cost of a single step: the sum over its attached tools of
/// `price_per_unit * quantity` for every resolvable pricing model.
pub fn node_cost(step: &WorkflowStep, catalog: &Catalog) -> f64 {
    step.tools.iter().map(|c| config_cost(c, catalog)).sum()
}

/// Whole-graph cost: `node_cost` summed over every step.
pub fn total_cost<'a>(
    steps: impl IntoIterator<Item = &'a WorkflowStep>,
    catalog: &Catalog,
) -> f64 {
    steps.into_iter().map(|s| node_cost(s, catalog)).sum()
}
