//! Cost aggregation over graph + catalog.

use toolverse_canvas::cost::{node_cost, total_cost};
use toolverse_core::{Catalog, Point, PricingModel, Tool, ToolConfig, Workflow, WorkflowStep};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Tool {
            id: "print3d".to_string(),
            name: "3D Printer".to_string(),
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            pricing_models: vec![PricingModel {
                id: "per-page".to_string(),
                action_name: "Print".to_string(),
                unit: "page".to_string(),
                price_per_unit: 2.5,
            }],
        },
        Tool {
            id: "free".to_string(),
            name: "Free Tool".to_string(),
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            pricing_models: Vec::new(),
        },
    ])
}

fn step_with(id: &str, tools: Vec<ToolConfig>) -> WorkflowStep {
    let mut step = WorkflowStep::new(id, "Phase", Point::new(0.0, 0.0));
    step.tools = tools;
    step
}

fn config(tool_id: &str, quantity: f64, model: Option<&str>) -> ToolConfig {
    ToolConfig {
        tool_id: tool_id.to_string(),
        quantity,
        pricing_model_id: model.map(str::to_string),
    }
}

#[test]
fn test_node_cost_scenario_price_times_quantity() {
    let catalog = catalog();
    // One item priced at 2.5 per page, quantity 4
    let step = step_with("a", vec![config("print3d", 4.0, Some("per-page"))]);
    assert_eq!(node_cost(&step, &catalog), 10.0);
}

#[test]
fn test_item_without_pricing_models_contributes_zero() {
    let catalog = catalog();
    let step = step_with("a", vec![config("free", 99.0, None)]);
    assert_eq!(node_cost(&step, &catalog), 0.0);
}

#[test]
fn test_unresolvable_references_are_fail_soft_zero() {
    let catalog = catalog();
    let step = step_with(
        "a",
        vec![
            // Tool id no longer in the catalog
            config("deleted-tool", 5.0, Some("per-page")),
            // Pricing model id no longer on the tool
            config("print3d", 5.0, Some("retired-model")),
            // No model selected at all
            config("print3d", 5.0, None),
        ],
    );
    assert_eq!(node_cost(&step, &catalog), 0.0);
}

#[test]
fn test_total_cost_is_additive_over_nodes() {
    let catalog = catalog();
    let mut workflow = Workflow::new("w1", "Test");
    workflow.steps = vec![
        step_with("a", vec![config("print3d", 4.0, Some("per-page"))]),
        step_with("b", vec![config("print3d", 2.0, Some("per-page"))]),
        step_with("c", vec![]),
    ];

    let per_node: f64 = workflow.steps.iter().map(|s| node_cost(s, &catalog)).sum();
    let total = total_cost(&workflow.steps, &catalog);
    assert_eq!(total, per_node);
    assert_eq!(total, 15.0);
}

#[test]
fn test_mixed_resolvable_and_unresolvable_in_one_node() {
    let catalog = catalog();
    let step = step_with(
        "a",
        vec![
            config("print3d", 4.0, Some("per-page")),
            config("deleted-tool", 7.0, Some("whatever")),
        ],
    );
    assert_eq!(node_cost(&step, &catalog), 10.0);
}
