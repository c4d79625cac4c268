use toolverse::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "toolverse.json".to_string());

    let store = toolverse_storage::Store::load_or_default(&path)?;
    let catalog = store.catalog();

    tracing::info!(
        version = toolverse::VERSION,
        build = toolverse::BUILD_DATE,
        tools = store.tools.len(),
        workflows = store.workflows.len(),
        "toolverse store opened"
    );

    for workflow in &store.workflows {
        let cost = toolverse_canvas::cost::total_cost(&workflow.steps, &catalog);
        tracing::info!(
            workflow = %workflow.name,
            status = %workflow.status,
            steps = workflow.steps.len(),
            cost = format!("{cost:.2}"),
            "workflow"
        );
    }

    Ok(())
}
