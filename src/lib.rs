//! # Toolverse
//!
//! Personal tool and workflow management with a visual, cost-aware
//! workflow canvas.
//!
//! ## Architecture
//!
//! Toolverse is organized as a workspace with multiple crates:
//!
//! 1. **toolverse-core** - Catalog and workflow data model, shared geometry, errors
//! 2. **toolverse-canvas** - The workflow canvas: viewport, interaction state machine,
//!    connection geometry, cost aggregation, SVG rendering
//! 3. **toolverse-storage** - Store snapshots, legacy record migration, import/export
//! 4. **toolverse** - Main binary that integrates the crates

pub use toolverse_canvas as canvas;
pub use toolverse_storage as storage;

pub use toolverse_canvas::{
    ConnectionPath, HitTarget, InteractionMode, Modifiers, PointerButton, PointerEvent, StepStore,
    Viewport, WorkflowCanvas,
};
pub use toolverse_core::{
    Catalog, Error, Point, PricingModel, Result, StorageError, Tool, ToolConfig, Workflow,
    WorkflowStatus, WorkflowStep,
};
pub use toolverse_storage::{Store, StoreMetadata};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
