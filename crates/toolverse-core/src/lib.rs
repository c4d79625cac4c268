//! # Toolverse Core
//!
//! Core types shared across the Toolverse application:
//! - Catalog data (tools and their priced actions)
//! - Workflow graph records (steps, attached tool configurations, connections)
//! - Shared 2D geometry for the canvas
//! - Error types for the persistence layer
//!
//! The canvas and storage crates both build on these types, so the wire
//! representation (camelCase JSON field names) is defined here in one place.

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod workflow;

pub use catalog::{Catalog, PricingModel, Tool};
pub use error::{Error, Result, StorageError};
pub use geometry::Point;
pub use workflow::{ToolConfig, Workflow, WorkflowStatus, WorkflowStep};
