//! Workflow graph records.
//!
//! A `Workflow` is the persisted form of a canvas graph: a named,
//! ordered collection of steps. Each step owns a world-space position,
//! a title, the tool configurations attached to it, and the ids of the
//! steps its outgoing connections point at.
//!
//! These types use the canonical wire shape. Legacy records (flat
//! `toolIds` lists, missing positions) are handled by the migration in
//! `toolverse-storage` before they ever become a `Workflow`.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Lifecycle status of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkflowStatus {
    #[default]
    #[serde(rename = "planning")]
    Planning,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A tool attached to a workflow step, with its cost configuration.
///
/// `pricing_model_id` references an entry on the catalog tool. When it
/// is absent or no longer resolves, the configuration contributes zero
/// cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub tool_id: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_model_id: Option<String>,
}

impl ToolConfig {
    pub fn new(tool_id: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            quantity: 1.0,
            pricing_model_id: None,
        }
    }
}

/// A phase node on the workflow canvas.
///
/// Invariants maintained by the canvas:
/// - `id` is unique within its workflow
/// - `connections` holds no self-reference and no duplicate target
/// - `position` is always defined once the step exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
    pub position: Point,
    #[serde(default)]
    pub connections: Vec<String>,
}

impl WorkflowStep {
    pub fn new(id: impl Into<String>, title: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tools: Vec::new(),
            position,
            connections: Vec::new(),
        }
    }

    /// Finds the configuration for a given tool id, if attached.
    pub fn tool_config(&self, tool_id: &str) -> Option<&ToolConfig> {
        self.tools.iter().find(|c| c.tool_id == tool_id)
    }

    pub fn tool_config_mut(&mut self, tool_id: &str) -> Option<&mut ToolConfig> {
        self.tools.iter_mut().find(|c| c.tool_id == tool_id)
    }

    pub fn has_connection_to(&self, target_id: &str) -> bool {
        self.connections.iter().any(|c| c == target_id)
    }
}

/// A named workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

impl Workflow {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: WorkflowStatus::Planning,
            steps: Vec::new(),
        }
    }

    pub fn step(&self, step_id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }
}
