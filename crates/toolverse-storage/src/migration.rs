//! One-time migration of persisted workflow records.
//!
//! Early versions stored a flat `toolIds: [string]` list per step and
//! predate node positions and connections entirely. On load every
//! step passes through [`migrate_step`], which normalises either
//! shape into the current record:
//!
//! - `toolIds` entries become `{toolId, quantity: 1}` configurations
//! - a missing `position` gets a deterministic staggered-grid fallback
//!   from the step's index, so the renderer never sees an undefined
//!   position
//! - a missing `connections` list defaults to empty
//!
//! Migration is idempotent: a record already in the current shape
//! passes through unchanged.

use serde::{Deserialize, Serialize};

use toolverse_core::{Point, ToolConfig, Workflow, WorkflowStatus, WorkflowStep};

/// Staggered-grid fallback origin and strides for legacy steps
/// without a position.
const FALLBACK_ORIGIN: f64 = 100.0;
const FALLBACK_STRIDE_X: f64 = 250.0;
const FALLBACK_STRIDE_Y: f64 = 100.0;

/// A step as found on disk: either the current shape or the legacy
/// flat-list shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStep {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Current shape: structured tool configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolConfig>>,
    /// Legacy shape: bare tool id list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<String>>,
}

/// A workflow as found on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub steps: Vec<StoredStep>,
}

/// Normalises one stored step. `index` is the step's position within
/// its workflow, used for the fallback grid placement.
pub fn migrate_step(step: StoredStep, index: usize) -> WorkflowStep {
    // When both shapes are somehow present, the structured one wins.
    let tools = match (step.tools, step.tool_ids) {
        (Some(tools), _) => tools,
        (None, Some(ids)) => {
            tracing::debug!(step_id = %step.id, count = ids.len(), "migrating legacy toolIds list");
            ids.into_iter().map(ToolConfig::new).collect()
        }
        (None, None) => Vec::new(),
    };

    let position = step.position.unwrap_or_else(|| {
        Point::new(
            FALLBACK_ORIGIN + index as f64 * FALLBACK_STRIDE_X,
            FALLBACK_ORIGIN + index as f64 * FALLBACK_STRIDE_Y,
        )
    });

    WorkflowStep {
        id: step.id,
        title: step.title,
        tools,
        position,
        connections: step.connections.unwrap_or_default(),
    }
}

/// Normalises a whole stored workflow.
pub fn migrate_workflow(workflow: StoredWorkflow) -> Workflow {
    Workflow {
        id: workflow.id,
        name: workflow.name,
        description: workflow.description,
        status: workflow.status,
        steps: workflow
            .steps
            .into_iter()
            .enumerate()
            .map(|(i, s)| migrate_step(s, i))
            .collect(),
    }
}

impl From<WorkflowStep> for StoredStep {
    fn from(step: WorkflowStep) -> Self {
        Self {
            id: step.id,
            title: step.title,
            tools: Some(step.tools),
            tool_ids: None,
            position: Some(step.position),
            connections: Some(step.connections),
        }
    }
}

impl From<Workflow> for StoredWorkflow {
    fn from(workflow: Workflow) -> Self {
        Self {
            id: workflow.id,
            name: workflow.name,
            description: workflow.description,
            status: workflow.status,
            steps: workflow.steps.into_iter().map(StoredStep::from).collect(),
        }
    }
}
