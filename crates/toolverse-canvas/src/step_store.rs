//! Arena-style storage for workflow steps.
//!
//! Steps are keyed by id for O(1) lookup during hit-testing and
//! connection edits, while a separate order list preserves the
//! insertion order the wire format expects.

use std::collections::HashMap;

use toolverse_core::WorkflowStep;

/// Id-keyed step collection with stable iteration order.
#[derive(Debug, Clone, Default)]
pub struct StepStore {
    steps: HashMap<String, WorkflowStep>,
    order: Vec<String>,
}

impl StepStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the wire-shaped step list. A duplicate id
    /// would violate the graph invariant; the later occurrence wins
    /// and a warning is logged.
    pub fn from_steps(steps: Vec<WorkflowStep>) -> Self {
        let mut store = Self::new();
        for step in steps {
            if store.steps.contains_key(&step.id) {
                tracing::warn!(step_id = %step.id, "duplicate step id in workflow record, keeping last");
                store.steps.insert(step.id.clone(), step);
            } else {
                store.insert(step);
            }
        }
        store
    }

    pub fn insert(&mut self, step: WorkflowStep) {
        if !self.steps.contains_key(&step.id) {
            self.order.push(step.id.clone());
        }
        self.steps.insert(step.id.clone(), step);
    }

    pub fn get(&self, id: &str) -> Option<&WorkflowStep> {
        self.steps.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WorkflowStep> {
        self.steps.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.contains_key(id)
    }

    /// Removes a step and strips it as a target from every remaining
    /// step's connection list. Dangling connection targets are a
    /// correctness bug, not a display nuance.
    pub fn remove(&mut self, id: &str) -> Option<WorkflowStep> {
        let removed = self.steps.remove(id)?;
        self.order.retain(|o| o != id);
        for step in self.steps.values_mut() {
            step.connections.retain(|target| target != id);
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates steps in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkflowStep> {
        self.order.iter().filter_map(|id| self.steps.get(id))
    }

    /// Clones the steps back into the wire-shaped list.
    pub fn to_steps(&self) -> Vec<WorkflowStep> {
        self.iter().cloned().collect()
    }
}
