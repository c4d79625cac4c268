//! The workflow canvas: an open graph plus viewport and interaction
//! state, with every mutation the node editor supports.
//!
//! The canvas exclusively owns its copy of the workflow while open.
//! Mutations are applied to the internal step arena; after any method
//! that reports a committed change, the owner calls [`WorkflowCanvas::snapshot`]
//! to obtain a fresh `Workflow` value and hands it to persistence.
//! Nothing mutable ever escapes, which is what keeps the "no torn
//! reads" guarantee even if the owner adds observers later.

use toolverse_core::{Catalog, Point, ToolConfig, Workflow, WorkflowStatus, WorkflowStep};

use crate::connection::{self, DEFAULT_HIT_TOLERANCE, NODE_WIDTH};
use crate::interaction::{HitTarget, InteractionMode, PointerButton, PointerEvent};
use crate::step_store::StepStore;
use crate::viewport::Viewport;

/// Title given to a freshly created phase node.
const NEW_STEP_TITLE: &str = "New Phase";
/// Vertical offset from the view centre to a new node's top edge.
const NEW_STEP_CENTER_OFFSET_Y: f64 = 100.0;

/// An open workflow graph with its viewport and interaction state.
#[derive(Debug, Clone)]
pub struct WorkflowCanvas {
    id: String,
    name: String,
    description: String,
    status: WorkflowStatus,
    store: StepStore,
    viewport: Viewport,
    mode: InteractionMode,
    /// Screen position of the last pointer event, for movement deltas.
    last_pointer: Point,
    /// World-space cursor end of the in-progress rubber-band edge.
    pending_cursor: Option<Point>,
}

impl WorkflowCanvas {
    /// Opens a workflow on the canvas. The workflow value is consumed;
    /// the caller gets replacements back via [`snapshot`](Self::snapshot).
    pub fn open(workflow: Workflow) -> Self {
        Self {
            id: workflow.id,
            name: workflow.name,
            description: workflow.description,
            status: workflow.status,
            store: StepStore::from_steps(workflow.steps),
            viewport: Viewport::default(),
            mode: InteractionMode::Idle,
            last_pointer: Point::default(),
            pending_cursor: None,
        }
    }

    /// Opens a workflow with a known surface size.
    pub fn open_with_size(workflow: Workflow, width: f64, height: f64) -> Self {
        let mut canvas = Self::open(workflow);
        canvas.viewport.set_canvas_size(width, height);
        canvas
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn step(&self, id: &str) -> Option<&WorkflowStep> {
        self.store.get(id)
    }

    pub fn steps(&self) -> impl Iterator<Item = &WorkflowStep> {
        self.store.iter()
    }

    pub fn step_count(&self) -> usize {
        self.store.len()
    }

    pub(crate) fn store(&self) -> &StepStore {
        &self.store
    }

    /// The in-progress connection, if one is being drawn: the source
    /// step id and the current world-space cursor point.
    pub fn pending_connection(&self) -> Option<(&str, Point)> {
        match (&self.mode, self.pending_cursor) {
            (InteractionMode::Connecting { source }, Some(cursor)) => {
                Some((source.as_str(), cursor))
            }
            _ => None,
        }
    }

    /// Produces a fresh wire-shaped `Workflow` reflecting the current
    /// graph. This is the replacement value the owner persists.
    pub fn snapshot(&self) -> Workflow {
        Workflow {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            steps: self.store.to_steps(),
        }
    }

    // --- Node operations ---

    /// Adds a new phase node at the centre of the current view and
    /// returns its id.
    pub fn add_step(&mut self) -> String {
        let center = self.viewport.view_center_world();
        let position = Point::new(
            center.x - NODE_WIDTH / 2.0,
            center.y - NEW_STEP_CENTER_OFFSET_Y,
        );
        let id = uuid::Uuid::new_v4().to_string();
        self.store
            .insert(WorkflowStep::new(id.clone(), NEW_STEP_TITLE, position));
        tracing::debug!(step_id = %id, %position, "step added");
        id
    }

    /// Deletes a step. Every other step's connection list is stripped
    /// of the removed id.
    pub fn delete_step(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            if let InteractionMode::DraggingNode { id: dragging } = &self.mode {
                if dragging == id {
                    self.mode = InteractionMode::Idle;
                }
            }
            tracing::debug!(step_id = %id, "step deleted");
        }
        removed
    }

    /// Replaces a step's title. Called per keystroke; there is no
    /// separate save step.
    pub fn set_step_title(&mut self, id: &str, title: impl Into<String>) -> bool {
        match self.store.get_mut(id) {
            Some(step) => {
                step.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Moves a step by a world-unit delta.
    pub fn move_step_by(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        match self.store.get_mut(id) {
            Some(step) => {
                step.position.x += dx;
                step.position.y += dy;
                true
            }
            None => false,
        }
    }

    // --- Tool configuration ---

    /// Attaches a catalog tool to a step. A no-op when the tool is
    /// already attached or either id does not resolve. When the tool
    /// has pricing models, the first one is selected by default.
    pub fn attach_tool(&mut self, step_id: &str, tool_id: &str, catalog: &Catalog) -> bool {
        let Some(tool) = catalog.tool(tool_id) else {
            return false;
        };
        let default_model = tool.first_pricing_model().map(|m| m.id.clone());
        let Some(step) = self.store.get_mut(step_id) else {
            return false;
        };
        if step.tool_config(tool_id).is_some() {
            return false;
        }
        step.tools.push(ToolConfig {
            tool_id: tool_id.to_string(),
            quantity: 1.0,
            pricing_model_id: default_model,
        });
        tracing::debug!(step_id, tool_id, "tool attached");
        true
    }

    /// Detaches a tool, removing its configuration entirely.
    pub fn detach_tool(&mut self, step_id: &str, tool_id: &str) -> bool {
        let Some(step) = self.store.get_mut(step_id) else {
            return false;
        };
        let before = step.tools.len();
        step.tools.retain(|c| c.tool_id != tool_id);
        step.tools.len() != before
    }

    /// Updates the quantity on one attached tool, clamped to >= 0.
    /// Other configurations on the step are untouched.
    pub fn set_tool_quantity(&mut self, step_id: &str, tool_id: &str, quantity: f64) -> bool {
        let Some(config) = self
            .store
            .get_mut(step_id)
            .and_then(|s| s.tool_config_mut(tool_id))
        else {
            return false;
        };
        config.quantity = if quantity.is_finite() {
            quantity.max(0.0)
        } else {
            0.0
        };
        true
    }

    /// Selects which priced action drives an attached tool's cost. The
    /// model must exist on the catalog tool; otherwise this is a no-op.
    pub fn select_pricing_model(
        &mut self,
        step_id: &str,
        tool_id: &str,
        model_id: &str,
        catalog: &Catalog,
    ) -> bool {
        if catalog.pricing_model(tool_id, model_id).is_none() {
            return false;
        }
        let Some(config) = self
            .store
            .get_mut(step_id)
            .and_then(|s| s.tool_config_mut(tool_id))
        else {
            return false;
        };
        config.pricing_model_id = Some(model_id.to_string());
        true
    }

    // --- Connections ---

    /// Adds a directed connection. Self-connections and duplicates are
    /// silently rejected, as is either endpoint not existing.
    pub fn add_connection(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id || !self.store.contains(target_id) {
            return false;
        }
        let Some(source) = self.store.get_mut(source_id) else {
            return false;
        };
        if source.has_connection_to(target_id) {
            return false;
        }
        source.connections.push(target_id.to_string());
        tracing::debug!(source_id, target_id, "connection added");
        true
    }

    /// Removes exactly the one `(source, target)` connection.
    pub fn remove_connection(&mut self, source_id: &str, target_id: &str) -> bool {
        let Some(source) = self.store.get_mut(source_id) else {
            return false;
        };
        let before = source.connections.len();
        source.connections.retain(|c| c != target_id);
        source.connections.len() != before
    }

    // --- Cost ---

    /// Cost badge value for one step.
    pub fn node_cost(&self, step_id: &str, catalog: &Catalog) -> f64 {
        self.store
            .get(step_id)
            .map_or(0.0, |s| crate::cost::node_cost(s, catalog))
    }

    /// Whole-graph cost shown in the top bar.
    pub fn total_cost(&self, catalog: &Catalog) -> f64 {
        crate::cost::total_cost(self.store.iter(), catalog)
    }

    // --- Pointer interaction ---

    /// Handles a pointer press. Returns `true` when the graph changed
    /// (a connection was deleted by clicking its path).
    pub fn pointer_pressed(&mut self, event: PointerEvent, hit: HitTarget) -> bool {
        self.last_pointer = event.pos;
        match hit {
            HitTarget::OutputPort(id) => {
                if event.button == PointerButton::Primary && self.store.contains(&id) {
                    self.pending_cursor = Some(self.viewport.screen_to_world(event.pos));
                    self.mode = InteractionMode::Connecting { source: id };
                }
                false
            }
            HitTarget::NodeHeader(id) => {
                if event.button == PointerButton::Primary && self.store.contains(&id) {
                    self.mode = InteractionMode::DraggingNode { id };
                }
                false
            }
            HitTarget::Canvas => {
                let pans = event.button == PointerButton::Middle
                    || (event.button == PointerButton::Primary && event.modifiers.shift);
                if pans {
                    self.mode = InteractionMode::Panning;
                    return false;
                }
                if event.button == PointerButton::Primary {
                    // A plain click on empty canvas may land on an edge path.
                    let world = self.viewport.screen_to_world(event.pos);
                    if let Some((source, target)) = connection::hit_test_connections(
                        &self.store,
                        world,
                        DEFAULT_HIT_TOLERANCE,
                    ) {
                        return self.remove_connection(&source, &target);
                    }
                }
                false
            }
            // Presses on a node body or input port start nothing; the
            // input port only matters on release.
            HitTarget::NodeBody(_) | HitTarget::InputPort(_) => false,
        }
    }

    /// Handles pointer movement. Returns `true` when the graph changed
    /// (a node was dragged to a new position).
    pub fn pointer_moved(&mut self, pos: Point) -> bool {
        let dx = pos.x - self.last_pointer.x;
        let dy = pos.y - self.last_pointer.y;
        self.last_pointer = pos;

        match &self.mode {
            InteractionMode::Panning => {
                self.viewport.pan_by(dx, dy);
                false
            }
            InteractionMode::DraggingNode { id } => {
                let id = id.clone();
                let zoom = self.viewport.zoom();
                self.move_step_by(&id, dx / zoom, dy / zoom)
            }
            InteractionMode::Connecting { .. } => {
                self.pending_cursor = Some(self.viewport.screen_to_world(pos));
                false
            }
            InteractionMode::Idle => false,
        }
    }

    /// Handles a pointer release. Returns `true` when the graph
    /// changed (a connection was committed onto an input port).
    ///
    /// Releasing anywhere else while connecting discards the pending
    /// edge silently; that is not an error condition.
    pub fn pointer_released(&mut self, hit: HitTarget) -> bool {
        let mode = std::mem::take(&mut self.mode);
        self.pending_cursor = None;
        match (mode, hit) {
            (InteractionMode::Connecting { source }, HitTarget::InputPort(target)) => {
                self.add_connection(&source, &target)
            }
            _ => false,
        }
    }

    /// The pointer left the interactive surface: treated exactly like
    /// a release with no target, so no mode is ever left pending.
    pub fn pointer_left(&mut self) -> bool {
        self.mode = InteractionMode::Idle;
        self.pending_cursor = None;
        false
    }

    /// Handles a wheel event. Zoom only engages with the zoom modifier
    /// held, so normal content scrolling is never hijacked.
    pub fn wheel(&mut self, delta_y: f64, modifiers: crate::interaction::Modifiers) -> bool {
        if modifiers.ctrl {
            self.viewport.wheel_zoom(delta_y);
        }
        false
    }
}
