//! SVG-based canvas renderer for the workflow graph.
//!
//! Produces toolkit-neutral SVG fragments the embedder composites:
//! a dot-grid background, the connection layer (committed edges plus
//! the dashed in-progress rubber-band), and node frames with title,
//! port markers and the per-node cost badge.
//!
//! Node and edge geometry is emitted in world units; the embedder
//! wraps the layers in the group transform from [`layer_transform`].

use toolverse_core::{Catalog, Point};

use crate::canvas::WorkflowCanvas;
use crate::connection::{input_anchor, output_anchor, ConnectionPath, NODE_WIDTH};

/// Grid dot spacing in world units.
const GRID_SPACING: f64 = 20.0;
/// Node header height, which the title and ports align to.
const NODE_HEADER_HEIGHT: f64 = 44.0;
/// Minimum node body height when the step has no tools attached.
const NODE_MIN_BODY_HEIGHT: f64 = 60.0;
/// Height of one attached-tool row.
const TOOL_ROW_HEIGHT: f64 = 58.0;
/// Port marker radius.
const PORT_RADIUS: f64 = 8.0;

/// The pan/zoom group transform for the world-space layers.
pub fn layer_transform(canvas: &WorkflowCanvas) -> String {
    let vp = canvas.viewport();
    format!(
        "translate({} {}) scale({})",
        vp.pan_x(),
        vp.pan_y(),
        vp.zoom()
    )
}

/// Background dot-grid parameters: `(spacing, offset_x, offset_y)` in
/// screen pixels. Spacing scales with zoom; the offset tracks pan so
/// the grid appears anchored to the world.
pub fn grid_pattern(canvas: &WorkflowCanvas) -> (f64, f64, f64) {
    let vp = canvas.viewport();
    (GRID_SPACING * vp.zoom(), vp.pan_x(), vp.pan_y())
}

/// Renders every committed connection as `<path>` elements in world
/// space. Each edge is drawn twice: a wide transparent band that
/// receives clicks, then the visible stroke. Edges whose target step
/// no longer exists are skipped silently.
pub fn render_connections(canvas: &WorkflowCanvas) -> String {
    let store = canvas.store();
    let mut svg = String::new();
    for source in store.iter() {
        for target_id in &source.connections {
            let Some(target) = store.get(target_id) else {
                continue;
            };
            let path = ConnectionPath::between_steps(source, target).to_svg();
            svg.push_str(&format!(
                "<g class=\"connection\" data-source=\"{}\" data-target=\"{}\">\
                 <path d=\"{path}\" fill=\"none\" stroke=\"transparent\" stroke-width=\"6\"/>\
                 <path d=\"{path}\" fill=\"none\" stroke=\"#9ca3af\" stroke-width=\"2\"/>\
                 </g>",
                escape(&source.id),
                escape(target_id),
            ));
        }
    }
    svg
}

/// Renders the dashed rubber-band path while a connection is being
/// drawn, using the same curve formula as committed edges. Empty when
/// no connection is in progress.
pub fn render_pending_connection(canvas: &WorkflowCanvas) -> String {
    let Some((source_id, cursor)) = canvas.pending_connection() else {
        return String::new();
    };
    let Some(source) = canvas.step(source_id) else {
        return String::new();
    };
    let path = ConnectionPath::between(output_anchor(source), cursor).to_svg();
    format!(
        "<path class=\"connection-pending\" d=\"{path}\" fill=\"none\" \
         stroke=\"#6366f1\" stroke-width=\"2\" stroke-dasharray=\"5,5\"/>"
    )
}

/// Renders the node frames: card rect, header with editable title and
/// cost badge, attached-tool rows, and the input/output port markers.
pub fn render_nodes(canvas: &WorkflowCanvas, catalog: &Catalog) -> String {
    let mut svg = String::new();
    for step in canvas.steps() {
        let body_rows = step.tools.len();
        let body_height = if body_rows == 0 {
            NODE_MIN_BODY_HEIGHT
        } else {
            body_rows as f64 * TOOL_ROW_HEIGHT
        };
        let height = NODE_HEADER_HEIGHT + body_height;
        let Point { x, y } = step.position;
        let cost = canvas.node_cost(&step.id, catalog);

        svg.push_str(&format!(
            "<g class=\"node\" data-step=\"{id}\" transform=\"translate({x} {y})\">\
             <rect width=\"{NODE_WIDTH}\" height=\"{height}\" rx=\"8\" fill=\"#ffffff\" stroke=\"#d1d5db\"/>\
             <rect class=\"node-header\" width=\"{NODE_WIDTH}\" height=\"{NODE_HEADER_HEIGHT}\" rx=\"8\" fill=\"#f9fafb\"/>\
             <text class=\"node-title\" x=\"12\" y=\"28\">{title}</text>\
             <text class=\"node-cost\" x=\"{cost_x}\" y=\"28\" text-anchor=\"end\">{cost:.2}</text>",
            id = escape(&step.id),
            title = escape(&step.title),
            cost_x = NODE_WIDTH - 12.0,
        ));

        for (row, config) in step.tools.iter().enumerate() {
            let row_y = NODE_HEADER_HEIGHT + row as f64 * TOOL_ROW_HEIGHT + 24.0;
            // An unresolvable tool reference renders as its raw id.
            let label = catalog
                .tool(&config.tool_id)
                .map(|t| t.name.as_str())
                .unwrap_or(config.tool_id.as_str());
            svg.push_str(&format!(
                "<text class=\"node-tool\" x=\"12\" y=\"{row_y}\">{}</text>",
                escape(label)
            ));
        }

        let input = input_anchor(step);
        let output = output_anchor(step);
        svg.push_str(&format!(
            "<circle class=\"port-in\" cx=\"{in_x}\" cy=\"{port_y}\" r=\"{PORT_RADIUS}\"/>\
             <circle class=\"port-out\" cx=\"{out_x}\" cy=\"{port_y}\" r=\"{PORT_RADIUS}\"/>\
             </g>",
            in_x = input.x - x,
            out_x = output.x - x,
            port_y = input.y - y,
        ));
    }
    svg
}

/// Minimal XML text escaping for titles and ids.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
