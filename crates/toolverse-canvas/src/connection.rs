//! Connection geometry: anchors, cubic edge paths, and hit testing.
//!
//! A connection runs from the source node's output port (right edge)
//! to the target node's input port (left edge) as a smooth cubic
//! curve. Horizontal control-point offsets are proportional to the
//! horizontal distance between the anchors, with a floor so short or
//! vertical edges still curve outward instead of collapsing into an
//! overlapping straight line.

use toolverse_core::{Point, WorkflowStep};

use crate::step_store::StepStore;

/// Node card width in world units. Ports sit on the left/right edges.
pub const NODE_WIDTH: f64 = 300.0;
/// Vertical offset of the ports from the node's top edge.
pub const PORT_OFFSET_Y: f64 = 40.0;
/// World-unit tolerance band around an edge for click-to-delete.
pub const DEFAULT_HIT_TOLERANCE: f64 = 6.0;

/// Minimum horizontal control-point offset.
const MIN_CONTROL_OFFSET: f64 = 50.0;
/// Samples used when approximating distance to the curve.
const HIT_SAMPLES: usize = 32;

/// World position of a step's output port.
pub fn output_anchor(step: &WorkflowStep) -> Point {
    Point::new(step.position.x + NODE_WIDTH, step.position.y + PORT_OFFSET_Y)
}

/// World position of a step's input port.
pub fn input_anchor(step: &WorkflowStep) -> Point {
    Point::new(step.position.x, step.position.y + PORT_OFFSET_Y)
}

/// A cubic Bezier edge path in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl ConnectionPath {
    /// Builds the edge curve between two anchor points.
    pub fn between(start: Point, end: Point) -> Self {
        let offset = ((end.x - start.x).abs() * 0.5).max(MIN_CONTROL_OFFSET);
        Self {
            start,
            control1: Point::new(start.x + offset, start.y),
            control2: Point::new(end.x - offset, end.y),
            end,
        }
    }

    /// The committed edge between two steps.
    pub fn between_steps(source: &WorkflowStep, target: &WorkflowStep) -> Self {
        Self::between(output_anchor(source), input_anchor(target))
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }

    /// Approximate distance from a world point to the curve, via
    /// uniform sampling. Accurate enough for a click tolerance band.
    pub fn distance_to(&self, point: Point) -> f64 {
        (0..=HIT_SAMPLES)
            .map(|i| {
                let t = i as f64 / HIT_SAMPLES as f64;
                self.point_at(t).distance_to(&point)
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether a world point falls within `tolerance` of the curve.
    pub fn hits(&self, point: Point, tolerance: f64) -> bool {
        self.distance_to(point) <= tolerance
    }

    /// SVG path data for this curve.
    pub fn to_svg(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Hit-tests a world point against every committed connection in the
/// graph. Returns the `(source, target)` pair of the first edge whose
/// tolerance band contains the point. Edges whose target no longer
/// exists are skipped.
pub fn hit_test_connections(
    store: &StepStore,
    point: Point,
    tolerance: f64,
) -> Option<(String, String)> {
    for source in store.iter() {
        for target_id in &source.connections {
            let Some(target) = store.get(target_id) else {
                continue;
            };
            if ConnectionPath::between_steps(source, target).hits(point, tolerance) {
                return Some((source.id.clone(), target_id.clone()));
            }
        }
    }
    None
}
