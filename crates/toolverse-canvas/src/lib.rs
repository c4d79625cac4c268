//! # Toolverse Canvas
//!
//! The visual workflow canvas: an infinite, pannable/zoomable 2D
//! surface on which the user places phase nodes, attaches cost-bearing
//! catalog tools to each node, draws directed connections between
//! nodes, and sees an aggregate cost computed live.
//!
//! ## Architecture
//!
//! The canvas operates in layers:
//!
//! ```text
//! WorkflowCanvas (open graph + interaction dispatch)
//!   ├── StepStore (id-keyed node arena)
//!   ├── Viewport (pan/zoom, screen <-> world transforms)
//!   └── InteractionMode (idle / panning / dragging / connecting)
//!
//! Geometry
//!   └── ConnectionPath (cubic edges, tolerance-band hit testing)
//!
//! Cost (pure aggregation over graph + catalog)
//!
//! Renderer (toolkit-neutral SVG fragments)
//! ```
//!
//! All interaction logic works on a neutral pointer event model, so
//! the state machine is testable without any UI toolkit. Mutations
//! happen synchronously inside event handlers; after each committed
//! mutation the owning application takes a [`Workflow`] snapshot via
//! [`WorkflowCanvas::snapshot`] and hands it to persistence.
//!
//! [`Workflow`]: toolverse_core::Workflow

pub mod canvas;
pub mod connection;
pub mod cost;
pub mod interaction;
pub mod renderer;
pub mod step_store;
pub mod viewport;

pub use canvas::WorkflowCanvas;
pub use connection::{ConnectionPath, DEFAULT_HIT_TOLERANCE, NODE_WIDTH, PORT_OFFSET_Y};
pub use interaction::{HitTarget, InteractionMode, Modifiers, PointerButton, PointerEvent};
pub use step_store::StepStore;
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

pub use toolverse_core::Point;
