//! Neutral pointer input model and the interaction state machine.
//!
//! Interaction logic is decoupled from any UI toolkit: the embedder
//! translates its native events into [`PointerEvent`]s plus a
//! [`HitTarget`] describing what the pointer landed on, and the canvas
//! drives the mode transitions. The tagged [`InteractionMode`] makes
//! invalid combinations (dragging while connecting) unrepresentable.

use toolverse_core::Point;

/// Which physical button a press or release refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during a pointer or wheel event. `ctrl` doubles
/// as the zoom modifier; embedders on macOS map the command key onto
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ctrl: false,
        }
    }

    pub fn ctrl() -> Self {
        Self {
            shift: false,
            ctrl: true,
        }
    }
}

/// A toolkit-neutral pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(pos: Point, button: PointerButton) -> Self {
        Self {
            pos,
            button,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What a pointer press or release landed on. The embedder performs
/// this hit test against its rendered node cards; connection curves
/// are hit-tested inside the canvas, which owns their geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas surface.
    Canvas,
    /// A node's header / drag-handle region.
    NodeHeader(String),
    /// A node's body (item list area).
    NodeBody(String),
    /// A node's input port (left edge).
    InputPort(String),
    /// A node's output port (right edge).
    OutputPort(String),
}

/// Current pointer interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Pan follows the pointer 1:1 in screen pixels.
    Panning,
    /// The identified node follows the pointer in world units.
    DraggingNode { id: String },
    /// A rubber-band edge is being drawn from this node's output port.
    Connecting { source: String },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }
}
