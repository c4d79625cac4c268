//! Viewport and coordinate transformation for the workflow canvas.
//!
//! Handles conversion between screen coordinates (pointer events) and
//! world coordinates (node positions). Manages zoom and pan operations
//! with proper coordinate mapping.

use std::fmt;

use toolverse_core::Point;

/// Minimum zoom scale (50%).
pub const MIN_ZOOM: f64 = 0.5;
/// Maximum zoom scale (200%).
pub const MAX_ZOOM: f64 = 2.0;
/// Step applied by the toolbar zoom in/out buttons.
pub const ZOOM_STEP: f64 = 0.1;

/// Scale factor applied to wheel delta when zooming.
const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Represents the viewport transformation state (zoom and pan).
///
/// `pan` is the world-origin offset in screen pixels; `zoom` scales
/// world units into screen pixels. There is no Y flip: world +Y is
/// screen-down, the same orientation pointer events arrive in.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions, at 1:1 zoom
    /// with the world origin at the top-left corner.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the surface resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Pan is left unchanged: zoom is anchored at the pan origin, not
    /// at the cursor.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms in by one toolbar step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Zooms out by one toolbar step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Applies a wheel delta to the zoom level. Positive `delta_y`
    /// (wheel down) zooms out. The caller is responsible for only
    /// invoking this when the zoom modifier is held.
    pub fn wheel_zoom(&mut self, delta_y: f64) {
        self.set_zoom(self.zoom - delta_y * WHEEL_ZOOM_SENSITIVITY);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-pixel delta. Panning is 1:1 with pointer
    /// movement, independent of zoom.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts screen coordinates to world coordinates.
    ///
    /// Formula:
    /// ```text
    /// world = (screen - pan) / zoom
    /// ```
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// Formula:
    /// ```text
    /// screen = world * zoom + pan
    /// ```
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_x,
            world.y * self.zoom + self.pan_y,
        )
    }

    /// World coordinate at the centre of the visible surface. New
    /// nodes are placed relative to this point.
    pub fn view_center_world(&self) -> Point {
        self.screen_to_world(Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0))
    }

    /// Resets viewport to default state (1:1 zoom, origin pan).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Pan: ({:.1}, {:.1})",
            self.zoom * 100.0,
            self.pan_x,
            self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
