//! Viewport coordinate transform and zoom clamp tests.

use proptest::prelude::*;
use toolverse_canvas::{Modifiers, Point, Viewport, WorkflowCanvas, MAX_ZOOM, MIN_ZOOM};
use toolverse_core::Workflow;

#[test]
fn test_screen_world_roundtrip() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_pan(37.0, -120.0);
    viewport.set_zoom(1.3);

    let screen = Point::new(412.0, 250.0);
    let back = viewport.world_to_screen(viewport.screen_to_world(screen));
    assert!((back.x - screen.x).abs() < 1e-9);
    assert!((back.y - screen.y).abs() < 1e-9);
}

#[test]
fn test_zoom_clamps_to_valid_range() {
    let mut viewport = Viewport::default();

    viewport.set_zoom(2.05);
    assert_eq!(viewport.zoom(), MAX_ZOOM);

    viewport.set_zoom(0.4);
    assert_eq!(viewport.zoom(), MIN_ZOOM);

    viewport.set_zoom(1.0);
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_zoom_buttons_step_and_saturate() {
    let mut viewport = Viewport::default();
    viewport.set_zoom(1.95);
    viewport.zoom_in();
    assert_eq!(viewport.zoom(), MAX_ZOOM);

    viewport.set_zoom(0.55);
    viewport.zoom_out();
    assert_eq!(viewport.zoom(), MIN_ZOOM);
    // Further steps stay pinned
    viewport.zoom_out();
    assert_eq!(viewport.zoom(), MIN_ZOOM);
}

#[test]
fn test_zoom_leaves_pan_unchanged() {
    let mut viewport = Viewport::default();
    viewport.set_pan(33.0, 44.0);
    viewport.set_zoom(1.7);
    assert_eq!(viewport.pan_x(), 33.0);
    assert_eq!(viewport.pan_y(), 44.0);
}

#[test]
fn test_pan_is_screen_pixel_exact() {
    let mut viewport = Viewport::default();
    viewport.set_zoom(2.0);
    viewport.pan_by(50.0, -30.0);
    // Pan deltas are 1:1 screen pixels regardless of zoom
    assert_eq!(viewport.pan_x(), 50.0);
    assert_eq!(viewport.pan_y(), -30.0);
}

#[test]
fn test_view_center_world_accounts_for_pan_and_zoom() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_pan(100.0, 50.0);
    viewport.set_zoom(2.0);

    let center = viewport.view_center_world();
    assert!((center.x - (400.0 - 100.0) / 2.0).abs() < 1e-9);
    assert!((center.y - (300.0 - 50.0) / 2.0).abs() < 1e-9);
}

#[test]
fn test_wheel_zoom_requires_modifier() {
    let mut canvas = WorkflowCanvas::open(Workflow::new("w1", "Test"));
    let before = canvas.viewport().zoom();

    // Plain wheel scroll must not hijack zoom
    canvas.wheel(-200.0, Modifiers::NONE);
    assert_eq!(canvas.viewport().zoom(), before);

    // With the zoom modifier held, wheel-up zooms in
    canvas.wheel(-200.0, Modifiers::ctrl());
    assert!(canvas.viewport().zoom() > before);
}

proptest! {
    /// world_to_screen(screen_to_world(p)) == p for any pan/zoom in
    /// their valid ranges.
    #[test]
    fn prop_transform_roundtrip(
        px in -5000.0f64..5000.0,
        py in -5000.0f64..5000.0,
        pan_x in -2000.0f64..2000.0,
        pan_y in -2000.0f64..2000.0,
        zoom in MIN_ZOOM..MAX_ZOOM,
    ) {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.set_pan(pan_x, pan_y);
        viewport.set_zoom(zoom);

        let p = Point::new(px, py);
        let back = viewport.world_to_screen(viewport.screen_to_world(p));
        prop_assert!((back.x - p.x).abs() < 1e-6);
        prop_assert!((back.y - p.y).abs() < 1e-6);
    }
}
