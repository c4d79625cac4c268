//! Pointer interaction state machine tests: pan, drag, connect.

use toolverse_canvas::{
    HitTarget, InteractionMode, Modifiers, Point, PointerButton, PointerEvent, WorkflowCanvas,
};
use toolverse_core::{Point as WorldPoint, Workflow, WorkflowStep};

fn workflow_with_steps(ids: &[&str]) -> Workflow {
    let mut workflow = Workflow::new("w1", "Test Project");
    for (i, id) in ids.iter().enumerate() {
        workflow.steps.push(WorkflowStep::new(
            *id,
            format!("Phase {i}"),
            WorldPoint::new(i as f64 * 500.0, 100.0),
        ));
    }
    workflow
}

fn press(pos: Point, button: PointerButton) -> PointerEvent {
    PointerEvent::new(pos, button)
}

#[test]
fn test_middle_button_press_on_canvas_starts_panning() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.pointer_pressed(press(Point::new(10.0, 10.0), PointerButton::Middle), HitTarget::Canvas);
    assert_eq!(*canvas.mode(), InteractionMode::Panning);

    canvas.pointer_moved(Point::new(60.0, 40.0));
    assert_eq!(canvas.viewport().pan_x(), 50.0);
    assert_eq!(canvas.viewport().pan_y(), 30.0);

    canvas.pointer_released(HitTarget::Canvas);
    assert!(canvas.mode().is_idle());
}

#[test]
fn test_shift_primary_press_on_canvas_starts_panning() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&[]));
    let event = press(Point::new(0.0, 0.0), PointerButton::Primary)
        .with_modifiers(Modifiers::shift());
    canvas.pointer_pressed(event, HitTarget::Canvas);
    assert_eq!(*canvas.mode(), InteractionMode::Panning);
}

#[test]
fn test_plain_primary_press_on_canvas_stays_idle() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&[]));
    canvas.pointer_pressed(press(Point::new(0.0, 0.0), PointerButton::Primary), HitTarget::Canvas);
    assert!(canvas.mode().is_idle());
}

#[test]
fn test_pan_is_pixel_exact_independent_of_zoom() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&[]));
    canvas.viewport_mut().set_zoom(2.0);
    canvas.pointer_pressed(press(Point::new(100.0, 100.0), PointerButton::Middle), HitTarget::Canvas);
    canvas.pointer_moved(Point::new(130.0, 80.0));
    assert_eq!(canvas.viewport().pan_x(), 30.0);
    assert_eq!(canvas.viewport().pan_y(), -20.0);
}

#[test]
fn test_header_press_starts_node_drag() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.pointer_pressed(
        press(Point::new(20.0, 110.0), PointerButton::Primary),
        HitTarget::NodeHeader("a".to_string()),
    );
    assert_eq!(
        *canvas.mode(),
        InteractionMode::DraggingNode { id: "a".to_string() }
    );
}

#[test]
fn test_drag_converts_screen_delta_to_world_units() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.viewport_mut().set_zoom(2.0);
    let start = canvas.step("a").unwrap().position;

    canvas.pointer_pressed(
        press(Point::new(50.0, 50.0), PointerButton::Primary),
        HitTarget::NodeHeader("a".to_string()),
    );
    let changed = canvas.pointer_moved(Point::new(90.0, 70.0));
    assert!(changed, "drag movement is a committed mutation");

    // Screen delta (40, 20) at scale 2 moves the node (20, 10) in world units
    let pos = canvas.step("a").unwrap().position;
    assert_eq!(pos.x, start.x + 20.0);
    assert_eq!(pos.y, start.y + 10.0);

    canvas.pointer_released(HitTarget::Canvas);
    assert!(canvas.mode().is_idle());
}

#[test]
fn test_output_port_press_starts_connecting() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    assert_eq!(
        *canvas.mode(),
        InteractionMode::Connecting { source: "a".to_string() }
    );
    let (source, _) = canvas.pending_connection().expect("rubber band active");
    assert_eq!(source, "a");
}

#[test]
fn test_rubber_band_cursor_tracks_in_world_space() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.viewport_mut().set_pan(100.0, 0.0);
    canvas.viewport_mut().set_zoom(2.0);

    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    canvas.pointer_moved(Point::new(500.0, 240.0));

    let (_, cursor) = canvas.pending_connection().unwrap();
    assert_eq!(cursor, WorldPoint::new((500.0 - 100.0) / 2.0, 240.0 / 2.0));
}

#[test]
fn test_release_on_input_port_commits_connection() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    let changed = canvas.pointer_released(HitTarget::InputPort("b".to_string()));

    assert!(changed);
    assert!(canvas.step("a").unwrap().has_connection_to("b"));
    assert!(canvas.mode().is_idle());
    assert!(canvas.pending_connection().is_none());
}

#[test]
fn test_release_elsewhere_discards_pending_connection() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    let changed = canvas.pointer_released(HitTarget::NodeBody("b".to_string()));

    assert!(!changed, "discarded connection is not an error or a mutation");
    assert!(canvas.step("a").unwrap().connections.is_empty());
    assert!(canvas.mode().is_idle());
}

#[test]
fn test_self_connection_is_silently_rejected() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    let changed = canvas.pointer_released(HitTarget::InputPort("a".to_string()));

    assert!(!changed);
    assert!(canvas.step("a").unwrap().connections.is_empty());
}

#[test]
fn test_duplicate_connection_is_a_noop_but_reverse_is_distinct() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    assert!(canvas.add_connection("a", "b"));
    assert!(!canvas.add_connection("a", "b"));
    // Opposite direction is its own edge
    assert!(canvas.add_connection("b", "a"));

    assert_eq!(canvas.step("a").unwrap().connections, vec!["b".to_string()]);
    assert_eq!(canvas.step("b").unwrap().connections, vec!["a".to_string()]);
}

#[test]
fn test_pointer_leave_resolves_any_mode_to_idle() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));

    canvas.pointer_pressed(
        press(Point::new(0.0, 0.0), PointerButton::Primary),
        HitTarget::NodeHeader("a".to_string()),
    );
    canvas.pointer_left();
    assert!(canvas.mode().is_idle());

    canvas.pointer_pressed(
        press(Point::new(300.0, 140.0), PointerButton::Primary),
        HitTarget::OutputPort("a".to_string()),
    );
    canvas.pointer_left();
    assert!(canvas.mode().is_idle());
    assert!(canvas.pending_connection().is_none());
}

#[test]
fn test_click_on_edge_path_deletes_exactly_that_connection() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    canvas.add_connection("a", "b");

    // The edge runs from a's output port (300, 140) to b's input port
    // (500, 140); click its midpoint in screen coordinates (1:1 view).
    let changed = canvas.pointer_pressed(
        press(Point::new(400.0, 140.0), PointerButton::Primary),
        HitTarget::Canvas,
    );

    assert!(changed);
    assert!(canvas.step("a").unwrap().connections.is_empty());
}

#[test]
fn test_click_far_from_any_edge_deletes_nothing() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a", "b"]));
    canvas.add_connection("a", "b");

    let changed = canvas.pointer_pressed(
        press(Point::new(400.0, 400.0), PointerButton::Primary),
        HitTarget::Canvas,
    );

    assert!(!changed);
    assert_eq!(canvas.step("a").unwrap().connections.len(), 1);
}

#[test]
fn test_deleting_dragged_node_resets_mode() {
    let mut canvas = WorkflowCanvas::open(workflow_with_steps(&["a"]));
    canvas.pointer_pressed(
        press(Point::new(0.0, 0.0), PointerButton::Primary),
        HitTarget::NodeHeader("a".to_string()),
    );
    canvas.delete_step("a");
    assert!(canvas.mode().is_idle());
}
