#![allow(clippy::float_cmp)]

use super::*;

fn engine() -> EngineCore {
    EngineCore::new(SeatingPlan::from_seed(11))
}

fn drag(core: &mut EngineCore, from: Point, to: Point) {
    core.on_pointer_down(from);
    core.on_pointer_move(to);
    core.on_pointer_up();
}

// =============================================================
// Pan
// =============================================================

#[test]
fn drag_then_release_pans_by_total_displacement() {
    let mut core = engine();
    core.on_pointer_down(Point::new(200.0, 200.0));
    core.on_pointer_move(Point::new(220.0, 190.0));
    core.on_pointer_move(Point::new(260.0, 150.0));
    core.on_pointer_up();
    assert_eq!(core.camera.pan(), Point::new(60.0, -50.0));
    assert!(!core.is_dragging());
}

#[test]
fn second_drag_continues_from_previous_offset() {
    let mut core = engine();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(30.0, 40.0));
    drag(&mut core, Point::new(500.0, 500.0), Point::new(490.0, 520.0));
    assert_eq!(core.camera.pan(), Point::new(20.0, 60.0));
}

#[test]
fn moves_while_idle_do_nothing() {
    let mut core = engine();
    assert_eq!(core.on_pointer_move(Point::new(100.0, 100.0)), Action::None);
    assert_eq!(core.camera, Camera::default());
}

#[test]
fn pointer_leave_ends_drag() {
    let mut core = engine();
    core.on_pointer_down(Point::new(0.0, 0.0));
    core.on_pointer_move(Point::new(10.0, 10.0));
    core.on_pointer_leave();
    assert_eq!(core.on_pointer_move(Point::new(90.0, 90.0)), Action::None);
    assert_eq!(core.camera.pan(), Point::new(10.0, 10.0));
}

#[test]
fn move_while_dragging_reports_view_change() {
    let mut core = engine();
    core.on_pointer_down(Point::new(0.0, 0.0));
    let action = core.on_pointer_move(Point::new(5.0, 0.0));
    assert!(matches!(action, Action::ViewChanged(cam) if cam.pan_x == 5.0));
}

#[test]
fn pan_is_independent_of_zoom() {
    let mut core = engine();
    core.zoom_in();
    core.zoom_in();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(50.0, 0.0));
    assert_eq!(core.camera.pan_x, 50.0);
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn zoom_buttons_stay_clamped() {
    let mut core = engine();
    for _ in 0..20 {
        core.zoom_in();
    }
    assert_eq!(core.camera.zoom, 2.0);
    for _ in 0..20 {
        core.zoom_out();
    }
    assert_eq!(core.camera.zoom, 0.5);
}

#[test]
fn reset_view_restores_defaults() {
    let mut core = engine();
    core.zoom_in();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(80.0, 80.0));
    assert_eq!(core.reset_view(), Action::ViewChanged(Camera::default()));
    assert_eq!(core.camera, Camera::default());
}

// =============================================================
// Locations
// =============================================================

#[test]
fn location_switch_keeps_camera() {
    let mut core = engine();
    core.zoom_in();
    assert_eq!(core.set_location(Location::Outdoor), Action::LocationChanged(Location::Outdoor));
    assert!(core.camera.zoom > 1.0);
    assert_eq!(core.visible_tables().len(), 40);
    assert_eq!(core.visible_landmarks().len(), 3);
}

#[test]
fn selecting_current_location_is_a_no_op() {
    let mut core = engine();
    assert_eq!(core.set_location(Location::Indoor), Action::None);
    assert_eq!(core.visible_tables().len(), 19);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn activating_table_selects_it() {
    let mut core = engine();
    assert_eq!(core.activate_table("t8_1"), Action::TableSelected { id: "t8_1".to_owned() });
    assert_eq!(core.selected_table().map(|t| t.name.as_str()), Some("T8"));
}

#[test]
fn unknown_table_is_ignored() {
    let mut core = engine();
    assert_eq!(core.activate_table("nope"), Action::None);
    assert!(core.selected_table().is_none());
}

#[test]
fn close_clears_selection_once() {
    let mut core = engine();
    core.activate_table("t2_1");
    assert_eq!(core.close_dialog(), Action::SelectionCleared);
    assert!(core.selected_table().is_none());
    assert_eq!(core.close_dialog(), Action::None);
}

#[test]
fn click_after_drag_does_not_select() {
    let mut core = engine();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert_eq!(core.activate_table("t2_1"), Action::None);
    assert_eq!(core.activate_table("t2_1"), Action::TableSelected { id: "t2_1".to_owned() });
}

#[test]
fn plain_click_selects() {
    let mut core = engine();
    core.on_pointer_down(Point::new(10.0, 10.0));
    core.on_pointer_up();
    assert!(matches!(core.activate_table("t4_1"), Action::TableSelected { .. }));
}

#[test]
fn press_and_release_report_drag_state_once() {
    let mut core = engine();
    assert_eq!(core.on_pointer_down(Point::new(5.0, 5.0)), Action::DragChanged { dragging: true });
    assert_eq!(core.on_pointer_up(), Action::DragChanged { dragging: false });
    assert_eq!(core.on_pointer_up(), Action::None);
    assert_eq!(core.on_pointer_leave(), Action::None);
}

#[test]
fn only_none_leaves_the_view_untouched() {
    let mut core = engine();
    assert!(!core.on_pointer_move(Point::new(1.0, 1.0)).changes_view());
    assert!(core.zoom_in().changes_view());
    assert!(core.activate_table("t2_1").changes_view());
    assert!(core.close_dialog().changes_view());
    assert!(!core.close_dialog().changes_view());
}
