use super::*;
use floorplan::camera::Point;
use floorplan::layout::Location;

#[test]
fn summary_counts_current_location_only() {
    let mut engine = engine_for_seed(7);
    let (free, total) = engine.plan.availability(Location::Indoor);
    assert_eq!(availability_summary(&engine), format!("{free} of {total} tables available"));

    engine.set_location(Location::Outdoor);
    let (free, total) = engine.plan.availability(Location::Outdoor);
    assert_eq!(availability_summary(&engine), format!("{free} of {total} tables available"));
}

#[test]
fn same_seed_gives_same_plan() {
    assert_eq!(engine_for_seed(42).plan, engine_for_seed(42).plan);
}

#[test]
fn native_seed_is_fixed() {
    assert_eq!(page_seed(), 0);
}

#[test]
fn dispatch_applies_handler_and_returns_its_action() {
    let engine = RwSignal::new(engine_for_seed(5));
    assert_eq!(dispatch(engine, |e| e.on_pointer_move(Point::new(40.0, 40.0))), Action::None);
    assert!(!engine.with_untracked(EngineCore::is_dragging));

    assert_eq!(dispatch(engine, |e| e.on_pointer_down(Point::new(0.0, 0.0))), Action::DragChanged { dragging: true });
    assert!(engine.with_untracked(EngineCore::is_dragging));
    assert_eq!(dispatch(engine, EngineCore::on_pointer_up), Action::DragChanged { dragging: false });
}

#[test]
fn dispatch_selection_opens_and_closes_dialog() {
    let engine = RwSignal::new(engine_for_seed(5));
    assert_eq!(dispatch(engine, |e| e.activate_table("t4_1")), Action::TableSelected { id: "t4_1".to_owned() });
    assert_eq!(engine.with_untracked(|e| e.selected_table().map(|t| t.id.clone())), Some("t4_1".to_owned()));
    assert_eq!(dispatch(engine, EngineCore::close_dialog), Action::SelectionCleared);
    assert!(engine.with_untracked(|e| e.selected_table().is_none()));
}
