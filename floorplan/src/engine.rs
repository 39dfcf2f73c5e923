use crate::camera::{Camera, Point};
use crate::input::InputState;
use crate::layout::{Landmark, Location, SeatingPlan, Table, landmarks};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// Anything but [`Action::None`] means visible state changed and the host
/// has to re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// A drag gesture started or ended; the viewport cursor changes.
    DragChanged { dragging: bool },
    /// Camera moved or zoomed; re-apply the transform.
    ViewChanged(Camera),
    /// A table was activated; open its dialog.
    TableSelected { id: String },
    /// The dialog was dismissed.
    SelectionCleared,
    /// The visible location tab changed.
    LocationChanged(Location),
}

impl Action {
    #[must_use]
    pub fn changes_view(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Core engine state: everything about the bar map that does not depend on the DOM.
///
/// Both location tabs share one camera, so switching tabs keeps the current
/// pan and zoom.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub plan: SeatingPlan,
    pub camera: Camera,
    pub input: InputState,
    pub location: Location,
    pub selected_id: Option<String>,
    /// Whether the last completed gesture panned the view; the click that
    /// follows such a gesture is not a table activation.
    suppress_click: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new(plan: SeatingPlan) -> Self {
        Self { plan, ..Self::default() }
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        self.suppress_click = false;
        self.input = InputState::press(screen_pt, self.camera.pan());
        Action::DragChanged { dragging: true }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        match self.input.track(screen_pt) {
            Some(pan) => {
                self.camera.set_pan(pan);
                Action::ViewChanged(self.camera)
            }
            None => Action::None,
        }
    }

    pub fn on_pointer_up(&mut self) -> Action {
        let was_dragging = self.input.is_dragging();
        self.suppress_click = self.input.release();
        if was_dragging { Action::DragChanged { dragging: false } } else { Action::None }
    }

    /// Leaving the viewport ends a drag just like releasing the pointer.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_pointer_up()
    }

    // --- Buttons ---

    pub fn zoom_in(&mut self) -> Action {
        self.camera.zoom_in();
        Action::ViewChanged(self.camera)
    }

    pub fn zoom_out(&mut self) -> Action {
        self.camera.zoom_out();
        Action::ViewChanged(self.camera)
    }

    pub fn reset_view(&mut self) -> Action {
        self.camera.reset();
        Action::ViewChanged(self.camera)
    }

    pub fn set_location(&mut self, location: Location) -> Action {
        if self.location == location {
            return Action::None;
        }
        self.location = location;
        Action::LocationChanged(location)
    }

    // --- Selection ---

    /// Activate a table by id, as from a click or key press on it.
    pub fn activate_table(&mut self, id: &str) -> Action {
        if self.suppress_click {
            self.suppress_click = false;
            return Action::None;
        }
        match self.plan.get(id) {
            Some(table) => {
                self.selected_id = Some(table.id.clone());
                Action::TableSelected { id: table.id.clone() }
            }
            None => Action::None,
        }
    }

    pub fn close_dialog(&mut self) -> Action {
        if self.selected_id.take().is_some() {
            Action::SelectionCleared
        } else {
            Action::None
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn selected_table(&self) -> Option<&Table> {
        self.selected_id.as_deref().and_then(|id| self.plan.get(id))
    }

    #[must_use]
    pub fn visible_tables(&self) -> Vec<&Table> {
        self.plan.at(self.location).collect()
    }

    #[must_use]
    pub fn visible_landmarks(&self) -> &'static [Landmark] {
        landmarks(self.location)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }
}
