//! Drag gesture state machine.
//!
//! `Idle → Dragging` on pointer-down, `Dragging → Idle` on pointer-up or when
//! the pointer leaves the viewport. While dragging, the pan is the pan at
//! pointer-down plus the pointer's displacement since then, so the plan
//! tracks the pointer exactly and a new drag continues from wherever the
//! last one left it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::CLICK_SLOP_PX;

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; moves are ignored.
    #[default]
    Idle,
    /// The user is panning the plan.
    Dragging {
        /// Screen-space pointer position at pointer-down.
        pointer_origin: Point,
        /// Camera pan at pointer-down.
        pan_origin: Point,
        /// Whether the pointer has travelled beyond [`CLICK_SLOP_PX`].
        moved: bool,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start a drag at `pointer` with the camera currently panned to `pan`.
    #[must_use]
    pub fn press(pointer: Point, pan: Point) -> Self {
        Self::Dragging {
            pointer_origin: pointer,
            pan_origin: pan,
            moved: false,
        }
    }

    /// Track a pointer move. Returns the new pan while dragging, `None` when idle.
    pub fn track(&mut self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging {
                pointer_origin,
                pan_origin,
                moved,
            } => {
                if pointer.distance(*pointer_origin) > CLICK_SLOP_PX {
                    *moved = true;
                }
                Some(Point::new(
                    pan_origin.x + (pointer.x - pointer_origin.x),
                    pan_origin.y + (pointer.y - pointer_origin.y),
                ))
            }
        }
    }

    /// End the gesture. Returns whether it was a real drag rather than a click.
    pub fn release(&mut self) -> bool {
        let dragged = matches!(self, Self::Dragging { moved: true, .. });
        *self = Self::Idle;
        dragged
    }
}
