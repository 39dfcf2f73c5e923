//! Bar map page state.
//!
//! The engine lives in `floorplan`; this module adds the page-level labels
//! derived from it and the glue that applies engine actions to the signal
//! holding it.

#[cfg(test)]
#[path = "bar_map_test.rs"]
mod bar_map_test;

use floorplan::engine::{Action, EngineCore};
use floorplan::layout::SeatingPlan;
use leptos::prelude::*;

/// Run an engine handler against the page's engine signal.
///
/// Subscribers are only notified when the returned [`Action`] changed
/// something visible.
pub fn dispatch(engine: RwSignal<EngineCore>, handler: impl FnOnce(&mut EngineCore) -> Action) -> Action {
    let action = engine.try_update_untracked(handler).unwrap_or(Action::None);
    if action.changes_view() {
        engine.notify();
    }
    #[cfg(feature = "hydrate")]
    {
        if let Action::TableSelected { id } = &action {
            log::debug!("table {id} selected");
        }
    }
    action
}

/// "N of M tables available" for the engine's current location.
#[must_use]
pub fn availability_summary(engine: &EngineCore) -> String {
    let (free, total) = engine.plan.availability(engine.location);
    format!("{free} of {total} tables available")
}

/// Engine for a fresh page view. Availability is re-rolled from `seed`.
#[must_use]
pub fn engine_for_seed(seed: u64) -> EngineCore {
    EngineCore::new(SeatingPlan::from_seed(seed))
}

/// Seed for this page view: wall-clock milliseconds in the browser.
#[must_use]
pub fn page_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
