//! Shared numeric constants for the floorplan crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the camera allows.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest zoom factor the camera allows.
pub const ZOOM_MAX: f64 = 2.0;

/// Zoom change per button press.
pub const ZOOM_STEP: f64 = 0.2;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in screen pixels below which a press still counts as a click.
pub const CLICK_SLOP_PX: f64 = 4.0;

// ── Canvas ──────────────────────────────────────────────────────

pub const INDOOR_CANVAS_WIDTH: f64 = 1300.0;
pub const INDOOR_CANVAS_HEIGHT: f64 = 1000.0;
pub const OUTDOOR_CANVAS_WIDTH: f64 = 1200.0;
pub const OUTDOOR_CANVAS_HEIGHT: f64 = 900.0;

// ── Occupancy ───────────────────────────────────────────────────
//
// A table is available when a uniform draw in [0, 1) exceeds its threshold,
// so larger tables are busier.

pub const OCCUPANCY_T2: f64 = 0.3;
pub const OCCUPANCY_T4: f64 = 0.5;
pub const OCCUPANCY_T6: f64 = 0.4;
pub const OCCUPANCY_T7: f64 = 0.7;
pub const OCCUPANCY_T8: f64 = 0.6;
pub const OCCUPANCY_T10: f64 = 0.8;
pub const OCCUPANCY_GARDEN_SMALL: f64 = 0.3;
pub const OCCUPANCY_GARDEN_MEDIUM: f64 = 0.5;
pub const OCCUPANCY_GARDEN_LARGE: f64 = 0.7;

// ── Beer garden grid ────────────────────────────────────────────

/// Tables per row in every garden grid.
pub const GARDEN_COLUMNS: usize = 4;
pub const GARDEN_SMALL_COUNT: usize = 16;
pub const GARDEN_MEDIUM_COUNT: usize = 16;
pub const GARDEN_LARGE_COUNT: usize = 8;
