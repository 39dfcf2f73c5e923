//! Tables, locations, landmarks and seeded generation.
//!
//! DESIGN
//! ======
//! Table geometry is fixed; only availability is random. Each table is built
//! from a [`TableSpec`] carrying its occupancy threshold, and availability is
//! drawn once per table from an injected RNG so tests can pin a seed. The
//! resulting [`SeatingPlan`] is never updated after generation.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::consts::*;

// =============================================================================
// LOCATION / SHAPE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Indoor,
    Outdoor,
}

impl Location {
    pub const ALL: [Self; 2] = [Self::Indoor, Self::Outdoor];

    /// Lowercase name, also shown in the table dialog.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Indoor => "Indoor Seating",
            Self::Outdoor => "Beer Garden",
        }
    }

    /// Width and height of the virtual canvas in CSS pixels.
    #[must_use]
    pub fn canvas_size(self) -> (f64, f64) {
        match self {
            Self::Indoor => (INDOOR_CANVAS_WIDTH, INDOOR_CANVAS_HEIGHT),
            Self::Outdoor => (OUTDOOR_CANVAS_WIDTH, OUTDOOR_CANVAS_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rect,
    Circle,
}

impl Shape {
    /// Table type shown in the dialog.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rect => "Rectangular",
            Self::Circle => "Round",
        }
    }
}

// =============================================================================
// TABLE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub is_available: bool,
    pub location: Location,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: Shape,
}

impl Table {
    /// "1 person" or "N people".
    #[must_use]
    pub fn capacity_label(&self) -> String {
        if self.capacity == 1 {
            "1 person".to_owned()
        } else {
            format!("{} people", self.capacity)
        }
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_available { "Available" } else { "Occupied" }
    }

    #[must_use]
    pub fn availability_sentence(&self) -> &'static str {
        if self.is_available {
            "This table is currently available"
        } else {
            "This table is currently occupied"
        }
    }

    /// Label of the dialog's single action button.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_available { "Reserve Table" } else { "Close" }
    }

    /// Dialog rows after the description, in display order.
    #[must_use]
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Capacity", self.capacity_label()),
            ("Location", self.location.name().to_owned()),
            ("Table Type", self.shape.label().to_owned()),
        ]
    }

    /// Inline CSS positioning the table on its canvas.
    #[must_use]
    pub fn css_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Fixed geometry plus the odds used to draw a table's availability.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub location: Location,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: Shape,
    /// Available when a uniform draw exceeds this.
    pub occupancy: f64,
}

impl TableSpec {
    fn build<R: Rng>(self, rng: &mut R) -> Table {
        let draw: f64 = rng.random();
        Table {
            is_available: draw > self.occupancy,
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            location: self.location,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            shape: self.shape,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn indoor(id: &str, name: &str, capacity: u32, occupancy: f64, x: f64, y: f64, size: (f64, f64), shape: Shape) -> TableSpec {
    TableSpec {
        id: id.to_owned(),
        name: name.to_owned(),
        capacity,
        location: Location::Indoor,
        x,
        y,
        width: size.0,
        height: size.1,
        shape,
        occupancy,
    }
}

/// The 19 indoor tables.
#[must_use]
pub fn indoor_specs() -> Vec<TableSpec> {
    use Shape::{Circle, Rect};
    vec![
        indoor("t4_1", "T4", 4, OCCUPANCY_T4, 70.0, 350.0, (60.0, 60.0), Circle),
        indoor("t4_2", "T4", 4, OCCUPANCY_T4, 150.0, 350.0, (60.0, 60.0), Circle),
        indoor("t4_3", "T4", 4, OCCUPANCY_T4, 70.0, 430.0, (60.0, 60.0), Circle),
        indoor("t4_4", "T4", 4, OCCUPANCY_T4, 300.0, 550.0, (80.0, 80.0), Rect),
        indoor("t4_5", "T4", 4, OCCUPANCY_T4, 600.0, 550.0, (80.0, 80.0), Rect),
        indoor("t4_6", "T4", 4, OCCUPANCY_T4, 800.0, 550.0, (80.0, 80.0), Rect),
        indoor("t4_7", "T4", 4, OCCUPANCY_T4, 950.0, 550.0, (80.0, 80.0), Rect),
        indoor("t4_8", "T4", 4, OCCUPANCY_T4, 1000.0, 700.0, (60.0, 60.0), Circle),
        indoor("t4_9", "T4", 4, OCCUPANCY_T4, 900.0, 800.0, (60.0, 60.0), Circle),
        indoor("t4_10", "T4", 4, OCCUPANCY_T4, 800.0, 800.0, (60.0, 60.0), Circle),
        indoor("t6_1", "T6", 6, OCCUPANCY_T6, 150.0, 500.0, (100.0, 70.0), Rect),
        indoor("t8_1", "T8", 8, OCCUPANCY_T8, 600.0, 350.0, (120.0, 80.0), Rect),
        indoor("t8_2", "T8", 8, OCCUPANCY_T8, 950.0, 350.0, (80.0, 80.0), Circle),
        indoor("t8_3", "T8", 8, OCCUPANCY_T8, 800.0, 700.0, (80.0, 80.0), Circle),
        indoor("t8_4", "T8", 8, OCCUPANCY_T8, 1000.0, 800.0, (80.0, 80.0), Circle),
        indoor("t2_1", "T2", 2, OCCUPANCY_T2, 950.0, 150.0, (50.0, 50.0), Circle),
        indoor("t7_1", "T7", 7, OCCUPANCY_T7, 900.0, 50.0, (100.0, 70.0), Rect),
        indoor("t7_2", "T7", 7, OCCUPANCY_T7, 1050.0, 50.0, (100.0, 70.0), Rect),
        indoor("t10_1", "T10", 10, OCCUPANCY_T10, 850.0, 880.0, (130.0, 90.0), Rect),
    ]
}

/// Grid position for the 1-based `index` within a garden block.
#[allow(clippy::cast_precision_loss)]
fn grid_cell(index: usize) -> (f64, f64) {
    let row = (index - 1) / GARDEN_COLUMNS;
    let col = (index - 1) % GARDEN_COLUMNS;
    (col as f64, row as f64)
}

/// The 40 beer garden tables: 16 small, 16 medium and 8 large.
#[must_use]
pub fn outdoor_specs() -> Vec<TableSpec> {
    let garden = |id: String, name: String, capacity: u32, occupancy: f64, pos: (f64, f64), size: (f64, f64), shape| {
        TableSpec {
            id,
            name,
            capacity,
            location: Location::Outdoor,
            x: pos.0,
            y: pos.1,
            width: size.0,
            height: size.1,
            shape,
            occupancy,
        }
    };

    let small = (1..=GARDEN_SMALL_COUNT).map(|i| {
        let (col, row) = grid_cell(i);
        garden(
            format!("gs{i}"),
            format!("G{i}"),
            2,
            OCCUPANCY_GARDEN_SMALL,
            (50.0 + col * 150.0, 50.0 + row * 150.0),
            (60.0, 60.0),
            Shape::Circle,
        )
    });
    let medium = (1..=GARDEN_MEDIUM_COUNT).map(|i| {
        let (col, row) = grid_cell(i);
        garden(
            format!("gm{i}"),
            format!("G{}", i + 20),
            4,
            OCCUPANCY_GARDEN_MEDIUM,
            (50.0 + col * 180.0, 450.0 + row * 180.0),
            (80.0, 80.0),
            Shape::Circle,
        )
    });
    let large = (1..=GARDEN_LARGE_COUNT).map(|i| {
        let (col, row) = grid_cell(i);
        garden(
            format!("gl{i}"),
            format!("G{}", i + 40),
            if i % 2 == 0 { 6 } else { 8 },
            OCCUPANCY_GARDEN_LARGE,
            (650.0 + col * 200.0, 150.0 + row * 200.0),
            (100.0, 80.0),
            Shape::Rect,
        )
    });

    small.chain(medium).chain(large).collect()
}

// =============================================================================
// LANDMARKS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkKind {
    /// Dashed outline marking a way in or out.
    Doorway,
    /// Grey block for games and fixtures.
    Fixture,
    /// Green planting strip.
    Greenery,
}

/// A static, non-interactive decoration on the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub label: &'static str,
    pub kind: LandmarkKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Landmark {
    const fn new(label: &'static str, kind: LandmarkKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { label, kind, x, y, width, height }
    }

    #[must_use]
    pub fn css_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

const INDOOR_LANDMARKS: [Landmark; 7] = [
    Landmark::new("Entrance", LandmarkKind::Doorway, 90.0, 730.0, 60.0, 30.0),
    Landmark::new("Beer Garden Door", LandmarkKind::Doorway, 410.0, 860.0, 60.0, 30.0),
    Landmark::new("Pool Table 1", LandmarkKind::Fixture, 1070.0, 160.0, 100.0, 100.0),
    Landmark::new("Pool Table 2", LandmarkKind::Fixture, 1070.0, 260.0, 100.0, 100.0),
    Landmark::new("Pool Table 3", LandmarkKind::Fixture, 1070.0, 360.0, 100.0, 100.0),
    Landmark::new("Air Hockey Table", LandmarkKind::Fixture, 1090.0, 490.0, 80.0, 100.0),
    Landmark::new("Darts", LandmarkKind::Fixture, 1180.0, 60.0, 80.0, 80.0),
];

const OUTDOOR_LANDMARKS: [Landmark; 3] = [
    Landmark::new("Plants & Greenery", LandmarkKind::Greenery, 40.0, 40.0, 450.0, 30.0),
    Landmark::new("Plants & Greenery", LandmarkKind::Greenery, 40.0, 850.0, 450.0, 30.0),
    Landmark::new("Garden Entrance", LandmarkKind::Doorway, 250.0, 380.0, 60.0, 30.0),
];

#[must_use]
pub fn landmarks(location: Location) -> &'static [Landmark] {
    match location {
        Location::Indoor => &INDOOR_LANDMARKS,
        Location::Outdoor => &OUTDOOR_LANDMARKS,
    }
}

// =============================================================================
// PLAN
// =============================================================================

/// Every table in the bar, generated once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    tables: Vec<Table>,
}

impl SeatingPlan {
    /// Draw availability for every table from `rng`, indoor tables first.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let tables = indoor_specs()
            .into_iter()
            .chain(outdoor_specs())
            .map(|spec| spec.build(rng))
            .collect();
        Self { tables }
    }

    /// Deterministic plan for a given seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(&mut SmallRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn all(&self) -> &[Table] {
        &self.tables
    }

    pub fn at(&self, location: Location) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(move |t| t.location == location)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// (available, total) for a location.
    #[must_use]
    pub fn availability(&self, location: Location) -> (usize, usize) {
        self.at(location).fold((0, 0), |(free, total), t| {
            (free + usize::from(t.is_available), total + 1)
        })
    }
}
