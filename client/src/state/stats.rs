//! Demonstration datasets for the stats dashboard.
//!
//! DESIGN
//! ======
//! The dashboard is a showcase: every figure here is fixed sample data and
//! nothing is fetched. Keeping the series as plain functions lets chart
//! components stay generic over labels and values.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Labelled series point.
pub type Point = (&'static str, f64);

pub const DEMO_NOTICE: &str = "This page displays demonstration data for visualization purposes. \
                               Connect to a real database for actual statistics.";

const HOURS: [&str; 15] = [
    "12pm", "1pm", "2pm", "3pm", "4pm", "5pm", "6pm", "7pm", "8pm", "9pm", "10pm", "11pm", "12am", "1am", "2am",
];

fn label_values(labels: &[&'static str], values: &[f64]) -> Vec<Point> {
    labels.iter().copied().zip(values.iter().copied()).collect()
}

// =============================================================================
// SALES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SalesPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl SalesPeriod {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    #[must_use]
    pub fn data(self) -> Vec<Point> {
        match self {
            Self::Daily => label_values(
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &[1200.0, 900.0, 1500.0, 1800.0, 2500.0, 3000.0, 2200.0],
            ),
            Self::Weekly => label_values(
                &["Week 1", "Week 2", "Week 3", "Week 4"],
                &[8500.0, 9200.0, 10500.0, 11800.0],
            ),
            Self::Monthly => label_values(
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                &[35000.0, 32000.0, 38000.0, 40000.0, 42000.0, 45000.0],
            ),
        }
    }
}

// =============================================================================
// TOP ITEMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Stable => "→",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "trend trend-up",
            Self::Down => "trend trend-down",
            Self::Stable => "trend trend-stable",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopItem {
    pub name: &'static str,
    pub category: &'static str,
    pub sales: u32,
    pub trend: Trend,
}

/// Rows shown on the top-sellers card.
pub const TOP_ITEMS_SHOWN: usize = 5;

#[must_use]
pub fn top_items() -> Vec<TopItem> {
    let row = |name, category, sales, trend| TopItem { name, category, sales, trend };
    vec![
        row("Black and Gold Rum Punch", "Cocktails", 156, Trend::Up),
        row("Amstel", "Drinks", 142, Trend::Stable),
        row("Margherita Pizza", "Pizza", 128, Trend::Up),
        row("Southern Fried Chicken Burger", "Burgers", 115, Trend::Up),
        row("Tequila Rose", "Shots", 98, Trend::Down),
        row("Loaded Fries", "Loaded Fries", 87, Trend::Stable),
        row("Fanta-sy Island Punch", "Cocktails", 76, Trend::Up),
        row("Cheese Nachos", "Sharers & Sides", 72, Trend::Stable),
    ]
}

// =============================================================================
// BREAKDOWNS
// =============================================================================

#[must_use]
pub fn category_breakdown() -> Vec<Point> {
    label_values(
        &["Cocktails", "Beers", "Spirits", "Food", "Coffee"],
        &[35.0, 28.0, 20.0, 12.0, 5.0],
    )
}

#[must_use]
pub fn drink_types() -> Vec<Point> {
    label_values(
        &["Draught Beer", "Bottled Beer", "Cocktails", "Spirits", "Wine", "Soft Drinks"],
        &[40.0, 15.0, 25.0, 10.0, 5.0, 5.0],
    )
}

#[must_use]
pub fn customer_ages() -> Vec<Point> {
    label_values(&["18-24", "25-34", "35-44", "45-54", "55+"], &[35.0, 40.0, 15.0, 7.0, 3.0])
}

#[must_use]
pub fn hourly_traffic() -> Vec<Point> {
    label_values(
        &HOURS,
        &[15.0, 20.0, 25.0, 30.0, 40.0, 55.0, 70.0, 85.0, 95.0, 100.0, 90.0, 75.0, 60.0, 40.0, 20.0],
    )
}

#[must_use]
pub fn hourly_revenue() -> Vec<Point> {
    label_values(
        &HOURS,
        &[
            300.0, 400.0, 500.0, 600.0, 800.0, 1100.0, 1400.0, 1700.0, 1900.0, 2000.0, 1800.0, 1500.0, 1200.0, 800.0,
            400.0,
        ],
    )
}

// =============================================================================
// GROUPED SERIES
// =============================================================================

/// Categories along the x axis with one value per named series.
#[derive(Clone, Debug, PartialEq)]
pub struct Grouped {
    pub series: Vec<&'static str>,
    pub rows: Vec<(&'static str, Vec<f64>)>,
}

impl Grouped {
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|(label, _)| *label).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|(_, v)| v.clone()).collect()
    }
}

#[must_use]
pub fn weekly_performance() -> Grouped {
    Grouped {
        series: vec!["Sales (£)", "Customers"],
        rows: vec![
            ("Mon", vec![2500.0, 120.0]),
            ("Tue", vec![3000.0, 150.0]),
            ("Wed", vec![3500.0, 180.0]),
            ("Thu", vec![4500.0, 220.0]),
            ("Fri", vec![6500.0, 350.0]),
            ("Sat", vec![7500.0, 400.0]),
            ("Sun", vec![5000.0, 250.0]),
        ],
    }
}

#[must_use]
pub fn food_vs_drinks() -> Grouped {
    Grouped {
        series: vec!["Food", "Drinks"],
        rows: vec![
            ("Jan", vec![12000.0, 23000.0]),
            ("Feb", vec![11000.0, 21000.0]),
            ("Mar", vec![13000.0, 25000.0]),
            ("Apr", vec![14000.0, 26000.0]),
            ("May", vec![15000.0, 27000.0]),
            ("Jun", vec![16000.0, 29000.0]),
        ],
    }
}

#[must_use]
pub fn promotion_impact() -> Grouped {
    Grouped {
        series: vec!["Before", "During", "After"],
        rows: vec![
            ("2-for-1 Cocktails", vec![100.0, 250.0, 150.0]),
            ("Happy Hour", vec![120.0, 300.0, 180.0]),
            ("Student Night", vec![80.0, 220.0, 120.0]),
            ("Live Music", vec![150.0, 350.0, 200.0]),
        ],
    }
}

// =============================================================================
// STAFF
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct StaffMember {
    pub name: &'static str,
    pub role: &'static str,
    pub metric: &'static str,
    pub value: f64,
}

#[must_use]
pub fn staff_leaderboard() -> Vec<StaffMember> {
    let row = |name, role, metric, value| StaffMember { name, role, metric, value };
    vec![
        row("Alex Johnson", "Bartender", "Most Cocktails Made", 342.0),
        row("Sam Taylor", "Bartender", "Fastest Service", 1.5),
        row("Jamie Smith", "Server", "Most Orders Taken", 456.0),
        row("Casey Wilson", "Bartender", "Best Customer Ratings", 4.9),
        row("Riley Brown", "Server", "Most Upsells", 78.0),
    ]
}

/// Display a leaderboard value with the unit its metric implies.
#[must_use]
pub fn format_value(metric: &str, value: f64) -> String {
    if metric.contains("Fastest") {
        format!("{value} min")
    } else if metric.contains("Ratings") {
        format!("{value}/5")
    } else {
        value.to_string()
    }
}

/// Avatar initials: first letter of each word.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).collect()
}

/// Largest value of a series, used as the chart's y-axis ceiling input.
#[must_use]
pub fn series_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}
