//! Brand colours used by charts and inline styles.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

pub const TEAL: &str = "#1AB5AD";
pub const DARK_TEAL: &str = "#0A4A47";
pub const CORAL: &str = "#E85642";

/// Series colours, cycled for charts with more entries than colours.
pub const COLORS: [&str; 6] = [TEAL, DARK_TEAL, CORAL, "#F4A261", "#2A9D8F", "#264653"];

#[must_use]
pub fn color_at(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}
