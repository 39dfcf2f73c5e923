//! Shared geometry for the SVG charts on the stats page.
//!
//! Every chart draws into a fixed `viewBox` and lets CSS scale it, so all
//! coordinates here are in viewBox units.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{PI, TAU};

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 240.0;
pub const AXIS_TICKS: usize = 4;

/// Plot area inside the viewBox, after axis padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of `value` on an axis running from 0 to `max`.
    #[must_use]
    pub fn y_of(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - (value / max).clamp(0.0, 1.0) * self.height
    }
}

/// Default plot area with room for a left axis and bottom labels.
#[must_use]
pub fn plot_area() -> PlotArea {
    PlotArea { left: 48.0, top: 12.0, width: VIEW_WIDTH - 60.0, height: VIEW_HEIGHT - 44.0 }
}

/// Round `max` up to 1, 2, 2.5 or 5 times a power of ten so axis ticks land on tidy values.
#[must_use]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| fraction <= *step + f64::EPSILON)
        .unwrap_or(10.0);
    nice * magnitude
}

/// Evenly spaced tick values from 0 to `max` inclusive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    let step = max / count as f64;
    (0..=count).map(|i| step * i as f64).collect()
}

/// Short axis label: `35000` -> `35k`, `1500` -> `1.5k`, `95` -> `95`.
#[must_use]
pub fn compact_label(value: f64) -> String {
    if value.abs() >= 1000.0 {
        let thousands = value / 1000.0;
        if (thousands - thousands.round()).abs() < 1e-9 {
            format!("{thousands:.0}k")
        } else {
            format!("{thousands:.1}k")
        }
    } else {
        format!("{value:.0}")
    }
}

/// Centre x of each of `count` points spread across the plot width.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn point_xs(area: &PlotArea, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![area.left + area.width / 2.0],
        _ => {
            let step = area.width / (count - 1) as f64;
            (0..count).map(|i| area.left + step * i as f64).collect()
        }
    }
}

/// Polyline points for `values` against an axis from 0 to `max`.
#[must_use]
pub fn line_points(area: &PlotArea, values: &[f64], max: f64) -> Vec<(f64, f64)> {
    point_xs(area, values.len())
        .into_iter()
        .zip(values)
        .map(|(x, v)| (x, area.y_of(*v, max)))
        .collect()
}

/// SVG path `d` through `points`.
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1} {y:.1}", if i == 0 { "M" } else { " L" }))
        .collect()
}

/// Closed SVG path filling the region between `points` and the plot baseline.
#[must_use]
pub fn area_path(area: &PlotArea, points: &[(f64, f64)]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.1} {:.1} L{:.1} {:.1} Z",
        line_path(points),
        last.0,
        area.bottom(),
        first.0,
        area.bottom()
    )
}

/// One bar rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal band for category `index` of `count`, returned as (left, width).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn band(area: &PlotArea, index: usize, count: usize) -> (f64, f64) {
    let width = area.width / count.max(1) as f64;
    (area.left + width * index as f64, width)
}

/// Bars for a grouped column chart: `series[s][i]` is series `s` at category `i`.
///
/// Each category band keeps 20% padding; series share the rest side by side.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn grouped_bars(area: &PlotArea, series: &[Vec<f64>], max: f64) -> Vec<Vec<BarRect>> {
    let categories = series.iter().map(Vec::len).max().unwrap_or(0);
    let per_series = series.len().max(1) as f64;
    series
        .iter()
        .enumerate()
        .map(|(s, values)| {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let (left, width) = band(area, i, categories);
                    let inner = width * 0.8;
                    let bar_width = inner / per_series;
                    let y = area.y_of(*v, max);
                    let x = left + width * 0.1 + bar_width * s as f64;
                    BarRect { x, y, width: bar_width, height: area.bottom() - y }
                })
                .collect()
        })
        .collect()
}

/// Bars for a horizontal bar chart, one row per value, growing right from the plot's left edge.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn horizontal_bars(area: &PlotArea, values: &[f64], max: f64) -> Vec<BarRect> {
    let row = area.height / values.len().max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let fraction = if max > 0.0 { (v / max).clamp(0.0, 1.0) } else { 0.0 };
            let y = area.top + row * i as f64 + row * 0.15;
            BarRect { x: area.left, y, width: area.width * fraction, height: row * 0.7 }
        })
        .collect()
}

/// One pie or donut wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub path: String,
    /// Share of the total, 0..=100.
    pub percent: f64,
    /// Anchor for the value label, just outside the outer radius.
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Pie (`inner == 0`) or donut slices for `values`, clockwise from 12 o'clock.
///
/// `pad_deg` is the gap left between neighbouring wedges.
#[must_use]
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, inner: f64, outer: f64, pad_deg: f64) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let pad = pad_deg.to_radians();
    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|v| {
            let value = v.max(0.0);
            let sweep = value / total * TAU;
            let (a0, a1) = if sweep > pad { (start + pad / 2.0, start + sweep - pad / 2.0) } else { (start, start + sweep) };
            let mid = start + sweep / 2.0;
            start += sweep;
            let (label_x, label_y) = polar(cx, cy, outer + 14.0, mid);
            Slice { path: wedge_path(cx, cy, inner, outer, a0, a1), percent: value / total * 100.0, label_x, label_y }
        })
        .collect()
}

fn wedge_path(cx: f64, cy: f64, inner: f64, outer: f64, a0: f64, a1: f64) -> String {
    let large = u8::from(a1 - a0 > PI);
    let (ox0, oy0) = polar(cx, cy, outer, a0);
    let (ox1, oy1) = polar(cx, cy, outer, a1);
    if inner <= 0.0 {
        return format!(
            "M{cx:.1} {cy:.1} L{ox0:.1} {oy0:.1} A{outer:.1} {outer:.1} 0 {large} 1 {ox1:.1} {oy1:.1} Z"
        );
    }
    let (ix1, iy1) = polar(cx, cy, inner, a1);
    let (ix0, iy0) = polar(cx, cy, inner, a0);
    format!(
        "M{ox0:.1} {oy0:.1} A{outer:.1} {outer:.1} 0 {large} 1 {ox1:.1} {oy1:.1} L{ix1:.1} {iy1:.1} A{inner:.1} {inner:.1} 0 {large} 0 {ix0:.1} {iy0:.1} Z"
    )
}

/// Turn per-category rows into per-series columns for [`grouped_bars`].
#[must_use]
pub fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|s| rows.iter().map(|row| row.get(s).copied().unwrap_or(0.0)).collect())
        .collect()
}
