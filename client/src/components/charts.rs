//! SVG charts for the stats dashboard.
//!
//! Geometry comes from `util::chart_math`; these components only emit SVG
//! elements. Every chart uses the same viewBox and scales with its card.

use leptos::prelude::*;

use crate::util::chart_math::{
    AXIS_TICKS, PlotArea, VIEW_HEIGHT, VIEW_WIDTH, area_path, band, compact_label, grouped_bars, horizontal_bars,
    line_path, line_points, nice_ceiling, pie_slices, plot_area, point_xs, ticks, transpose,
};
use crate::util::palette::color_at;

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
    nice_ceiling(values.into_iter().fold(0.0, f64::max))
}

/// Horizontal gridlines with value labels on the left edge.
fn y_axis(area: PlotArea, max: f64) -> impl IntoView {
    ticks(max, AXIS_TICKS)
        .into_iter()
        .map(|tick| {
            let y = area.y_of(tick, max);
            view! {
                <g class="chart__tick">
                    <line x1=area.left x2={area.right()} y1=y y2=y class="chart__grid" />
                    <text x={area.left - 6.0} y={y + 3.0} text-anchor="end" class="chart__label">
                        {compact_label(tick)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

fn x_labels(area: PlotArea, labels: Vec<&'static str>, xs: Vec<f64>) -> impl IntoView {
    labels
        .into_iter()
        .zip(xs)
        .map(|(label, x)| {
            view! {
                <text x=x y={area.bottom() + 16.0} text-anchor="middle" class="chart__label">
                    {label}
                </text>
            }
        })
        .collect_view()
}

fn band_centres(area: &PlotArea, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let (left, width) = band(area, i, count);
            left + width / 2.0
        })
        .collect()
}

/// Line chart, optionally filled down to the baseline.
#[component]
pub fn LineChart(
    #[prop(into)] points: Signal<Vec<(&'static str, f64)>>,
    color: &'static str,
    #[prop(optional)] filled: bool,
) -> impl IntoView {
    let area = plot_area();
    move || {
        let (labels, values): (Vec<&'static str>, Vec<f64>) = points.get().into_iter().unzip();
        let max = max_of(values.iter().copied());
        let coords = line_points(&area, &values, max);
        let xs = point_xs(&area, values.len());
        let fill = filled.then(|| {
            view! { <path d={area_path(&area, &coords)} fill=color fill-opacity="0.2" stroke="none" /> }
        });
        view! {
            <svg class="chart" viewBox={view_box()} role="img">
                {y_axis(area, max)}
                {fill}
                <path d={line_path(&coords)} fill="none" stroke=color stroke-width="2.5" />
                {coords
                    .iter()
                    .map(|(x, y)| view! { <circle cx={*x} cy={*y} r="3" fill=color /> })
                    .collect_view()}
                {x_labels(area, labels, xs)}
            </svg>
        }
    }
}

/// Column chart with one bar per series inside each category band.
#[component]
pub fn GroupedBarChart(
    labels: Vec<&'static str>,
    series: Vec<&'static str>,
    /// One row per label, one value per series.
    rows: Vec<Vec<f64>>,
) -> impl IntoView {
    let area = plot_area();
    let max = max_of(rows.iter().flatten().copied());
    let bars = grouped_bars(&area, &transpose(&rows), max);
    let xs = band_centres(&area, labels.len());

    view! {
        <div class="chart-wrap">
            <svg class="chart" viewBox={view_box()} role="img">
                {y_axis(area, max)}
                {bars
                    .into_iter()
                    .enumerate()
                    .map(|(s, column)| {
                        column
                            .into_iter()
                            .map(|bar| {
                                view! {
                                    <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="2" fill={color_at(s)} />
                                }
                            })
                            .collect_view()
                    })
                    .collect_view()}
                {x_labels(area, labels, xs)}
            </svg>
            <ChartLegend labels=series />
        </div>
    }
}

/// One bar per row, labelled on the left and growing right.
#[component]
pub fn HorizontalBarChart(points: Vec<(&'static str, f64)>) -> impl IntoView {
    let area = PlotArea { left: 64.0, ..plot_area() };
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let max = max_of(values.iter().copied());
    let bars = horizontal_bars(&area, &values, max);

    view! {
        <svg class="chart" viewBox={view_box()} role="img">
            {points
                .into_iter()
                .zip(bars)
                .enumerate()
                .map(|(i, ((label, value), bar))| {
                    let mid = bar.y + bar.height / 2.0;
                    view! {
                        <g>
                            <text x={area.left - 6.0} y={mid + 3.0} text-anchor="end" class="chart__label">
                                {label}
                            </text>
                            <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="2" fill={color_at(i)} />
                            <text x={bar.x + bar.width + 4.0} y={mid + 3.0} class="chart__label">
                                {format!("{value}%")}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Pie, or donut when `inner` is non-zero, with a legend.
#[component]
pub fn PieChart(points: Vec<(&'static str, f64)>, #[prop(optional)] inner: f64) -> impl IntoView {
    const OUTER: f64 = 80.0;
    const PAD_DEG: f64 = 5.0;
    let (cx, cy) = (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    let (labels, values): (Vec<&'static str>, Vec<f64>) = points.into_iter().unzip();
    let pad = if inner > 0.0 { PAD_DEG } else { 0.0 };
    let slices = pie_slices(&values, cx, cy, inner, OUTER, pad);

    view! {
        <div class="chart-wrap">
            <svg class="chart" viewBox={view_box()} role="img">
                {slices
                    .into_iter()
                    .enumerate()
                    .map(|(i, slice)| {
                        view! {
                            <g>
                                <path d=slice.path fill={color_at(i)} />
                                <text x=slice.label_x y=slice.label_y text-anchor="middle" class="chart__label">
                                    {format!("{:.0}%", slice.percent)}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
            <ChartLegend labels=labels />
        </div>
    }
}

#[component]
fn ChartLegend(labels: Vec<&'static str>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <li class="chart-legend__item">
                            <span class="chart-legend__swatch" style={format!("background: {}", color_at(i))}></span>
                            {label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
