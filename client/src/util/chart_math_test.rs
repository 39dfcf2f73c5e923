use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn nice_ceiling_rounds_up_to_tidy_steps() {
    assert_eq!(nice_ceiling(95.0), 100.0);
    assert_eq!(nice_ceiling(3000.0), 5000.0);
    assert_eq!(nice_ceiling(42_000.0), 50_000.0);
    assert_eq!(nice_ceiling(2.2), 2.5);
    assert_eq!(nice_ceiling(0.0), 1.0);
    assert_eq!(nice_ceiling(f64::NAN), 1.0);
}

#[test]
fn ticks_include_both_ends() {
    assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(ticks(10.0, 0), vec![0.0, 10.0]);
}

#[test]
fn compact_labels() {
    assert_eq!(compact_label(35_000.0), "35k");
    assert_eq!(compact_label(1500.0), "1.5k");
    assert_eq!(compact_label(95.0), "95");
    assert_eq!(compact_label(0.0), "0");
}

#[test]
fn y_of_clamps_to_plot() {
    let area = plot_area();
    assert!(close(area.y_of(0.0, 100.0), area.bottom()));
    assert!(close(area.y_of(100.0, 100.0), area.top));
    assert!(close(area.y_of(250.0, 100.0), area.top));
    assert!(close(area.y_of(10.0, 0.0), area.bottom()));
}

#[test]
fn line_points_span_plot_width() {
    let area = plot_area();
    let points = line_points(&area, &[0.0, 50.0, 100.0], 100.0);
    assert_eq!(points.len(), 3);
    assert!(close(points[0].0, area.left));
    assert!(close(points[2].0, area.right()));
    assert!(close(points[1].1, area.top + area.height / 2.0));
    assert_eq!(point_xs(&area, 1), vec![area.left + area.width / 2.0]);
}

#[test]
fn paths_start_with_move_and_area_closes() {
    let area = plot_area();
    let points = vec![(10.0, 20.0), (30.0, 40.0)];
    assert_eq!(line_path(&points), "M10.0 20.0 L30.0 40.0");
    let filled = area_path(&area, &points);
    assert!(filled.starts_with("M10.0 20.0 L30.0 40.0 L30.0"));
    assert!(filled.ends_with('Z'));
    assert_eq!(area_path(&area, &[]), "");
}

#[test]
fn grouped_bars_share_each_band() {
    let area = plot_area();
    let bars = grouped_bars(&area, &[vec![50.0, 100.0], vec![25.0, 0.0]], 100.0);
    assert_eq!(bars.len(), 2);
    let (left, width) = band(&area, 0, 2);
    assert!(close(bars[0][0].x, left + width * 0.1));
    assert!(close(bars[1][0].x, bars[0][0].x + bars[0][0].width));
    assert!(close(bars[0][1].height, area.height));
    assert!(close(bars[1][1].height, 0.0));
}

#[test]
fn horizontal_bars_scale_with_value() {
    let area = plot_area();
    let bars = horizontal_bars(&area, &[40.0, 20.0], 40.0);
    assert!(close(bars[0].width, area.width));
    assert!(close(bars[1].width, area.width / 2.0));
    assert!(bars[1].y > bars[0].y);
}

#[test]
fn pie_slices_split_by_share() {
    let slices = pie_slices(&[50.0, 50.0], 100.0, 100.0, 0.0, 80.0, 0.0);
    assert_eq!(slices.len(), 2);
    assert!(close(slices[0].percent, 50.0));
    assert!(slices[0].path.starts_with("M100.0 100.0 L100.0 20.0"));
    assert!(close(slices[0].label_x, 194.0));
    assert!(close(slices[0].label_y, 100.0));
}

#[test]
fn donut_slices_have_inner_arc() {
    let slices = pie_slices(&[35.0, 28.0, 20.0, 12.0, 5.0], 100.0, 100.0, 60.0, 80.0, 5.0);
    assert_eq!(slices.len(), 5);
    assert!(slices.iter().all(|s| s.path.contains("A60.0 60.0")));
    let total: f64 = slices.iter().map(|s| s.percent).sum();
    assert!(close(total, 100.0));
}

#[test]
fn empty_or_zero_pie_has_no_slices() {
    assert!(pie_slices(&[], 0.0, 0.0, 0.0, 10.0, 0.0).is_empty());
    assert!(pie_slices(&[0.0, 0.0], 0.0, 0.0, 0.0, 10.0, 0.0).is_empty());
}

#[test]
fn transpose_turns_rows_into_series() {
    let rows = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0]];
    assert_eq!(transpose(&rows), vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 0.0]]);
    assert!(transpose(&[]).is_empty());
}
