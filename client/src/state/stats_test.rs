use super::*;

#[test]
fn sales_periods_have_expected_lengths() {
    let lens: Vec<usize> = SalesPeriod::ALL.iter().map(|p| p.data().len()).collect();
    assert_eq!(lens, vec![7, 4, 6]);
    assert_eq!(SalesPeriod::default().label(), "Daily");
    assert_eq!(SalesPeriod::Monthly.data()[5], ("Jun", 45000.0));
}

#[test]
fn top_items_are_sorted_by_sales() {
    let items = top_items();
    assert_eq!(items.len(), 8);
    assert!(items.windows(2).all(|w| w[0].sales >= w[1].sales));
    assert_eq!(items[4].trend.arrow(), "↓");
    assert_eq!(Trend::Stable.class(), "trend trend-stable");
}

#[test]
fn percentage_breakdowns_sum_to_hundred() {
    for series in [category_breakdown(), drink_types(), customer_ages()] {
        let total: f64 = series.iter().map(|(_, v)| v).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }
}

#[test]
fn hourly_series_span_noon_to_two_am() {
    for series in [hourly_traffic(), hourly_revenue()] {
        assert_eq!(series.len(), 15);
        assert_eq!(series[0].0, "12pm");
        assert_eq!(series[14].0, "2am");
    }
}

#[test]
fn grouped_rows_match_series_count() {
    for grouped in [weekly_performance(), food_vs_drinks(), promotion_impact()] {
        assert!(grouped.rows.iter().all(|(_, v)| v.len() == grouped.series.len()));
        assert_eq!(grouped.labels().len(), grouped.values().len());
    }
}

#[test]
fn leaderboard_values_carry_units() {
    assert_eq!(format_value("Fastest Service", 1.5), "1.5 min");
    assert_eq!(format_value("Best Customer Ratings", 4.9), "4.9/5");
    assert_eq!(format_value("Most Upsells", 78.0), "78");
}

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("Alex Johnson"), "AJ");
    assert_eq!(initials("  Riley   Brown "), "RB");
    assert_eq!(initials(""), "");
}

#[test]
fn series_max_of_empty_is_zero() {
    assert!(series_max(Vec::new()).abs() < f64::EPSILON);
    assert!((series_max(hourly_traffic().into_iter().map(|(_, v)| v)) - 100.0).abs() < f64::EPSILON);
}
