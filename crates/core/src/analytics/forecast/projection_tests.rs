//! Unit tests for cash-flow projection.

use super::*;
use crate::analytics::aggregation::MonthlyCashFlow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn bucket(year: i32, m: u32, income: Decimal, expenses: Decimal) -> MonthlyCashFlow {
    MonthlyCashFlow {
        month: month(year, m),
        income,
        expenses,
    }
}

#[test]
fn test_projects_last_difference_forward() {
    let series = vec![
        bucket(2024, 1, dec!(100), dec!(80)),
        bucket(2024, 2, dec!(150), dec!(90)),
    ];

    let projected = project_cash_flow(&series, 1);

    assert_eq!(projected.len(), 3);
    assert_eq!(projected[2].month, month(2024, 3));
    // 150 + (150 - 100) * 1
    assert_eq!(projected[2].income, dec!(200));
    // 90 + (90 - 80) * 1
    assert_eq!(projected[2].expenses, dec!(100));
}

#[test]
fn test_slope_scales_with_step_index() {
    let series = vec![
        bucket(2024, 1, dec!(100), dec!(0)),
        bucket(2024, 2, dec!(150), dec!(0)),
    ];

    let projected = project_cash_flow(&series, 3);

    assert_eq!(projected.len(), 5);
    assert_eq!(projected[2].income, dec!(200));
    assert_eq!(projected[3].income, dec!(250));
    assert_eq!(projected[4].income, dec!(300));
}

#[test]
fn test_only_last_two_buckets_set_the_slope() {
    // The early spike is ignored; only Feb -> Mar matters.
    let series = vec![
        bucket(2024, 1, dec!(9000), dec!(0)),
        bucket(2024, 2, dec!(100), dec!(0)),
        bucket(2024, 3, dec!(110), dec!(0)),
    ];

    let projected = project_cash_flow(&series, 1);

    assert_eq!(projected[3].income, dec!(120));
}

#[test]
fn test_declining_trend_floors_at_zero() {
    let series = vec![
        bucket(2024, 1, dec!(100), dec!(100)),
        bucket(2024, 2, dec!(40), dec!(40)),
    ];

    let projected = project_cash_flow(&series, 2);

    // 40 - 60 = -20, floored.
    assert_eq!(projected[2].income, dec!(0));
    assert_eq!(projected[2].expenses, dec!(0));
    assert_eq!(projected[3].income, dec!(0));
}

#[test]
fn test_month_labels_roll_over_the_year() {
    let series = vec![
        bucket(2024, 11, dec!(10), dec!(0)),
        bucket(2024, 12, dec!(20), dec!(0)),
    ];

    let projected = project_cash_flow(&series, 3);

    assert_eq!(projected[2].month, month(2025, 1));
    assert_eq!(projected[3].month, month(2025, 2));
    assert_eq!(projected[4].month, month(2025, 3));
}

#[test]
fn test_single_bucket_returns_history_unchanged() {
    let series = vec![bucket(2024, 1, dec!(100), dec!(80))];

    let projected = project_cash_flow(&series, 3);

    assert_eq!(projected, series);
}

#[test]
fn test_empty_series_returns_empty() {
    assert!(project_cash_flow(&[], 3).is_empty());
}

#[test]
fn test_zero_horizon_returns_history_only() {
    let series = vec![
        bucket(2024, 1, dec!(100), dec!(80)),
        bucket(2024, 2, dec!(150), dec!(90)),
    ];

    assert_eq!(project_cash_flow(&series, 0), series);
}
