//! Derivation of the running-total chart series from a set of entries.
//!
//! This is a pure transform: the full entry set goes in, the full series
//! comes out, recomputed from scratch on every change. Input order is
//! irrelevant; entries are grouped by calendar date and the dates walked
//! in ascending order.

use shared::{DailyPoint, Entry};
use std::collections::BTreeMap;

/// Derive the per-date series for a chart: one point per distinct date,
/// ascending, each carrying the daily sum, the running total, and the
/// running total split into its positive and negative parts for area
/// shading above and below zero.
pub fn derive_series(entries: &[Entry]) -> Vec<DailyPoint> {
    // BTreeMap keeps the dates in calendar order
    let mut daily_sums: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for entry in entries {
        *daily_sums.entry(entry.date).or_insert(0.0) += entry.amount;
    }

    let mut series = Vec::with_capacity(daily_sums.len());
    let mut running_total = 0.0;
    for (date, daily_amount) in daily_sums {
        running_total += daily_amount;
        series.push(DailyPoint {
            date,
            daily_amount,
            running_total,
            positive_part: running_total.max(0.0),
            negative_part: running_total.min(0.0),
        });
    }
    series
}

/// The scalar the header displays: the last running total, 0 when there are
/// no entries. Always equals the sum of every entry amount.
pub fn current_total(series: &[DailyPoint]) -> f64 {
    series.last().map_or(0.0, |point| point.running_total)
}
