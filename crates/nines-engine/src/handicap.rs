//! Net scores from a player's handicap.
//!
//! The per-hole and whole-round calculations are independent. A hole
//! subtracts `handicap / holes` rounded to the nearest stroke (halves round
//! away from zero), while the round total subtracts the unrounded handicap
//! once. Summing per-hole net scores therefore does not in general equal the
//! round total.

use nines_core::game::HoleCount;

/// Whole strokes given back on a single hole.
pub fn strokes_per_hole(handicap: f64, hole_count: HoleCount) -> i64 {
    (handicap / f64::from(hole_count.get())).round() as i64
}

/// Net score for one hole, or `None` without a handicap.
pub fn net_score(gross_score: u32, handicap: Option<f64>, hole_count: HoleCount) -> Option<i64> {
    let handicap = handicap?;
    Some(i64::from(gross_score) - strokes_per_hole(handicap, hole_count))
}

/// Net score for a round: total gross minus the full handicap, or `None`
/// without a handicap. Fractional handicaps give fractional results.
pub fn total_net_score(gross_scores: &[u32], handicap: Option<f64>) -> Option<f64> {
    let handicap = handicap?;
    let gross: u64 = gross_scores.iter().map(|&s| u64::from(s)).sum();
    Some(gross as f64 - handicap)
}
