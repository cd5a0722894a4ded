use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid handicap range, inclusive on both ends.
pub const HANDICAP_RANGE: RangeInclusive<f64> = -54.0..=54.0;

/// Whether `handicap` falls inside [`HANDICAP_RANGE`]. Setup screens use this;
/// the engine itself accepts any value.
pub fn is_valid_handicap(handicap: f64) -> bool {
    HANDICAP_RANGE.contains(&handicap)
}

/// A player in a Nines game.
///
/// `scores[i]` and `points[i]` belong to hole `i + 1`. `total_points` is
/// derived from `points` and must only be changed through
/// [`Player::recompute_total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<f64>,
    #[serde(default)]
    pub scores: Vec<u32>,
    #[serde(default)]
    pub points: Vec<u8>,
    #[serde(default)]
    pub total_points: u32,
}

impl Player {
    /// Create a player for the given 1-based seat with no history.
    ///
    /// A blank `name` (empty or whitespace) becomes `"Player N"`.
    pub fn new(seat: usize, name: &str, handicap: Option<f64>) -> Self {
        let name = if name.trim().is_empty() {
            format!("Player {seat}")
        } else {
            name.to_string()
        };
        Self {
            id: format!("player-{seat}"),
            name,
            handicap,
            scores: Vec::new(),
            points: Vec::new(),
            total_points: 0,
        }
    }

    /// Resum `total_points` from the full `points` history.
    pub fn recompute_total(&mut self) {
        self.total_points = self.points.iter().map(|&p| u32::from(p)).sum();
    }
}
