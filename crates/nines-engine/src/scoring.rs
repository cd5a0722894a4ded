//! Points allocation for a single hole.
//!
//! Every hole hands out exactly nine points. Scores are ranked lowest-first,
//! the equality shape of the ranked scores is classified into a tie pattern,
//! and the pattern selects a fixed award row.

use nines_core::NinesError;
use nines_core::game::PlayerCount;

/// Tie shape of three ranked scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeWayPattern {
    AllTie,
    /// Best two share the low score.
    FirstTwoTie,
    /// Worst two share the high score.
    LastTwoTie,
    NoTie,
}

/// Tie shape of four ranked scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourWayPattern {
    AllTie,
    FirstThreeTie,
    LastThreeTie,
    FirstTwoTie,
    MiddleTwoTie,
    LastTwoTie,
    NoTie,
}

/// Tie pattern of a hole, resolved before any points are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePattern {
    Three(ThreeWayPattern),
    Four(FourWayPattern),
}

impl ThreeWayPattern {
    /// Classify ranked scores (ascending). Wider ties are checked first.
    pub fn classify(ranked: [u32; 3]) -> Self {
        let [first, second, third] = ranked;
        if first == second && second == third {
            Self::AllTie
        } else if first == second {
            Self::FirstTwoTie
        } else if second == third {
            Self::LastTwoTie
        } else {
            Self::NoTie
        }
    }

    /// Awards by rank, best first.
    pub fn awards(self) -> [u8; 3] {
        match self {
            Self::AllTie => [3, 3, 3],
            Self::FirstTwoTie => [4, 4, 1],
            Self::LastTwoTie => [5, 2, 2],
            Self::NoTie => [5, 3, 1],
        }
    }
}

impl FourWayPattern {
    /// Classify ranked scores (ascending). Three-way ties are checked before
    /// the two-way ties they contain.
    pub fn classify(ranked: [u32; 4]) -> Self {
        let [first, second, third, fourth] = ranked;
        if first == second && second == third && third == fourth {
            Self::AllTie
        } else if first == second && second == third {
            Self::FirstThreeTie
        } else if second == third && third == fourth {
            Self::LastThreeTie
        } else if first == second {
            Self::FirstTwoTie
        } else if second == third {
            Self::MiddleTwoTie
        } else if third == fourth {
            Self::LastTwoTie
        } else {
            Self::NoTie
        }
    }

    /// Awards by rank, best first.
    pub fn awards(self) -> [u8; 4] {
        match self {
            Self::AllTie => [2, 2, 2, 3],
            Self::FirstThreeTie => [3, 3, 3, 0],
            Self::LastThreeTie => [4, 2, 2, 1],
            Self::FirstTwoTie => [3, 3, 2, 1],
            Self::MiddleTwoTie => [4, 3, 2, 0],
            Self::LastTwoTie => [4, 3, 1, 1],
            Self::NoTie => [4, 3, 2, 0],
        }
    }
}

impl TiePattern {
    /// Classify scores that are already sorted ascending.
    ///
    /// Returns `None` if the slice length does not match `player_count`.
    pub fn classify(ranked: &[u32], player_count: PlayerCount) -> Option<Self> {
        match player_count {
            PlayerCount::Three => <[u32; 3]>::try_from(ranked)
                .ok()
                .map(|r| Self::Three(ThreeWayPattern::classify(r))),
            PlayerCount::Four => <[u32; 4]>::try_from(ranked)
                .ok()
                .map(|r| Self::Four(FourWayPattern::classify(r))),
        }
    }

    /// Awards by rank, best first.
    pub fn awards(self) -> Vec<u8> {
        match self {
            Self::Three(p) => p.awards().to_vec(),
            Self::Four(p) => p.awards().to_vec(),
        }
    }
}

/// Scores paired with their seat index, stable-sorted best (lowest) first.
pub(crate) fn rank(scores: &[u32]) -> Vec<(usize, u32)> {
    let mut ranked: Vec<(usize, u32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by_key(|&(_, score)| score);
    ranked
}

/// Tie pattern for one hole's scores in seat order.
pub fn tie_pattern(scores: &[u32], player_count: PlayerCount) -> Result<TiePattern, NinesError> {
    classify_ranked(&rank(scores), player_count)
}

fn classify_ranked(
    ranked: &[(usize, u32)],
    player_count: PlayerCount,
) -> Result<TiePattern, NinesError> {
    let ranked_scores: Vec<u32> = ranked.iter().map(|&(_, s)| s).collect();
    TiePattern::classify(&ranked_scores, player_count).ok_or(NinesError::InvalidInput {
        expected: player_count.get(),
        actual: ranked.len(),
    })
}

/// Points for one hole, in the same seat order as `scores`.
///
/// Lower scores rank higher. The result always sums to nine. Equal scores
/// keep their seat order when ranked, which matters for the four-player
/// middle tie where tied players receive different awards.
pub fn calculate_points(scores: &[u32], player_count: PlayerCount) -> Result<Vec<u8>, NinesError> {
    let ranked = rank(scores);
    let pattern = classify_ranked(&ranked, player_count)?;

    let mut points = vec![0; scores.len()];
    for (&(seat, _), award) in ranked.iter().zip(pattern.awards()) {
        points[seat] = award;
    }
    Ok(points)
}
