use serde::{Deserialize, Serialize};

/// Where a shared score sits relative to the rest of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieType {
    Best,
    Middle,
    Worst,
}

/// Display-only tie markers, one per seat in input order.
///
/// A seat is tied when another seat has the same score. Tied seats are
/// `Best` at the minimum score, `Worst` at the maximum, otherwise `Middle`.
/// When every score is equal the whole group is `Best`.
/// Independent of points allocation.
pub fn tie_info(scores: &[u32]) -> Vec<Option<TieType>> {
    let (Some(&min), Some(&max)) = (scores.iter().min(), scores.iter().max()) else {
        return Vec::new();
    };

    scores
        .iter()
        .map(|&score| {
            let shared = scores.iter().filter(|&&s| s == score).count() > 1;
            if !shared {
                None
            } else if score == min {
                Some(TieType::Best)
            } else if score == max {
                Some(TieType::Worst)
            } else {
                Some(TieType::Middle)
            }
        })
        .collect()
}
