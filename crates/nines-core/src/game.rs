use serde::{Deserialize, Serialize};

use crate::error::NinesError;
use crate::player::Player;
use crate::time::now_millis;

/// Par used for any hole without an explicit value.
pub const DEFAULT_PAR: u8 = 4;

/// Points distributed among the group on every hole.
pub const POINTS_PER_HOLE: u32 = 9;

/// Lowest score a score-entry form accepts.
pub const MIN_DISPLAY_SCORE: u32 = 1;
/// Highest score a score-entry form accepts.
pub const MAX_DISPLAY_SCORE: u32 = 20;

/// Whether `score` is inside the 1..=20 entry range. Not enforced by the engine.
pub fn is_display_score(score: u32) -> bool {
    (MIN_DISPLAY_SCORE..=MAX_DISPLAY_SCORE).contains(&score)
}

/// Whether `par` is one of the conventional 3, 4, or 5.
pub fn is_conventional_par(par: u8) -> bool {
    matches!(par, 3..=5)
}

/// Group size. Selects which points table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    Three,
    Four,
}

impl PlayerCount {
    pub fn get(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(format!("player count must be 3 or 4, got {other}")),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.get() as u8
    }
}

/// Round length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HoleCount {
    Nine,
    Eighteen,
}

impl HoleCount {
    pub fn get(self) -> u8 {
        match self {
            Self::Nine => 9,
            Self::Eighteen => 18,
        }
    }
}

impl TryFrom<u8> for HoleCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(Self::Nine),
            18 => Ok(Self::Eighteen),
            other => Err(format!("hole count must be 9 or 18, got {other}")),
        }
    }
}

impl From<HoleCount> for u8 {
    fn from(count: HoleCount) -> Self {
        count.get()
    }
}

fn first_hole() -> u8 {
    1
}

/// A single Nines match.
///
/// Values are treated as immutable: every state transition in the engine
/// returns a new `Game`. `current_hole` is 1-based and held at `hole_count`
/// once `is_complete` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub player_count: PlayerCount,
    pub hole_count: HoleCount,
    #[serde(default)]
    pub pars: Vec<u8>,
    pub players: Vec<Player>,
    #[serde(default = "first_hole")]
    pub current_hole: u8,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub created_at: u64,
}

impl Game {
    /// Build a fresh game with empty histories and `current_hole = 1`.
    ///
    /// Missing names are blank, missing handicaps are unset, and missing
    /// pars are [`DEFAULT_PAR`]. Extra entries beyond the player or hole
    /// count are ignored.
    pub fn new(
        player_count: PlayerCount,
        hole_count: HoleCount,
        names: &[String],
        handicaps: &[Option<f64>],
        pars: &[u8],
    ) -> Self {
        let players = (0..player_count.get())
            .map(|i| {
                let name = names.get(i).map(String::as_str).unwrap_or("");
                let handicap = handicaps.get(i).copied().flatten();
                Player::new(i + 1, name, handicap)
            })
            .collect();
        let pars = (0..usize::from(hole_count.get()))
            .map(|i| pars.get(i).copied().unwrap_or(DEFAULT_PAR))
            .collect();

        Self {
            id: format!("game-{}", uuid::Uuid::new_v4()),
            player_count,
            hole_count,
            pars,
            players,
            current_hole: 1,
            is_complete: false,
            created_at: now_millis(),
        }
    }

    /// Par for a 1-based hole number, [`DEFAULT_PAR`] if unknown.
    pub fn par(&self, hole_number: u8) -> u8 {
        usize::from(hole_number)
            .checked_sub(1)
            .and_then(|i| self.pars.get(i).copied())
            .unwrap_or(DEFAULT_PAR)
    }

    /// Number of holes with recorded scores.
    pub fn holes_played(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.scores.len())
            .min()
            .unwrap_or(0)
    }

    /// Serialize to the JSON form handed to local storage.
    pub fn to_json(&self) -> Result<String, NinesError> {
        serde_json::to_string(self).map_err(|e| NinesError::Encode(e.to_string()))
    }

    /// Decode a JSON record, filling absent optional fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, NinesError> {
        let mut game: Game = serde_json::from_str(json)?;
        game.normalize()?;
        Ok(game)
    }

    /// Compact MessagePack snapshot of the record.
    pub fn to_msgpack(&self) -> Result<Vec<u8>, NinesError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, NinesError> {
        let mut game: Game = rmp_serde::from_slice(bytes)?;
        game.normalize()?;
        Ok(game)
    }

    /// Reject a roster that does not match `player_count`, pad missing pars
    /// with [`DEFAULT_PAR`], and resum every player's total.
    fn normalize(&mut self) -> Result<(), NinesError> {
        if self.players.len() != self.player_count.get() {
            return Err(NinesError::Decode(format!(
                "record has {} players but player_count is {}",
                self.players.len(),
                self.player_count.get()
            )));
        }
        let holes = usize::from(self.hole_count.get());
        if self.pars.len() < holes {
            self.pars.resize(holes, DEFAULT_PAR);
        }
        for player in &mut self.players {
            player.recompute_total();
        }
        Ok(())
    }
}
