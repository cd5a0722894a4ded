use serde::{Deserialize, Serialize};

use crate::error::NinesError;
use crate::game::{DEFAULT_PAR, HoleCount, PlayerCount};

/// Defaults remembered from the previous setup screen.
///
/// These are hints for whoever calls `create_game`; the engine applies no
/// defaulting of its own beyond blank names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupDefaults {
    pub player_count: PlayerCount,
    pub hole_count: HoleCount,
    pub player_names: Vec<String>,
    pub default_par: u8,
}

impl Default for SetupDefaults {
    fn default() -> Self {
        Self {
            player_count: PlayerCount::Four,
            hole_count: HoleCount::Eighteen,
            player_names: Vec::new(),
            default_par: DEFAULT_PAR,
        }
    }
}

impl SetupDefaults {
    /// Load from `NINES_CONFIG` or `config/nines.toml`. Falls back to defaults
    /// if the file is missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var("NINES_CONFIG").unwrap_or_else(|_| "config/nines.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, NinesError> {
        toml::from_str(content).map_err(|e| NinesError::Decode(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, NinesError> {
        toml::to_string(self).map_err(|e| NinesError::Encode(e.to_string()))
    }

    /// Pars for a new game, all set to `default_par`.
    pub fn pars(&self) -> Vec<u8> {
        vec![self.default_par; usize::from(self.hole_count.get())]
    }
}
