use std::path::PathBuf;

use crate::error::NinesError;
use crate::game::Game;

/// Holder of the single saved game record.
///
/// The engine never touches a store. Callers persist the value returned by
/// every state-changing operation and load it back on startup.
pub trait GameStore {
    /// The saved game, or `None` if nothing is stored or the record is unreadable.
    fn load_game(&self) -> Option<Game>;

    fn save_game(&mut self, game: &Game) -> Result<(), NinesError>;

    fn clear_game(&mut self);
}

/// In-process store holding the record as encoded JSON, so loads go through
/// the same decode path as a real backing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw stored record, e.g. with one written by an older version.
    pub fn put_raw(&mut self, record: impl Into<String>) {
        self.record = Some(record.into());
    }
}

impl GameStore for MemoryStore {
    fn load_game(&self) -> Option<Game> {
        let record = self.record.as_deref()?;
        match Game::from_json(record) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable saved game");
                None
            },
        }
    }

    fn save_game(&mut self, game: &Game) -> Result<(), NinesError> {
        self.record = Some(game.to_json()?);
        Ok(())
    }

    fn clear_game(&mut self) {
        self.record = None;
    }
}

/// Store backed by one JSON file on the local disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl GameStore for JsonFileStore {
    fn load_game(&self) -> Option<Game> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match Game::from_json(&content) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable saved game"
                );
                None
            },
        }
    }

    fn save_game(&mut self, game: &Game) -> Result<(), NinesError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, game.to_json()?)?;
        Ok(())
    }

    fn clear_game(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to clear saved game");
        }
    }
}
