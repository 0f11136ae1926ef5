use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameRecord {
    pub title: String,
    pub genre: String,
    pub description: String,
}

/// The full set of known games. Loaded once at startup and never mutated, so
/// it is shared across sessions without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Titles are the record identity and must be pairwise distinct.
    pub fn from_records(games: Vec<GameRecord>) -> Result<Self, CatalogError> {
        if games.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for game in &games {
            if !seen.insert(game.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(game.title.clone()));
            }
        }

        Ok(Self { games })
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
