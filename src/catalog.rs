//! Tower catalog: the attackable structures and their defenders.
//!
//! The catalog is immutable configuration data built once at startup and
//! injected into the session. Difficulty is not stored per tower; it is
//! derived from a tower's position in the catalog (first third Easy, next
//! third Normal, remainder Hard).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// A fortified structure and the unit defending it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Display name of the structure.
    pub name: String,
    /// Name of the defending unit.
    pub defender: String,
    /// Defender's starting health.
    pub health: i32,
    /// Damage the defender deals per hit.
    pub damage: i32,
}

/// Difficulty band derived from a tower's catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// First third of the catalog.
    Easy,
    /// Middle third.
    Normal,
    /// Everything after that.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Immutable, non-empty list of attackable structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    towers: Vec<Structure>,
}

fn tower(name: &str, defender: &str, health: i32, damage: i32) -> Structure {
    Structure {
        name: name.to_string(),
        defender: defender.to_string(),
        health,
        damage,
    }
}

impl Catalog {
    /// Build a catalog from a tower list.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyCatalog`] if the list is empty.
    pub fn new(towers: Vec<Structure>) -> GameResult<Self> {
        if towers.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { towers })
    }

    /// The built-in nine-tower catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            towers: vec![
                tower("Eiffel Tower", "Iron Lady", 100, 10),
                tower("Leaning Tower", "Slant Flyer", 100, 10),
                tower("Sydney Opera", "Harbour Hawk", 100, 10),
                tower("Big Ben", "Clockwork", 120, 15),
                tower("Christ Statue", "The Redeemer", 120, 15),
                tower("Tokyo Skytree", "Sky Sentinel", 120, 15),
                tower("Statue of Liberty", "Lady Freedom", 150, 20),
                tower("Burj Khalifa", "Desert Falcon", 150, 20),
                tower("Great Wall", "Dragon Flyer", 150, 20),
            ],
        }
    }

    /// Load a catalog from a JSON array of structures.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// parsed catalog is empty.
    pub fn from_path(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GameError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let towers: Vec<Structure> =
            serde_json::from_str(&text).map_err(|source| GameError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(towers)
    }

    /// Number of towers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.towers.len()
    }

    /// Whether the catalog is empty. Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    /// Tower at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Structure> {
        self.towers.get(index)
    }

    /// Iterate over the towers in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Structure> {
        self.towers.iter()
    }

    /// Difficulty band for the tower at `index`.
    ///
    /// Bands are thirds of the catalog, rounded up, so small catalogs fill
    /// the easier bands first.
    #[must_use]
    pub fn difficulty(&self, index: usize) -> Difficulty {
        let third = self.towers.len().div_ceil(3);
        if index < third {
            Difficulty::Easy
        } else if index < third * 2 {
            Difficulty::Normal
        } else {
            Difficulty::Hard
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Structure;
    type IntoIter = std::slice::Iter<'a, Structure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
