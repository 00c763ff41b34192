//! Error types for the game.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a game session.
#[derive(Debug)]
pub enum GameError {
    /// Terminal input or output failed.
    Io(io::Error),
    /// The score store failed.
    Store(rusqlite::Error),
    /// A tower catalog file could not be read.
    CatalogRead {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying read failure.
        source: io::Error,
    },
    /// A tower catalog file could not be parsed.
    CatalogParse {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying parse failure.
        source: serde_json::Error,
    },
    /// A tower catalog contained no towers.
    EmptyCatalog,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "terminal i/o failed: {e}"),
            GameError::Store(e) => write!(f, "score store failed: {e}"),
            GameError::CatalogRead { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            GameError::CatalogParse { path, source } => {
                write!(f, "failed to parse catalog {}: {source}", path.display())
            }
            GameError::EmptyCatalog => write!(f, "catalog contains no towers"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Store(e) => Some(e),
            GameError::CatalogRead { source, .. } => Some(source),
            GameError::CatalogParse { source, .. } => Some(source),
            GameError::EmptyCatalog => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<rusqlite::Error> for GameError {
    fn from(e: rusqlite::Error) -> Self {
        GameError::Store(e)
    }
}

/// Result type for session and store operations.
pub type GameResult<T> = Result<T, GameError>;
