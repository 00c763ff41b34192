// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Tower Attack: a turn-based tower assault game.
//!
//! The player picks a fortified structure, fights its defender through a
//! randomized combat loop, spends earned points in an upgrade shop, and
//! scores land on a small sqlite leaderboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Session (prompt/response)       │
//! ├──────────────┬──────────────────────┤
//! │  Game rules  │  Catalog (config)    │
//! │ (combat/shop)│                      │
//! ├──────────────┴──────────────────────┤
//! │       Score store (sqlite)          │
//! └─────────────────────────────────────┘
//! ```
//!
//! The session owns all mutable state and all I/O; combat and shop are pure
//! state transitions over actors passed in by exclusive reference. All
//! randomness flows through one injected, seedable RNG.

pub mod catalog;
pub mod error;
pub mod game;
pub mod session;
pub mod store;

pub use catalog::{Catalog, Difficulty, Structure};
pub use error::{GameError, GameResult};
pub use game::{Action, Defender, PlayerShip, RoundEvent, RoundOutcome, resolve_round};
pub use session::Session;
pub use store::{ScoreRecord, ScoreStore};
