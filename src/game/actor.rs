//! Combat actor state.

use crate::catalog::Structure;

/// Player health at the start of every battle.
pub const STARTING_HEALTH: i32 = 100;

/// Player damage at the start of every battle.
pub const STARTING_DAMAGE: i32 = 20;

/// The player's ship.
///
/// Stats reset to the starting values at every battle, so shop upgrades are
/// scoped to the battle they were bought in. Health is signed: a hit can
/// push it below zero, and any value at or below zero means defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerShip {
    /// Current health.
    pub health: i32,
    /// Damage dealt per attack, before the charge multiplier.
    pub damage: i32,
    /// Whether the next attack is charged (deals double damage).
    pub charged: bool,
}

impl PlayerShip {
    /// A fresh ship at battle start.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            damage: STARTING_DAMAGE,
            charged: false,
        }
    }

    /// Whether the ship has been destroyed.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

/// A structure's defending unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defender {
    /// Name of the defender, used in battle narration.
    pub name: String,
    /// Current health.
    pub health: i32,
    /// Damage dealt per hit.
    pub damage: i32,
}

impl Defender {
    /// Spawn the defender for a catalog structure.
    #[must_use]
    pub fn from_structure(structure: &Structure) -> Self {
        Self {
            name: structure.defender.clone(),
            health: structure.health,
            damage: structure.damage,
        }
    }

    /// Whether the defender has been destroyed.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
