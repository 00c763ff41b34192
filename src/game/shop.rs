//! The upgrade shop.
//!
//! One purchase attempt per visit; the battle loop re-enters the shop by
//! choosing it again. The purchase itself is a pure state transition; all
//! presentation lives in the session layer.

use crate::game::PlayerShip;

/// Health added by the health upgrade.
const HEALTH_BONUS: i32 = 20;

/// Damage added by the damage upgrade.
const DAMAGE_BONUS: i32 = 10;

/// A purchasable upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// +20 health, cost 20.
    Health,
    /// +10 damage, cost 15.
    Damage,
    /// Cosmetic only, cost 25.
    Special,
}

impl Item {
    /// All items in listing order.
    #[must_use]
    pub const fn all() -> [Item; 3] {
        [Item::Health, Item::Damage, Item::Special]
    }

    /// Shop listing name, which is also the purchase command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Item::Health => "health",
            Item::Damage => "damage",
            Item::Special => "special",
        }
    }

    /// Cost in points.
    #[must_use]
    pub const fn cost(self) -> i32 {
        match self {
            Item::Health => 20,
            Item::Damage => 15,
            Item::Special => 25,
        }
    }

    /// Parse a shop-prompt response into an item.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Item::all()
            .into_iter()
            .find(|item| input.eq_ignore_ascii_case(item.name()))
    }
}

/// Result of one purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Item bought and its effect already applied.
    Bought(Item),
    /// Unknown item or not enough points; nothing changed.
    Rejected,
    /// The player backed out; nothing changed and no message is owed.
    Back,
}

/// Apply one purchase attempt against the player's points and stats.
///
/// Returns the new point balance and what happened. Points and stats are
/// untouched unless the purchase went through.
#[must_use]
pub fn purchase(points: i32, player: &mut PlayerShip, choice: &str) -> (i32, PurchaseOutcome) {
    if choice.trim().eq_ignore_ascii_case("back") {
        return (points, PurchaseOutcome::Back);
    }

    let Some(item) = Item::parse(choice) else {
        return (points, PurchaseOutcome::Rejected);
    };
    if points < item.cost() {
        return (points, PurchaseOutcome::Rejected);
    }

    match item {
        Item::Health => player.health += HEALTH_BONUS,
        Item::Damage => player.damage += DAMAGE_BONUS,
        Item::Special => {}
    }

    (points - item.cost(), PurchaseOutcome::Bought(item))
}
