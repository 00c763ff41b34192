//! One-round combat resolution.
//!
//! The engine mutates the two actors and reports what happened as a list of
//! events; it never prints. Each probability gate is one independent draw
//! from the injected RNG, so a seeded generator replays a battle exactly.

use rand::Rng;

use crate::game::{Defender, PlayerShip};

/// Chance the defender counter-attacks after taking a hit.
const COUNTER_CHANCE: f64 = 0.3;

/// Chance a player dodge fully avoids the defender's hit.
const PLAYER_DODGE_CHANCE: f64 = 0.2;

/// Chance the defender dodges on its own turn instead of attacking.
const ENEMY_DODGE_CHANCE: f64 = 0.15;

/// Player action for one combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hit the defender; a charged hit deals double damage.
    Attack,
    /// Try to avoid the defender's hit this round.
    Dodge,
    /// Charge the next attack.
    Charge,
    /// Open the shop; nothing is resolved this round.
    Shop,
}

impl Action {
    /// Parse a battle-prompt response: a single letter, case-insensitive.
    ///
    /// Anything else is an unrecognized command; the caller passes `None`
    /// to [`resolve_round`] and the player's action is wasted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            s if s.eq_ignore_ascii_case("a") => Some(Action::Attack),
            s if s.eq_ignore_ascii_case("d") => Some(Action::Dodge),
            s if s.eq_ignore_ascii_case("c") => Some(Action::Charge),
            s if s.eq_ignore_ascii_case("s") => Some(Action::Shop),
            _ => None,
        }
    }
}

/// Something that happened during a round, in narration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// Player hit the defender for this much damage.
    PlayerHit(i32),
    /// Defender counter-attacked after being hit.
    Counter,
    /// Player dodge succeeded; no damage taken.
    DodgeSucceeded,
    /// Player dodge failed; the defender's hit landed.
    DodgeFailed,
    /// Player is charging the next attack.
    Charging,
    /// Defender dodged on its own turn.
    EnemyDodged,
    /// Defender attacked on its own turn.
    EnemyAttacked,
}

/// Outcome of resolving one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round resolved; events are in the order they happened.
    Resolved(Vec<RoundEvent>),
    /// The player asked for the shop; no combat happened this round.
    ShopRequested,
}

/// Resolve one combat round.
///
/// `action` is `None` for an unrecognized command: the player does nothing
/// and the defender still takes its turn.
///
/// The counter-attack inside the Attack branch and the defender's own turn
/// are two separate damage applications; a round can inflict both. The
/// defender's turn is skipped only when the shop was requested or the
/// defender went down to the player's attack.
pub fn resolve_round<R: Rng>(
    player: &mut PlayerShip,
    enemy: &mut Defender,
    action: Option<Action>,
    rng: &mut R,
) -> RoundOutcome {
    let mut events = Vec::new();

    match action {
        Some(Action::Attack) => {
            let damage = player.damage * if player.charged { 2 } else { 1 };
            enemy.health -= damage;
            player.charged = false;
            events.push(RoundEvent::PlayerHit(damage));

            if rng.gen_bool(COUNTER_CHANCE) {
                player.health -= enemy.damage;
                events.push(RoundEvent::Counter);
            }
        }
        Some(Action::Dodge) => {
            if rng.gen_bool(PLAYER_DODGE_CHANCE) {
                events.push(RoundEvent::DodgeSucceeded);
            } else {
                player.health -= enemy.damage;
                events.push(RoundEvent::DodgeFailed);
            }
        }
        Some(Action::Charge) => {
            player.charged = true;
            events.push(RoundEvent::Charging);
        }
        Some(Action::Shop) => return RoundOutcome::ShopRequested,
        None => {}
    }

    // Defender's own turn, skipped once it is down.
    if enemy.health > 0 {
        if rng.gen_bool(ENEMY_DODGE_CHANCE) {
            events.push(RoundEvent::EnemyDodged);
        } else {
            player.health -= enemy.damage;
            events.push(RoundEvent::EnemyAttacked);
        }
    }

    RoundOutcome::Resolved(events)
}
