//! Game rules: combat actors, round resolution, and the upgrade shop.
//!
//! Everything here is pure state transition over actors owned by the
//! session; printing and prompting live in [`crate::session`].

mod actor;
mod combat;
mod shop;

pub use actor::{Defender, PlayerShip, STARTING_DAMAGE, STARTING_HEALTH};
pub use combat::{Action, RoundEvent, RoundOutcome, resolve_round};
pub use shop::{Item, PurchaseOutcome, purchase};
