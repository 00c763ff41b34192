//! Game session orchestrator.
//!
//! Drives the prompt/response loop: tower selection, battle rounds, shop
//! visits, score entry, leaderboard, replay. Generic over the input reader,
//! output writer, and RNG so tests can script a whole session and replay it
//! deterministically.
//!
//! End of input at any prompt ends the session cleanly instead of looping.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::catalog::{Catalog, Structure};
use crate::error::GameResult;
use crate::game::{
    Action, Defender, Item, PlayerShip, PurchaseOutcome, RoundEvent, RoundOutcome, purchase,
    resolve_round,
};
use crate::store::ScoreStore;

/// Number of leaderboard rows shown after each battle.
const LEADERBOARD_LIMIT: u32 = 5;

/// How one battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BattleResult {
    Victory,
    Defeat,
}

/// A full interactive game session.
///
/// Points accumulate across battles; player stats do not (they reset at
/// every battle start, so shop upgrades are battle-scoped).
#[derive(Debug)]
pub struct Session<'a, R, W, G> {
    catalog: Catalog,
    store: &'a ScoreStore,
    rng: G,
    input: R,
    output: W,
    points: i32,
}

impl<'a, R: BufRead, W: Write, G: Rng> Session<'a, R, W, G> {
    /// Create a session over the given catalog, store, and I/O handles.
    pub fn new(catalog: Catalog, store: &'a ScoreStore, rng: G, input: R, output: W) -> Self {
        Self {
            catalog,
            store,
            rng,
            input,
            output,
            points: 0,
        }
    }

    /// Run the session until the player declines a replay or input ends.
    ///
    /// Returns the final point total.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O or the score store fails.
    pub fn run(&mut self) -> GameResult<i32> {
        writeln!(self.output)?;
        writeln!(self.output, "ALIEN TOWER ATTACK")?;

        loop {
            let Some(structure) = self.select_tower()? else {
                break;
            };
            let Some(result) = self.battle(&structure)? else {
                break;
            };
            self.resolve_battle(&structure, result)?;

            let Some(name) = self.prompt("Enter your name: ")? else {
                break;
            };
            self.store.record(&name, self.points)?;
            self.show_leaderboard()?;

            let Some(answer) = self.prompt("Play again? (y/n): ")? else {
                break;
            };
            if !answer.eq_ignore_ascii_case("y") {
                break;
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Thanks for playing!")?;
        Ok(self.points)
    }

    /// Print `text` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> GameResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Tower selection: re-prompts on invalid input, `None` at end of input.
    fn select_tower(&mut self) -> GameResult<Option<Structure>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose a tower to attack:")?;
            for (i, structure) in self.catalog.iter().enumerate() {
                let difficulty = self.catalog.difficulty(i);
                writeln!(self.output, "{}. {} ({difficulty})", i + 1, structure.name)?;
            }
            writeln!(self.output)?;

            let Some(line) = self.prompt("Enter tower number: ")? else {
                return Ok(None);
            };
            let Ok(number) = line.parse::<usize>() else {
                writeln!(self.output, "Enter a number.")?;
                continue;
            };
            match number.checked_sub(1).and_then(|i| self.catalog.get(i)) {
                Some(structure) => return Ok(Some(structure.clone())),
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    /// Fight one battle against `structure`'s defender.
    ///
    /// `None` means input ended mid-battle.
    fn battle(&mut self, structure: &Structure) -> GameResult<Option<BattleResult>> {
        let mut player = PlayerShip::new();
        let mut enemy = Defender::from_structure(structure);

        while !player.is_defeated() && !enemy.is_defeated() {
            writeln!(self.output)?;
            writeln!(self.output, "Your health: {}", player.health)?;
            writeln!(self.output, "Enemy health: {}", enemy.health)?;

            let Some(line) = self.prompt("(A)ttack, (D)odge, (C)harge, (S)hop? ")? else {
                return Ok(None);
            };
            let action = Action::parse(&line);

            match resolve_round(&mut player, &mut enemy, action, &mut self.rng) {
                RoundOutcome::ShopRequested => {
                    if self.shop(&mut player)?.is_none() {
                        return Ok(None);
                    }
                }
                RoundOutcome::Resolved(events) => self.narrate(&events, &enemy)?,
            }
        }

        Ok(Some(if player.is_defeated() {
            BattleResult::Defeat
        } else {
            BattleResult::Victory
        }))
    }

    fn narrate(&mut self, events: &[RoundEvent], enemy: &Defender) -> GameResult<()> {
        for event in events {
            match event {
                RoundEvent::PlayerHit(damage) => {
                    writeln!(self.output, "You hit for {damage} damage!")?;
                }
                RoundEvent::Counter => {
                    writeln!(self.output, "{} counter-attacked!", enemy.name)?;
                }
                RoundEvent::DodgeSucceeded => writeln!(self.output, "Dodged successfully!")?,
                RoundEvent::DodgeFailed => writeln!(self.output, "Dodge failed!")?,
                RoundEvent::Charging => {
                    writeln!(self.output, "Powering up for next attack...")?;
                }
                RoundEvent::EnemyDodged => writeln!(self.output, "{} dodged!", enemy.name)?,
                RoundEvent::EnemyAttacked => writeln!(self.output, "{} attacked!", enemy.name)?,
            }
        }
        Ok(())
    }

    /// One shop visit: list items, take one purchase attempt.
    ///
    /// `None` means input ended at the shop prompt.
    fn shop(&mut self, player: &mut PlayerShip) -> GameResult<Option<()>> {
        writeln!(self.output)?;
        writeln!(self.output, "You have {} points", self.points)?;
        writeln!(self.output, "Shop items:")?;
        for item in Item::all() {
            writeln!(self.output, "- {}: {} points", item.name(), item.cost())?;
        }
        writeln!(self.output)?;

        let Some(line) = self.prompt("What to buy? (or 'back'): ")? else {
            return Ok(None);
        };

        let (points, outcome) = purchase(self.points, player, &line);
        self.points = points;

        match outcome {
            PurchaseOutcome::Bought(Item::Health) => writeln!(self.output, "Health upgraded!")?,
            PurchaseOutcome::Bought(Item::Damage) => writeln!(self.output, "Damage increased!")?,
            PurchaseOutcome::Bought(Item::Special) => {
                writeln!(self.output, "Special ability unlocked!")?;
            }
            PurchaseOutcome::Rejected => writeln!(self.output, "Can't buy that.")?,
            PurchaseOutcome::Back => {}
        }
        Ok(Some(()))
    }

    /// Award points on victory; the award is the catalog entry's max
    /// health, not the defender's remaining health.
    fn resolve_battle(&mut self, structure: &Structure, result: BattleResult) -> GameResult<()> {
        writeln!(self.output)?;
        match result {
            BattleResult::Victory => {
                self.points += structure.health;
                writeln!(self.output, "You defeated {}!", structure.defender)?;
                writeln!(
                    self.output,
                    "Earned {} points (Total: {})",
                    structure.health, self.points
                )?;
            }
            BattleResult::Defeat => {
                writeln!(self.output, "Your ship was destroyed!")?;
            }
        }
        Ok(())
    }

    fn show_leaderboard(&mut self) -> GameResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Top Scores ---")?;
        for record in self.store.top(LEADERBOARD_LIMIT)? {
            writeln!(self.output, "{}: {} points", record.name, record.score)?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::mock::StepRng;

    use super::*;

    fn run_session(script: &str) -> (i32, String) {
        let store = ScoreStore::open_in_memory().unwrap();
        // All probability gates fail: no counters, no dodges on either side.
        let rng = StepRng::new(u64::MAX, 0);
        let mut output = Vec::new();
        let points = {
            let mut session = Session::new(
                Catalog::builtin(),
                &store,
                rng,
                Cursor::new(script.to_string()),
                &mut output,
            );
            session.run().unwrap()
        };
        (points, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_invalid_tower_input_reprompts() {
        let (_, transcript) = run_session("abc\n0\n99\n");
        assert!(transcript.contains("Enter a number."));
        assert!(transcript.contains("Invalid choice."));
        // Session ended cleanly at end of input.
        assert!(transcript.contains("Thanks for playing!"));
    }

    #[test]
    fn test_end_of_input_mid_battle_exits_cleanly() {
        let (points, transcript) = run_session("1\nA\n");
        assert_eq!(points, 0);
        assert!(transcript.contains("You hit for 20 damage!"));
        assert!(transcript.contains("Thanks for playing!"));
    }

    #[test]
    fn test_victory_awards_catalog_health() {
        // Eiffel Tower: 100 health, 10 damage. With every RNG gate failing,
        // five attacks win while the defender lands four hits.
        let (points, transcript) = run_session("1\nA\nA\nA\nA\nA\nHero\nn\n");
        assert_eq!(points, 100);
        assert!(transcript.contains("You defeated Iron Lady!"));
        assert!(transcript.contains("Earned 100 points (Total: 100)"));
        assert!(transcript.contains("Your health: 60"));
        assert!(transcript.contains("Hero: 100 points"));
    }

    #[test]
    fn test_score_recorded_on_defeat() {
        // Statue of Liberty: 150 health, 20 damage. With gates failing the
        // defender hits every round; the player dies on the fifth round.
        let (points, transcript) = run_session("7\nA\nA\nA\nA\nA\nLoser\nn\n");
        assert_eq!(points, 0);
        assert!(transcript.contains("Your ship was destroyed!"));
        assert!(transcript.contains("Loser: 0 points"));
    }

    #[test]
    fn test_unknown_battle_command_wastes_turn() {
        let (_, transcript) = run_session("1\nx\n");
        assert!(transcript.contains("Iron Lady attacked!"));
        assert!(!transcript.contains("You hit"));
    }
}
