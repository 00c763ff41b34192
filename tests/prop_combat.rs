//! Property-based tests for combat and shop mechanics.
//!
//! Run with: cargo test prop_combat

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tower_attack::game::{Action, Item, PlayerShip, PurchaseOutcome, purchase};
use tower_attack::{Catalog, Defender, Difficulty, RoundOutcome, Structure, resolve_round};

fn defender(health: i32, damage: i32) -> Defender {
    Defender {
        name: "Prop Defender".to_string(),
        health,
        damage,
    }
}

proptest! {
    /// A battle of plain attacks always terminates, and neither actor's
    /// health ever increases along the way.
    #[test]
    fn prop_attack_battle_terminates(
        seed in any::<u64>(),
        enemy_health in 1i32..500,
        enemy_damage in 0i32..50
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = PlayerShip::new();
        let mut enemy = defender(enemy_health, enemy_damage);

        let mut rounds = 0;
        while !player.is_defeated() && !enemy.is_defeated() {
            let (player_before, enemy_before) = (player.health, enemy.health);

            let outcome = resolve_round(&mut player, &mut enemy, Some(Action::Attack), &mut rng);
            prop_assert!(matches!(outcome, RoundOutcome::Resolved(_)));

            prop_assert!(player.health <= player_before, "player health never increases");
            prop_assert!(enemy.health <= enemy_before, "enemy health never increases");

            rounds += 1;
            // Each attack removes 20 enemy health, so 25 rounds is the cap.
            prop_assert!(rounds <= 25, "battle failed to terminate");
        }

        prop_assert!(player.is_defeated() || enemy.is_defeated());
    }

    /// Charge then attack deals exactly double base damage, once.
    #[test]
    fn prop_charge_doubles_next_attack(
        seed in any::<u64>(),
        enemy_health in 200i32..1000,
        enemy_damage in 0i32..50
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = PlayerShip::new();
        let mut enemy = defender(enemy_health, enemy_damage);

        resolve_round(&mut player, &mut enemy, Some(Action::Charge), &mut rng);
        prop_assert_eq!(enemy.health, enemy_health, "charging deals no damage");
        prop_assert!(player.charged);

        let before = enemy.health;
        resolve_round(&mut player, &mut enemy, Some(Action::Attack), &mut rng);
        prop_assert_eq!(before - enemy.health, 2 * player.damage);
        prop_assert!(!player.charged, "charge is consumed");

        let before = enemy.health;
        resolve_round(&mut player, &mut enemy, Some(Action::Attack), &mut rng);
        prop_assert_eq!(before - enemy.health, player.damage, "back to base damage");
    }

    /// No action (including an unrecognized command) ever heals anyone.
    #[test]
    fn prop_rounds_never_heal(
        seed in any::<u64>(),
        enemy_health in 1i32..300,
        enemy_damage in 0i32..50,
        action in prop::option::of(prop::sample::select(vec![
            Action::Attack,
            Action::Dodge,
            Action::Charge,
        ]))
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = PlayerShip::new();
        let mut enemy = defender(enemy_health, enemy_damage);

        let (player_before, enemy_before) = (player.health, enemy.health);
        resolve_round(&mut player, &mut enemy, action, &mut rng);

        prop_assert!(player.health <= player_before);
        prop_assert!(enemy.health <= enemy_before);
    }

    /// Points change exactly by the item cost on purchase and not at all
    /// otherwise; rejected purchases leave stats untouched.
    #[test]
    fn prop_shop_points_conservation(
        points in 0i32..1000,
        choice in prop_oneof![
            Just("health".to_string()),
            Just("damage".to_string()),
            Just("special".to_string()),
            Just("back".to_string()),
            ".*"
        ]
    ) {
        let mut player = PlayerShip::new();
        let (new_points, outcome) = purchase(points, &mut player, &choice);

        prop_assert!(new_points >= 0, "points never go negative");
        match outcome {
            PurchaseOutcome::Bought(item) => {
                prop_assert_eq!(new_points, points - item.cost());
                prop_assert!(points >= item.cost());
                match item {
                    Item::Health => prop_assert_eq!(player.health, 120),
                    Item::Damage => prop_assert_eq!(player.damage, 30),
                    Item::Special => prop_assert_eq!(player, PlayerShip::new()),
                }
            }
            PurchaseOutcome::Rejected | PurchaseOutcome::Back => {
                prop_assert_eq!(new_points, points);
                prop_assert_eq!(player, PlayerShip::new());
            }
        }
    }

    /// Difficulty bands only ever step up along the catalog, and the first
    /// tower is always Easy.
    #[test]
    fn prop_difficulty_bands_are_ordered(count in 1usize..40) {
        let towers: Vec<Structure> = (0..count)
            .map(|i| Structure {
                name: format!("Tower {i}"),
                defender: format!("Defender {i}"),
                health: 100,
                damage: 10,
            })
            .collect();
        let catalog = Catalog::new(towers).unwrap();

        let rank = |d: Difficulty| match d {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        };

        prop_assert_eq!(catalog.difficulty(0), Difficulty::Easy);
        for i in 1..count {
            prop_assert!(
                rank(catalog.difficulty(i - 1)) <= rank(catalog.difficulty(i)),
                "band dropped at index {i}"
            );
        }
    }
}
