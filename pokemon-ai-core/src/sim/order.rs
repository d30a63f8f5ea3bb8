use std::cmp::Ordering;

use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::sim::battle::{Action, Battle, Side};
use crate::sim::chance::action_move;
use crate::sim::field::weather_speed_multiplier;
use crate::sim::pokemon::Status;
use crate::sim::stats::{apply_stage, Stage};

/// Who moves first this turn. `Tie` is resolved by the search as a 50/50
/// chance node over both orders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    First(Side),
    Tie,
}

const SWITCH_PRIORITY: i8 = 6;

fn action_priority(battle: &Battle, side: Side, action: Action) -> i8 {
    match action {
        Action::Switch(_) => SWITCH_PRIORITY,
        _ => action_move(battle, side, action).map_or(0, |data| data.priority),
    }
}

/// Speed after stages, status, items, abilities and Tailwind.
pub fn effective_speed(battle: &Battle, side: Side) -> u32 {
    let team = battle.team(side);
    let pokemon = team.active();
    let mut speed = apply_stage(pokemon.stats.spe as u32, pokemon.volatiles.stage(Stage::Spe), 2);
    speed *= weather_speed_multiplier(pokemon, battle.field.weather());
    if pokemon.ability == Ability::QuickFeet && pokemon.status.is_some() {
        speed = speed * 3 / 2;
    } else if pokemon.status == Some(Status::Paralysis) {
        speed /= 4;
    }
    match pokemon.item {
        Item::ChoiceScarf => speed = speed * 3 / 2,
        Item::IronBall => speed /= 2,
        _ => {}
    }
    if pokemon.volatiles.slow_start > 0 {
        speed /= 2;
    }
    if team.side.tailwind > 0 {
        speed *= 2;
    }
    speed
}

pub fn determine_order(battle: &Battle, ai_action: Action, foe_action: Action) -> Order {
    let by_priority = action_priority(battle, Side::Ai, ai_action)
        .cmp(&action_priority(battle, Side::Foe, foe_action));
    let ordering = by_priority.then_with(|| {
        let by_speed = effective_speed(battle, Side::Ai).cmp(&effective_speed(battle, Side::Foe));
        if battle.field.trick_room() {
            by_speed.reverse()
        } else {
            by_speed
        }
    });
    match ordering {
        Ordering::Greater => Order::First(Side::Ai),
        Ordering::Less => Order::First(Side::Foe),
        Ordering::Equal => Order::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::battle::Team;
    use crate::sim::field::Field;
    use crate::sim::pokemon::Pokemon;
    use crate::sim::stats::Nature;

    fn make_mon(species: &str, moves: &[&str], item: Option<&str>) -> Pokemon {
        Pokemon::new(
            species,
            50,
            [0; 6],
            [31; 6],
            Nature::Hardy,
            moves.iter().map(|m| m.to_string()).collect(),
            "",
            item,
        )
        .expect("pokemon")
    }

    fn duel(ai: Pokemon, foe: Pokemon) -> Battle {
        Battle::new(
            Team::new(vec![ai], true).expect("team"),
            Team::new(vec![foe], false).expect("team"),
            Field::default(),
        )
    }

    #[test]
    fn faster_side_moves_first() {
        let battle = duel(
            make_mon("jolteon", &["thunderbolt"], None),
            make_mon("snorlax", &["bodyslam"], None),
        );
        assert_eq!(
            determine_order(&battle, Action::Move(0), Action::Move(0)),
            Order::First(Side::Ai)
        );
    }

    #[test]
    fn priority_beats_speed_and_switches_beat_priority() {
        let mut battle = duel(
            make_mon("jolteon", &["thunderbolt"], None),
            make_mon("scizor", &["bulletpunch"], None),
        );
        assert_eq!(
            determine_order(&battle, Action::Move(0), Action::Move(0)),
            Order::First(Side::Foe)
        );
        battle.ai.roster.push(make_mon("snorlax", &["bodyslam"], None));
        assert_eq!(
            determine_order(&battle, Action::Switch(1), Action::Move(0)),
            Order::First(Side::Ai)
        );
    }

    #[test]
    fn trick_room_inverts_speed_but_not_priority() {
        let mut battle = duel(
            make_mon("jolteon", &["thunderbolt", "quickattack"], None),
            make_mon("snorlax", &["bodyslam"], None),
        );
        battle.field.trick_room = 3;
        assert_eq!(
            determine_order(&battle, Action::Move(0), Action::Move(0)),
            Order::First(Side::Foe)
        );
        assert_eq!(
            determine_order(&battle, Action::Move(1), Action::Move(0)),
            Order::First(Side::Ai)
        );
    }

    #[test]
    fn mirror_match_is_a_tie() {
        let battle = duel(
            make_mon("garchomp", &["earthquake"], None),
            make_mon("garchomp", &["earthquake"], None),
        );
        assert_eq!(determine_order(&battle, Action::Move(0), Action::Move(0)), Order::Tie);
    }

    #[test]
    fn speed_modifiers() {
        let mut battle = duel(
            make_mon("garchomp", &["earthquake"], Some("Choice Scarf")),
            make_mon("garchomp", &["earthquake"], None),
        );
        let base = effective_speed(&battle, Side::Foe);
        assert_eq!(effective_speed(&battle, Side::Ai), base * 3 / 2);
        battle.foe.active_mut().status = Some(Status::Paralysis);
        assert_eq!(effective_speed(&battle, Side::Foe), base / 4);
        battle.foe.side.tailwind = 2;
        assert_eq!(effective_speed(&battle, Side::Foe), base / 4 * 2);
    }
}
