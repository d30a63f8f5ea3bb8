//! Static scoring of a position from the AI's point of view.

use crate::data::types::{effectiveness, Type, NEUTRAL};
use crate::sim::battle::{Battle, Team};
use crate::sim::pokemon::{Pokemon, Status};
use crate::sim::stats::Stage;
use crate::weights::Weights;

/// Score of a won position.
pub const VICTORY: i64 = 16_777_216;

/// Largest magnitude a position that is still being played can score.
pub const MAX_HEURISTIC: i64 = VICTORY - 1;

/// Zero-sum score from the AI's side. A finished battle scores exactly
/// `VICTORY`, `-VICTORY` or 0; anything else is clamped strictly inside that
/// range whatever the weights.
pub fn evaluate(battle: &Battle, weights: &Weights) -> i64 {
    if let Some(score) = win(battle) {
        return score;
    }
    let gravity = battle.field.gravity();
    let score = score_team(&battle.ai, weights) - score_team(&battle.foe, weights);
    let score = score + score_members(&battle.ai, &battle.foe, gravity, weights)
        - score_members(&battle.foe, &battle.ai, gravity, weights);
    score.clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
}

/// `Some(score)` once a side has no Pokemon left.
pub fn win(battle: &Battle) -> Option<i64> {
    match (battle.ai.is_wiped(), battle.foe.is_wiped()) {
        (false, false) => None,
        (true, true) => Some(0),
        (true, false) => Some(-VICTORY),
        (false, true) => Some(VICTORY),
    }
}

/// A team holding two foe-inflicted sleepers means the inflicting side broke
/// the clause and loses. Rest does not count.
pub fn sleep_clause(team: &Team) -> Option<i64> {
    let sleepers = team
        .roster
        .iter()
        .filter(|pokemon| !pokemon.is_fainted() && pokemon.status == Some(Status::Sleep))
        .count();
    (sleepers >= 2).then_some(if team.is_ai { VICTORY } else { -VICTORY })
}

/// Maps a score onto [0, 1] for display.
pub fn confidence(score: i64) -> f64 {
    (score + VICTORY) as f64 / (2 * VICTORY) as f64
}

fn stage_score(pokemon: &Pokemon, weights: &Weights) -> i64 {
    let v = &pokemon.volatiles;
    v.stage(Stage::Atk) as i64 * weights.attack_stage
        + v.stage(Stage::Def) as i64 * weights.defense_stage
        + v.stage(Stage::Spa) as i64 * weights.special_attack_stage
        + v.stage(Stage::Spd) as i64 * weights.special_defense_stage
        + v.stage(Stage::Spe) as i64 * weights.speed_stage
}

fn score_team(team: &Team, weights: &Weights) -> i64 {
    let side = &team.side;
    let mut score = side.lucky_chant as i64 * weights.lucky_chant
        + side.mist as i64 * weights.mist
        + side.safeguard as i64 * weights.safeguard
        + side.tailwind as i64 * weights.tailwind
        + side.wish as i64 * weights.wish;

    let active = team.active();
    if active.is_fainted() {
        return score;
    }
    let v = &active.volatiles;
    score += stage_score(active, weights);
    score += v.magnet_rise as i64 * weights.magnet_rise;
    if v.substitute_hp > 0 {
        score += weights.substitute
            + weights.substitute_hp * v.substitute_hp as i64 / active.stats.hp as i64;
    }
    let flags = [
        (v.aqua_ring, weights.aqua_ring),
        (v.curse, weights.curse),
        (v.imprison, weights.imprison),
        (v.ingrain, weights.ingrain),
        (v.leech_seed, weights.leech_seed),
        (v.loaf, weights.loaf),
        (v.nightmare, weights.nightmare),
        (v.torment, weights.torment),
        (v.trapped, weights.trapped),
        (v.focus_energy, weights.focus_energy),
    ];
    score += flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, weight)| weight)
        .sum::<i64>();

    if active.moves.iter().any(|slot| slot.data.id == "batonpass") {
        let passable = v.aqua_ring as i64 * weights.aqua_ring
            + v.focus_energy as i64 * weights.focus_energy
            + v.ingrain as i64 * weights.ingrain
            + v.magnet_rise as i64 * weights.magnet_rise
            + stage_score(active, weights);
        score += weights.baton_pass * passable;
        if v.substitute_hp > 0 {
            score += weights.baton_pass * weights.substitute;
        }
    }
    score
}

fn score_members(team: &Team, other: &Team, gravity: bool, weights: &Weights) -> i64 {
    team.roster
        .iter()
        .filter(|pokemon| !pokemon.is_fainted())
        .map(|pokemon| score_pokemon(pokemon, team, other, gravity, weights))
        .sum()
}

fn score_pokemon(
    pokemon: &Pokemon,
    team: &Team,
    other: &Team,
    gravity: bool,
    weights: &Weights,
) -> i64 {
    let side = &team.side;
    let mut score = 0;
    if side.stealth_rock {
        let rock = effectiveness(Type::Rock, pokemon.types()) as i64;
        score += weights.stealth_rock * rock / NEUTRAL as i64;
    }
    if pokemon.is_grounded(gravity) {
        score += side.spikes as i64 * weights.spikes;
        score += side.toxic_spikes as i64 * weights.toxic_spikes;
    }
    score += weights.members;
    score += weights.hp * pokemon.current_hp as i64 / pokemon.stats.hp as i64;
    score += score_status(pokemon, weights);
    for slot in &pokemon.moves {
        if slot.data.is_physical() {
            score += other.side.reflect as i64 * weights.reflect;
        } else if slot.data.is_damaging() {
            score += other.side.light_screen as i64 * weights.light_screen;
        }
        if slot.pp == 0 {
            score += weights.no_pp;
        }
    }
    score
}

fn score_status(pokemon: &Pokemon, weights: &Weights) -> i64 {
    match pokemon.status {
        None => 0,
        Some(Status::Burn) => weights.burn,
        Some(Status::Freeze) => weights.freeze,
        Some(Status::Paralysis) => weights.paralysis,
        Some(Status::Poison) => weights.poison,
        Some(Status::Toxic) => weights.poison + weights.poison * pokemon.toxic_counter as i64 / 2,
        Some(Status::Sleep) | Some(Status::Rest) => weights.sleep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::field::Field;
    use crate::sim::stats::Nature;

    fn make_mon(species: &str, moves: &[&str]) -> Pokemon {
        Pokemon::new(
            species,
            50,
            [0; 6],
            [31; 6],
            Nature::Hardy,
            moves.iter().map(|m| m.to_string()).collect(),
            "",
            None,
        )
        .expect("pokemon")
    }

    fn battle(ai: Vec<Pokemon>, foe: Vec<Pokemon>) -> Battle {
        Battle::new(
            Team::new(ai, true).expect("team"),
            Team::new(foe, false).expect("team"),
            Field::default(),
        )
    }

    fn members_and_hp() -> Weights {
        Weights {
            members: 100,
            hp: 1000,
            ..Weights::default()
        }
    }

    #[test]
    fn mirror_position_scores_zero() {
        let battle = battle(
            vec![make_mon("pikachu", &["thunderbolt"])],
            vec![make_mon("pikachu", &["thunderbolt"])],
        );
        assert_eq!(evaluate(&battle, Weights::builtin()), 0);
    }

    #[test]
    fn zeroed_weights_score_zero() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["bodyslam"])],
            vec![make_mon("gengar", &["shadowball"])],
        );
        battle.foe.side.stealth_rock = true;
        battle.ai.active_mut().volatiles.substitute_hp = 40;
        assert_eq!(evaluate(&battle, &Weights::default()), 0);
    }

    #[test]
    fn hp_is_scored_proportionally() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["bodyslam"]), make_mon("gengar", &["shadowball"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        let max = battle.ai.active().stats.hp;
        battle.ai.active_mut().current_hp = max / 2;
        // AI: two members, one at full and one at half. Foe: one at full.
        let expected = 100 + 1000 + 100 + 1000 * (max / 2) as i64 / max as i64 - 1100;
        assert_eq!(evaluate(&battle, &members_and_hp()), expected);
    }

    #[test]
    fn fainted_members_score_nothing() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["bodyslam"]), make_mon("gengar", &["shadowball"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        battle.ai.roster[1].faint();
        battle.ai.side.stealth_rock = true;
        let weights = Weights {
            stealth_rock: -8,
            ..members_and_hp()
        };
        // Neutral to rock: -8 * 4 / 4.
        assert_eq!(evaluate(&battle, &weights), -8);
    }

    #[test]
    fn stealth_rock_scales_with_effectiveness() {
        let mut battle = battle(
            vec![make_mon("charizard", &["flamethrower"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        battle.ai.side.stealth_rock = true;
        let weights = Weights {
            stealth_rock: -10,
            ..Weights::default()
        };
        // Fire/Flying takes 4x from rock.
        assert_eq!(evaluate(&battle, &weights), -40);
    }

    #[test]
    fn spikes_skip_ungrounded_members() {
        let mut battle = battle(
            vec![make_mon("gyarados", &["waterfall"]), make_mon("snorlax", &["bodyslam"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        battle.ai.side.spikes = 2;
        let weights = Weights {
            spikes: -5,
            ..Weights::default()
        };
        assert_eq!(evaluate(&battle, &weights), -10);
    }

    #[test]
    fn toxic_grows_with_the_counter() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["bodyslam"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        let weights = Weights {
            poison: -10,
            ..Weights::default()
        };
        battle.ai.active_mut().status = Some(Status::Toxic);
        battle.ai.active_mut().toxic_counter = 4;
        assert_eq!(evaluate(&battle, &weights), -30);
    }

    #[test]
    fn screens_reward_matching_moves() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["bodyslam", "rest"])],
            vec![make_mon("jolteon", &["thunderbolt", "thunderwave"])],
        );
        battle.ai.side.reflect = 3;
        battle.ai.side.light_screen = 2;
        let weights = Weights {
            reflect: 7,
            light_screen: 11,
            ..Weights::default()
        };
        // The foe's special attack scores the AI's light screen against the foe.
        assert_eq!(evaluate(&battle, &weights), -22);
    }

    #[test]
    fn baton_pass_values_passable_boosts() {
        let mut battle = battle(
            vec![make_mon("lucario", &["batonpass", "swordsdance"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        battle.ai.active_mut().volatiles.stages[Stage::Atk as usize] = 2;
        let weights = Weights {
            attack_stage: 10,
            baton_pass: 3,
            ..Weights::default()
        };
        assert_eq!(evaluate(&battle, &weights), 20 + 3 * 20);
    }

    #[test]
    fn terminal_scores() {
        let mut battle = battle(
            vec![make_mon("pikachu", &["thunderbolt"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        assert_eq!(win(&battle), None);
        battle.foe.active_mut().faint();
        assert_eq!(win(&battle), Some(VICTORY));
        battle.ai.active_mut().faint();
        assert_eq!(win(&battle), Some(0));
        battle.foe.active_mut().current_hp = 1;
        assert_eq!(win(&battle), Some(-VICTORY));
    }

    #[test]
    fn finished_battles_evaluate_to_the_victory_bounds() {
        let mut battle = battle(
            vec![make_mon("pikachu", &["thunderbolt"])],
            vec![make_mon("snorlax", &["bodyslam"])],
        );
        let weights = Weights::builtin();
        battle.foe.active_mut().faint();
        assert_eq!(evaluate(&battle, weights), VICTORY);
        battle.ai.active_mut().faint();
        assert_eq!(evaluate(&battle, weights), 0);
        battle.foe.active_mut().current_hp = 1;
        assert_eq!(evaluate(&battle, weights), -VICTORY);
    }

    #[test]
    fn extreme_weights_stay_inside_victory() {
        let mut battle = battle(
            vec![make_mon("snorlax", &["splash", "tackle"])],
            vec![make_mon("snorlax", &["splash", "tackle"])],
        );
        let half = battle.foe.active().stats.hp / 2;
        battle.foe.active_mut().current_hp = half;
        let heavy = Weights {
            hp: 100_000_000,
            ..Weights::default()
        };
        assert_eq!(evaluate(&battle, &heavy), MAX_HEURISTIC);
        let inverted = Weights {
            hp: -100_000_000,
            ..Weights::default()
        };
        assert_eq!(evaluate(&battle, &inverted), -MAX_HEURISTIC);
    }

    #[test]
    fn sleep_clause_ignores_rest() {
        let mut battle = battle(
            vec![make_mon("pikachu", &["thunderbolt"]), make_mon("snorlax", &["rest"])],
            vec![make_mon("snorlax", &["bodyslam"]), make_mon("gengar", &["shadowball"])],
        );
        battle.ai.roster[0].status = Some(Status::Sleep);
        battle.ai.roster[1].status = Some(Status::Rest);
        assert_eq!(sleep_clause(&battle.ai), None);
        battle.ai.roster[1].status = Some(Status::Sleep);
        assert_eq!(sleep_clause(&battle.ai), Some(VICTORY));
        battle.foe.roster[0].status = Some(Status::Sleep);
        battle.foe.roster[1].status = Some(Status::Sleep);
        assert_eq!(sleep_clause(&battle.foe), Some(-VICTORY));
    }

    #[test]
    fn confidence_spans_the_score_range() {
        assert_eq!(confidence(VICTORY), 1.0);
        assert_eq!(confidence(-VICTORY), 0.0);
        assert_eq!(confidence(0), 0.5);
    }
}
