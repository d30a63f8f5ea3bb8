use pokemon_ai_core::evaluate::{evaluate, VICTORY};
use pokemon_ai_core::search::{Decision, Expectiminimax, SearchParams, TieBreak};
use pokemon_ai_core::sim::battle::{Action, Battle, Side, Team};
use pokemon_ai_core::sim::chance::{
    layer_outcomes, residual_outcomes, variable_outcomes, Branch, Distribution, Layer,
    ResidualBranch, LAYERS,
};
use pokemon_ai_core::sim::end_of_turn::resolve_end_of_turn;
use pokemon_ai_core::sim::field::Field;
use pokemon_ai_core::sim::legal::legal_actions;
use pokemon_ai_core::sim::order::{determine_order, Order};
use pokemon_ai_core::sim::pokemon::{Pokemon, Status};
use pokemon_ai_core::sim::random::{random_battle, RandomBattleConfig};
use pokemon_ai_core::sim::resolve::resolve_move;
use pokemon_ai_core::sim::stats::Nature;
use pokemon_ai_core::weights::Weights;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn make_pokemon(species: &str, moves: Vec<&str>) -> Pokemon {
    Pokemon::new(
        species,
        50,
        [0; 6],
        [31; 6],
        Nature::Hardy,
        moves.into_iter().map(|m| m.to_string()).collect(),
        "",
        None,
    )
    .expect("species exists")
}

fn make_battle(ai: Vec<Pokemon>, foe: Vec<Pokemon>) -> Battle {
    Battle::new(
        Team::new(ai, true).expect("team"),
        Team::new(foe, false).expect("team"),
        Field::default(),
    )
}

fn search(battle: &Battle, depth: u32) -> Decision {
    Expectiminimax::new(Weights::builtin(), SearchParams::default()).search(battle, depth)
}

fn params(prune: bool, tie_break: TieBreak, use_cache: bool) -> SearchParams {
    SearchParams {
        prune,
        tie_break,
        use_cache,
        ..SearchParams::default()
    }
}

#[test]
fn depth_zero_matches_evaluate() {
    let battle = make_battle(
        vec![make_pokemon("snorlax", vec!["bodyslam", "rest"])],
        vec![
            make_pokemon("gengar", vec!["shadowball"]),
            make_pokemon("scizor", vec!["bulletpunch"]),
        ],
    );
    let weights = Weights::builtin();
    let decision = Expectiminimax::new(weights, SearchParams::default()).search(&battle, 0);
    assert_eq!(decision.score, evaluate(&battle, weights));
    assert_eq!(decision.action, legal_actions(&battle, Side::Ai)[0]);
}

#[test]
fn knockout_scores_victory() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["splash", "thunderbolt"])],
        vec![make_pokemon("gyarados", vec!["waterfall"])],
    );
    battle.foe.active_mut().current_hp = 1;
    let decision = search(&battle, 1);
    assert_eq!(decision.action, Action::Move(1));
    assert_eq!(decision.score, VICTORY);
}

#[test]
fn losing_position_still_returns_a_legal_action() {
    let mut battle = make_battle(
        vec![make_pokemon("snorlax", vec!["tackle", "splash"])],
        vec![make_pokemon("blissey", vec!["softboiled"])],
    );
    let snorlax = battle.ai.active_mut();
    snorlax.current_hp = 1;
    snorlax.status = Some(Status::Burn);
    let decision = search(&battle, 1);
    assert_eq!(decision.score, -VICTORY);
    assert_eq!(decision.action, Action::Move(0));
    assert!(legal_actions(&battle, Side::Ai).contains(&decision.action));
}

#[test]
fn search_does_not_mutate_its_input() {
    let battle = make_battle(
        vec![
            make_pokemon("jolteon", vec!["thunderbolt", "uturn"]),
            make_pokemon("snorlax", vec!["bodyslam"]),
        ],
        vec![make_pokemon("gyarados", vec!["waterfall", "dragondance"])],
    );
    let before = battle.clone();
    Expectiminimax::new(Weights::builtin(), SearchParams::default()).search(&battle, 2);
    assert_eq!(battle, before);
}

// Jolteon outspeeds and Earthquake never knocks Swampert out; Swampert has
// no PP left and must Struggle. Only the two crit rolls branch, Swampert's
// nested under Jolteon's.
#[test]
fn struggle_scenario_is_the_crit_weighted_average() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["earthquake"])],
        vec![make_pokemon("swampert", vec!["surf"])],
    );
    battle.foe.active_mut().moves[0].pp = 0;
    assert_eq!(legal_actions(&battle, Side::Foe), vec![Action::Struggle]);
    assert_eq!(
        determine_order(&battle, Action::Move(0), Action::Struggle),
        Order::First(Side::Ai)
    );

    let weights = Weights::builtin();
    let score = |ai_crit: bool, foe_crit: bool| -> i128 {
        let mut next = battle.clone();
        let ai = Branch {
            crit: ai_crit,
            ..Branch::default()
        };
        let foe = Branch {
            crit: foe_crit,
            ..Branch::default()
        };
        let first = resolve_move(&mut next, Side::Ai, Action::Move(0), &ai);
        let second = resolve_move(&mut next, Side::Foe, Action::Struggle, &foe);
        assert!(!first.target_fainted && !second.target_fainted && !second.user_fainted);
        resolve_end_of_turn(&mut next, Side::Ai, &ResidualBranch::default());
        evaluate(&next, weights) as i128
    };
    let after = |ai_crit: bool| (15 * score(ai_crit, false) + score(ai_crit, true)) / 16;
    let expected = ((15 * after(false) + after(true)) / 16) as i64;

    let decision = search(&battle, 1);
    assert_eq!(decision.action, Action::Move(0));
    assert_eq!(decision.score, expected);
}

// Thunder Wave lands first, so Snorlax's Body Slam against the 1 HP Jolteon
// only fails when Snorlax is fully paralyzed.
#[test]
fn second_mover_rolls_for_a_status_taken_this_turn() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["thunderwave"])],
        vec![make_pokemon("snorlax", vec!["bodyslam"])],
    );
    battle.ai.active_mut().current_hp = 1;
    assert_eq!(
        determine_order(&battle, Action::Move(0), Action::Move(0)),
        Order::First(Side::Ai)
    );

    let mut paralyzed = battle.clone();
    resolve_move(&mut paralyzed, Side::Ai, Action::Move(0), &Branch::default());
    assert_eq!(paralyzed.foe.active().status, Some(Status::Paralysis));
    let activation = layer_outcomes(
        Layer::Activation,
        &paralyzed,
        Side::Foe,
        Action::Move(0),
        &Branch::default(),
    );
    assert!(activation
        .outcomes()
        .iter()
        .any(|(weight, branch)| *weight == 1 && branch.activation.fully_paralyzed));

    let mut held = paralyzed.clone();
    let mut branch = Branch::default();
    branch.activation.fully_paralyzed = true;
    resolve_move(&mut held, Side::Foe, Action::Move(0), &branch);
    assert!(!held.ai.active().is_fainted());
    resolve_end_of_turn(&mut held, Side::Ai, &ResidualBranch::default());
    let survived = evaluate(&held, Weights::builtin()) as i128;
    let expected = ((3 * -(VICTORY as i128) + survived) / 4) as i64;

    let decision = search(&battle, 1);
    assert_eq!(decision.score, expected);
    assert!(decision.score > -VICTORY);
}

// Roar outprioritizes Trick Room and drags Gengar in before the foe acts.
// Gengar must not use the move slot chosen for Snorlax.
#[test]
fn phazed_in_pokemon_loses_the_pending_action() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["roar"])],
        vec![
            make_pokemon("snorlax", vec!["trickroom"]),
            make_pokemon("gengar", vec!["shadowball"]),
        ],
    );
    battle.ai.active_mut().current_hp = 1;
    let (ai_action, foe_action) = (Action::Move(0), Action::Move(0));
    assert_eq!(
        determine_order(&battle, ai_action, foe_action),
        Order::First(Side::Ai)
    );

    let mut phazed = battle.clone();
    resolve_move(&mut phazed, Side::Ai, ai_action, &Branch::default());
    assert_eq!(phazed.foe.active, 1);
    resolve_end_of_turn(&mut phazed, Side::Ai, &ResidualBranch::default());
    assert!(!phazed.field.trick_room());

    let weights = Weights::builtin();
    let mut search = Expectiminimax::new(weights, SearchParams::default());
    let score = search.score_ordered(&battle, Side::Ai, ai_action, foe_action, 1);
    assert_eq!(score, evaluate(&phazed, weights));
    assert!(score > -VICTORY);
}

#[test]
fn phazing_picks_each_replacement_equally() {
    let battle = make_battle(
        vec![make_pokemon("skarmory", vec!["whirlwind"])],
        vec![
            make_pokemon("gyarados", vec!["waterfall"]),
            make_pokemon("gengar", vec!["shadowball"]),
            make_pokemon("blissey", vec!["softboiled"]),
        ],
    );
    assert_eq!(
        variable_outcomes(&battle, Side::Ai, Action::Move(0)),
        Distribution::uniform(vec![0, 1])
    );
    let lone = make_battle(
        vec![make_pokemon("skarmory", vec!["whirlwind"])],
        vec![make_pokemon("gyarados", vec!["waterfall"])],
    );
    assert_eq!(
        variable_outcomes(&lone, Side::Ai, Action::Move(0)),
        Distribution::certain(0)
    );
}

#[test]
fn extreme_weights_never_reach_victory() {
    let mut battle = make_battle(
        vec![make_pokemon("snorlax", vec!["splash", "tackle"])],
        vec![make_pokemon("snorlax", vec!["splash", "tackle"])],
    );
    let half = battle.foe.active().stats.hp / 2;
    battle.foe.active_mut().current_hp = half;
    for hp in [100_000_000, -100_000_000] {
        let weights = Weights {
            hp,
            ..Weights::default()
        };
        let decision = Expectiminimax::new(&weights, SearchParams::default()).search(&battle, 1);
        assert!(decision.score.abs() < VICTORY, "hp weight {hp}: {}", decision.score);
    }
}

#[test]
fn speed_tie_averages_both_orders() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["thunderbolt", "shadowball"])],
        vec![make_pokemon("jolteon", vec!["thunderbolt", "shadowball"])],
    );
    // Both at 1 HP: whoever moves first wins.
    battle.ai.active_mut().current_hp = 1;
    battle.foe.active_mut().current_hp = 1;
    let (ai_action, foe_action) = (Action::Move(1), Action::Move(0));
    assert_eq!(determine_order(&battle, ai_action, foe_action), Order::Tie);

    let weights = Weights::builtin();
    let mut search = Expectiminimax::new(weights, SearchParams::default());
    let ai_first = search.score_ordered(&battle, Side::Ai, ai_action, foe_action, 1);
    let foe_first = search.score_ordered(&battle, Side::Foe, ai_action, foe_action, 1);
    assert_eq!(ai_first, VICTORY);
    assert_eq!(foe_first, -VICTORY);
    assert_eq!(
        search.score_selection(&battle, ai_action, foe_action, 1),
        (ai_first + foe_first) / 2
    );
}

#[test]
fn chance_layers_conserve_probability() {
    let config = RandomBattleConfig {
        team_size: 2,
        move_count: 4,
        level: 50,
    };
    for seed in 0..8 {
        let battle = random_battle(&mut SmallRng::seed_from_u64(seed), &config).expect("battle");
        for side in [Side::Ai, Side::Foe] {
            for &action in &legal_actions(&battle, side) {
                let mut partials = vec![Branch::default()];
                for layer in LAYERS {
                    let mut next = Vec::new();
                    for partial in &partials {
                        let outcomes = layer_outcomes(layer, &battle, side, action, partial);
                        assert!(!outcomes.is_empty());
                        assert_eq!(outcomes.total_weight(), outcomes.denominator());
                        next.extend(outcomes.outcomes().iter().map(|(_, branch)| *branch));
                    }
                    partials = next;
                }
            }
        }
        let residual = residual_outcomes(&battle);
        assert_eq!(residual.total_weight(), residual.denominator());
    }
}

fn assert_same_decisions(battle: &Battle, depth: u32, use_cache: bool, seed: u64) {
    let weights = Weights::builtin();
    for tie_break in [TieBreak::FirstConsidered, TieBreak::LastConsidered] {
        let brute =
            Expectiminimax::new(weights, params(false, tie_break, false)).search(battle, depth);
        let pruned =
            Expectiminimax::new(weights, params(true, tie_break, use_cache)).search(battle, depth);
        assert_eq!(pruned, brute, "seed {seed}, {tie_break:?}, cache {use_cache}");
    }
}

#[test]
fn pruning_matches_brute_force_on_random_battles() {
    let config = RandomBattleConfig {
        team_size: 2,
        move_count: 2,
        level: 50,
    };
    for seed in 0..10 {
        let battle = random_battle(&mut SmallRng::seed_from_u64(seed), &config).expect("battle");
        assert_same_decisions(&battle, 1, false, seed);
    }
}

#[test]
fn cache_matches_brute_force_on_random_battles() {
    let config = RandomBattleConfig {
        team_size: 1,
        move_count: 2,
        level: 50,
    };
    for seed in 100..104 {
        let battle = random_battle(&mut SmallRng::seed_from_u64(seed), &config).expect("battle");
        assert_same_decisions(&battle, 2, true, seed);
        assert_same_decisions(&battle, 2, false, seed);
    }
}

#[test]
fn replacement_after_a_knockout_is_searched() {
    let mut battle = make_battle(
        vec![make_pokemon("jolteon", vec!["thunderbolt"])],
        vec![
            make_pokemon("gyarados", vec!["waterfall"]),
            make_pokemon("swampert", vec!["earthquake"]),
            make_pokemon("skarmory", vec!["spikes"]),
        ],
    );
    battle.foe.active_mut().current_hp = 1;
    let weights = Weights::builtin();
    let brute = Expectiminimax::new(weights, params(false, TieBreak::FirstConsidered, false))
        .search(&battle, 2);
    let pruned = Expectiminimax::new(weights, SearchParams::default()).search(&battle, 2);
    assert_eq!(pruned, brute);
    assert!(brute.score < VICTORY);
}
