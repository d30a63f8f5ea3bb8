//! Random battles drawn from the data tables, for the driver's `--random`
//! mode and for property tests.

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::moves::{all_moves, MoveData};
use crate::data::species::{SpeciesData, POKEDEX};
use crate::sim::battle::{Battle, Team, MAX_TEAM_SIZE};
use crate::sim::field::Field;
use crate::sim::pokemon::Pokemon;
use crate::sim::stats::Nature;

const NATURES: [Nature; 6] = [
    Nature::Hardy,
    Nature::Adamant,
    Nature::Modest,
    Nature::Jolly,
    Nature::Timid,
    Nature::Bold,
];

const ITEMS: [Option<&str>; 5] = [
    None,
    Some("Leftovers"),
    Some("Life Orb"),
    Some("Choice Scarf"),
    Some("Focus Sash"),
];

const SPREADS: [[u8; 6]; 3] = [
    [0, 252, 0, 0, 4, 252],
    [4, 0, 0, 252, 0, 252],
    [252, 0, 128, 0, 128, 0],
];

/// Shape of a generated battle.
#[derive(Clone, Copy, Debug)]
pub struct RandomBattleConfig {
    pub team_size: usize,
    pub move_count: usize,
    pub level: u8,
}

impl Default for RandomBattleConfig {
    fn default() -> Self {
        Self {
            team_size: 3,
            move_count: 4,
            level: 50,
        }
    }
}

fn random_pokemon(
    rng: &mut SmallRng,
    species: &SpeciesData,
    config: &RandomBattleConfig,
) -> Result<Pokemon> {
    let moves: Vec<&'static MoveData> = all_moves().collect();
    let (attacks, others): (Vec<&'static MoveData>, Vec<&'static MoveData>) =
        moves.into_iter().partition(|data| data.is_damaging());
    let move_count = config.move_count.clamp(1, 4);
    // At least one attack so generated battles make progress.
    let mut picked: Vec<&'static MoveData> = attacks
        .choose_multiple(rng, 1 + move_count / 2)
        .copied()
        .collect();
    picked.extend(others.choose_multiple(rng, move_count - picked.len().min(move_count)));
    picked.truncate(move_count);
    let nature = *NATURES.choose(rng).unwrap_or(&Nature::Hardy);
    let evs = *SPREADS.choose(rng).unwrap_or(&SPREADS[0]);
    let item = ITEMS[rng.gen_range(0..ITEMS.len())];
    Pokemon::new(
        species.id,
        config.level,
        evs,
        [31; 6],
        nature,
        picked.iter().map(|data| data.id.to_string()).collect(),
        "",
        item,
    )
    .with_context(|| format!("failed to build a random {}", species.name))
}

fn random_team(rng: &mut SmallRng, config: &RandomBattleConfig, is_ai: bool) -> Result<Team> {
    let pool: Vec<&'static SpeciesData> = POKEDEX.values().collect();
    let size = config.team_size.clamp(1, MAX_TEAM_SIZE);
    let roster = pool
        .choose_multiple(rng, size)
        .map(|species| random_pokemon(rng, species, config))
        .collect::<Result<Vec<_>>>()?;
    Team::new(roster, is_ai)
}

pub fn random_battle(rng: &mut SmallRng, config: &RandomBattleConfig) -> Result<Battle> {
    let ai = random_team(rng, config, true)?;
    let foe = random_team(rng, config, false)?;
    Ok(Battle::new(ai, foe, Field::default()))
}
