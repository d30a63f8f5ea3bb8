//! Random outcomes as exact integer-weighted distributions.
//!
//! Every random event a turn can contain is enumerated up front as a
//! [`Distribution`] and travels into resolution as plain values inside a
//! [`Branch`]. Resolution itself never rolls anything.

use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::data::moves::{Effect, MoveData, Variable, Vanish, STRUGGLE};
use crate::sim::battle::{Action, Battle, Side};
use crate::sim::damage::move_effectiveness;
use crate::sim::field::{effective_accuracy, Weather};
use crate::sim::pokemon::{Pokemon, Status};
use crate::sim::stats::{apply_stage, Stage, MAX_STAGE};

/// Outcomes with integer weights over a common denominator. Zero-weight
/// outcomes are never stored; the weights always sum to the denominator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution<T> {
    outcomes: Vec<(u64, T)>,
    denominator: u64,
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

impl<T> Distribution<T> {
    pub fn certain(value: T) -> Self {
        Self {
            outcomes: vec![(1, value)],
            denominator: 1,
        }
    }

    pub fn new(outcomes: Vec<(u64, T)>, denominator: u64) -> Self {
        let outcomes: Vec<(u64, T)> = outcomes
            .into_iter()
            .filter(|(weight, _)| *weight > 0)
            .collect();
        let total: u64 = outcomes.iter().map(|(weight, _)| weight).sum();
        assert_eq!(total, denominator, "weights must sum to the denominator");
        Self {
            outcomes,
            denominator,
        }
    }

    pub fn uniform(values: Vec<T>) -> Self {
        let denominator = values.len() as u64;
        Self::new(values.into_iter().map(|value| (1, value)).collect(), denominator)
    }

    pub fn outcomes(&self) -> &[(u64, T)] {
        &self.outcomes
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn total_weight(&self) -> u64 {
        self.outcomes.iter().map(|(weight, _)| weight).sum()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Distribution<U> {
        Distribution {
            outcomes: self
                .outcomes
                .into_iter()
                .map(|(weight, value)| (weight, f(value)))
                .collect(),
            denominator: self.denominator,
        }
    }

    /// Independent joint distribution.
    pub fn zip<U: Clone>(&self, other: &Distribution<U>) -> Distribution<(T, U)>
    where
        T: Clone,
    {
        let mut outcomes = Vec::with_capacity(self.len() * other.len());
        for (left_weight, left) in &self.outcomes {
            for (right_weight, right) in &other.outcomes {
                outcomes.push((left_weight * right_weight, (left.clone(), right.clone())));
            }
        }
        Distribution {
            outcomes,
            denominator: self.denominator * other.denominator,
        }
    }

    /// Conditional expansion: each outcome is replaced by the distribution `f`
    /// yields for it, rescaled onto a common denominator.
    pub fn then<U>(self, mut f: impl FnMut(&T) -> Distribution<U>) -> Distribution<U> {
        let children: Vec<(u64, Distribution<U>)> = self
            .outcomes
            .iter()
            .map(|(weight, value)| (*weight, f(value)))
            .collect();
        let common = children
            .iter()
            .fold(1, |acc, (_, child)| lcm(acc, child.denominator));
        let mut outcomes = Vec::new();
        for (weight, child) in children {
            let scale = common / child.denominator;
            for (child_weight, value) in child.outcomes {
                outcomes.push((weight * child_weight * scale, value));
            }
        }
        Distribution {
            outcomes,
            denominator: self.denominator * common,
        }
    }

    /// Exact weighted average of `f`, truncated once.
    pub fn expectation(&self, mut f: impl FnMut(&T) -> i64) -> i64 {
        let mut sum: i128 = 0;
        for (weight, value) in &self.outcomes {
            sum += *weight as i128 * f(value) as i128;
        }
        (sum / self.denominator as i128) as i64
    }
}

impl Distribution<bool> {
    pub fn chance(numerator: u64, denominator: u64) -> Self {
        let numerator = numerator.min(denominator);
        Self::new(vec![(numerator, true), (denominator - numerator, false)], denominator)
    }
}

/// Status and volatile rolls taken before a move executes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Activation {
    pub awaken: bool,
    pub thaw: bool,
    pub fully_paralyzed: bool,
    pub snap_out: bool,
    pub hit_self: bool,
}

/// One side's random outcomes for the move it uses this turn.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Branch {
    pub variable: usize,
    pub hit: bool,
    pub crit: bool,
    pub secondary: bool,
    pub activation: Activation,
    /// Damage roll percent, 85..=100.
    pub roll: u8,
}

impl Branch {
    pub fn new(roll: u8) -> Self {
        Self {
            variable: 0,
            hit: true,
            crit: false,
            secondary: false,
            activation: Activation::default(),
            roll,
        }
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::new(100)
    }
}

/// End-of-turn random outcomes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ResidualBranch {
    pub ai_shed_skin: bool,
    pub foe_shed_skin: bool,
}

impl ResidualBranch {
    pub fn shed_skin(&self, side: Side) -> bool {
        match side {
            Side::Ai => self.ai_shed_skin,
            Side::Foe => self.foe_shed_skin,
        }
    }
}

pub const MAGNITUDE_POWER: [u16; 7] = [10, 30, 50, 70, 90, 110, 150];
const MAGNITUDE_WEIGHTS: [u64; 7] = [5, 10, 20, 30, 20, 10, 5];
const PSYWAVE_OUTCOMES: usize = 11;
const MAX_PROTECT_HALVINGS: u8 = 8;

/// The move an action uses, if any.
pub fn action_move(battle: &Battle, side: Side, action: Action) -> Option<&'static MoveData> {
    match action {
        Action::Move(slot) => battle.team(side).active().moves.get(slot).map(|slot| slot.data),
        Action::Struggle => Some(&STRUGGLE),
        Action::Switch(_) => None,
    }
}

pub fn variable_outcomes(battle: &Battle, side: Side, action: Action) -> Distribution<usize> {
    let Some(data) = action_move(battle, side, action) else {
        return Distribution::certain(0);
    };
    let user = battle.team(side).active();
    match data.variable {
        Variable::None => Distribution::certain(0),
        Variable::Magnitude => Distribution::new(
            MAGNITUDE_WEIGHTS.iter().copied().zip(0..).collect(),
            100,
        ),
        Variable::Psywave => Distribution::uniform((0..PSYWAVE_OUTCOMES).collect()),
        Variable::TriAttack => Distribution::uniform(vec![0, 1, 2]),
        Variable::Rampage => {
            if user.volatiles.rampage.is_some() {
                Distribution::certain(0)
            } else {
                Distribution::uniform(vec![0, 1])
            }
        }
        Variable::Protect => {
            let halvings = user.volatiles.protect_count.min(MAX_PROTECT_HALVINGS);
            let denominator = 1u64 << halvings;
            Distribution::new(vec![(1, 0), (denominator - 1, 1)], denominator)
        }
        Variable::Phaze => {
            let count = battle.team(side.other()).replacements().count();
            if count == 0 {
                Distribution::certain(0)
            } else {
                Distribution::uniform((0..count).collect())
            }
        }
    }
}

fn reaches_vanished(data: &MoveData, vanish: Vanish) -> bool {
    match vanish {
        Vanish::Dig => matches!(data.id, "earthquake" | "magnitude"),
        Vanish::Fly => data.id == "thunder",
    }
}

/// Whether `data` can touch a target hidden by Fly or Dig.
pub fn can_reach(data: &MoveData, target: &Pokemon) -> bool {
    match target.volatiles.vanished {
        Some(vanish) => reaches_vanished(data, vanish),
        None => true,
    }
}

/// Percent chance that `side`'s move hits, computed from the current state.
pub fn chance_to_hit(battle: &Battle, side: Side, action: Action) -> u8 {
    let Some(data) = action_move(battle, side, action) else {
        return 100;
    };
    if !data.targets_foe() {
        return 100;
    }
    let user = battle.team(side).active();
    let target = battle.team(side.other()).active();
    if !can_reach(data, target) {
        return 0;
    }
    if data.effect == Effect::OneHitKo {
        if target.level > user.level {
            return 0;
        }
        return (30 + (user.level - target.level) as u32).min(100) as u8;
    }
    let weather = battle.field.weather();
    let Some(accuracy) = effective_accuracy(data, weather) else {
        return 100;
    };
    let stage = (user.volatiles.stage(Stage::Accuracy) - target.volatiles.stage(Stage::Evasion))
        .clamp(-MAX_STAGE, MAX_STAGE);
    let mut chance = apply_stage(accuracy as u32, stage, 3);
    if battle.field.gravity() {
        chance = chance * 5 / 3;
    }
    if weather == Some(Weather::Sand) && target.ability == Ability::SandVeil {
        chance = chance * 4 / 5;
    }
    chance.min(100) as u8
}

pub fn accuracy_outcomes(battle: &Battle, side: Side, action: Action) -> Distribution<bool> {
    Distribution::chance(chance_to_hit(battle, side, action) as u64, 100)
}

const CRIT_RATES: [(u64, u64); 5] = [(1, 16), (1, 8), (1, 4), (1, 3), (1, 2)];

pub fn crit_outcomes(battle: &Battle, side: Side, action: Action) -> Distribution<bool> {
    let Some(data) = action_move(battle, side, action) else {
        return Distribution::certain(false);
    };
    let user = battle.team(side).active();
    let target_team = battle.team(side.other());
    let target = target_team.active();
    let fixed = matches!(data.effect, Effect::Fixed(_) | Effect::OneHitKo);
    if !data.is_damaging()
        || fixed
        || target.ability.blocks_crits()
        || target_team.side.lucky_chant > 0
        || move_effectiveness(data, target, battle.field.gravity()) == 0
    {
        return Distribution::certain(false);
    }
    let mut stage = 0;
    if data.flags.high_crit {
        stage += 1;
    }
    if user.volatiles.focus_energy {
        stage += 2;
    }
    if user.ability == Ability::SuperLuck {
        stage += 1;
    }
    if user.item == Item::ScopeLens {
        stage += 1;
    }
    let (numerator, denominator) = CRIT_RATES[stage.min(CRIT_RATES.len() - 1)];
    Distribution::chance(numerator, denominator)
}

pub fn secondary_outcomes(battle: &Battle, side: Side, action: Action) -> Distribution<bool> {
    let Some(secondary) = action_move(battle, side, action).and_then(|data| data.secondary) else {
        return Distribution::certain(false);
    };
    let mut chance = secondary.chance as u64;
    if battle.team(side).active().ability == Ability::SereneGrace {
        chance *= 2;
    }
    Distribution::chance(chance, 100)
}

/// Sleep and confusion both end on attempt `k` with hazard 1/(6 - k), which
/// gives lengths of 2 to 5 attempts with equal weight.
fn wake_hazard(attempt: u8) -> Distribution<bool> {
    match attempt {
        0 | 1 => Distribution::certain(false),
        2..=4 => Distribution::chance(1, 6 - attempt as u64),
        _ => Distribution::certain(true),
    }
}

pub fn sleep_step(pokemon: &Pokemon) -> u8 {
    if pokemon.status == Some(Status::Sleep) && pokemon.ability.wakes_up_early() {
        2
    } else {
        1
    }
}

pub const REST_TURNS: u8 = 2;

pub fn activation_outcomes(
    battle: &Battle,
    side: Side,
    action: Action,
) -> Distribution<Activation> {
    let Some(data) = action_move(battle, side, action) else {
        return Distribution::certain(Activation::default());
    };
    let user = battle.team(side).active();
    if user.volatiles.recharging {
        return Distribution::certain(Activation::default());
    }
    let status = match user.status {
        Some(Status::Freeze) if !data.flags.thaws_user => {
            Distribution::chance(1, 5).map(|thaw| Activation {
                thaw,
                ..Activation::default()
            })
        }
        Some(Status::Sleep) => {
            wake_hazard(user.sleep_turns.saturating_add(sleep_step(user))).map(|awaken| Activation {
                awaken,
                ..Activation::default()
            })
        }
        _ => Distribution::certain(Activation::default()),
    };
    let confusion = user.volatiles.confusion;
    let paralyzed = user.status == Some(Status::Paralysis);
    status.then(|activation| {
        let blocked_by_status = match user.status {
            Some(Status::Freeze) => !data.flags.thaws_user && !activation.thaw,
            Some(Status::Sleep) => !activation.awaken,
            Some(Status::Rest) => user.sleep_turns.saturating_add(1) <= REST_TURNS,
            _ => false,
        };
        if blocked_by_status {
            return Distribution::certain(*activation);
        }
        let base = *activation;
        let confused = match confusion {
            Some(turns) => wake_hazard(turns.saturating_add(1)).then(|snap_out| {
                if *snap_out {
                    Distribution::certain(Activation {
                        snap_out: true,
                        ..base
                    })
                } else {
                    Distribution::chance(1, 2).map(|hit_self| Activation { hit_self, ..base })
                }
            }),
            None => Distribution::certain(base),
        };
        confused.then(|activation| {
            if paralyzed && !activation.hit_self {
                Distribution::chance(1, 4).map(|fully_paralyzed| Activation {
                    fully_paralyzed,
                    ..*activation
                })
            } else {
                Distribution::certain(*activation)
            }
        })
    })
}

/// Shed Skin cures a status with probability 3/10 at the end of the turn.
pub fn shed_skin_outcomes(battle: &Battle, side: Side) -> Distribution<bool> {
    let pokemon = battle.team(side).active();
    if !pokemon.is_fainted() && pokemon.ability == Ability::ShedSkin && pokemon.status.is_some() {
        Distribution::chance(3, 10)
    } else {
        Distribution::certain(false)
    }
}

pub fn residual_outcomes(battle: &Battle) -> Distribution<ResidualBranch> {
    shed_skin_outcomes(battle, Side::Ai)
        .zip(&shed_skin_outcomes(battle, Side::Foe))
        .map(|(ai_shed_skin, foe_shed_skin)| ResidualBranch {
            ai_shed_skin,
            foe_shed_skin,
        })
}

/// The per-move chance layers, in the order the search nests them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layer {
    Variable,
    Accuracy,
    Crit,
    Secondary,
    Activation,
}

pub const LAYERS: [Layer; 5] = [
    Layer::Variable,
    Layer::Accuracy,
    Layer::Crit,
    Layer::Secondary,
    Layer::Activation,
];

/// One layer of `side`'s move, applied on top of `partial`. Built from the
/// position the move is used in, after anything that moved before it.
pub fn layer_outcomes(
    layer: Layer,
    battle: &Battle,
    side: Side,
    action: Action,
    partial: &Branch,
) -> Distribution<Branch> {
    let partial = *partial;
    match layer {
        Layer::Variable => {
            variable_outcomes(battle, side, action).map(|variable| Branch { variable, ..partial })
        }
        Layer::Accuracy => {
            accuracy_outcomes(battle, side, action).map(|hit| Branch { hit, ..partial })
        }
        Layer::Crit => crit_outcomes(battle, side, action).map(|crit| Branch { crit, ..partial }),
        Layer::Secondary => secondary_outcomes(battle, side, action)
            .map(|secondary| Branch { secondary, ..partial }),
        Layer::Activation => activation_outcomes(battle, side, action)
            .map(|activation| Branch { activation, ..partial }),
    }
}
