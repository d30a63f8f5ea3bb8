use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::data::moves::{FixedDamage, MoveData};
use crate::data::types::{effectiveness, Effectiveness, Type, NEUTRAL};
use crate::sim::battle::SideConditions;
use crate::sim::field::{weather_damage_modifier, Field, Weather};
use crate::sim::pokemon::{Pokemon, Status};
use crate::sim::stats::{apply_stage, Stage};

/// Multipliers in 4096ths, applied in the order of the damage formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DamageModifiers {
    pub weather: u32,
    /// Whole-number crit multiplier (1 = no crit).
    pub crit: u32,
    pub stab: u32,
    pub burn: u32,
    pub final_modifier: u32,
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self {
            weather: 4096,
            crit: 1,
            stab: 4096,
            burn: 4096,
            final_modifier: 4096,
        }
    }
}

pub const STAB: u32 = 6144;
pub const ADAPTABILITY_STAB: u32 = 8192;

pub(crate) fn chain_modifier(previous: u32, next: u32) -> u32 {
    ((previous as u64 * next as u64 + 2048) >> 12) as u32
}

fn apply_modifier(value: u32, modifier: u32) -> u32 {
    if modifier == 0 {
        return 0;
    }
    ((value as u64 * modifier as u64 + 2048 - 1) / 4096) as u32
}

fn apply_random_factor(value: u32, roll: u8) -> u32 {
    let percent = roll.clamp(85, 100) as u32;
    value.saturating_mul(percent) / 100
}

fn apply_type_effectiveness(value: u32, type_effectiveness: Effectiveness) -> u32 {
    value.saturating_mul(type_effectiveness as u32) / NEUTRAL as u32
}

fn compute_base_damage(
    attacker_level: u8,
    attacker_stat: u16,
    defender_stat: u16,
    move_power: u16,
) -> u32 {
    let level = attacker_level as u32;
    let attack = attacker_stat as u32;
    let defense = defender_stat.max(1) as u32;
    let mut base_damage = 2 * level / 5 + 2;
    base_damage = base_damage.saturating_mul(move_power as u32);
    base_damage = base_damage.saturating_mul(attack);
    base_damage /= defense;
    base_damage /= 50;
    base_damage
}

pub fn calculate_damage_with_modifiers(
    attacker_level: u8,
    attacker_atk_or_spa: u16,
    defender_def_or_spd: u16,
    move_power: u16,
    type_effectiveness: Effectiveness,
    roll: u8,
    modifiers: DamageModifiers,
) -> u16 {
    if type_effectiveness == 0 {
        return 0;
    }
    let mut damage = compute_base_damage(
        attacker_level,
        attacker_atk_or_spa,
        defender_def_or_spd,
        move_power,
    );
    damage = damage.saturating_add(2);
    damage = apply_modifier(damage, modifiers.weather);
    damage = damage.saturating_mul(modifiers.crit.max(1));
    damage = apply_random_factor(damage, roll);
    damage = apply_modifier(damage, modifiers.stab);
    damage = apply_type_effectiveness(damage, type_effectiveness);
    damage = apply_modifier(damage, modifiers.burn);
    damage = apply_modifier(damage, modifiers.final_modifier);
    damage.clamp(1, u16::MAX as u32) as u16
}

pub fn calculate_damage(
    attacker_level: u8,
    attacker_atk_or_spa: u16,
    defender_def_or_spd: u16,
    move_power: u16,
    type_effectiveness: Effectiveness,
    stab: bool,
    roll: u8,
) -> u16 {
    calculate_damage_with_modifiers(
        attacker_level,
        attacker_atk_or_spa,
        defender_def_or_spd,
        move_power,
        type_effectiveness,
        roll,
        DamageModifiers {
            stab: if stab { STAB } else { 4096 },
            ..DamageModifiers::default()
        },
    )
}

pub fn is_stab(move_type: Type, pokemon_types: [Type; 2]) -> bool {
    pokemon_types.iter().any(|t| *t == move_type)
}

/// Effectiveness of `data` against `defender`, including Levitate / Magnet Rise
/// and Gravity grounding Flying types.
pub fn move_effectiveness(data: &MoveData, defender: &Pokemon, gravity: bool) -> Effectiveness {
    if data.move_type != Type::Ground {
        return effectiveness(data.move_type, defender.types());
    }
    if !defender.is_grounded(gravity) {
        return 0;
    }
    let [first, second] = defender.types();
    let types = match (first == Type::Flying, second == Type::Flying) {
        (true, true) => [Type::Typeless, Type::Typeless],
        (true, false) => [second, second],
        (false, true) => [first, first],
        (false, false) => [first, second],
    };
    effectiveness(Type::Ground, types)
}

/// Damage for moves that ignore stats. `variable` is the Psywave index.
pub fn fixed_damage(
    kind: FixedDamage,
    attacker: &Pokemon,
    defender: &Pokemon,
    variable: usize,
) -> u16 {
    match kind {
        FixedDamage::Amount(amount) => amount,
        FixedDamage::Level => attacker.level as u16,
        FixedDamage::HalfHp => (defender.current_hp / 2).max(1),
        FixedDamage::Endeavor => defender.current_hp.saturating_sub(attacker.current_hp),
        FixedDamage::Psywave => {
            let tenths = 5 + variable as u16;
            (attacker.level as u16 * tenths / 10).max(1)
        }
    }
}

fn attack_stat(attacker: &Pokemon, data: &MoveData, crit: bool) -> u16 {
    let (raw, stage) = if data.is_physical() {
        (attacker.stats.atk, Stage::Atk)
    } else {
        (attacker.stats.spa, Stage::Spa)
    };
    let mut stage = attacker.volatiles.stage(stage);
    if crit {
        stage = stage.max(0);
    }
    let mut value = apply_stage(raw as u32, stage, 2);
    match (attacker.item, data.is_physical()) {
        (Item::ChoiceBand, true) | (Item::ChoiceSpecs, false) => value = value * 3 / 2,
        _ => {}
    }
    if data.is_physical() {
        if attacker.ability == Ability::Guts && attacker.status.is_some() {
            value = value * 3 / 2;
        }
        if attacker.volatiles.slow_start > 0 {
            value /= 2;
        }
    }
    value.clamp(1, u16::MAX as u32) as u16
}

fn defense_stat(defender: &Pokemon, data: &MoveData, crit: bool, field: &Field) -> u16 {
    let (raw, stage) = if data.is_physical() {
        (defender.stats.def, Stage::Def)
    } else {
        (defender.stats.spd, Stage::Spd)
    };
    let mut stage = defender.volatiles.stage(stage);
    if crit {
        stage = stage.min(0);
    }
    let mut value = apply_stage(raw as u32, stage, 2);
    if !data.is_physical() && field.is(Weather::Sand) && defender.has_type(Type::Rock) {
        value = value * 3 / 2;
    }
    value.clamp(1, u16::MAX as u32) as u16
}

/// Full damage formula for a power-based move.
#[allow(clippy::too_many_arguments)]
pub fn move_damage(
    attacker: &Pokemon,
    defender: &Pokemon,
    defender_side: &SideConditions,
    field: &Field,
    data: &MoveData,
    power: u16,
    crit: bool,
    roll: u8,
) -> u16 {
    let type_effectiveness = move_effectiveness(data, defender, field.gravity());
    if type_effectiveness == 0 || power == 0 {
        return 0;
    }
    let power = if data.move_type == Type::Fire && defender.ability == Ability::Heatproof {
        (power / 2).max(1)
    } else {
        power
    };
    let stab = if !is_stab(data.move_type, attacker.types()) {
        4096
    } else if attacker.ability == Ability::Adaptability {
        ADAPTABILITY_STAB
    } else {
        STAB
    };
    let burn = if data.is_physical()
        && attacker.status == Some(Status::Burn)
        && attacker.ability != Ability::Guts
    {
        2048
    } else {
        4096
    };
    let mut final_modifier = 4096;
    let screened = if data.is_physical() {
        defender_side.reflect > 0
    } else {
        defender_side.light_screen > 0
    };
    if screened && !crit {
        final_modifier = chain_modifier(final_modifier, 2048);
    }
    if type_effectiveness > NEUTRAL {
        if matches!(defender.ability, Ability::Filter | Ability::SolidRock) {
            final_modifier = chain_modifier(final_modifier, 3072);
        }
        if attacker.item == Item::ExpertBelt {
            final_modifier = chain_modifier(final_modifier, 4915);
        }
    }
    if attacker.item == Item::LifeOrb {
        final_modifier = chain_modifier(final_modifier, 5324);
    }
    let crit = match (crit, attacker.ability) {
        (false, _) => 1,
        (true, Ability::Sniper) => 3,
        (true, _) => 2,
    };
    calculate_damage_with_modifiers(
        attacker.level,
        attack_stat(attacker, data, crit > 1),
        defense_stat(defender, data, crit > 1, field),
        power,
        type_effectiveness,
        roll,
        DamageModifiers {
            weather: weather_damage_modifier(field.weather(), data.move_type),
            crit,
            stab,
            burn,
            final_modifier,
        },
    )
}
