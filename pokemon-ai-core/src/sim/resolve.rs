//! Executes one side's action against a battle the caller owns. All random
//! outcomes come from the [`Branch`]; nothing here rolls dice.

use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::data::moves::{
    Effect, Hazard, MoveData, Screen, SecondaryEffect, StatusEffect, Vanish, Who, CONFUSION_HIT,
    STRUGGLE,
};
use crate::data::types::Type;
use crate::sim::battle::{Action, Battle, Side, SideConditions, Team};
use crate::sim::chance::{can_reach, sleep_step, Branch, MAGNITUDE_POWER, REST_TURNS};
use crate::sim::damage::{fixed_damage, move_damage, move_effectiveness};
use crate::sim::field::{Field, Weather, GRAVITY_TURNS, TRICK_ROOM_TURNS};
use crate::sim::pokemon::{Pokemon, Status};
use crate::sim::stats::Stage;
use crate::sim::switching::{perform_switch, SwitchKind};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    /// HP removed from the target or its substitute.
    pub damage: u16,
    pub self_switch: Option<SwitchKind>,
    pub user_fainted: bool,
    pub target_fainted: bool,
}

const SCREEN_TURNS: u8 = 5;
const TAILWIND_TURNS: u8 = 3;
const TAUNT_TURNS: u8 = 3;
const ENCORE_TURNS: u8 = 3;
const DISABLE_TURNS: u8 = 4;
const BLOCK_TURNS: u8 = 5;
const PARTIAL_TRAP_TURNS: u8 = 4;
const PERISH_COUNT: u8 = 4;
const UPROAR_TURNS: u8 = 3;
const YAWN_TURNS: u8 = 2;
const WISH_TURNS: u8 = 2;

pub fn status_of(effect: StatusEffect) -> Status {
    match effect {
        StatusEffect::Burn => Status::Burn,
        StatusEffect::Freeze => Status::Freeze,
        StatusEffect::Paralysis => Status::Paralysis,
        StatusEffect::Poison => Status::Poison,
        StatusEffect::Toxic => Status::Toxic,
        StatusEffect::Sleep => Status::Sleep,
    }
}

/// Resolves `action` for `user`'s active Pokemon.
///
/// Panics if the user's active Pokemon has fainted, the slot is out of range,
/// or a 0 PP move is chosen outside a lock.
pub fn resolve_move(
    battle: &mut Battle,
    user: Side,
    action: Action,
    branch: &Branch,
) -> MoveOutcome {
    assert!(
        !battle.team(user).active().is_fainted(),
        "{user:?} cannot act with a fainted active Pokemon"
    );
    let mut outcome = match action {
        Action::Switch(index) => {
            let gravity = battle.field.gravity();
            perform_switch(battle.team_mut(user), index, gravity, SwitchKind::Voluntary);
            MoveOutcome::default()
        }
        Action::Move(slot) => {
            let active = battle.team(user).active();
            assert!(slot < active.moves.len(), "move slot {slot} out of range");
            assert!(
                active.moves[slot].pp > 0 || active.locked_move() == Some(slot),
                "{} has no PP left for {}",
                active.name(),
                active.moves[slot].data.name
            );
            use_move(battle, user, Some(slot), branch)
        }
        Action::Struggle => use_move(battle, user, None, branch),
    };
    outcome.user_fainted = battle.team(user).active().is_fainted();
    outcome.target_fainted = battle.team(user.other()).active().is_fainted();
    outcome
}

fn move_power(data: &MoveData, variable: usize) -> u16 {
    if data.id == "magnitude" {
        MAGNITUDE_POWER[variable.min(MAGNITUDE_POWER.len() - 1)]
    } else {
        data.power
    }
}

/// A move that fails to execute also ends any multi-turn commitment.
fn interrupt(pokemon: &mut Pokemon) {
    pokemon.volatiles.rampage = None;
    pokemon.volatiles.vanished = None;
}

fn wake(pokemon: &mut Pokemon) {
    pokemon.clear_status();
    pokemon.volatiles.nightmare = false;
}

fn spend_pp(pokemon: &mut Pokemon, slot: Option<usize>, pressure: bool) {
    if let Some(slot) = slot {
        let cost = if pressure { 2 } else { 1 };
        let pp = &mut pokemon.moves[slot].pp;
        *pp = pp.saturating_sub(cost);
    }
}

fn use_move(battle: &mut Battle, side: Side, slot: Option<usize>, branch: &Branch) -> MoveOutcome {
    let (own, other, field) = battle.split_mut(side);
    let data: &'static MoveData = match slot {
        Some(slot) => own.active().moves[slot].data,
        None => &STRUGGLE,
    };
    let continuing = slot.is_some() && own.active().locked_move() == slot;
    let pressure = {
        let foe = other.active();
        !foe.is_fainted() && foe.ability == Ability::Pressure
    };
    let user = own.active_mut();
    user.volatiles.moved = true;
    if !can_execute(user, other.active(), field, slot, data, continuing, pressure, branch) {
        return MoveOutcome::default();
    }

    if !continuing {
        spend_pp(user, slot, pressure);
    }
    user.last_move = slot;
    if !matches!(data.effect, Effect::Protect | Effect::Endure) {
        user.volatiles.protect_count = 0;
    }
    if user.ability == Ability::Truant {
        user.volatiles.loaf = true;
    }
    match data.effect {
        Effect::Rampage => {
            user.volatiles.rampage = Some(match user.volatiles.rampage {
                Some(left) => left.saturating_sub(1),
                None => 1 + branch.variable as u8,
            });
        }
        Effect::Uproar if !continuing => {
            user.volatiles.uproar = UPROAR_TURNS;
            field.uproar = field.uproar.max(UPROAR_TURNS);
        }
        Effect::TwoTurn(vanish) => {
            if user.volatiles.vanished.is_none() {
                user.volatiles.vanished = Some(vanish);
                return MoveOutcome::default();
            }
            user.volatiles.vanished = None;
        }
        _ => {}
    }

    let outcome = execute(own, other, field, data, branch);
    if data.effect == Effect::SelfDestruct {
        own.active_mut().faint();
    }
    outcome
}

#[allow(clippy::too_many_arguments)]
fn can_execute(
    user: &mut Pokemon,
    foe: &Pokemon,
    field: &Field,
    slot: Option<usize>,
    data: &MoveData,
    continuing: bool,
    pressure: bool,
    branch: &Branch,
) -> bool {
    if user.volatiles.recharging {
        user.volatiles.recharging = false;
        return false;
    }
    let activation = branch.activation;
    match user.status {
        Some(Status::Freeze) => {
            if activation.thaw || data.flags.thaws_user {
                user.clear_status();
            } else {
                interrupt(user);
                return false;
            }
        }
        Some(Status::Sleep) => {
            user.sleep_turns = user.sleep_turns.saturating_add(sleep_step(user));
            if activation.awaken {
                wake(user);
            } else {
                interrupt(user);
                return false;
            }
        }
        Some(Status::Rest) => {
            user.sleep_turns = user.sleep_turns.saturating_add(1);
            if user.sleep_turns > REST_TURNS {
                wake(user);
            } else {
                interrupt(user);
                return false;
            }
        }
        _ => {}
    }

    if let Some(slot) = slot {
        let disabled = user.volatiles.disable.is_some_and(|(disabled, _)| disabled == slot);
        let heal_blocked = user.volatiles.heal_block > 0 && data.flags.heals;
        let imprisoned = foe.volatiles.imprison && !foe.is_fainted() && foe.knows(data);
        let no_pp = user.moves[slot].pp == 0 && !continuing;
        if no_pp || disabled || heal_blocked || imprisoned {
            interrupt(user);
            return false;
        }
    }

    if user.ability == Ability::Truant && user.volatiles.loaf {
        user.volatiles.loaf = false;
        return false;
    }

    if let Some(turns) = user.volatiles.confusion {
        if activation.snap_out {
            user.volatiles.confusion = None;
        } else {
            user.volatiles.confusion = Some(turns.saturating_add(1));
            if activation.hit_self {
                let damage = move_damage(
                    user,
                    user,
                    &SideConditions::default(),
                    field,
                    &CONFUSION_HIT,
                    CONFUSION_HIT.power,
                    false,
                    branch.roll,
                );
                user.take_damage(damage);
                if !continuing {
                    spend_pp(user, slot, pressure);
                }
                interrupt(user);
                return false;
            }
        }
    }

    if user.volatiles.flinch {
        interrupt(user);
        return false;
    }

    let taunted = slot.is_some() && user.volatiles.taunt > 0 && !data.is_damaging();
    if taunted || (field.gravity() && data.flags.gravity_blocked) {
        interrupt(user);
        return false;
    }

    if user.status == Some(Status::Paralysis) && activation.fully_paralyzed {
        if !continuing {
            spend_pp(user, slot, pressure);
        }
        interrupt(user);
        return false;
    }
    true
}

fn execute(
    own: &mut Team,
    other: &mut Team,
    field: &mut Field,
    data: &MoveData,
    branch: &Branch,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    if data.targets_foe() {
        let target = other.active();
        if target.is_fainted() || target.volatiles.protect {
            return outcome;
        }
        if !can_reach(data, target) || !branch.hit {
            let user = own.active_mut();
            if data.effect == Effect::CrashOnMiss && !user.ability.blocks_indirect_damage() {
                let crash = user.fraction(2);
                user.take_damage(crash);
            }
            return outcome;
        }
    }
    if data.is_damaging() {
        attack(own, other, field, data, branch, &mut outcome);
    } else {
        apply_status_move(own, other, field, data, branch, &mut outcome);
    }
    outcome
}

fn attack(
    own: &mut Team,
    other: &mut Team,
    field: &mut Field,
    data: &MoveData,
    branch: &Branch,
    outcome: &mut MoveOutcome,
) {
    let attacker = own.active();
    let defender = other.active();
    if move_effectiveness(data, defender, field.gravity()) == 0 {
        return;
    }
    let damage = match data.effect {
        Effect::Fixed(kind) => fixed_damage(kind, attacker, defender, branch.variable),
        Effect::OneHitKo if defender.level <= attacker.level => defender.current_hp,
        Effect::OneHitKo => 0,
        _ => move_damage(
            attacker,
            defender,
            &other.side,
            field,
            data,
            move_power(data, branch.variable),
            branch.crit,
            branch.roll,
        ),
    };
    if damage == 0 {
        return;
    }
    let liquid_ooze = defender.ability == Ability::LiquidOoze;

    let target = other.active_mut();
    let behind_substitute = target.volatiles.substitute_hp > 0;
    let dealt = if behind_substitute {
        let absorbed = damage.min(target.volatiles.substitute_hp);
        target.volatiles.substitute_hp -= absorbed;
        absorbed
    } else {
        let mut dealt = damage.min(target.current_hp);
        if dealt == target.current_hp {
            let sash = target.item == Item::FocusSash && target.current_hp == target.stats.hp;
            if data.effect == Effect::FalseSwipe || target.volatiles.endure {
                dealt -= 1;
            } else if sash {
                dealt -= 1;
                target.item = Item::None;
            }
        }
        target.take_damage(dealt)
    };
    outcome.damage = dealt;

    let user = own.active_mut();
    let guarded = user.ability.blocks_indirect_damage();
    match data.effect {
        Effect::Recoil(denominator) if !guarded && user.ability != Ability::RockHead => {
            user.take_damage((dealt / denominator as u16).max(1));
        }
        Effect::Struggle => {
            let recoil = user.fraction(4);
            user.take_damage(recoil);
        }
        Effect::Drain => {
            let amount = (dealt / 2).max(1);
            if liquid_ooze && !behind_substitute {
                if !guarded {
                    user.take_damage(amount);
                }
            } else if user.volatiles.heal_block == 0 {
                user.heal(amount);
            }
        }
        _ => {}
    }
    if user.item == Item::LifeOrb && !guarded && !user.is_fainted() {
        let recoil = user.fraction(10);
        user.take_damage(recoil);
    }

    match data.effect {
        Effect::Boost(Who::User, boosts) if !own.active().is_fainted() => {
            let user = own.active_mut();
            for (stage, delta) in boosts {
                user.volatiles.boost(*stage, *delta);
            }
        }
        Effect::Recharge => own.active_mut().volatiles.recharging = true,
        Effect::RapidSpin if !own.active().is_fainted() => {
            own.side.spikes = 0;
            own.side.toxic_spikes = 0;
            own.side.stealth_rock = false;
            let user = own.active_mut();
            user.volatiles.leech_seed = false;
            user.volatiles.partial_trap = 0;
        }
        Effect::UTurn if !own.active().is_fainted() && own.has_replacement() => {
            outcome.self_switch = Some(SwitchKind::Pivot);
        }
        Effect::PartialTrap if !behind_substitute => {
            let target = other.active_mut();
            if !target.is_fainted() && target.volatiles.partial_trap == 0 {
                target.volatiles.partial_trap = PARTIAL_TRAP_TURNS;
            }
        }
        _ => {}
    }

    if branch.secondary && !behind_substitute {
        if let Some(secondary) = data.secondary {
            apply_secondary(own, other, field, secondary.effect, branch.variable);
        }
    }
}

/// Major status from a move or secondary effect, subject to Safeguard,
/// Uproar and sunlight.
fn inflict(team: &mut Team, field: &Field, status: Status) -> bool {
    if team.side.safeguard > 0 {
        return false;
    }
    if status == Status::Sleep && field.uproar > 0 {
        return false;
    }
    if status == Status::Freeze && field.is(Weather::Sun) {
        return false;
    }
    team.active_mut().try_set_status(status)
}

fn confuse(team: &mut Team) -> bool {
    let safeguard = team.side.safeguard > 0;
    let target = team.active_mut();
    if safeguard || target.is_fainted() || target.volatiles.confusion.is_some() {
        return false;
    }
    target.volatiles.confusion = Some(0);
    true
}

fn lower_or_raise(team: &mut Team, stage: Stage, delta: i8) {
    if delta < 0 && team.side.mist > 0 {
        return;
    }
    let target = team.active_mut();
    if !target.is_fainted() {
        target.volatiles.boost(stage, delta);
    }
}

const TRI_ATTACK_STATUSES: [Status; 3] = [Status::Burn, Status::Freeze, Status::Paralysis];

fn apply_secondary(
    own: &mut Team,
    other: &mut Team,
    field: &Field,
    effect: SecondaryEffect,
    variable: usize,
) {
    match effect {
        SecondaryEffect::Status(status) => {
            inflict(other, field, status_of(status));
        }
        SecondaryEffect::TriAttack => {
            inflict(other, field, TRI_ATTACK_STATUSES[variable % TRI_ATTACK_STATUSES.len()]);
        }
        SecondaryEffect::Confuse => {
            confuse(other);
        }
        SecondaryEffect::Flinch => {
            let target = other.active_mut();
            if !target.is_fainted() {
                target.volatiles.flinch = true;
            }
        }
        SecondaryEffect::Boost(Who::User, stage, delta) => {
            let user = own.active_mut();
            if !user.is_fainted() {
                user.volatiles.boost(stage, delta);
            }
        }
        SecondaryEffect::Boost(Who::Target, stage, delta) => lower_or_raise(other, stage, delta),
    }
}

fn set_screen(side: &mut SideConditions, screen: Screen) {
    let (counter, turns) = match screen {
        Screen::Reflect => (&mut side.reflect, SCREEN_TURNS),
        Screen::LightScreen => (&mut side.light_screen, SCREEN_TURNS),
        Screen::Mist => (&mut side.mist, SCREEN_TURNS),
        Screen::Safeguard => (&mut side.safeguard, SCREEN_TURNS),
        Screen::LuckyChant => (&mut side.lucky_chant, SCREEN_TURNS),
        Screen::Tailwind => (&mut side.tailwind, TAILWIND_TURNS),
    };
    if *counter == 0 {
        *counter = turns;
    }
}

fn set_hazard(side: &mut SideConditions, hazard: Hazard) {
    match hazard {
        Hazard::Spikes => side.spikes = (side.spikes + 1).min(3),
        Hazard::ToxicSpikes => side.toxic_spikes = (side.toxic_spikes + 1).min(2),
        Hazard::StealthRock => side.stealth_rock = true,
    }
}

fn apply_status_move(
    own: &mut Team,
    other: &mut Team,
    field: &mut Field,
    data: &MoveData,
    branch: &Branch,
    outcome: &mut MoveOutcome,
) {
    let substitute = other.active().volatiles.substitute_hp > 0;
    match data.effect {
        Effect::Status(effect) => {
            let immune = data.move_type == Type::Electric
                && move_effectiveness(data, other.active(), field.gravity()) == 0;
            if !substitute && !immune {
                inflict(other, field, status_of(effect));
            }
        }
        Effect::Confuse => {
            if !substitute {
                confuse(other);
            }
        }
        Effect::Boost(Who::User, boosts) => {
            let user = own.active_mut();
            for (stage, delta) in boosts {
                user.volatiles.boost(*stage, *delta);
            }
        }
        Effect::Boost(Who::Target, boosts) => {
            if !substitute {
                for (stage, delta) in boosts {
                    lower_or_raise(other, *stage, *delta);
                }
            }
        }
        Effect::Heal => {
            let user = own.active_mut();
            let amount = user.fraction(2);
            user.heal(amount);
        }
        Effect::Rest => {
            let user = own.active_mut();
            let can_sleep = !user.immune_to(Status::Rest) && field.uproar == 0;
            if user.current_hp < user.stats.hp && can_sleep {
                user.status = Some(Status::Rest);
                user.sleep_turns = 0;
                user.toxic_counter = 0;
                user.current_hp = user.stats.hp;
            }
        }
        Effect::Wish => {
            if own.side.wish == 0 {
                own.side.wish = WISH_TURNS;
                own.side.wish_hp = own.active().stats.hp / 2;
            }
        }
        Effect::Protect | Effect::Endure => {
            let foe_moved = other.active().volatiles.moved;
            let user = own.active_mut();
            if branch.variable == 0 && !foe_moved {
                if data.effect == Effect::Protect {
                    user.volatiles.protect = true;
                } else {
                    user.volatiles.endure = true;
                }
                user.volatiles.protect_count = user.volatiles.protect_count.saturating_add(1);
            } else {
                user.volatiles.protect_count = 0;
            }
        }
        Effect::Substitute => {
            let user = own.active_mut();
            let cost = user.stats.hp / 4;
            if user.volatiles.substitute_hp == 0 && cost > 0 && user.current_hp > cost {
                user.current_hp -= cost;
                user.volatiles.substitute_hp = cost;
            }
        }
        Effect::LeechSeed => {
            let target = other.active_mut();
            if !substitute && !target.has_type(Type::Grass) {
                target.volatiles.leech_seed = true;
            }
        }
        Effect::Curse => {
            let user = own.active_mut();
            if user.has_type(Type::Ghost) {
                let cost = user.fraction(2);
                user.take_damage(cost);
                let target = other.active_mut();
                if !target.is_fainted() {
                    target.volatiles.curse = true;
                }
            } else {
                user.volatiles.boost(Stage::Spe, -1);
                user.volatiles.boost(Stage::Atk, 1);
                user.volatiles.boost(Stage::Def, 1);
            }
        }
        Effect::Taunt => {
            let target = other.active_mut();
            if target.volatiles.taunt == 0 {
                target.volatiles.taunt = TAUNT_TURNS;
            }
        }
        Effect::Encore => {
            let target = other.active_mut();
            if let Some(last) = target.last_move {
                if target.volatiles.encore.is_none() && target.moves[last].pp > 0 {
                    target.volatiles.encore = Some((last, ENCORE_TURNS));
                }
            }
        }
        Effect::Disable => {
            let target = other.active_mut();
            if let Some(last) = target.last_move {
                if target.volatiles.disable.is_none() {
                    target.volatiles.disable = Some((last, DISABLE_TURNS));
                }
            }
        }
        Effect::Torment => other.active_mut().volatiles.torment = true,
        Effect::Yawn => {
            let safeguard = other.side.safeguard > 0;
            let target = other.active_mut();
            if !substitute && !safeguard && target.status.is_none() && target.volatiles.yawn == 0 {
                target.volatiles.yawn = YAWN_TURNS;
            }
        }
        Effect::PerishSong => {
            for pokemon in [own.active_mut(), other.active_mut()] {
                if !pokemon.is_fainted() && pokemon.volatiles.perish == 0 {
                    pokemon.volatiles.perish = PERISH_COUNT;
                }
            }
        }
        Effect::Hazard(hazard) => set_hazard(&mut other.side, hazard),
        Effect::Screen(screen) => set_screen(&mut own.side, screen),
        Effect::SetWeather(weather) => {
            field.set_weather(weather);
        }
        Effect::TrickRoom => {
            field.trick_room = if field.trick_room() { 0 } else { TRICK_ROOM_TURNS };
        }
        Effect::Gravity => {
            if !field.gravity() {
                field.gravity = GRAVITY_TURNS;
                for pokemon in [own.active_mut(), other.active_mut()] {
                    pokemon.volatiles.magnet_rise = 0;
                    if pokemon.volatiles.vanished == Some(Vanish::Fly) {
                        pokemon.volatiles.vanished = None;
                    }
                }
            }
        }
        Effect::Haze => {
            own.active_mut().volatiles.stages = [0; 7];
            other.active_mut().volatiles.stages = [0; 7];
        }
        Effect::AquaRing => own.active_mut().volatiles.aqua_ring = true,
        Effect::Ingrain => own.active_mut().volatiles.ingrain = true,
        Effect::FocusEnergy => own.active_mut().volatiles.focus_energy = true,
        Effect::Imprison => own.active_mut().volatiles.imprison = true,
        Effect::MagnetRise => {
            let user = own.active_mut();
            if user.volatiles.magnet_rise == 0 && !user.volatiles.ingrain && !field.gravity() {
                user.volatiles.magnet_rise = BLOCK_TURNS;
            }
        }
        Effect::Nightmare => {
            let target = other.active_mut();
            if !substitute && target.is_asleep() {
                target.volatiles.nightmare = true;
            }
        }
        Effect::MeanLook => other.active_mut().volatiles.trapped = true,
        Effect::Phaze => {
            let target = other.active();
            if target.volatiles.ingrain || target.ability == Ability::SuctionCups {
                return;
            }
            let replacement = other.replacements().nth(branch.variable);
            if let Some(index) = replacement {
                perform_switch(other, index, field.gravity(), SwitchKind::Forced);
                // The dragged-in Pokémon loses the action chosen for its predecessor.
                other.active_mut().volatiles.moved = true;
            }
        }
        Effect::HealBlock => {
            let target = other.active_mut();
            if target.volatiles.heal_block == 0 {
                target.volatiles.heal_block = BLOCK_TURNS;
            }
        }
        Effect::Embargo => {
            let target = other.active_mut();
            if target.volatiles.embargo == 0 {
                target.volatiles.embargo = BLOCK_TURNS;
            }
        }
        Effect::BatonPass => {
            if own.has_replacement() {
                outcome.self_switch = Some(SwitchKind::BatonPass);
            }
        }
        _ => {}
    }
}
