use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::data::types::Type;
use crate::sim::battle::{Battle, Side, SideConditions, Team};
use crate::sim::chance::ResidualBranch;
use crate::sim::field::{weather_residual_damage, Field, Weather};
use crate::sim::pokemon::{Pokemon, Status};
use crate::sim::stats::Stage;

fn tick(counter: &mut u8) {
    *counter = counter.saturating_sub(1);
}

fn tick_side(side: &mut SideConditions) {
    tick(&mut side.reflect);
    tick(&mut side.light_screen);
    tick(&mut side.mist);
    tick(&mut side.safeguard);
    tick(&mut side.lucky_chant);
    tick(&mut side.tailwind);
}

fn resolve_wish(team: &mut Team) {
    if team.side.wish == 0 {
        return;
    }
    team.side.wish -= 1;
    if team.side.wish == 0 {
        let amount = team.side.wish_hp;
        team.side.wish_hp = 0;
        let active = team.active_mut();
        if active.volatiles.heal_block == 0 {
            active.heal(amount);
        }
    }
}

fn weather_damage(pokemon: &mut Pokemon, weather: Option<Weather>) {
    if pokemon.is_fainted() {
        return;
    }
    if let Some(damage) = weather_residual_damage(pokemon, weather) {
        pokemon.take_damage(damage);
    }
}

fn weather_abilities(pokemon: &mut Pokemon, weather: Option<Weather>) {
    if pokemon.is_fainted() {
        return;
    }
    let heal_blocked = pokemon.volatiles.heal_block > 0;
    match (pokemon.ability, weather) {
        (Ability::DrySkin, Some(Weather::Rain)) if !heal_blocked => {
            let amount = pokemon.fraction(8);
            pokemon.heal(amount);
        }
        (Ability::DrySkin, Some(Weather::Sun)) => {
            let amount = pokemon.fraction(8);
            pokemon.take_damage(amount);
        }
        (Ability::Hydration, Some(Weather::Rain)) => pokemon.clear_status(),
        (Ability::IceBody, Some(Weather::Hail)) | (Ability::RainDish, Some(Weather::Rain))
            if !heal_blocked =>
        {
            let amount = pokemon.fraction(16);
            pokemon.heal(amount);
        }
        _ => {}
    }
}

/// Damage that Magic Guard ignores.
fn indirect(pokemon: &mut Pokemon, amount: u16) {
    if !pokemon.ability.blocks_indirect_damage() {
        pokemon.take_damage(amount);
    }
}

fn restore(pokemon: &mut Pokemon, amount: u16) {
    if pokemon.volatiles.heal_block == 0 {
        pokemon.heal(amount);
    }
}

fn status_damage(pokemon: &mut Pokemon) {
    let poisoned = matches!(pokemon.status, Some(Status::Poison | Status::Toxic));
    if pokemon.status == Some(Status::Toxic) {
        pokemon.toxic_counter = pokemon.toxic_counter.saturating_add(1);
    }
    if poisoned && pokemon.ability == Ability::PoisonHeal {
        let amount = pokemon.fraction(8);
        restore(pokemon, amount);
        return;
    }
    let damage = match pokemon.status {
        Some(Status::Burn) if pokemon.ability == Ability::Heatproof => pokemon.fraction(16),
        Some(Status::Burn) | Some(Status::Poison) => pokemon.fraction(8),
        Some(Status::Toxic) => {
            let scaled = pokemon.stats.hp as u32 * pokemon.toxic_counter as u32 / 16;
            scaled.max(1) as u16
        }
        _ => return,
    };
    indirect(pokemon, damage);
}

/// Residual effects on one side's active Pokemon, in their fixed order. Stops
/// as soon as the Pokemon faints.
fn residual(own: &mut Team, other: &mut Team, field: &Field, shed_skin: bool) {
    macro_rules! alive {
        () => {
            if own.active().is_fainted() {
                return;
            }
        };
    }
    alive!();
    let pokemon = own.active_mut();
    if pokemon.volatiles.ingrain {
        let amount = pokemon.fraction(16);
        restore(pokemon, amount);
    }
    if pokemon.volatiles.aqua_ring {
        let amount = pokemon.fraction(16);
        restore(pokemon, amount);
    }
    if pokemon.ability == Ability::SpeedBoost {
        pokemon.volatiles.boost(Stage::Spe, 1);
    }
    if shed_skin {
        pokemon.clear_status();
    }
    match pokemon.item {
        Item::Leftovers => {
            let amount = pokemon.fraction(16);
            restore(pokemon, amount);
        }
        Item::BlackSludge if pokemon.has_type(Type::Poison) => {
            let amount = pokemon.fraction(16);
            restore(pokemon, amount);
        }
        Item::BlackSludge => {
            let amount = pokemon.fraction(8);
            indirect(pokemon, amount);
        }
        _ => {}
    }
    alive!();

    let seeder = other.active_mut();
    let pokemon = own.active_mut();
    if pokemon.volatiles.leech_seed
        && !seeder.is_fainted()
        && !pokemon.ability.blocks_indirect_damage()
    {
        let drained = pokemon.take_damage(pokemon.fraction(8));
        if pokemon.ability == Ability::LiquidOoze {
            indirect(seeder, drained);
        } else {
            restore(seeder, drained);
        }
    }
    alive!();

    let pokemon = own.active_mut();
    status_damage(pokemon);
    alive!();

    let bad_dreams = {
        let foe = other.active();
        !foe.is_fainted() && foe.ability == Ability::BadDreams
    };
    let pokemon = own.active_mut();
    if pokemon.volatiles.nightmare {
        if pokemon.is_asleep() {
            let amount = pokemon.fraction(4);
            indirect(pokemon, amount);
        } else {
            pokemon.volatiles.nightmare = false;
        }
    }
    if bad_dreams && pokemon.is_asleep() {
        let amount = pokemon.fraction(8);
        indirect(pokemon, amount);
    }
    alive!();

    let pokemon = own.active_mut();
    match pokemon.item {
        Item::FlameOrb => {
            pokemon.try_set_status(Status::Burn);
        }
        Item::ToxicOrb => {
            pokemon.try_set_status(Status::Toxic);
        }
        _ => {}
    }
    if pokemon.volatiles.curse {
        let amount = pokemon.fraction(4);
        indirect(pokemon, amount);
    }
    alive!();

    let pokemon = own.active_mut();
    if pokemon.volatiles.partial_trap > 0 {
        pokemon.volatiles.partial_trap -= 1;
        let amount = pokemon.fraction(16);
        indirect(pokemon, amount);
    }
    alive!();

    let pokemon = own.active_mut();
    let v = &mut pokemon.volatiles;
    if v.rampage == Some(0) {
        v.rampage = None;
        if v.confusion.is_none() {
            v.confusion = Some(0);
        }
    }
    tick(&mut v.uproar);
    if let Some((slot, turns)) = v.disable {
        v.disable = (turns > 1).then(|| (slot, turns - 1));
    }
    if let Some((slot, turns)) = v.encore {
        let out_of_pp = pokemon.moves.get(slot).map_or(true, |slot| slot.pp == 0);
        pokemon.volatiles.encore = (turns > 1 && !out_of_pp).then(|| (slot, turns - 1));
    }
    let v = &mut pokemon.volatiles;
    tick(&mut v.taunt);
    tick(&mut v.magnet_rise);
    tick(&mut v.heal_block);
    tick(&mut v.embargo);
    tick(&mut v.slow_start);
    if v.yawn > 0 {
        v.yawn -= 1;
        let safeguarded = own.side.safeguard > 0;
        let pokemon = own.active_mut();
        if pokemon.volatiles.yawn == 0 && !safeguarded && field.uproar == 0 {
            pokemon.try_set_status(Status::Sleep);
        }
    }

    let pokemon = own.active_mut();
    if pokemon.item == Item::StickyBarb {
        let amount = pokemon.fraction(8);
        indirect(pokemon, amount);
    }
}

/// Applies everything that happens after both sides have moved. `first` is
/// the side that moved first; residual effects follow the same order.
pub fn resolve_end_of_turn(battle: &mut Battle, first: Side, residual_branch: &ResidualBranch) {
    let order = [first, first.other()];
    for side in order {
        let v = &mut battle.team_mut(side).active_mut().volatiles;
        v.flinch = false;
        v.protect = false;
        v.endure = false;
        v.moved = false;
    }

    for side in order {
        let team = battle.team_mut(side);
        tick_side(&mut team.side);
        resolve_wish(team);
    }

    battle.field.tick_weather();
    let weather = battle.field.weather();
    for side in order {
        weather_damage(battle.team_mut(side).active_mut(), weather);
    }
    for side in order {
        weather_abilities(battle.team_mut(side).active_mut(), weather);
    }
    tick(&mut battle.field.gravity);

    for side in order {
        let field = battle.field;
        let (own, other, _) = battle.split_mut(side);
        residual(own, other, &field, residual_branch.shed_skin(side));
    }

    for side in order {
        let pokemon = battle.team_mut(side).active_mut();
        if pokemon.volatiles.perish > 0 {
            pokemon.volatiles.perish -= 1;
            if pokemon.volatiles.perish == 0 {
                pokemon.faint();
            }
        }
    }

    tick(&mut battle.field.trick_room);
    tick(&mut battle.field.uproar);
}
