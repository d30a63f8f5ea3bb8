use crate::data::abilities::Ability;
use crate::data::items::Item;
use crate::data::types::{effectiveness, Type};
use crate::sim::battle::{SideConditions, Team};
use crate::sim::pokemon::{Pokemon, Status};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SwitchKind {
    Voluntary,
    /// Replacing a fainted active.
    Forced,
    /// U-turn / Volt Switch.
    Pivot,
    BatonPass,
}

/// Whether `user` is kept in by its own state or by the opposing active's ability.
pub fn is_trapped(user: &Pokemon, foe: &Pokemon, gravity: bool) -> bool {
    if user.item == Item::ShedShell {
        return false;
    }
    let v = &user.volatiles;
    if v.trapped || v.partial_trap > 0 || v.ingrain {
        return true;
    }
    if foe.is_fainted() {
        return false;
    }
    match foe.ability {
        Ability::ShadowTag => true,
        Ability::ArenaTrap => user.is_grounded(gravity),
        Ability::MagnetPull => user.has_type(Type::Steel),
        _ => false,
    }
}

fn reset_on_switch(pokemon: &mut Pokemon) {
    pokemon.volatiles = Default::default();
    if pokemon.status == Some(Status::Toxic) {
        pokemon.toxic_counter = 0;
    }
    if pokemon.ability == Ability::NaturalCure {
        pokemon.clear_status();
    }
    if pokemon.item.is_choice() {
        pokemon.last_move = None;
    }
}

/// Switch-out reset, switch-in, then entry hazards. Baton Pass hands over the
/// passable volatiles.
pub fn perform_switch(team: &mut Team, index: usize, gravity: bool, kind: SwitchKind) {
    assert!(
        index != team.active && index < team.roster.len() && !team.roster[index].is_fainted(),
        "illegal switch target {index}"
    );
    let passed = (kind == SwitchKind::BatonPass).then(|| team.active().volatiles.passed());
    reset_on_switch(team.active_mut());
    team.active = index;
    let incoming = team.active_mut();
    incoming.last_move = None;
    if let Some(volatiles) = passed {
        incoming.volatiles = volatiles;
    }
    if incoming.ability == Ability::SlowStart {
        incoming.volatiles.slow_start = 5;
    }
    let (roster, side) = (&mut team.roster, &mut team.side);
    apply_entry_hazards(&mut roster[index], side, gravity);
}

pub fn apply_entry_hazards(pokemon: &mut Pokemon, side: &mut SideConditions, gravity: bool) {
    let guarded = pokemon.ability.blocks_indirect_damage();
    if side.stealth_rock && !guarded {
        let multiplier = effectiveness(Type::Rock, pokemon.types()) as u32;
        let damage = (pokemon.stats.hp as u32 * multiplier / 32).max(1) as u16;
        pokemon.take_damage(damage);
    }
    if !pokemon.is_grounded(gravity) || pokemon.is_fainted() {
        return;
    }
    if side.spikes > 0 && !guarded {
        let denominator = match side.spikes {
            1 => 8,
            2 => 6,
            _ => 4,
        };
        pokemon.take_damage(pokemon.fraction(denominator));
    }
    if side.toxic_spikes > 0 && !pokemon.is_fainted() {
        if pokemon.has_type(Type::Poison) {
            side.toxic_spikes = 0;
        } else if side.safeguard == 0 {
            let status = if side.toxic_spikes >= 2 {
                Status::Toxic
            } else {
                Status::Poison
            };
            pokemon.try_set_status(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::stats::{Nature, Stage};

    fn mk_pokemon(species: &str, ability: &str, item: Option<&str>) -> Pokemon {
        Pokemon::new(
            species,
            50,
            [0; 6],
            [31; 6],
            Nature::Hardy,
            vec!["tackle".to_string()],
            ability,
            item,
        )
        .expect("species exists")
    }

    #[test]
    fn own_volatiles_trap_until_shed_shell() {
        let mut p = mk_pokemon("pikachu", "", None);
        let foe = mk_pokemon("snorlax", "", None);
        assert!(!is_trapped(&p, &foe, false));
        p.volatiles.partial_trap = 2;
        assert!(is_trapped(&p, &foe, false));
        p.volatiles.partial_trap = 0;
        p.volatiles.ingrain = true;
        assert!(is_trapped(&p, &foe, false));
        p.item = Item::ShedShell;
        assert!(!is_trapped(&p, &foe, false));
    }

    #[test]
    fn trapping_abilities_and_shed_shell() {
        let skarmory = mk_pokemon("skarmory", "", None);
        let magnezone = mk_pokemon("magnezone", "Magnet Pull", None);
        let dugtrio = mk_pokemon("dugtrio", "Arena Trap", None);
        assert!(is_trapped(&skarmory, &magnezone, false));
        assert!(!is_trapped(&skarmory, &dugtrio, false));
        assert!(is_trapped(&skarmory, &dugtrio, true));
        let shed_shell = mk_pokemon("skarmory", "", Some("Shed Shell"));
        assert!(!is_trapped(&shed_shell, &magnezone, false));
    }

    #[test]
    fn stealth_rock_scales_with_effectiveness() {
        let mut side = SideConditions {
            stealth_rock: true,
            ..SideConditions::default()
        };
        let mut charizard = mk_pokemon("charizard", "", None);
        apply_entry_hazards(&mut charizard, &mut side, false);
        assert_eq!(charizard.current_hp, charizard.stats.hp - charizard.stats.hp / 2);
    }

    #[test]
    fn poison_types_absorb_toxic_spikes() {
        let mut side = SideConditions {
            toxic_spikes: 2,
            ..SideConditions::default()
        };
        let mut pikachu = mk_pokemon("pikachu", "", None);
        apply_entry_hazards(&mut pikachu, &mut side, false);
        assert_eq!(pikachu.status, Some(Status::Toxic));
        let mut venusaur = mk_pokemon("venusaur", "", None);
        apply_entry_hazards(&mut venusaur, &mut side, false);
        assert_eq!(side.toxic_spikes, 0);
        assert_eq!(venusaur.status, None);
    }

    #[test]
    fn baton_pass_keeps_boosts() {
        let mut team = Team::new(
            vec![mk_pokemon("pikachu", "", None), mk_pokemon("snorlax", "", None)],
            true,
        )
        .expect("team");
        team.active_mut().volatiles.boost(Stage::Atk, 2);
        perform_switch(&mut team, 1, false, SwitchKind::BatonPass);
        assert_eq!(team.active().volatiles.stage(Stage::Atk), 2);
        assert_eq!(team.roster[0].volatiles.stage(Stage::Atk), 0);
        perform_switch(&mut team, 0, false, SwitchKind::Voluntary);
        assert_eq!(team.active().volatiles.stage(Stage::Atk), 0);
    }
}
