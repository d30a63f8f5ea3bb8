use super::moves::{get_move, Effect, SecondaryEffect, StatusEffect, Variable};
use super::species::{get_species, POKEDEX};
use super::types::{effectiveness, Type};

#[test]
fn charizard_stats() {
    let charizard = POKEDEX
        .get("charizard")
        .expect("Charizard should exist in the Pokedex");
    assert_eq!(charizard.base_stats.hp, 78);
    assert_eq!(charizard.base_stats.atk, 84);
    assert_eq!(charizard.types, [Type::Fire, Type::Flying]);
}

#[test]
fn dragonite_stats() {
    let dragonite = get_species("Dragonite").expect("Dragonite should exist in the Pokedex");
    assert_eq!(dragonite.base_stats.hp, 91);
    assert_eq!(dragonite.base_stats.atk, 134);
}

#[test]
fn rotom_form_id_is_normalized() {
    let rotom = get_species("Rotom-Wash").expect("Rotom-Wash");
    assert_eq!(rotom.id, "rotomwash");
}

#[test]
fn thunderbolt_secondary_paralysis() {
    let thunderbolt = get_move("thunderbolt").expect("Thunderbolt must be present");
    assert_eq!(thunderbolt.power, 90);
    let secondary = thunderbolt
        .secondary
        .expect("Thunderbolt should have a secondary effect");
    assert_eq!(secondary.chance, 10);
    assert_eq!(
        secondary.effect,
        SecondaryEffect::Status(StatusEffect::Paralysis)
    );
}

#[test]
fn variable_moves_are_tagged() {
    assert_eq!(get_move("magnitude").map(|m| m.variable), Some(Variable::Magnitude));
    assert_eq!(get_move("outrage").map(|m| m.effect), Some(Effect::Rampage));
    assert_eq!(get_move("protect").map(|m| m.priority), Some(3));
}

#[test]
fn garchomp_is_immune_to_thunderbolt() {
    let garchomp = get_species("garchomp").expect("garchomp");
    assert_eq!(effectiveness(Type::Electric, garchomp.types), 0);
    assert_eq!(effectiveness(Type::Ice, garchomp.types), 16);
}
