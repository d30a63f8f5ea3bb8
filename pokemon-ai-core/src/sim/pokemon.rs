use anyhow::{anyhow, Result};

use crate::data::abilities::{ability_from_name, Ability};
use crate::data::items::{item_from_name, Item};
use crate::data::moves::{get_move, MoveData, Vanish};
use crate::data::species::{get_species, SpeciesData};
use crate::data::types::Type;
use crate::sim::stats::{Nature, Stage, StatsSet, MAX_STAGE};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Toxic,
    /// Sleep inflicted by the foe.
    Sleep,
    /// Self-inflicted sleep from Rest: two turns, never counts for the sleep clause.
    Rest,
}

impl Status {
    pub fn is_asleep(self) -> bool {
        matches!(self, Status::Sleep | Status::Rest)
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MoveSlot {
    pub data: &'static MoveData,
    pub pp: u8,
}

impl MoveSlot {
    pub fn new(data: &'static MoveData) -> Self {
        Self { data, pp: data.pp }
    }
}

/// Battle state that only lives while the Pokemon is active.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Volatiles {
    pub stages: [i8; 7],
    /// Turns spent confused so far.
    pub confusion: Option<u8>,
    pub taunt: u8,
    /// (slot, turns left)
    pub encore: Option<(usize, u8)>,
    pub disable: Option<(usize, u8)>,
    pub embargo: u8,
    pub heal_block: u8,
    pub magnet_rise: u8,
    pub partial_trap: u8,
    /// 0 = no perish count.
    pub perish: u8,
    pub slow_start: u8,
    /// Rampage turns still owed after this one; `Some(0)` ends at end of turn.
    pub rampage: Option<u8>,
    pub uproar: u8,
    pub yawn: u8,
    pub substitute_hp: u16,
    pub recharging: bool,
    pub vanished: Option<Vanish>,
    pub aqua_ring: bool,
    pub curse: bool,
    pub ingrain: bool,
    pub leech_seed: bool,
    pub nightmare: bool,
    pub torment: bool,
    pub trapped: bool,
    pub imprison: bool,
    pub focus_energy: bool,
    pub loaf: bool,
    pub flinch: bool,
    pub protect: bool,
    pub endure: bool,
    pub moved: bool,
    pub protect_count: u8,
}

impl Volatiles {
    pub fn stage(&self, stage: Stage) -> i8 {
        self.stages[stage as usize]
    }

    /// Applies a stage change and returns whether anything moved.
    pub fn boost(&mut self, stage: Stage, delta: i8) -> bool {
        let slot = &mut self.stages[stage as usize];
        let next = (*slot + delta).clamp(-MAX_STAGE, MAX_STAGE);
        let changed = next != *slot;
        *slot = next;
        changed
    }

    /// The part of the volatile state Baton Pass hands to the replacement.
    pub fn passed(&self) -> Volatiles {
        Volatiles {
            stages: self.stages,
            confusion: self.confusion,
            magnet_rise: self.magnet_rise,
            perish: self.perish,
            embargo: self.embargo,
            heal_block: self.heal_block,
            substitute_hp: self.substitute_hp,
            aqua_ring: self.aqua_ring,
            curse: self.curse,
            ingrain: self.ingrain,
            leech_seed: self.leech_seed,
            trapped: self.trapped,
            focus_energy: self.focus_energy,
            ..Volatiles::default()
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pokemon {
    pub species: &'static SpeciesData,
    pub level: u8,
    pub nature: Nature,
    pub stats: StatsSet,
    pub current_hp: u16,
    pub status: Option<Status>,
    pub sleep_turns: u8,
    pub toxic_counter: u8,
    pub moves: Vec<MoveSlot>,
    pub ability: Ability,
    pub item: Item,
    pub last_move: Option<usize>,
    pub volatiles: Volatiles,
}

impl Pokemon {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        species: &str,
        level: u8,
        evs: [u8; 6],
        ivs: [u8; 6],
        nature: Nature,
        moves: Vec<String>,
        ability: &str,
        item: Option<&str>,
    ) -> Result<Self> {
        let data = get_species(species)
            .ok_or_else(|| anyhow!("Species '{}' not found in POKEDEX", species))?;
        if moves.is_empty() || moves.len() > 4 {
            return Err(anyhow!(
                "{} must know between 1 and 4 moves, got {}",
                data.name,
                moves.len()
            ));
        }
        let moves = moves
            .iter()
            .map(|name| {
                get_move(name)
                    .map(MoveSlot::new)
                    .ok_or_else(|| anyhow!("Move '{}' not found in MOVES", name))
            })
            .collect::<Result<Vec<_>>>()?;
        let stats = StatsSet::from_species(data, level, evs, ivs, nature);
        Ok(Self {
            species: data,
            level,
            nature,
            current_hp: stats.hp,
            stats,
            status: None,
            sleep_turns: 0,
            toxic_counter: 0,
            moves,
            ability: ability_from_name(ability),
            item: item.map(item_from_name).unwrap_or(Item::None),
            last_move: None,
            volatiles: Volatiles::default(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.species.name
    }

    pub fn types(&self) -> [Type; 2] {
        self.species.types
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.species.has_type(ty)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Returns the HP actually lost.
    pub fn take_damage(&mut self, damage: u16) -> u16 {
        let lost = damage.min(self.current_hp);
        self.current_hp -= lost;
        if self.current_hp == 0 {
            self.faint();
        }
        lost
    }

    pub fn heal(&mut self, amount: u16) {
        if self.is_fainted() {
            return;
        }
        self.current_hp = self.current_hp.saturating_add(amount).min(self.stats.hp);
    }

    /// `max_hp / denominator`, at least 1.
    pub fn fraction(&self, denominator: u16) -> u16 {
        (self.stats.hp / denominator).max(1)
    }

    pub fn faint(&mut self) {
        self.current_hp = 0;
        self.volatiles = Volatiles::default();
    }

    pub fn is_grounded(&self, gravity: bool) -> bool {
        if gravity || self.volatiles.ingrain || self.item == Item::IronBall {
            return true;
        }
        !(self.has_type(Type::Flying)
            || self.ability == Ability::Levitate
            || self.volatiles.magnet_rise > 0)
    }

    pub fn is_asleep(&self) -> bool {
        self.status.is_some_and(Status::is_asleep)
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.sleep_turns = 0;
        self.toxic_counter = 0;
    }

    /// Type and ability immunities to a major status.
    pub fn immune_to(&self, status: Status) -> bool {
        match status {
            Status::Burn => self.has_type(Type::Fire) || self.ability == Ability::WaterVeil,
            Status::Freeze => self.has_type(Type::Ice) || self.ability == Ability::MagmaArmor,
            Status::Paralysis => self.ability == Ability::Limber,
            Status::Poison | Status::Toxic => {
                self.has_type(Type::Poison)
                    || self.has_type(Type::Steel)
                    || self.ability == Ability::Immunity
            }
            Status::Sleep | Status::Rest => {
                matches!(self.ability, Ability::Insomnia | Ability::VitalSpirit)
            }
        }
    }

    /// Sets a major status if the Pokemon has none and is not immune.
    pub fn try_set_status(&mut self, status: Status) -> bool {
        if self.is_fainted() || self.status.is_some() || self.immune_to(status) {
            return false;
        }
        self.status = Some(status);
        self.sleep_turns = 0;
        self.toxic_counter = 0;
        true
    }

    pub fn knows(&self, data: &MoveData) -> bool {
        self.moves.iter().any(|slot| slot.data.id == data.id)
    }

    /// Locked into its previous move by a rampage, uproar, charge turn or recharge.
    pub fn locked_move(&self) -> Option<usize> {
        let v = &self.volatiles;
        let locked = v.recharging
            || v.vanished.is_some()
            || v.rampage.is_some_and(|left| left > 0)
            || v.uproar > 0;
        if locked {
            self.last_move
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pokemon(species: &str, ability: &str) -> Pokemon {
        Pokemon::new(
            species,
            50,
            [0; 6],
            [31; 6],
            Nature::Hardy,
            vec!["tackle".to_string()],
            ability,
            None,
        )
        .expect("species exists")
    }

    #[test]
    fn unknown_species_and_moves_are_errors() {
        let make = |species: &str, moves: &str| {
            Pokemon::new(species, 50, [0; 6], [31; 6], Nature::Hardy, vec![moves.into()], "", None)
        };
        assert!(make("missingno", "tackle").is_err());
        assert!(make("pikachu", "notamove").is_err());
    }

    #[test]
    fn damage_floors_at_zero_and_clears_volatiles() {
        let mut mon = make_pokemon("pikachu", "Static");
        mon.volatiles.boost(Stage::Atk, 2);
        let lost = mon.take_damage(mon.current_hp + 50);
        assert_eq!(lost, mon.stats.hp);
        assert!(mon.is_fainted());
        assert_eq!(mon.volatiles, Volatiles::default());
    }

    #[test]
    fn stages_clamp() {
        let mut volatiles = Volatiles::default();
        assert!(volatiles.boost(Stage::Spe, 5));
        assert!(volatiles.boost(Stage::Spe, 5));
        assert!(!volatiles.boost(Stage::Spe, 1));
        assert_eq!(volatiles.stage(Stage::Spe), 6);
    }

    #[test]
    fn status_immunities() {
        let mut steel = make_pokemon("skarmory", "Keen Eye");
        assert!(!steel.try_set_status(Status::Toxic));
        assert!(steel.try_set_status(Status::Burn));
        assert!(!steel.try_set_status(Status::Paralysis));
        let mut insomniac = make_pokemon("pikachu", "Insomnia");
        assert!(!insomniac.try_set_status(Status::Sleep));
    }

    #[test]
    fn grounding() {
        let bird = make_pokemon("skarmory", "");
        assert!(!bird.is_grounded(false));
        assert!(bird.is_grounded(true));
        let levitating = make_pokemon("gengar", "Levitate");
        assert!(!levitating.is_grounded(false));
    }
}
