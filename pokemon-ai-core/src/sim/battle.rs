use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::sim::field::Field;
use crate::sim::pokemon::Pokemon;

pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Side {
    Ai,
    Foe,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Ai => Side::Foe,
            Side::Foe => Side::Ai,
        }
    }
}

/// What a side does this turn. `Move` indexes the active Pokemon's move slots,
/// `Switch` indexes the roster.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Action {
    Move(usize),
    Switch(usize),
    Struggle,
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SideConditions {
    pub stealth_rock: bool,
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub reflect: u8,
    pub light_screen: u8,
    pub mist: u8,
    pub safeguard: u8,
    pub lucky_chant: u8,
    pub tailwind: u8,
    /// Turns until the pending Wish heals; 0 = none.
    pub wish: u8,
    pub wish_hp: u16,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Team {
    pub roster: Vec<Pokemon>,
    pub active: usize,
    pub side: SideConditions,
    pub is_ai: bool,
}

impl Team {
    pub fn new(roster: Vec<Pokemon>, is_ai: bool) -> Result<Self> {
        if roster.is_empty() || roster.len() > MAX_TEAM_SIZE {
            return Err(anyhow!(
                "a team needs 1 to {} Pokemon, got {}",
                MAX_TEAM_SIZE,
                roster.len()
            ));
        }
        let active = roster
            .iter()
            .position(|pokemon| !pokemon.is_fainted())
            .unwrap_or(0);
        Ok(Self {
            roster,
            active,
            side: SideConditions::default(),
            is_ai,
        })
    }

    pub fn active(&self) -> &Pokemon {
        &self.roster[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Pokemon {
        &mut self.roster[self.active]
    }

    pub fn is_wiped(&self) -> bool {
        self.roster.iter().all(Pokemon::is_fainted)
    }

    /// Non-fainted, non-active roster entries in roster order.
    pub fn replacements(&self) -> impl Iterator<Item = usize> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(move |(index, pokemon)| *index != self.active && !pokemon.is_fainted())
            .map(|(index, _)| index)
    }

    pub fn has_replacement(&self) -> bool {
        self.replacements().next().is_some()
    }

    /// Active fainted with someone left to send in.
    pub fn needs_replacement(&self) -> bool {
        self.active().is_fainted() && self.has_replacement()
    }

    pub fn alive(&self) -> usize {
        self.roster.iter().filter(|pokemon| !pokemon.is_fainted()).count()
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Battle {
    pub ai: Team,
    pub foe: Team,
    pub field: Field,
}

impl Battle {
    pub fn new(ai: Team, foe: Team, field: Field) -> Self {
        Self { ai, foe, field }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Ai => &self.ai,
            Side::Foe => &self.foe,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Ai => &mut self.ai,
            Side::Foe => &mut self.foe,
        }
    }

    /// (user's team, opposing team, field), all mutable at once.
    pub fn split_mut(&mut self, user: Side) -> (&mut Team, &mut Team, &mut Field) {
        match user {
            Side::Ai => (&mut self.ai, &mut self.foe, &mut self.field),
            Side::Foe => (&mut self.foe, &mut self.ai, &mut self.field),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.ai.is_wiped() || self.foe.is_wiped()
    }

    pub fn describe(&self, side: Side, action: Action) -> String {
        let team = self.team(side);
        match action {
            Action::Move(slot) => team
                .active()
                .moves
                .get(slot)
                .map(|slot| slot.data.name.to_string())
                .unwrap_or_else(|| format!("move #{slot}")),
            Action::Switch(index) => team
                .roster
                .get(index)
                .map(|pokemon| format!("switch to {}", pokemon.name()))
                .unwrap_or_else(|| format!("switch #{index}")),
            Action::Struggle => "Struggle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::stats::Nature;

    fn make_mon(species: &str) -> Pokemon {
        Pokemon::new(
            species,
            50,
            [0; 6],
            [31; 6],
            Nature::Hardy,
            vec!["tackle".to_string()],
            "",
            None,
        )
        .expect("species exists")
    }

    #[test]
    fn replacements_skip_active_and_fainted() {
        let mut team = Team::new(
            vec![make_mon("pikachu"), make_mon("snorlax"), make_mon("gengar")],
            true,
        )
        .expect("team");
        team.roster[1].faint();
        assert_eq!(team.replacements().collect::<Vec<_>>(), vec![2]);
        team.active_mut().faint();
        assert!(team.needs_replacement());
        team.roster[2].faint();
        assert!(team.is_wiped());
        assert!(!team.needs_replacement());
    }

    #[test]
    fn empty_team_is_rejected() {
        assert!(Team::new(Vec::new(), false).is_err());
    }

    #[test]
    fn describe_names_moves_and_switches() {
        let ai = Team::new(vec![make_mon("pikachu"), make_mon("snorlax")], true).expect("team");
        let foe = Team::new(vec![make_mon("gengar")], false).expect("team");
        let battle = Battle::new(ai, foe, Field::default());
        assert_eq!(battle.describe(Side::Ai, Action::Move(0)), "Tackle");
        assert_eq!(battle.describe(Side::Ai, Action::Switch(1)), "switch to Snorlax");
    }
}
