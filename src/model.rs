use anyhow::{bail, Context};
use pokemon_ai_core::parse_showdown_team;
use pokemon_ai_core::sim::battle::{Battle, SideConditions, Team};
use pokemon_ai_core::sim::field::{Field, WeatherState};
use pokemon_ai_core::sim::pokemon::{Pokemon, Status};
use pokemon_ai_core::sim::stats::parse_nature;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Toxic,
    Sleep,
    Rest,
}

impl From<StatusCondition> for Status {
    fn from(status: StatusCondition) -> Self {
        match status {
            StatusCondition::Burn => Status::Burn,
            StatusCondition::Freeze => Status::Freeze,
            StatusCondition::Paralysis => Status::Paralysis,
            StatusCondition::Poison => Status::Poison,
            StatusCondition::Toxic => Status::Toxic,
            StatusCondition::Sleep => Status::Sleep,
            StatusCondition::Rest => Status::Rest,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

impl From<Weather> for pokemon_ai_core::sim::field::Weather {
    fn from(weather: Weather) -> Self {
        use pokemon_ai_core::sim::field::Weather as Kind;
        match weather {
            Weather::Sun => Kind::Sun,
            Weather::Rain => Kind::Rain,
            Weather::Sand => Kind::Sand,
            Weather::Hail => Kind::Hail,
        }
    }
}

/// Per-stat values; missing stats take the caller's default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatSpread {
    #[serde(default)]
    pub hp: Option<u8>,
    #[serde(default)]
    pub atk: Option<u8>,
    #[serde(default)]
    pub def: Option<u8>,
    #[serde(default)]
    pub spa: Option<u8>,
    #[serde(default)]
    pub spd: Option<u8>,
    #[serde(default)]
    pub spe: Option<u8>,
}

impl StatSpread {
    fn to_array(&self, fallback: u8) -> [u8; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
            .map(|value| value.unwrap_or(fallback))
    }
}

fn default_level() -> u8 {
    50
}

fn default_nature() -> String {
    "Hardy".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSpec {
    pub species: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default = "default_nature")]
    pub nature: String,
    #[serde(default)]
    pub evs: StatSpread,
    #[serde(default)]
    pub ivs: StatSpread,
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub item: Option<String>,
    pub moves: Vec<String>,
    #[serde(default)]
    pub current_hp: Option<u16>,
    #[serde(default)]
    pub status: Option<StatusCondition>,
}

impl PokemonSpec {
    pub fn build(&self) -> anyhow::Result<Pokemon> {
        let nature = parse_nature(&self.nature)
            .with_context(|| format!("Unknown nature '{}' for {}", self.nature, self.species))?;
        let mut pokemon = Pokemon::new(
            &self.species,
            self.level,
            self.evs.to_array(0),
            self.ivs.to_array(31),
            nature,
            self.moves.clone(),
            &self.ability,
            self.item.as_deref(),
        )
        .with_context(|| format!("Failed to build Pokémon '{}'", self.species))?;
        if let Some(hp) = self.current_hp {
            if hp > pokemon.stats.hp {
                bail!(
                    "{} has {} max HP, current_hp {} is out of range",
                    pokemon.name(),
                    pokemon.stats.hp,
                    hp
                );
            }
            pokemon.current_hp = hp;
        }
        if let Some(status) = self.status {
            pokemon.status = Some(status.into());
        }
        Ok(pokemon)
    }
}

/// A roster as a list of specs or as a Showdown export string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeamSpec {
    Showdown(String),
    Pokemon(Vec<PokemonSpec>),
}

impl TeamSpec {
    pub fn build(&self) -> anyhow::Result<Vec<Pokemon>> {
        match self {
            TeamSpec::Showdown(text) => parse_showdown_team(text),
            TeamSpec::Pokemon(specs) => specs.iter().map(PokemonSpec::build).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SideSpec {
    #[serde(default)]
    pub stealth_rock: bool,
    #[serde(default)]
    pub spikes: u8,
    #[serde(default)]
    pub toxic_spikes: u8,
    #[serde(default)]
    pub reflect: u8,
    #[serde(default)]
    pub light_screen: u8,
    #[serde(default)]
    pub tailwind: u8,
}

impl SideSpec {
    fn apply(&self, side: &mut SideConditions) {
        side.stealth_rock = self.stealth_rock;
        side.spikes = self.spikes.min(3);
        side.toxic_spikes = self.toxic_spikes.min(2);
        side.reflect = self.reflect;
        side.light_screen = self.light_screen;
        side.tailwind = self.tailwind;
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FieldSpec {
    #[serde(default)]
    pub weather: Option<Weather>,
    /// Omitted means the weather lasts indefinitely.
    #[serde(default)]
    pub weather_turns: Option<u8>,
    #[serde(default)]
    pub trick_room: u8,
    #[serde(default)]
    pub gravity: u8,
}

impl FieldSpec {
    fn build(&self) -> Field {
        Field {
            weather: self.weather.map(|kind| WeatherState {
                kind: kind.into(),
                turns: self.weather_turns,
            }),
            gravity: self.gravity,
            trick_room: self.trick_room,
            ..Field::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattleFile {
    pub ai: TeamSpec,
    pub foe: TeamSpec,
    #[serde(default)]
    pub field: FieldSpec,
    #[serde(default)]
    pub ai_side: SideSpec,
    #[serde(default)]
    pub foe_side: SideSpec,
}

impl BattleFile {
    pub fn build(&self) -> anyhow::Result<Battle> {
        let mut ai = Team::new(self.ai.build().context("Failed to build the AI team")?, true)?;
        let mut foe = Team::new(self.foe.build().context("Failed to build the foe team")?, false)?;
        self.ai_side.apply(&mut ai.side);
        self.foe_side.apply(&mut foe.side);
        Ok(Battle::new(ai, foe, self.field.build()))
    }
}
