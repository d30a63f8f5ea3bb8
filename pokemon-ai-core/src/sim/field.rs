use crate::data::abilities::Ability;
use crate::data::moves::MoveData;
use crate::data::types::Type;
use crate::sim::pokemon::Pokemon;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeatherState {
    pub kind: Weather,
    /// `None` lasts until replaced.
    pub turns: Option<u8>,
}

/// Field-wide state shared by both sides.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Field {
    pub weather: Option<WeatherState>,
    pub gravity: u8,
    pub trick_room: u8,
    pub uproar: u8,
}

pub const WEATHER_TURNS: u8 = 5;
pub const GRAVITY_TURNS: u8 = 5;
pub const TRICK_ROOM_TURNS: u8 = 5;

impl Field {
    pub fn weather(&self) -> Option<Weather> {
        self.weather.map(|state| state.kind)
    }

    pub fn is(&self, weather: Weather) -> bool {
        self.weather() == Some(weather)
    }

    /// Move-induced weather; fails if the same weather is already up.
    pub fn set_weather(&mut self, kind: Weather) -> bool {
        if self.is(kind) {
            return false;
        }
        self.weather = Some(WeatherState {
            kind,
            turns: Some(WEATHER_TURNS),
        });
        true
    }

    pub fn gravity(&self) -> bool {
        self.gravity > 0
    }

    pub fn trick_room(&self) -> bool {
        self.trick_room > 0
    }

    pub fn tick_weather(&mut self) {
        let expired = match self.weather.as_mut() {
            Some(WeatherState {
                turns: Some(turns), ..
            }) => {
                *turns = turns.saturating_sub(1);
                *turns == 0
            }
            _ => false,
        };
        if expired {
            self.weather = None;
        }
    }
}

/// Weather multiplier in 4096ths.
pub fn weather_damage_modifier(weather: Option<Weather>, move_type: Type) -> u32 {
    match weather {
        Some(Weather::Sun) => match move_type {
            Type::Fire => 6144,
            Type::Water => 2048,
            _ => 4096,
        },
        Some(Weather::Rain) => match move_type {
            Type::Water => 6144,
            Type::Fire => 2048,
            _ => 4096,
        },
        _ => 4096,
    }
}

/// Base accuracy after weather overrides; `None` never misses.
pub fn effective_accuracy(move_data: &MoveData, weather: Option<Weather>) -> Option<u8> {
    match (move_data.id, weather) {
        ("thunder", Some(Weather::Rain)) => None,
        ("thunder", Some(Weather::Sun)) => Some(50),
        ("blizzard", Some(Weather::Hail)) => None,
        _ => move_data.accuracy,
    }
}

pub fn weather_speed_multiplier(pokemon: &Pokemon, weather: Option<Weather>) -> u32 {
    match (weather, pokemon.ability) {
        (Some(Weather::Rain), Ability::SwiftSwim) | (Some(Weather::Sun), Ability::Chlorophyll) => 2,
        _ => 1,
    }
}

pub fn weather_residual_damage(pokemon: &Pokemon, weather: Option<Weather>) -> Option<u16> {
    let weather = weather?;
    if pokemon.ability.blocks_weather_damage() {
        return None;
    }
    let immune = match weather {
        Weather::Sand => {
            pokemon.has_type(Type::Rock)
                || pokemon.has_type(Type::Ground)
                || pokemon.has_type(Type::Steel)
                || pokemon.ability == Ability::SandVeil
        }
        Weather::Hail => pokemon.has_type(Type::Ice) || pokemon.ability == Ability::IceBody,
        Weather::Sun | Weather::Rain => true,
    };
    if immune {
        return None;
    }
    Some(pokemon.fraction(16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::moves::get_move;
    use crate::sim::stats::Nature;

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
        .expect("pokemon")
    }

    #[test]
    fn thunder_hits_in_rain() {
        let thunder = get_move("thunder").expect("thunder");
        assert_eq!(effective_accuracy(thunder, Some(Weather::Rain)), None);
        assert_eq!(effective_accuracy(thunder, Some(Weather::Sun)), Some(50));
        assert_eq!(effective_accuracy(thunder, None), Some(70));
    }

    #[test]
    fn blizzard_hits_in_hail() {
        let blizzard = get_move("blizzard").expect("blizzard");
        assert_eq!(effective_accuracy(blizzard, Some(Weather::Hail)), None);
    }

    #[test]
    fn swift_swim_doubles_speed_in_rain() {
        let pokemon = make_pokemon("gyarados", "Swift Swim");
        assert_eq!(weather_speed_multiplier(&pokemon, Some(Weather::Rain)), 2);
        assert_eq!(weather_speed_multiplier(&pokemon, Some(Weather::Sun)), 1);
    }

    #[test]
    fn sand_spares_rock_ground_steel() {
        let tyranitar = make_pokemon("tyranitar", "Sand Stream");
        let pikachu = make_pokemon("pikachu", "Static");
        assert_eq!(weather_residual_damage(&tyranitar, Some(Weather::Sand)), None);
        assert_eq!(
            weather_residual_damage(&pikachu, Some(Weather::Sand)),
            Some(pikachu.stats.hp / 16)
        );
        let guarded = make_pokemon("pikachu", "Magic Guard");
        assert_eq!(weather_residual_damage(&guarded, Some(Weather::Hail)), None);
    }

    #[test]
    fn weather_counter_expires() {
        let mut field = Field::default();
        assert!(field.set_weather(Weather::Rain));
        assert!(!field.set_weather(Weather::Rain));
        for _ in 0..WEATHER_TURNS {
            assert!(field.is(Weather::Rain));
            field.tick_weather();
        }
        assert_eq!(field.weather, None);
    }
}
