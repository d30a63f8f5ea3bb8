//! Integer weights for the static evaluator, read from `Name: value` text.

use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    #[error("line {line}: expected `Name: value`, got {text:?}")]
    Malformed { line: usize, text: String },
    #[error("line {line}: invalid value {value:?} for {name}")]
    InvalidValue {
        line: usize,
        name: String,
        value: String,
    },
}

/// Score weights. Every term defaults to 0.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Weights {
    pub transposition_table: i64,

    pub light_screen: i64,
    pub lucky_chant: i64,
    pub mist: i64,
    pub reflect: i64,
    pub safeguard: i64,
    pub tailwind: i64,
    pub wish: i64,

    pub spikes: i64,
    pub stealth_rock: i64,
    pub toxic_spikes: i64,

    pub members: i64,
    pub hp: i64,
    pub aqua_ring: i64,
    pub curse: i64,
    pub imprison: i64,
    pub ingrain: i64,
    pub leech_seed: i64,
    pub loaf: i64,
    pub magnet_rise: i64,
    pub nightmare: i64,
    pub substitute: i64,
    pub substitute_hp: i64,
    pub torment: i64,
    pub trapped: i64,

    pub burn: i64,
    pub freeze: i64,
    pub paralysis: i64,
    pub poison: i64,
    pub sleep: i64,

    pub attack_stage: i64,
    pub defense_stage: i64,
    pub special_attack_stage: i64,
    pub special_defense_stage: i64,
    pub speed_stage: i64,
    pub focus_energy: i64,

    pub baton_pass: i64,
    pub no_pp: i64,
}

static BUILTIN: Lazy<Weights> = Lazy::new(|| {
    Weights::parse(include_str!("../../settings/evaluate.txt")).unwrap_or_else(|err| {
        log::warn!("built-in weights rejected ({err}), evaluating with zeros");
        Weights::default()
    })
});

impl Weights {
    /// The table shipped in `settings/evaluate.txt`.
    pub fn builtin() -> &'static Weights {
        &BUILTIN
    }

    pub fn parse(text: &str) -> Result<Self, WeightsError> {
        let mut weights = Weights::default();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (name, value) = trimmed.split_once(':').ok_or_else(|| WeightsError::Malformed {
                line,
                text: trimmed.to_string(),
            })?;
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() {
                return Err(WeightsError::Malformed {
                    line,
                    text: trimmed.to_string(),
                });
            }
            let parsed: i64 = value.parse().map_err(|_| WeightsError::InvalidValue {
                line,
                name: name.to_string(),
                value: value.to_string(),
            })?;
            match weights.term_mut(name) {
                Some(term) => *term = parsed,
                None => log::warn!("line {line}: unknown weight {name:?} ignored"),
            }
        }
        Ok(weights)
    }

    fn term_mut(&mut self, name: &str) -> Option<&mut i64> {
        let term = match name {
            "Transposition Table" => &mut self.transposition_table,
            "Light Screen" => &mut self.light_screen,
            "Lucky Chant" => &mut self.lucky_chant,
            "Mist" => &mut self.mist,
            "Reflect" => &mut self.reflect,
            "Safeguard" => &mut self.safeguard,
            "Tailwind" => &mut self.tailwind,
            "Wish" => &mut self.wish,
            "Spikes" => &mut self.spikes,
            "Stealth Rock" => &mut self.stealth_rock,
            "Toxic Spikes" => &mut self.toxic_spikes,
            "Members" => &mut self.members,
            "HP" => &mut self.hp,
            "Aqua Ring" => &mut self.aqua_ring,
            "Curse" => &mut self.curse,
            "Imprison" => &mut self.imprison,
            "Ingrain" => &mut self.ingrain,
            "Leech Seed" => &mut self.leech_seed,
            "Loaf" => &mut self.loaf,
            "Magnet Rise" => &mut self.magnet_rise,
            "Nightmare" => &mut self.nightmare,
            "Substitute" => &mut self.substitute,
            "Substitute HP" => &mut self.substitute_hp,
            "Torment" => &mut self.torment,
            "Trapped" => &mut self.trapped,
            "Burn" => &mut self.burn,
            "Freeze" => &mut self.freeze,
            "Paralysis" => &mut self.paralysis,
            "Poison" => &mut self.poison,
            "Sleep" => &mut self.sleep,
            "Attack stage" => &mut self.attack_stage,
            "Defense stage" => &mut self.defense_stage,
            "Special Attack stage" => &mut self.special_attack_stage,
            "Special Defense stage" => &mut self.special_defense_stage,
            "Speed stage" => &mut self.speed_stage,
            "Focus Energy" => &mut self.focus_energy,
            "Baton Pass" => &mut self.baton_pass,
            "No PP" => &mut self.no_pp,
            _ => return None,
        };
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_terms_are_zero() {
        let weights = Weights::parse("HP: 10\n\n# comment\nSpeed stage: -3\n").expect("parse");
        assert_eq!(weights.hp, 10);
        assert_eq!(weights.speed_stage, -3);
        assert_eq!(weights.members, 0);
        assert_eq!(weights.no_pp, 0);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let weights = Weights::parse("Pressure: 12\nMembers: 7").expect("parse");
        assert_eq!(weights.members, 7);
    }

    #[test]
    fn malformed_lines_report_their_number() {
        assert_eq!(
            Weights::parse("HP: 1\nMembers 4\n"),
            Err(WeightsError::Malformed {
                line: 2,
                text: "Members 4".to_string()
            })
        );
        let err = Weights::parse("\n\nReflect: lots").expect_err("not a number");
        assert!(matches!(err, WeightsError::InvalidValue { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3"));
    }

    #[test]
    fn builtin_table_loads() {
        let weights = Weights::builtin();
        assert_eq!(weights.transposition_table, 1);
        assert!(weights.members > 0);
        assert!(weights.hp > 0);
    }
}
