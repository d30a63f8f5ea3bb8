use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    /// Struggle and confusion self-hits.
    Typeless,
}

/// Effectiveness in quarters: 0 immune, 1 = x1/4, 2 = x1/2, 4 neutral, 8 = x2, 16 = x4.
pub type Effectiveness = u8;

pub const NEUTRAL: Effectiveness = 4;

// Ref: pokemon-showdown/sim/dex-data.ts type chart, expressed in halves per single type.
fn single_type_halves(attacking: Type, defending: Type) -> u8 {
    use Type::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => 1,
            Ghost => 0,
            _ => 2,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => 1,
            Grass | Ice | Bug | Steel => 4,
            _ => 2,
        },
        Water => match defending {
            Water | Grass | Dragon => 1,
            Fire | Ground | Rock => 4,
            _ => 2,
        },
        Electric => match defending {
            Electric | Grass | Dragon => 1,
            Water | Flying => 4,
            Ground => 0,
            _ => 2,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 1,
            Water | Ground | Rock => 4,
            _ => 2,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => 1,
            Grass | Ground | Flying | Dragon => 4,
            _ => 2,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => 4,
            Poison | Flying | Psychic | Bug | Fairy => 1,
            Ghost => 0,
            _ => 2,
        },
        Poison => match defending {
            Grass | Fairy => 4,
            Poison | Ground | Rock | Ghost => 1,
            Steel => 0,
            _ => 2,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => 4,
            Grass | Bug => 1,
            Flying => 0,
            _ => 2,
        },
        Flying => match defending {
            Grass | Fighting | Bug => 4,
            Electric | Rock | Steel => 1,
            _ => 2,
        },
        Psychic => match defending {
            Fighting | Poison => 4,
            Psychic | Steel => 1,
            Dark => 0,
            _ => 2,
        },
        Bug => match defending {
            Grass | Psychic | Dark => 4,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => 1,
            _ => 2,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => 4,
            Fighting | Ground | Steel => 1,
            _ => 2,
        },
        Ghost => match defending {
            Ghost | Psychic => 4,
            Dark => 1,
            Normal => 0,
            _ => 2,
        },
        Dragon => match defending {
            Dragon => 4,
            Steel => 1,
            Fairy => 0,
            _ => 2,
        },
        Dark => match defending {
            Psychic | Ghost => 4,
            Fighting | Dark | Fairy => 1,
            _ => 2,
        },
        Steel => match defending {
            Rock | Ice | Fairy => 4,
            Fire | Water | Electric | Steel => 1,
            _ => 2,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => 4,
            Fire | Poison | Steel => 1,
            _ => 2,
        },
        Typeless => 2,
    }
}

/// Combined effectiveness against a (possibly mono-typed) defender. A mono type is
/// stored as the same type twice and only counted once.
pub fn effectiveness(attacking: Type, defending: [Type; 2]) -> Effectiveness {
    let first = single_type_halves(attacking, defending[0]);
    if defending[0] == defending[1] {
        return first * 2;
    }
    first * single_type_halves(attacking, defending[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_type_multiplies() {
        assert_eq!(effectiveness(Type::Ice, [Type::Dragon, Type::Flying]), 16);
        assert_eq!(effectiveness(Type::Electric, [Type::Water, Type::Flying]), 16);
        assert_eq!(effectiveness(Type::Ground, [Type::Fire, Type::Steel]), 16);
        assert_eq!(effectiveness(Type::Fire, [Type::Water, Type::Rock]), 1);
    }

    #[test]
    fn mono_type_counts_once() {
        assert_eq!(effectiveness(Type::Water, [Type::Fire, Type::Fire]), 8);
        assert_eq!(effectiveness(Type::Normal, [Type::Normal, Type::Normal]), NEUTRAL);
    }

    #[test]
    fn immunities() {
        assert_eq!(effectiveness(Type::Normal, [Type::Ghost, Type::Ghost]), 0);
        assert_eq!(effectiveness(Type::Ground, [Type::Steel, Type::Flying]), 0);
        assert_eq!(effectiveness(Type::Typeless, [Type::Ghost, Type::Ghost]), NEUTRAL);
    }
}
