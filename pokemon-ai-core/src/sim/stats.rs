use crate::data::species::SpeciesData;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

/// Boostable stats, in the order they are stored in `Volatiles::stages`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stage {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Atk,
        Stage::Def,
        Stage::Spa,
        Stage::Spd,
        Stage::Spe,
        Stage::Accuracy,
        Stage::Evasion,
    ];
}

pub const MAX_STAGE: i8 = 6;

/// Nature multiplier in percent.
pub fn stat_modifier(nature: Nature, stat: Stat) -> u16 {
    match nature {
        Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => 100,
        Nature::Lonely => bonus(stat, Stat::Atk, Stat::Def),
        Nature::Brave => bonus(stat, Stat::Atk, Stat::Spe),
        Nature::Adamant => bonus(stat, Stat::Atk, Stat::Spa),
        Nature::Naughty => bonus(stat, Stat::Atk, Stat::Spd),
        Nature::Bold => bonus(stat, Stat::Def, Stat::Atk),
        Nature::Relaxed => bonus(stat, Stat::Def, Stat::Spe),
        Nature::Impish => bonus(stat, Stat::Def, Stat::Spa),
        Nature::Lax => bonus(stat, Stat::Def, Stat::Spd),
        Nature::Timid => bonus(stat, Stat::Spe, Stat::Atk),
        Nature::Hasty => bonus(stat, Stat::Spe, Stat::Def),
        Nature::Jolly => bonus(stat, Stat::Spe, Stat::Spa),
        Nature::Naive => bonus(stat, Stat::Spe, Stat::Spd),
        Nature::Modest => bonus(stat, Stat::Spa, Stat::Atk),
        Nature::Mild => bonus(stat, Stat::Spa, Stat::Def),
        Nature::Quiet => bonus(stat, Stat::Spa, Stat::Spe),
        Nature::Rash => bonus(stat, Stat::Spa, Stat::Spd),
        Nature::Calm => bonus(stat, Stat::Spd, Stat::Atk),
        Nature::Gentle => bonus(stat, Stat::Spd, Stat::Def),
        Nature::Sassy => bonus(stat, Stat::Spd, Stat::Spe),
        Nature::Careful => bonus(stat, Stat::Spd, Stat::Spa),
    }
}

fn bonus(stat: Stat, boosted: Stat, lowered: Stat) -> u16 {
    if stat == boosted {
        110
    } else if stat == lowered {
        90
    } else {
        100
    }
}

pub fn calc_hp(base: u16, iv: u8, ev: u8, level: u8) -> u16 {
    let ev_quarter = (ev / 4) as u16;
    let base_value = base * 2 + iv as u16 + ev_quarter;
    let intermediate = (base_value * level as u16) / 100;
    intermediate + level as u16 + 10
}

pub fn calc_stat(base: u16, iv: u8, ev: u8, level: u8, nature_percent: u16) -> u16 {
    let ev_quarter = (ev / 4) as u16;
    let base_value = base * 2 + iv as u16 + ev_quarter;
    let intermediate = (base_value as u32 * level as u32) / 100;
    ((intermediate + 5) * nature_percent as u32 / 100) as u16
}

/// Stat after a battle stage: 2/2 scale for stats, 3/3 for accuracy and evasion.
pub fn apply_stage(value: u32, stage: i8, scale: u32) -> u32 {
    let stage = stage.clamp(-MAX_STAGE, MAX_STAGE);
    if stage >= 0 {
        value * (scale + stage as u32) / scale
    } else {
        value * scale / (scale + stage.unsigned_abs() as u32)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StatsSet {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatsSet {
    pub fn from_species(
        species: &SpeciesData,
        level: u8,
        evs: [u8; 6],
        ivs: [u8; 6],
        nature: Nature,
    ) -> Self {
        let base = species.base_stats;
        let stat = |value: u16, index: usize, which: Stat| {
            calc_stat(value, ivs[index], evs[index], level, stat_modifier(nature, which))
        };
        Self {
            hp: calc_hp(base.hp as u16, ivs[0], evs[0], level),
            atk: stat(base.atk as u16, 1, Stat::Atk),
            def: stat(base.def as u16, 2, Stat::Def),
            spa: stat(base.spa as u16, 3, Stat::Spa),
            spd: stat(base.spd as u16, 4, Stat::Spd),
            spe: stat(base.spe as u16, 5, Stat::Spe),
        }
    }
}

pub fn parse_nature(name: &str) -> Option<Nature> {
    let nature = match crate::data::normalize_id(name).as_str() {
        "hardy" => Nature::Hardy,
        "lonely" => Nature::Lonely,
        "brave" => Nature::Brave,
        "adamant" => Nature::Adamant,
        "naughty" => Nature::Naughty,
        "bold" => Nature::Bold,
        "docile" => Nature::Docile,
        "relaxed" => Nature::Relaxed,
        "impish" => Nature::Impish,
        "lax" => Nature::Lax,
        "timid" => Nature::Timid,
        "hasty" => Nature::Hasty,
        "serious" => Nature::Serious,
        "jolly" => Nature::Jolly,
        "naive" => Nature::Naive,
        "modest" => Nature::Modest,
        "mild" => Nature::Mild,
        "quiet" => Nature::Quiet,
        "bashful" => Nature::Bashful,
        "rash" => Nature::Rash,
        "calm" => Nature::Calm,
        "gentle" => Nature::Gentle,
        "sassy" => Nature::Sassy,
        "careful" => Nature::Careful,
        "quirky" => Nature::Quirky,
        _ => return None,
    };
    Some(nature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::species::get_species;

    #[test]
    fn test_charizard_lv50_adamant() {
        let evs = [0, 252, 0, 0, 4, 252];
        let ivs = [31; 6];
        let species = get_species("charizard").expect("Charizard data should be available");
        let set = StatsSet::from_species(species, 50, evs, ivs, Nature::Adamant);
        assert_eq!(set.hp, 153);
        assert_eq!(set.atk, 149);
        assert_eq!(set.def, 98);
        assert_eq!(set.spa, 116);
        assert_eq!(set.spd, 106);
        assert_eq!(set.spe, 152);
    }

    #[test]
    fn test_dragonite_lv50_neutral() {
        let species = get_species("dragonite").expect("Dragonite data should be available");
        let set = StatsSet::from_species(species, 50, [0; 6], [0; 6], Nature::Hardy);
        assert_eq!(set.hp, 151);
        assert_eq!(set.atk, 139);
        assert_eq!(set.def, 100);
        assert_eq!(set.spa, 105);
        assert_eq!(set.spd, 105);
        assert_eq!(set.spe, 85);
    }

    #[test]
    fn test_nature_modifiers() {
        assert_eq!(stat_modifier(Nature::Adamant, Stat::Atk), 110);
        assert_eq!(stat_modifier(Nature::Adamant, Stat::Spa), 90);
        assert_eq!(stat_modifier(Nature::Adamant, Stat::Def), 100);
        assert_eq!(parse_nature("Timid"), Some(Nature::Timid));
    }

    #[test]
    fn stages_scale_both_ways() {
        assert_eq!(apply_stage(100, 2, 2), 200);
        assert_eq!(apply_stage(100, -2, 2), 50);
        assert_eq!(apply_stage(100, 1, 3), 133);
        assert_eq!(apply_stage(100, -6, 3), 33);
        assert_eq!(apply_stage(100, 9, 2), 400);
    }
}
