use phf::phf_map;

/// Abilities the resolution pipeline reacts to. Anything else is `Other`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Ability {
    Other,
    Adaptability,
    ArenaTrap,
    BadDreams,
    BattleArmor,
    Chlorophyll,
    DrySkin,
    EarlyBird,
    Filter,
    Guts,
    Heatproof,
    Hydration,
    IceBody,
    Immunity,
    Insomnia,
    Levitate,
    Limber,
    LiquidOoze,
    MagicGuard,
    MagmaArmor,
    MagnetPull,
    NaturalCure,
    Overcoat,
    PoisonHeal,
    Pressure,
    QuickFeet,
    RainDish,
    RockHead,
    SandVeil,
    SereneGrace,
    ShadowTag,
    ShedSkin,
    ShellArmor,
    SlowStart,
    Sniper,
    SolidRock,
    SpeedBoost,
    SuctionCups,
    SuperLuck,
    SwiftSwim,
    Truant,
    VitalSpirit,
    WaterVeil,
}

static ABILITIES: phf::Map<&'static str, Ability> = phf_map! {
    "adaptability" => Ability::Adaptability,
    "arenatrap" => Ability::ArenaTrap,
    "baddreams" => Ability::BadDreams,
    "battlearmor" => Ability::BattleArmor,
    "chlorophyll" => Ability::Chlorophyll,
    "dryskin" => Ability::DrySkin,
    "earlybird" => Ability::EarlyBird,
    "filter" => Ability::Filter,
    "guts" => Ability::Guts,
    "heatproof" => Ability::Heatproof,
    "hydration" => Ability::Hydration,
    "icebody" => Ability::IceBody,
    "immunity" => Ability::Immunity,
    "insomnia" => Ability::Insomnia,
    "levitate" => Ability::Levitate,
    "limber" => Ability::Limber,
    "liquidooze" => Ability::LiquidOoze,
    "magicguard" => Ability::MagicGuard,
    "magmaarmor" => Ability::MagmaArmor,
    "magnetpull" => Ability::MagnetPull,
    "naturalcure" => Ability::NaturalCure,
    "overcoat" => Ability::Overcoat,
    "poisonheal" => Ability::PoisonHeal,
    "pressure" => Ability::Pressure,
    "quickfeet" => Ability::QuickFeet,
    "raindish" => Ability::RainDish,
    "rockhead" => Ability::RockHead,
    "sandveil" => Ability::SandVeil,
    "serenegrace" => Ability::SereneGrace,
    "shadowtag" => Ability::ShadowTag,
    "shedskin" => Ability::ShedSkin,
    "shellarmor" => Ability::ShellArmor,
    "slowstart" => Ability::SlowStart,
    "sniper" => Ability::Sniper,
    "solidrock" => Ability::SolidRock,
    "speedboost" => Ability::SpeedBoost,
    "suctioncups" => Ability::SuctionCups,
    "superluck" => Ability::SuperLuck,
    "swiftswim" => Ability::SwiftSwim,
    "truant" => Ability::Truant,
    "vitalspirit" => Ability::VitalSpirit,
    "waterveil" => Ability::WaterVeil,
};

/// Unknown abilities are not an error: they simply have no modelled effect.
pub fn ability_from_name(name: &str) -> Ability {
    ABILITIES
        .get(super::normalize_id(name).as_str())
        .copied()
        .unwrap_or(Ability::Other)
}

impl Ability {
    pub fn blocks_crits(self) -> bool {
        matches!(self, Ability::BattleArmor | Ability::ShellArmor)
    }

    pub fn blocks_weather_damage(self) -> bool {
        matches!(self, Ability::MagicGuard | Ability::Overcoat)
    }

    pub fn blocks_indirect_damage(self) -> bool {
        self == Ability::MagicGuard
    }

    pub fn wakes_up_early(self) -> bool {
        self == Ability::EarlyBird
    }
}
