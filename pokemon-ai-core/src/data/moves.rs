use crate::data::types::Type;
use crate::sim::field::Weather;
use crate::sim::stats::Stage;
use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Who {
    User,
    Target,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusEffect {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Toxic,
    Sleep,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Hazard {
    Spikes,
    StealthRock,
    ToxicSpikes,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Screen {
    Reflect,
    LightScreen,
    Mist,
    Safeguard,
    LuckyChant,
    Tailwind,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FixedDamage {
    Amount(u16),
    Level,
    HalfHp,
    Endeavor,
    Psywave,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Vanish {
    Fly,
    Dig,
}

/// What a move does beyond (or instead of) dealing damage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Effect {
    None,
    Status(StatusEffect),
    Confuse,
    Boost(Who, &'static [(Stage, i8)]),
    /// Recoil of damage dealt divided by the denominator.
    Recoil(u8),
    Drain,
    Heal,
    Rest,
    Wish,
    Protect,
    Endure,
    Substitute,
    LeechSeed,
    Curse,
    Taunt,
    Encore,
    Disable,
    Torment,
    Yawn,
    PerishSong,
    Hazard(Hazard),
    Screen(Screen),
    SetWeather(Weather),
    TrickRoom,
    Gravity,
    Haze,
    AquaRing,
    Ingrain,
    MagnetRise,
    FocusEnergy,
    Nightmare,
    MeanLook,
    PartialTrap,
    Imprison,
    HealBlock,
    Embargo,
    Uproar,
    Rampage,
    RapidSpin,
    SelfDestruct,
    Recharge,
    TwoTurn(Vanish),
    BatonPass,
    UTurn,
    /// Roar and Whirlwind: drags in a random member of the target's team.
    Phaze,
    CrashOnMiss,
    Fixed(FixedDamage),
    OneHitKo,
    FalseSwipe,
    Struggle,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SecondaryEffect {
    Status(StatusEffect),
    Confuse,
    Flinch,
    Boost(Who, Stage, i8),
    /// One of burn, freeze or paralysis, chosen by the variable index.
    TriAttack,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Secondary {
    /// Percent chance out of 100.
    pub chance: u8,
    pub effect: SecondaryEffect,
}

/// Moves whose outcome depends on an extra random index the search enumerates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variable {
    None,
    Magnitude,
    Psywave,
    TriAttack,
    Rampage,
    Protect,
    /// Index into the target's eligible replacements.
    Phaze,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MoveFlags {
    pub high_crit: bool,
    pub heals: bool,
    pub gravity_blocked: bool,
    pub thaws_user: bool,
}

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags {
        high_crit: false,
        heals: false,
        gravity_blocked: false,
        thaws_user: false,
    };
}

#[derive(Debug, Eq, Hash, PartialEq)]
pub struct MoveData {
    pub id: &'static str,
    pub name: &'static str,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u16,
    /// `None` never misses.
    pub accuracy: Option<u8>,
    pub pp: u8,
    pub priority: i8,
    pub effect: Effect,
    pub secondary: Option<Secondary>,
    pub variable: Variable,
    pub flags: MoveFlags,
}

impl MoveData {
    const fn attack(
        id: &'static str,
        name: &'static str,
        move_type: Type,
        category: MoveCategory,
        power: u16,
        accuracy: Option<u8>,
        pp: u8,
    ) -> Self {
        Self {
            id,
            name,
            move_type,
            category,
            power,
            accuracy,
            pp,
            priority: 0,
            effect: Effect::None,
            secondary: None,
            variable: Variable::None,
            flags: MoveFlags::NONE,
        }
    }

    const fn status(
        id: &'static str,
        name: &'static str,
        move_type: Type,
        accuracy: Option<u8>,
        pp: u8,
        effect: Effect,
    ) -> Self {
        Self {
            effect,
            ..Self::attack(id, name, move_type, MoveCategory::Status, 0, accuracy, pp)
        }
    }

    const fn effect(self, effect: Effect) -> Self {
        Self { effect, ..self }
    }

    const fn secondary(self, chance: u8, effect: SecondaryEffect) -> Self {
        Self {
            secondary: Some(Secondary { chance, effect }),
            ..self
        }
    }

    const fn priority(self, priority: i8) -> Self {
        Self { priority, ..self }
    }

    const fn variable(self, variable: Variable) -> Self {
        Self { variable, ..self }
    }

    const fn flags(self, flags: MoveFlags) -> Self {
        Self { flags, ..self }
    }

    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    /// Moves that act on the foe and are stopped by Protect.
    pub fn targets_foe(&self) -> bool {
        if self.is_damaging() {
            return true;
        }
        match self.effect {
            Effect::Status(_)
            | Effect::Confuse
            | Effect::Boost(Who::Target, _)
            | Effect::LeechSeed
            | Effect::Taunt
            | Effect::Encore
            | Effect::Disable
            | Effect::Torment
            | Effect::Yawn
            | Effect::Nightmare
            | Effect::MeanLook
            | Effect::Phaze
            | Effect::HealBlock
            | Effect::Embargo => true,
            _ => false,
        }
    }
}

use MoveCategory::{Physical, Special};
use SecondaryEffect as S;

const HIGH_CRIT: MoveFlags = MoveFlags { high_crit: true, ..MoveFlags::NONE };
const HEALS: MoveFlags = MoveFlags { heals: true, ..MoveFlags::NONE };
const GRAVITY: MoveFlags = MoveFlags { gravity_blocked: true, ..MoveFlags::NONE };

pub static STRUGGLE: MoveData =
    MoveData::attack("struggle", "Struggle", Type::Typeless, Physical, 50, None, 1)
        .effect(Effect::Struggle);

/// Confusion self-hit: a typeless 40 power physical attack on the user.
pub static CONFUSION_HIT: MoveData =
    MoveData::attack("confusionhit", "Confusion", Type::Typeless, Physical, 40, None, 1);

static MOVES: phf::Map<&'static str, MoveData> = phf_map! {
    "tackle" => MoveData::attack("tackle", "Tackle", Type::Normal, Physical, 40, Some(100), 35),
    "return" => MoveData::attack("return", "Return", Type::Normal, Physical, 102, Some(100), 20),
    "slash" => MoveData::attack("slash", "Slash", Type::Normal, Physical, 70, Some(100), 20).flags(HIGH_CRIT),
    "bodyslam" => MoveData::attack("bodyslam", "Body Slam", Type::Normal, Physical, 85, Some(100), 15)
        .secondary(30, S::Status(StatusEffect::Paralysis)),
    "doubleedge" => MoveData::attack("doubleedge", "Double-Edge", Type::Normal, Physical, 120, Some(100), 15)
        .effect(Effect::Recoil(3)),
    "quickattack" => MoveData::attack("quickattack", "Quick Attack", Type::Normal, Physical, 40, Some(100), 30).priority(1),
    "extremespeed" => MoveData::attack("extremespeed", "Extreme Speed", Type::Normal, Physical, 80, Some(100), 5).priority(2),
    "hyperbeam" => MoveData::attack("hyperbeam", "Hyper Beam", Type::Normal, Special, 150, Some(90), 5)
        .effect(Effect::Recharge),
    "gigaimpact" => MoveData::attack("gigaimpact", "Giga Impact", Type::Normal, Physical, 150, Some(90), 5)
        .effect(Effect::Recharge),
    "falseswipe" => MoveData::attack("falseswipe", "False Swipe", Type::Normal, Physical, 40, Some(100), 40)
        .effect(Effect::FalseSwipe),
    "triattack" => MoveData::attack("triattack", "Tri Attack", Type::Normal, Special, 80, Some(100), 10)
        .secondary(20, S::TriAttack)
        .variable(Variable::TriAttack),
    "superfang" => MoveData::attack("superfang", "Super Fang", Type::Normal, Physical, 1, Some(90), 10)
        .effect(Effect::Fixed(FixedDamage::HalfHp)),
    "endeavor" => MoveData::attack("endeavor", "Endeavor", Type::Normal, Physical, 1, Some(100), 5)
        .effect(Effect::Fixed(FixedDamage::Endeavor)),
    "sonicboom" => MoveData::attack("sonicboom", "Sonic Boom", Type::Normal, Special, 1, Some(90), 20)
        .effect(Effect::Fixed(FixedDamage::Amount(20))),
    "explosion" => MoveData::attack("explosion", "Explosion", Type::Normal, Physical, 250, Some(100), 5)
        .effect(Effect::SelfDestruct),
    "uproar" => MoveData::attack("uproar", "Uproar", Type::Normal, Special, 90, Some(100), 10)
        .effect(Effect::Uproar),
    "swift" => MoveData::attack("swift", "Swift", Type::Normal, Special, 60, None, 20),
    "rapidspin" => MoveData::attack("rapidspin", "Rapid Spin", Type::Normal, Physical, 20, Some(100), 40)
        .effect(Effect::RapidSpin),
    "wrap" => MoveData::attack("wrap", "Wrap", Type::Normal, Physical, 15, Some(90), 20)
        .effect(Effect::PartialTrap),
    "flamethrower" => MoveData::attack("flamethrower", "Flamethrower", Type::Fire, Special, 90, Some(100), 15)
        .secondary(10, S::Status(StatusEffect::Burn)),
    "fireblast" => MoveData::attack("fireblast", "Fire Blast", Type::Fire, Special, 110, Some(85), 5)
        .secondary(10, S::Status(StatusEffect::Burn)),
    "flareblitz" => MoveData::attack("flareblitz", "Flare Blitz", Type::Fire, Physical, 120, Some(100), 15)
        .effect(Effect::Recoil(3))
        .secondary(10, S::Status(StatusEffect::Burn))
        .flags(MoveFlags { thaws_user: true, ..MoveFlags::NONE }),
    "firespin" => MoveData::attack("firespin", "Fire Spin", Type::Fire, Special, 35, Some(85), 15)
        .effect(Effect::PartialTrap),
    "surf" => MoveData::attack("surf", "Surf", Type::Water, Special, 90, Some(100), 15),
    "hydropump" => MoveData::attack("hydropump", "Hydro Pump", Type::Water, Special, 110, Some(80), 5),
    "waterfall" => MoveData::attack("waterfall", "Waterfall", Type::Water, Physical, 80, Some(100), 15)
        .secondary(20, S::Flinch),
    "thunderbolt" => MoveData::attack("thunderbolt", "Thunderbolt", Type::Electric, Special, 90, Some(100), 15)
        .secondary(10, S::Status(StatusEffect::Paralysis)),
    "thunder" => MoveData::attack("thunder", "Thunder", Type::Electric, Special, 110, Some(70), 10)
        .secondary(30, S::Status(StatusEffect::Paralysis)),
    "voltswitch" => MoveData::attack("voltswitch", "Volt Switch", Type::Electric, Special, 70, Some(100), 20)
        .effect(Effect::UTurn),
    "energyball" => MoveData::attack("energyball", "Energy Ball", Type::Grass, Special, 90, Some(100), 10)
        .secondary(10, S::Boost(Who::Target, Stage::Spd, -1)),
    "gigadrain" => MoveData::attack("gigadrain", "Giga Drain", Type::Grass, Special, 75, Some(100), 10)
        .effect(Effect::Drain)
        .flags(HEALS),
    "icebeam" => MoveData::attack("icebeam", "Ice Beam", Type::Ice, Special, 90, Some(100), 10)
        .secondary(10, S::Status(StatusEffect::Freeze)),
    "blizzard" => MoveData::attack("blizzard", "Blizzard", Type::Ice, Special, 110, Some(70), 5)
        .secondary(10, S::Status(StatusEffect::Freeze)),
    "iceshard" => MoveData::attack("iceshard", "Ice Shard", Type::Ice, Physical, 40, Some(100), 30).priority(1),
    "closecombat" => MoveData::attack("closecombat", "Close Combat", Type::Fighting, Physical, 120, Some(100), 5)
        .effect(Effect::Boost(Who::User, &[(Stage::Def, -1), (Stage::Spd, -1)])),
    "highjumpkick" => MoveData::attack("highjumpkick", "High Jump Kick", Type::Fighting, Physical, 130, Some(90), 10)
        .effect(Effect::CrashOnMiss)
        .flags(GRAVITY),
    "machpunch" => MoveData::attack("machpunch", "Mach Punch", Type::Fighting, Physical, 40, Some(100), 30).priority(1),
    "focusblast" => MoveData::attack("focusblast", "Focus Blast", Type::Fighting, Special, 120, Some(70), 5)
        .secondary(10, S::Boost(Who::Target, Stage::Spd, -1)),
    "dynamicpunch" => MoveData::attack("dynamicpunch", "Dynamic Punch", Type::Fighting, Physical, 100, Some(50), 5)
        .secondary(100, S::Confuse),
    "seismictoss" => MoveData::attack("seismictoss", "Seismic Toss", Type::Fighting, Physical, 1, Some(100), 20)
        .effect(Effect::Fixed(FixedDamage::Level)),
    "sludgebomb" => MoveData::attack("sludgebomb", "Sludge Bomb", Type::Poison, Special, 90, Some(100), 10)
        .secondary(30, S::Status(StatusEffect::Poison)),
    "earthquake" => MoveData::attack("earthquake", "Earthquake", Type::Ground, Physical, 100, Some(100), 10),
    "magnitude" => MoveData::attack("magnitude", "Magnitude", Type::Ground, Physical, 1, Some(100), 30)
        .variable(Variable::Magnitude),
    "dig" => MoveData::attack("dig", "Dig", Type::Ground, Physical, 80, Some(100), 10)
        .effect(Effect::TwoTurn(Vanish::Dig)),
    "fissure" => MoveData::attack("fissure", "Fissure", Type::Ground, Physical, 1, Some(30), 5)
        .effect(Effect::OneHitKo),
    "airslash" => MoveData::attack("airslash", "Air Slash", Type::Flying, Special, 75, Some(95), 15)
        .secondary(30, S::Flinch),
    "bravebird" => MoveData::attack("bravebird", "Brave Bird", Type::Flying, Physical, 120, Some(100), 15)
        .effect(Effect::Recoil(3)),
    "fly" => MoveData::attack("fly", "Fly", Type::Flying, Physical, 90, Some(95), 15)
        .effect(Effect::TwoTurn(Vanish::Fly))
        .flags(GRAVITY),
    "psychic" => MoveData::attack("psychic", "Psychic", Type::Psychic, Special, 90, Some(100), 10)
        .secondary(10, S::Boost(Who::Target, Stage::Spd, -1)),
    "psywave" => MoveData::attack("psywave", "Psywave", Type::Psychic, Special, 1, Some(100), 15)
        .effect(Effect::Fixed(FixedDamage::Psywave))
        .variable(Variable::Psywave),
    "bugbuzz" => MoveData::attack("bugbuzz", "Bug Buzz", Type::Bug, Special, 90, Some(100), 10)
        .secondary(10, S::Boost(Who::Target, Stage::Spd, -1)),
    "uturn" => MoveData::attack("uturn", "U-turn", Type::Bug, Physical, 70, Some(100), 20)
        .effect(Effect::UTurn),
    "xscissor" => MoveData::attack("xscissor", "X-Scissor", Type::Bug, Physical, 80, Some(100), 15),
    "stoneedge" => MoveData::attack("stoneedge", "Stone Edge", Type::Rock, Physical, 100, Some(80), 5).flags(HIGH_CRIT),
    "rockslide" => MoveData::attack("rockslide", "Rock Slide", Type::Rock, Physical, 75, Some(90), 10)
        .secondary(30, S::Flinch),
    "shadowball" => MoveData::attack("shadowball", "Shadow Ball", Type::Ghost, Special, 80, Some(100), 15)
        .secondary(20, S::Boost(Who::Target, Stage::Spd, -1)),
    "nightshade" => MoveData::attack("nightshade", "Night Shade", Type::Ghost, Special, 1, Some(100), 15)
        .effect(Effect::Fixed(FixedDamage::Level)),
    "outrage" => MoveData::attack("outrage", "Outrage", Type::Dragon, Physical, 120, Some(100), 10)
        .effect(Effect::Rampage)
        .variable(Variable::Rampage),
    "dracometeor" => MoveData::attack("dracometeor", "Draco Meteor", Type::Dragon, Special, 130, Some(90), 5)
        .effect(Effect::Boost(Who::User, &[(Stage::Spa, -2)])),
    "dragonrage" => MoveData::attack("dragonrage", "Dragon Rage", Type::Dragon, Special, 1, Some(100), 10)
        .effect(Effect::Fixed(FixedDamage::Amount(40))),
    "crunch" => MoveData::attack("crunch", "Crunch", Type::Dark, Physical, 80, Some(100), 15)
        .secondary(20, S::Boost(Who::Target, Stage::Def, -1)),
    "darkpulse" => MoveData::attack("darkpulse", "Dark Pulse", Type::Dark, Special, 80, Some(100), 15)
        .secondary(20, S::Flinch),
    "ironhead" => MoveData::attack("ironhead", "Iron Head", Type::Steel, Physical, 80, Some(100), 15)
        .secondary(30, S::Flinch),
    "flashcannon" => MoveData::attack("flashcannon", "Flash Cannon", Type::Steel, Special, 80, Some(100), 10)
        .secondary(10, S::Boost(Who::Target, Stage::Spd, -1)),
    "bulletpunch" => MoveData::attack("bulletpunch", "Bullet Punch", Type::Steel, Physical, 40, Some(100), 30).priority(1),

    "willowisp" => MoveData::status("willowisp", "Will-O-Wisp", Type::Fire, Some(85), 15, Effect::Status(StatusEffect::Burn)),
    "thunderwave" => MoveData::status("thunderwave", "Thunder Wave", Type::Electric, Some(100), 20, Effect::Status(StatusEffect::Paralysis)),
    "toxic" => MoveData::status("toxic", "Toxic", Type::Poison, Some(90), 10, Effect::Status(StatusEffect::Toxic)),
    "spore" => MoveData::status("spore", "Spore", Type::Grass, Some(100), 15, Effect::Status(StatusEffect::Sleep)),
    "sleeppowder" => MoveData::status("sleeppowder", "Sleep Powder", Type::Grass, Some(75), 15, Effect::Status(StatusEffect::Sleep)),
    "hypnosis" => MoveData::status("hypnosis", "Hypnosis", Type::Psychic, Some(60), 20, Effect::Status(StatusEffect::Sleep)),
    "confuseray" => MoveData::status("confuseray", "Confuse Ray", Type::Ghost, Some(100), 10, Effect::Confuse),
    "leechseed" => MoveData::status("leechseed", "Leech Seed", Type::Grass, Some(90), 10, Effect::LeechSeed),
    "swordsdance" => MoveData::status("swordsdance", "Swords Dance", Type::Normal, None, 30,
        Effect::Boost(Who::User, &[(Stage::Atk, 2)])),
    "dragondance" => MoveData::status("dragondance", "Dragon Dance", Type::Dragon, None, 20,
        Effect::Boost(Who::User, &[(Stage::Atk, 1), (Stage::Spe, 1)])),
    "calmmind" => MoveData::status("calmmind", "Calm Mind", Type::Psychic, None, 20,
        Effect::Boost(Who::User, &[(Stage::Spa, 1), (Stage::Spd, 1)])),
    "nastyplot" => MoveData::status("nastyplot", "Nasty Plot", Type::Dark, None, 20,
        Effect::Boost(Who::User, &[(Stage::Spa, 2)])),
    "growl" => MoveData::status("growl", "Growl", Type::Normal, Some(100), 40,
        Effect::Boost(Who::Target, &[(Stage::Atk, -1)])),
    "recover" => MoveData::status("recover", "Recover", Type::Normal, None, 10, Effect::Heal).flags(HEALS),
    "softboiled" => MoveData::status("softboiled", "Soft-Boiled", Type::Normal, None, 10, Effect::Heal).flags(HEALS),
    "roost" => MoveData::status("roost", "Roost", Type::Flying, None, 10, Effect::Heal).flags(HEALS),
    "rest" => MoveData::status("rest", "Rest", Type::Psychic, None, 10, Effect::Rest).flags(HEALS),
    "wish" => MoveData::status("wish", "Wish", Type::Normal, None, 10, Effect::Wish).flags(HEALS),
    "protect" => MoveData::status("protect", "Protect", Type::Normal, None, 10, Effect::Protect)
        .priority(3)
        .variable(Variable::Protect),
    "detect" => MoveData::status("detect", "Detect", Type::Fighting, None, 5, Effect::Protect)
        .priority(3)
        .variable(Variable::Protect),
    "endure" => MoveData::status("endure", "Endure", Type::Normal, None, 10, Effect::Endure)
        .priority(3)
        .variable(Variable::Protect),
    "substitute" => MoveData::status("substitute", "Substitute", Type::Normal, None, 10, Effect::Substitute),
    "curse" => MoveData::status("curse", "Curse", Type::Ghost, None, 10, Effect::Curse),
    "taunt" => MoveData::status("taunt", "Taunt", Type::Dark, Some(100), 20, Effect::Taunt),
    "encore" => MoveData::status("encore", "Encore", Type::Normal, Some(100), 5, Effect::Encore),
    "disable" => MoveData::status("disable", "Disable", Type::Normal, Some(100), 20, Effect::Disable),
    "torment" => MoveData::status("torment", "Torment", Type::Dark, Some(100), 15, Effect::Torment),
    "yawn" => MoveData::status("yawn", "Yawn", Type::Normal, None, 10, Effect::Yawn),
    "perishsong" => MoveData::status("perishsong", "Perish Song", Type::Normal, None, 5, Effect::PerishSong),
    "spikes" => MoveData::status("spikes", "Spikes", Type::Ground, None, 20, Effect::Hazard(Hazard::Spikes)),
    "stealthrock" => MoveData::status("stealthrock", "Stealth Rock", Type::Rock, None, 20, Effect::Hazard(Hazard::StealthRock)),
    "toxicspikes" => MoveData::status("toxicspikes", "Toxic Spikes", Type::Poison, None, 20, Effect::Hazard(Hazard::ToxicSpikes)),
    "reflect" => MoveData::status("reflect", "Reflect", Type::Psychic, None, 20, Effect::Screen(Screen::Reflect)),
    "lightscreen" => MoveData::status("lightscreen", "Light Screen", Type::Psychic, None, 30, Effect::Screen(Screen::LightScreen)),
    "mist" => MoveData::status("mist", "Mist", Type::Ice, None, 30, Effect::Screen(Screen::Mist)),
    "safeguard" => MoveData::status("safeguard", "Safeguard", Type::Normal, None, 25, Effect::Screen(Screen::Safeguard)),
    "luckychant" => MoveData::status("luckychant", "Lucky Chant", Type::Normal, None, 30, Effect::Screen(Screen::LuckyChant)),
    "tailwind" => MoveData::status("tailwind", "Tailwind", Type::Flying, None, 30, Effect::Screen(Screen::Tailwind)),
    "raindance" => MoveData::status("raindance", "Rain Dance", Type::Water, None, 5, Effect::SetWeather(Weather::Rain)),
    "sunnyday" => MoveData::status("sunnyday", "Sunny Day", Type::Fire, None, 5, Effect::SetWeather(Weather::Sun)),
    "sandstorm" => MoveData::status("sandstorm", "Sandstorm", Type::Rock, None, 10, Effect::SetWeather(Weather::Sand)),
    "hail" => MoveData::status("hail", "Hail", Type::Ice, None, 10, Effect::SetWeather(Weather::Hail)),
    "trickroom" => MoveData::status("trickroom", "Trick Room", Type::Psychic, None, 5, Effect::TrickRoom).priority(-7),
    "gravity" => MoveData::status("gravity", "Gravity", Type::Psychic, None, 5, Effect::Gravity),
    "haze" => MoveData::status("haze", "Haze", Type::Ice, None, 30, Effect::Haze),
    "aquaring" => MoveData::status("aquaring", "Aqua Ring", Type::Water, None, 20, Effect::AquaRing),
    "ingrain" => MoveData::status("ingrain", "Ingrain", Type::Grass, None, 20, Effect::Ingrain),
    "magnetrise" => MoveData::status("magnetrise", "Magnet Rise", Type::Electric, None, 10, Effect::MagnetRise).flags(GRAVITY),
    "focusenergy" => MoveData::status("focusenergy", "Focus Energy", Type::Normal, None, 30, Effect::FocusEnergy),
    "nightmare" => MoveData::status("nightmare", "Nightmare", Type::Ghost, Some(100), 15, Effect::Nightmare),
    "meanlook" => MoveData::status("meanlook", "Mean Look", Type::Normal, None, 5, Effect::MeanLook),
    "imprison" => MoveData::status("imprison", "Imprison", Type::Psychic, None, 10, Effect::Imprison),
    "healblock" => MoveData::status("healblock", "Heal Block", Type::Psychic, Some(100), 15, Effect::HealBlock),
    "embargo" => MoveData::status("embargo", "Embargo", Type::Dark, Some(100), 15, Effect::Embargo),
    "batonpass" => MoveData::status("batonpass", "Baton Pass", Type::Normal, None, 40, Effect::BatonPass),
    "roar" => MoveData::status("roar", "Roar", Type::Normal, None, 20, Effect::Phaze)
        .priority(-6)
        .variable(Variable::Phaze),
    "whirlwind" => MoveData::status("whirlwind", "Whirlwind", Type::Normal, None, 20, Effect::Phaze)
        .priority(-6)
        .variable(Variable::Phaze),
    "splash" => MoveData::status("splash", "Splash", Type::Normal, None, 40, Effect::None).flags(GRAVITY),
};

pub fn normalize_move_name(name: &str) -> String {
    super::normalize_id(name)
}

pub fn get_move(name: &str) -> Option<&'static MoveData> {
    MOVES.get(normalize_move_name(name).as_str())
}

pub fn all_moves() -> impl Iterator<Item = &'static MoveData> {
    MOVES.values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_display_name() {
        let mv = get_move("Thunder Wave").expect("thunderwave");
        assert_eq!(mv.id, "thunderwave");
        assert_eq!(mv.category, MoveCategory::Status);
        assert!(mv.targets_foe());
        assert!(get_move("Not A Move").is_none());
    }

    #[test]
    fn table_ids_match_keys() {
        for mv in all_moves() {
            assert_eq!(get_move(mv.name).map(|m| m.id), Some(mv.id), "{}", mv.name);
            assert!(mv.pp > 0);
            if let Some(secondary) = mv.secondary {
                assert!(secondary.chance > 0 && secondary.chance <= 100);
                assert!(mv.is_damaging());
            }
        }
    }

    #[test]
    fn self_targeting_moves_are_not_blocked_by_protect() {
        assert!(!get_move("swordsdance").expect("move").targets_foe());
        assert!(!get_move("stealthrock").expect("move").targets_foe());
        assert!(get_move("growl").expect("move").targets_foe());
    }
}
