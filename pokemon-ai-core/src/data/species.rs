use crate::data::types::Type;
use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BaseStats {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

#[derive(Debug, Eq, Hash, PartialEq)]
pub struct SpeciesData {
    pub id: &'static str,
    pub name: &'static str,
    /// Mono-typed species repeat their type.
    pub types: [Type; 2],
    pub base_stats: BaseStats,
}

macro_rules! species {
    ($id:literal, $name:literal, [$t1:ident, $t2:ident], $hp:literal, $atk:literal, $def:literal, $spa:literal, $spd:literal, $spe:literal) => {
        SpeciesData {
            id: $id,
            name: $name,
            types: [Type::$t1, Type::$t2],
            base_stats: BaseStats {
                hp: $hp,
                atk: $atk,
                def: $def,
                spa: $spa,
                spd: $spd,
                spe: $spe,
            },
        }
    };
}

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf_map! {
    "venusaur" => species!("venusaur", "Venusaur", [Grass, Poison], 80, 82, 83, 100, 100, 80),
    "charizard" => species!("charizard", "Charizard", [Fire, Flying], 78, 84, 78, 109, 85, 100),
    "blastoise" => species!("blastoise", "Blastoise", [Water, Water], 79, 83, 100, 85, 105, 78),
    "pikachu" => species!("pikachu", "Pikachu", [Electric, Electric], 35, 55, 40, 50, 50, 90),
    "clefable" => species!("clefable", "Clefable", [Fairy, Fairy], 95, 70, 73, 95, 90, 60),
    "dugtrio" => species!("dugtrio", "Dugtrio", [Ground, Ground], 35, 100, 50, 50, 70, 120),
    "alakazam" => species!("alakazam", "Alakazam", [Psychic, Psychic], 55, 50, 45, 135, 95, 120),
    "machamp" => species!("machamp", "Machamp", [Fighting, Fighting], 90, 130, 80, 65, 85, 55),
    "gengar" => species!("gengar", "Gengar", [Ghost, Poison], 60, 65, 60, 130, 75, 110),
    "starmie" => species!("starmie", "Starmie", [Water, Psychic], 60, 75, 85, 100, 85, 115),
    "gyarados" => species!("gyarados", "Gyarados", [Water, Flying], 95, 125, 79, 60, 100, 81),
    "vaporeon" => species!("vaporeon", "Vaporeon", [Water, Water], 130, 65, 60, 110, 95, 65),
    "jolteon" => species!("jolteon", "Jolteon", [Electric, Electric], 65, 65, 60, 110, 95, 130),
    "snorlax" => species!("snorlax", "Snorlax", [Normal, Normal], 160, 110, 65, 65, 110, 30),
    "zapdos" => species!("zapdos", "Zapdos", [Electric, Flying], 90, 90, 85, 125, 90, 100),
    "dragonite" => species!("dragonite", "Dragonite", [Dragon, Flying], 91, 134, 95, 100, 100, 80),
    "mew" => species!("mew", "Mew", [Psychic, Psychic], 100, 100, 100, 100, 100, 100),
    "forretress" => species!("forretress", "Forretress", [Bug, Steel], 75, 90, 140, 60, 60, 40),
    "scizor" => species!("scizor", "Scizor", [Bug, Steel], 70, 130, 100, 55, 80, 65),
    "skarmory" => species!("skarmory", "Skarmory", [Steel, Flying], 65, 80, 140, 40, 70, 70),
    "smeargle" => species!("smeargle", "Smeargle", [Normal, Normal], 55, 20, 35, 20, 45, 75),
    "blissey" => species!("blissey", "Blissey", [Normal, Normal], 255, 10, 10, 75, 135, 55),
    "suicune" => species!("suicune", "Suicune", [Water, Water], 100, 75, 115, 90, 115, 85),
    "tyranitar" => species!("tyranitar", "Tyranitar", [Rock, Dark], 100, 134, 110, 95, 100, 61),
    "celebi" => species!("celebi", "Celebi", [Psychic, Grass], 100, 100, 100, 100, 100, 100),
    "swampert" => species!("swampert", "Swampert", [Water, Ground], 100, 110, 90, 85, 90, 60),
    "breloom" => species!("breloom", "Breloom", [Grass, Fighting], 60, 130, 80, 60, 60, 70),
    "slaking" => species!("slaking", "Slaking", [Normal, Normal], 150, 160, 100, 95, 65, 100),
    "salamence" => species!("salamence", "Salamence", [Dragon, Flying], 95, 135, 80, 110, 80, 100),
    "metagross" => species!("metagross", "Metagross", [Steel, Psychic], 80, 135, 130, 95, 90, 70),
    "jirachi" => species!("jirachi", "Jirachi", [Steel, Psychic], 100, 100, 100, 100, 100, 100),
    "infernape" => species!("infernape", "Infernape", [Fire, Fighting], 76, 104, 71, 104, 71, 108),
    "bronzong" => species!("bronzong", "Bronzong", [Steel, Psychic], 67, 89, 116, 79, 116, 33),
    "garchomp" => species!("garchomp", "Garchomp", [Dragon, Ground], 108, 130, 95, 80, 85, 102),
    "lucario" => species!("lucario", "Lucario", [Fighting, Steel], 70, 110, 70, 115, 70, 90),
    "hippowdon" => species!("hippowdon", "Hippowdon", [Ground, Ground], 108, 112, 118, 68, 72, 47),
    "abomasnow" => species!("abomasnow", "Abomasnow", [Grass, Ice], 90, 92, 75, 92, 85, 60),
    "weavile" => species!("weavile", "Weavile", [Dark, Ice], 70, 120, 65, 45, 85, 125),
    "magnezone" => species!("magnezone", "Magnezone", [Electric, Steel], 70, 70, 115, 130, 90, 60),
    "gliscor" => species!("gliscor", "Gliscor", [Ground, Flying], 75, 95, 125, 45, 75, 95),
    "mamoswine" => species!("mamoswine", "Mamoswine", [Ice, Ground], 110, 130, 80, 70, 60, 80),
    "rotomwash" => species!("rotomwash", "Rotom-Wash", [Electric, Water], 50, 65, 107, 105, 107, 86),
    "cresselia" => species!("cresselia", "Cresselia", [Psychic, Psychic], 120, 70, 120, 75, 130, 85),
    "heatran" => species!("heatran", "Heatran", [Fire, Steel], 91, 90, 106, 130, 106, 77),
};

pub fn get_species(name: &str) -> Option<&'static SpeciesData> {
    POKEDEX.get(super::normalize_id(name).as_str())
}

impl SpeciesData {
    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }
}
