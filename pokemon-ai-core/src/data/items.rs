use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Item {
    None,
    Other,
    BlackSludge,
    ChoiceBand,
    ChoiceScarf,
    ChoiceSpecs,
    ExpertBelt,
    FlameOrb,
    FocusSash,
    IronBall,
    Leftovers,
    LifeOrb,
    ScopeLens,
    ShedShell,
    StickyBarb,
    ToxicOrb,
}

static ITEMS: phf::Map<&'static str, Item> = phf_map! {
    "blacksludge" => Item::BlackSludge,
    "choiceband" => Item::ChoiceBand,
    "choicescarf" => Item::ChoiceScarf,
    "choicespecs" => Item::ChoiceSpecs,
    "expertbelt" => Item::ExpertBelt,
    "flameorb" => Item::FlameOrb,
    "focussash" => Item::FocusSash,
    "ironball" => Item::IronBall,
    "leftovers" => Item::Leftovers,
    "lifeorb" => Item::LifeOrb,
    "scopelens" => Item::ScopeLens,
    "shedshell" => Item::ShedShell,
    "stickybarb" => Item::StickyBarb,
    "toxicorb" => Item::ToxicOrb,
};

pub fn item_from_name(name: &str) -> Item {
    let id = super::normalize_id(name);
    if id.is_empty() || id == "none" {
        return Item::None;
    }
    ITEMS.get(id.as_str()).copied().unwrap_or(Item::Other)
}

impl Item {
    pub fn is_choice(self) -> bool {
        matches!(self, Item::ChoiceBand | Item::ChoiceScarf | Item::ChoiceSpecs)
    }
}
