use crate::sim::pokemon::Pokemon;
use crate::sim::stats::{parse_nature, Nature};
use anyhow::{anyhow, Context, Result};

/// Parses a Showdown team export into its Pokemon, in export order.
pub fn parse_showdown_team(text: &str) -> Result<Vec<Pokemon>> {
    let text = text.replace("\r\n", "\n");
    let mut team = Vec::new();
    for (idx, chunk) in text.split("\n\n").enumerate() {
        let trimmed = chunk.trim();
        let entry = parse_entry(trimmed)
            .with_context(|| format!("Failed to parse team entry {}", idx + 1))?;
        if let Some(pokemon) = entry {
            team.push(pokemon);
        }
    }
    Ok(team)
}

fn parse_entry(entry: &str) -> Result<Option<Pokemon>> {
    if entry.is_empty() {
        return Ok(None);
    }
    let mut species_line = None;
    let mut ability = String::new();
    let mut level = 50u8;
    let mut nature = Nature::Hardy;
    let mut evs = [0u8; 6];
    let mut ivs = [31u8; 6];
    let mut moves = Vec::new();

    for line in entry.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("Ability:") {
            ability = rest.trim().to_string();
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("Level:") {
            level = rest
                .trim()
                .parse()
                .with_context(|| format!("Invalid level '{}'", rest.trim()))?;
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("EVs:") {
            parse_stat_line(rest.trim(), &mut evs)?;
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("IVs:") {
            parse_stat_line(rest.trim(), &mut ivs)?;
            continue;
        }
        if let Some(name) = trimmed.strip_suffix("Nature") {
            nature = parse_nature(name).ok_or_else(|| anyhow!("Unknown nature '{}'", name.trim()))?;
            continue;
        }
        if let Some(move_name) = trimmed.strip_prefix('-') {
            let move_name = move_name.trim();
            if !move_name.is_empty() {
                moves.push(move_name.to_string());
            }
            continue;
        }
        if species_line.is_none() {
            species_line = Some(trimmed.to_string());
        }
    }

    let species_line = species_line.ok_or_else(|| anyhow!("Species line is missing"))?;
    let (name_part, item) = match species_line.split_once('@') {
        Some((name, item)) => (name.trim(), Some(item.trim()).filter(|item| !item.is_empty())),
        None => (species_line.trim(), None),
    };
    let species_name = species_name(name_part);

    let pokemon = Pokemon::new(species_name, level, evs, ivs, nature, moves, &ability, item)
        .with_context(|| format!("Failed to build Pokémon '{}'", species_name))?;
    Ok(Some(pokemon))
}

/// "Nickname (Species) (M)" -> "Species"; "Species (F)" -> "Species".
fn species_name(name_part: &str) -> &str {
    let mut name = name_part.trim();
    for gender in ["(M)", "(F)"] {
        if let Some(rest) = name.strip_suffix(gender) {
            name = rest.trim_end();
        }
    }
    if let (Some(open), true) = (name.rfind('('), name.ends_with(')')) {
        return name[open + 1..name.len() - 1].trim();
    }
    name
}

fn parse_stat_line(line: &str, stats: &mut [u8; 6]) -> Result<()> {
    for part in line.split('/') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut iter = trimmed.split_whitespace();
        if let (Some(value_str), Some(stat_name)) = (iter.next(), iter.next()) {
            let value = value_str
                .parse::<u8>()
                .with_context(|| format!("Invalid stat value in '{}'", trimmed))?;
            let idx = stat_index(stat_name).ok_or_else(|| anyhow!("Unknown stat '{}'", stat_name))?;
            stats[idx] = value;
        }
    }
    Ok(())
}

fn stat_index(name: &str) -> Option<usize> {
    match name.to_lowercase().as_str() {
        "hp" => Some(0),
        "atk" => Some(1),
        "def" => Some(2),
        "spa" | "spatk" => Some(3),
        "spd" | "spdef" => Some(4),
        "spe" => Some(5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_showdown_team;
    use crate::data::abilities::Ability;
    use crate::data::items::Item;
    use crate::sim::stats::Nature;
    use anyhow::Result;

    #[test]
    fn parse_simple_export() -> Result<()> {
        let data = "\
Charizard @ Life Orb
Ability: Blaze
Level: 50
EVs: 252 Atk / 4 SpD / 252 Spe
Adamant Nature
- Flare Blitz
- Earthquake
- Dragon Claw
- Roost

Tyranitar @ Leftovers
Ability: Pressure
Level: 50
EVs: 252 HP / 252 Def / 4 SpA
Bold Nature
- Stone Edge
- Crunch
- Stealth Rock
";
        let error = parse_showdown_team(data).expect_err("Dragon Claw is not in the move table");
        assert!(format!("{error:#}").contains("entry 1"));

        let data = data.replace("- Dragon Claw\n", "");
        let team = parse_showdown_team(&data)?;
        assert_eq!(team.len(), 2);
        assert_eq!(team[0].name(), "Charizard");
        assert_eq!(team[0].nature, Nature::Adamant);
        assert_eq!(team[0].moves.len(), 3);
        assert_eq!(team[0].moves[0].data.id, "flareblitz");
        assert_eq!(team[1].item, Item::Leftovers);
        assert_eq!(team[1].ability, Ability::Pressure);
        assert_eq!(team[1].moves[2].data.id, "stealthrock");
        Ok(())
    }

    #[test]
    fn parse_minimal_defaults() -> Result<()> {
        let data = "Pikachu\n- Thunderbolt";
        let team = parse_showdown_team(data)?;
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].level, 50);
        assert_eq!(team[0].moves[0].data.id, "thunderbolt");
        assert_eq!(team[0].item, Item::None);
        assert!(team[0].stats.hp > 0);
        Ok(())
    }

    #[test]
    fn parse_nickname_and_gender() -> Result<()> {
        let data =
            "Sparky (Jolteon) (M) @ Choice Specs\nTimid Nature\n- Thunderbolt\n- Shadow Ball";
        let team = parse_showdown_team(data)?;
        assert_eq!(team[0].name(), "Jolteon");
        assert_eq!(team[0].item, Item::ChoiceSpecs);
        Ok(())
    }

    #[test]
    fn bad_stat_lines_are_errors() {
        assert!(parse_showdown_team("Pikachu\nEVs: lots Atk\n- Thunderbolt").is_err());
        assert!(parse_showdown_team("Pikachu\nSpicy Nature\n- Thunderbolt").is_err());
    }
}
