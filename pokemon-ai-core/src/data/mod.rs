//! Static battle data: species, moves, abilities, items and the type chart.

pub mod abilities;
pub mod items;
pub mod moves;
pub mod species;
pub mod types;

/// Showdown-style id: lowercase ascii alphanumerics only ("Mr. Mime" -> "mrmime").
pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests;
