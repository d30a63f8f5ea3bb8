use std::collections::HashMap;

use crate::sim::battle::Battle;

/// Exact scores of positions already searched, keyed by position hash and
/// remaining depth. A score is only reused at the depth it was computed for.
pub struct TranspositionTable {
    table: HashMap<(u64, u32), i64, fxhash::FxBuildHasher>,
    hit_counter: u64,
    lookup_counter: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            table: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
            hit_counter: 0,
            lookup_counter: 0,
        }
    }

    pub fn key(battle: &Battle, depth: u32) -> (u64, u32) {
        (fxhash::hash64(battle), depth)
    }

    pub fn get(&mut self, key: (u64, u32)) -> Option<i64> {
        self.lookup_counter += 1;
        let score = self.table.get(&key).copied();
        if score.is_some() {
            self.hit_counter += 1;
        }
        score
    }

    pub fn insert(&mut self, key: (u64, u32), score: i64) {
        self.table.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hit_counter(&self) -> u64 {
        self.hit_counter
    }

    pub fn lookup_counter(&self) -> u64 {
        self.lookup_counter
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::battle::Team;
    use crate::sim::field::Field;
    use crate::sim::pokemon::Pokemon;
    use crate::sim::stats::Nature;

    fn battle() -> Battle {
        let make = |species: &str| {
            Pokemon::new(
                species,
                50,
                [0; 6],
                [31; 6],
                Nature::Hardy,
                vec!["tackle".to_string()],
                "",
                None,
            )
            .expect("pokemon")
        };
        Battle::new(
            Team::new(vec![make("snorlax")], true).expect("team"),
            Team::new(vec![make("pikachu")], false).expect("team"),
            Field::default(),
        )
    }

    #[test]
    fn scores_are_reused_only_at_the_same_depth() {
        let mut table = TranspositionTable::new();
        let position = battle();
        table.insert(TranspositionTable::key(&position, 2), 42);
        assert_eq!(table.get(TranspositionTable::key(&position, 2)), Some(42));
        assert_eq!(table.get(TranspositionTable::key(&position, 1)), None);
        assert_eq!(table.hit_counter(), 1);
        assert_eq!(table.lookup_counter(), 2);
    }

    #[test]
    fn changed_positions_miss() {
        let mut table = TranspositionTable::new();
        let position = battle();
        table.insert(TranspositionTable::key(&position, 1), 7);
        let mut damaged = position.clone();
        damaged.foe.active_mut().current_hp -= 1;
        assert_eq!(table.get(TranspositionTable::key(&damaged, 1)), None);
        assert_eq!(table.len(), 1);
    }
}
