//! Hero labels for joining rallies.
//!
//! Each joining rally has one hero slot per troop type. Heroes are handed
//! out from per-type pools in the order they were added, one per rally,
//! until a pool runs dry.

use super::troop::{TroopArray, TroopType};

use std::collections::VecDeque;

/// Heroes available for each troop type, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPools {
    pools: TroopArray<Vec<String>>,
}

/// Heroes leading each troop slot of one joining rally
pub type RallyHeroes = TroopArray<Option<String>>;

impl HeroPools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hero to the pool for `troop`. Blank names are ignored.
    pub fn add(&mut self, troop: TroopType, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.pools[troop].push(name.to_string());
        }
    }

    /// Replace the pool for `troop` with a comma-separated list of names
    pub fn set_list(&mut self, troop: TroopType, names: &str) {
        self.pools[troop].clear();
        for name in names.split(',') {
            self.add(troop, name);
        }
    }

    pub fn get(&self, troop: TroopType) -> &[String] {
        &self.pools[troop]
    }

    pub fn is_empty(&self) -> bool {
        self.pools.values.iter().all(Vec::is_empty)
    }
}

/// Assign heroes to `join_count` joining rallies.
///
/// Rally `i` gets the next unused hero of each type, or `None` for a type
/// whose pool is exhausted.
pub fn assign_heroes(pools: &HeroPools, join_count: usize) -> Vec<RallyHeroes> {
    let mut queues: TroopArray<VecDeque<&String>> =
        TroopArray::from_fn(|t| pools.get(t).iter().collect());

    (0..join_count)
        .map(|_| TroopArray::from_fn(|t| queues[t].pop_front().cloned()))
        .collect()
}
