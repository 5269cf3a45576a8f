//! Troop roster: per-level troop counts for each type.
//!
//! The allocator only cares about totals, so a roster is summed into a
//! [`TroopPool`] before planning.

use super::pool::TroopPool;
use super::sanitize::parse_count;
use super::troop::{TroopArray, TroopType};

use anyhow::{ensure, Context, Result};

pub const MIN_TROOP_LEVEL: usize = 1;
pub const MAX_TROOP_LEVEL: usize = 11;
const NUM_LEVELS: usize = MAX_TROOP_LEVEL - MIN_TROOP_LEVEL + 1;

/// Troop counts indexed by type and level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TroopRoster {
    levels: TroopArray<[u64; NUM_LEVELS]>,
}

impl TroopRoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(level: usize) -> Result<usize> {
        ensure!(
            (MIN_TROOP_LEVEL..=MAX_TROOP_LEVEL).contains(&level),
            "troop level {} outside {}..={}",
            level,
            MIN_TROOP_LEVEL,
            MAX_TROOP_LEVEL
        );
        Ok(level - MIN_TROOP_LEVEL)
    }

    pub fn get(&self, troop: TroopType, level: usize) -> Result<u64> {
        Ok(self.levels[troop][Self::slot(level)?])
    }

    pub fn set_level(&mut self, troop: TroopType, level: usize, count: u64) -> Result<()> {
        self.levels[troop][Self::slot(level)?] = count;
        Ok(())
    }

    /// Set a level from a `level:count` entry, coercing a bad count to 0
    pub fn set_entry(&mut self, troop: TroopType, entry: &str) -> Result<()> {
        let (level, count) = entry
            .split_once(':')
            .with_context(|| format!("roster entry {} is not level:count", entry))?;
        let level: usize = level.trim().parse().context("invalid roster level")?;
        self.set_level(troop, level, parse_count(count))
    }

    /// Total troops of one type across all levels
    pub fn total(&self, troop: TroopType) -> u64 {
        self.levels[troop]
            .iter()
            .fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    pub fn to_pool(&self) -> TroopPool {
        TroopPool::new(
            self.total(TroopType::Infantry),
            self.total(TroopType::Cavalry),
            self.total(TroopType::Archer),
        )
    }
}
