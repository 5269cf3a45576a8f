//! Troop pool: how many troops of each type are available

use super::sanitize::{clamp_count, coerce_count, coerce_signed, parse_count};
use super::troop::{TroopArray, TroopType};

use anyhow::{ensure, Context, Result};

/// Available troops by type.
///
/// The constructors cap every count at [`MAX_COUNT`](super::sanitize::MAX_COUNT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TroopPool {
    pub infantry: u64,
    pub cavalry: u64,
    pub archers: u64,
}

impl TroopPool {
    pub fn new(infantry: u64, cavalry: u64, archers: u64) -> Self {
        Self {
            infantry: clamp_count(infantry),
            cavalry: clamp_count(cavalry),
            archers: clamp_count(archers),
        }
    }

    /// Build a pool from signed input, negative counts become 0
    pub fn from_signed(infantry: i64, cavalry: i64, archers: i64) -> Self {
        Self::new(
            coerce_signed(infantry),
            coerce_signed(cavalry),
            coerce_signed(archers),
        )
    }

    /// Build a pool from real-valued input, non-finite or negative counts become 0
    pub fn from_real(infantry: f64, cavalry: f64, archers: f64) -> Self {
        Self::new(
            coerce_count(infantry),
            coerce_count(cavalry),
            coerce_count(archers),
        )
    }

    pub fn get(&self, troop: TroopType) -> u64 {
        match troop {
            TroopType::Infantry => self.infantry,
            TroopType::Cavalry => self.cavalry,
            TroopType::Archer => self.archers,
        }
    }

    pub fn set(&mut self, troop: TroopType, count: u64) {
        let count = clamp_count(count);
        match troop {
            TroopType::Infantry => self.infantry = count,
            TroopType::Cavalry => self.cavalry = count,
            TroopType::Archer => self.archers = count,
        }
    }

    pub fn total(&self) -> u64 {
        self.infantry
            .saturating_add(self.cavalry)
            .saturating_add(self.archers)
    }

    pub fn as_array(&self) -> TroopArray<u64> {
        TroopArray::from_fn(|t| self.get(t))
    }

    /// Apply `key value` pairs such as `infantry 1000 archers 500`.
    ///
    /// Keys left out keep their current value. Values are coerced with
    /// [`parse_count`], so a garbage value is 0 rather than an error.
    pub fn apply_args(&mut self, args: &[&str]) -> Result<()> {
        ensure!(args.len() % 2 == 0, "troops expects key/value pairs");

        for pair in args.chunks(2) {
            let troop: TroopType = pair[0].parse().context("invalid troops argument")?;
            self.set(troop, parse_count(pair[1]));
        }

        Ok(())
    }
}
