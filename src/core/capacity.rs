//! Rally capacities and the join-count bounds

use super::sanitize::{clamp_count, coerce_signed, parse_count};

use anyhow::{bail, ensure, Result};

/// Hard ceiling on joining rallies
pub const MAX_JOIN_RALLIES: usize = 6;

/// Allowed range for the number of joining rallies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinBounds {
    pub min: usize,
    pub max: usize,
}

impl JoinBounds {
    /// Create bounds, failing unless `min <= max` and `1 <= max <= MAX_JOIN_RALLIES`
    pub fn new(min: usize, max: usize) -> Result<Self> {
        ensure!(max <= MAX_JOIN_RALLIES, "at most {} joining rallies", MAX_JOIN_RALLIES);
        ensure!(max >= 1, "maximum join count must be at least 1");
        ensure!(min <= max, "minimum join count {} exceeds maximum {}", min, max);
        Ok(Self { min, max })
    }

    pub fn clamp(&self, count: u64) -> usize {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        count.max(self.min).min(self.max)
    }
}

impl Default for JoinBounds {
    fn default() -> Self {
        Self {
            min: 1,
            max: MAX_JOIN_RALLIES,
        }
    }
}

/// Capacity of the lead rally and of each joining rally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityConfig {
    pub lead_capacity: u64,
    pub join_capacity: u64,
    pub join_count: usize,
}

impl CapacityConfig {
    /// Create a config with `join_count` clamped into `bounds` and both
    /// capacities capped at [`MAX_COUNT`](super::sanitize::MAX_COUNT)
    pub fn new(lead_capacity: u64, join_capacity: u64, join_count: u64, bounds: &JoinBounds) -> Self {
        Self {
            lead_capacity: clamp_count(lead_capacity),
            join_capacity: clamp_count(join_capacity),
            join_count: bounds.clamp(join_count),
        }
    }

    /// Like [`CapacityConfig::new`] but for signed input; negatives become 0
    pub fn from_signed(lead_capacity: i64, join_capacity: i64, join_count: i64, bounds: &JoinBounds) -> Self {
        Self::new(
            coerce_signed(lead_capacity),
            coerce_signed(join_capacity),
            coerce_signed(join_count),
            bounds,
        )
    }

    pub fn total(&self) -> u64 {
        let joins = self.join_capacity.saturating_mul(self.join_count as u64);
        self.lead_capacity.saturating_add(joins)
    }

    pub fn reclamp(&mut self, bounds: &JoinBounds) {
        self.join_count = bounds.clamp(self.join_count as u64);
    }

    /// Apply `key value` pairs: `lead`, `join` and `count`
    pub fn apply_args(&mut self, args: &[&str], bounds: &JoinBounds) -> Result<()> {
        ensure!(args.len() % 2 == 0, "capacity expects key/value pairs");

        for pair in args.chunks(2) {
            let value = parse_count(pair[1]);
            match pair[0] {
                "lead" => self.lead_capacity = value,
                "join" => self.join_capacity = value,
                "count" => self.join_count = bounds.clamp(value),
                key => bail!("invalid capacity argument {}", key),
            }
        }

        Ok(())
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            lead_capacity: 0,
            join_capacity: 0,
            join_count: JoinBounds::default().min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_count_is_clamped() {
        let bounds = JoinBounds::default();
        assert_eq!(CapacityConfig::new(0, 0, 0, &bounds).join_count, 1);
        assert_eq!(CapacityConfig::new(0, 0, 40, &bounds).join_count, 6);

        let zero_min = JoinBounds::new(0, 6).unwrap();
        assert_eq!(CapacityConfig::new(0, 0, 0, &zero_min).join_count, 0);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(JoinBounds::new(0, 7).is_err());
        assert!(JoinBounds::new(4, 3).is_err());
        assert!(JoinBounds::new(0, 0).is_err());
        assert!(JoinBounds::new(0, 1).is_ok());
    }

    #[test]
    fn test_total_capacity() {
        let config = CapacityConfig::from_signed(1000, 500, 2, &JoinBounds::default());
        assert_eq!(config.total(), 2000);

        let negative = CapacityConfig::from_signed(-1000, 500, -2, &JoinBounds::default());
        assert_eq!(negative.lead_capacity, 0);
        assert_eq!(negative.join_count, 1);
        assert_eq!(negative.total(), 500);
    }

    #[test]
    fn test_apply_args() {
        let bounds = JoinBounds::default();
        let mut config = CapacityConfig::default();
        config
            .apply_args(&["lead", "1200", "join", "x", "count", "9"], &bounds)
            .unwrap();
        assert_eq!(config, CapacityConfig { lead_capacity: 1200, join_capacity: 0, join_count: 6 });
        assert!(config.apply_args(&["size", "5"], &bounds).is_err());
    }
}
