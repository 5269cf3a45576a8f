use crate::core::{
    allocate, assign_heroes, AllocationPlan, CapacityConfig, HeroPools, RallyHeroes, TroopPool,
    TroopRoster, TroopType,
};

use super::options::PlannerOptions;

use anyhow::Result;

/// Planner holds the current inputs and produces allocation plans from them.
///
/// Inputs are plain values; every plan is computed from scratch.
pub struct Planner {
    pub pool: TroopPool,
    pub capacity: CapacityConfig,
    pub heroes: HeroPools,
    pub roster: Option<TroopRoster>,
    pub options: PlannerOptions,
}

impl Planner {
    /// Create a new planner with default options
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    pub fn with_options(options: PlannerOptions) -> Self {
        let bounds = options.join_bounds;
        let capacity = CapacityConfig::new(0, 0, bounds.min as u64, &bounds);

        Self {
            pool: TroopPool::default(),
            capacity,
            heroes: HeroPools::new(),
            roster: None,
            options,
        }
    }

    /// Clear all inputs, keeping options
    pub fn reset(&mut self) {
        let options = self.options.clone();
        *self = Self::with_options(options);
    }

    /// Set a planner option; join bounds changes re-clamp the join count
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;
        self.capacity.reclamp(&self.options.join_bounds);
        Ok(())
    }

    pub fn set_troops(&mut self, args: &[&str]) -> Result<()> {
        self.pool.apply_args(args)?;
        self.roster = None;
        tracing::debug!(pool = ?self.pool, "troops updated");
        Ok(())
    }

    pub fn set_capacity(&mut self, args: &[&str]) -> Result<()> {
        self.capacity.apply_args(args, &self.options.join_bounds)?;
        tracing::debug!(capacity = ?self.capacity, "capacity updated");
        Ok(())
    }

    /// Update roster levels for one troop type; the pool becomes the roster sum
    pub fn set_roster(&mut self, troop: TroopType, entries: &[&str]) -> Result<()> {
        let roster = self.roster.get_or_insert_with(TroopRoster::new);
        for entry in entries {
            roster.set_entry(troop, entry)?;
        }
        self.pool = roster.to_pool();
        tracing::debug!(pool = ?self.pool, "pool taken from roster");
        Ok(())
    }

    pub fn set_heroes(&mut self, troop: TroopType, names: &str) {
        self.heroes.set_list(troop, names);
    }

    pub fn plan(&self) -> AllocationPlan {
        allocate(&self.pool, &self.capacity)
    }

    pub fn hero_plan(&self) -> Vec<RallyHeroes> {
        assign_heroes(&self.heroes, self.capacity.join_count)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_inputs() {
        let mut planner = Planner::new();
        planner.set_troops(&["infantry", "1000", "cavalry", "1000", "archers", "500"]).unwrap();
        planner.set_capacity(&["lead", "1000", "join", "500", "count", "2"]).unwrap();

        let plan = planner.plan();
        assert_eq!(plan.totals.capacity, 2000);
        assert_eq!(plan.joiners.len(), 2);
        assert_eq!(plan, planner.plan());
    }

    #[test]
    fn test_bounds_change_reclamps_count() {
        let mut planner = Planner::new();
        assert_eq!(planner.capacity.join_count, 1);

        planner.set_option("minjoins", "0").unwrap();
        planner.set_capacity(&["count", "0"]).unwrap();
        assert_eq!(planner.capacity.join_count, 0);

        planner.set_option("minjoins", "1").unwrap();
        assert_eq!(planner.capacity.join_count, 1);

        planner.set_capacity(&["count", "6"]).unwrap();
        planner.set_option("maxjoins", "3").unwrap();
        assert_eq!(planner.capacity.join_count, 3);
    }

    #[test]
    fn test_roster_drives_pool() {
        let mut planner = Planner::new();
        planner.set_roster(TroopType::Archer, &["11:300", "10:200"]).unwrap();
        planner.set_roster(TroopType::Infantry, &["5:50"]).unwrap();
        assert_eq!(planner.pool, TroopPool::new(50, 0, 500));

        planner.set_troops(&["cavalry", "10"]).unwrap();
        assert!(planner.roster.is_none());
        assert_eq!(planner.pool, TroopPool::new(50, 10, 500));
    }

    #[test]
    fn test_reset_keeps_options() {
        let mut planner = Planner::new();
        planner.set_option("minjoins", "0").unwrap();
        planner.set_troops(&["infantry", "10"]).unwrap();
        planner.set_heroes(TroopType::Cavalry, "Jabel");
        planner.reset();

        assert_eq!(planner.pool, TroopPool::default());
        assert!(planner.heroes.is_empty());
        assert_eq!(planner.capacity.join_count, 0);
    }

    #[test]
    fn test_hero_plan_follows_join_count() {
        let mut planner = Planner::new();
        planner.set_capacity(&["count", "3"]).unwrap();
        planner.set_heroes(TroopType::Infantry, "Amadeus,Helga");

        let heroes = planner.hero_plan();
        assert_eq!(heroes.len(), 3);
        assert_eq!(heroes[1][TroopType::Infantry].as_deref(), Some("Helga"));
        assert_eq!(heroes[2][TroopType::Infantry], None);
    }
}
