//! Rally troop allocation.
//!
//! Archers fill capacity first. Whatever capacity is left is split evenly
//! between cavalry and infantry, with any slack going to whichever type
//! still has troops to spare. The aggregate split is then expressed per
//! rally, rounding each rally's share with [`apportion`] so every rally
//! sums exactly to its effective capacity.

use super::apportion::apportion;
use super::capacity::{CapacityConfig, JoinBounds, MAX_JOIN_RALLIES};
use super::pool::TroopPool;
use super::sanitize::clamp_count;
use super::troop::{TroopArray, TroopType};

/// Troops deployed in aggregate, before they are split into rallies.
///
/// Cavalry and infantry can hold half units when the even split lands on
/// an odd remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deployment {
    pub infantry: f64,
    pub cavalry: f64,
    pub archers: f64,
}

impl Deployment {
    pub fn total(&self) -> f64 {
        self.infantry + self.cavalry + self.archers
    }
}

/// Troops assigned to one rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RallyBreakdown {
    /// Nominal capacity of the rally
    pub capacity: u64,
    pub infantry: u64,
    pub cavalry: u64,
    pub archers: u64,
    /// Capacity left empty because there were not enough troops
    pub unfilled: u64,
}

impl RallyBreakdown {
    pub fn get(&self, troop: TroopType) -> u64 {
        match troop {
            TroopType::Infantry => self.infantry,
            TroopType::Cavalry => self.cavalry,
            TroopType::Archer => self.archers,
        }
    }

    pub fn assigned(&self) -> u64 {
        self.infantry + self.cavalry + self.archers
    }
}

/// Sums across every rally in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanTotals {
    pub capacity: u64,
    pub infantry: u64,
    pub cavalry: u64,
    pub archers: u64,
    pub unfilled: u64,
}

impl PlanTotals {
    fn add(&mut self, rally: &RallyBreakdown) {
        self.infantry = self.infantry.saturating_add(rally.infantry);
        self.cavalry = self.cavalry.saturating_add(rally.cavalry);
        self.archers = self.archers.saturating_add(rally.archers);
        self.unfilled = self.unfilled.saturating_add(rally.unfilled);
    }
}

/// Result of one allocation run
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationPlan {
    pub lead: RallyBreakdown,
    pub joiners: Vec<RallyBreakdown>,
    pub totals: PlanTotals,
    pub deployment: Deployment,
    /// Troops deployed overall, never more than total capacity
    pub deployed_total: f64,
    /// Share of total capacity that is filled, in [0, 1]
    pub coverage: f64,
    /// Share of deployed troops per type, in [0, 1]
    pub percent: TroopArray<f64>,
    /// Troops available before allocation
    pub available: TroopArray<u64>,
}

impl AllocationPlan {
    /// Total joining-rally breakdown as one row
    pub fn joiners_total(&self) -> RallyBreakdown {
        self.joiners.iter().fold(RallyBreakdown::default(), |sum, join| RallyBreakdown {
            capacity: sum.capacity.saturating_add(join.capacity),
            infantry: sum.infantry.saturating_add(join.infantry),
            cavalry: sum.cavalry.saturating_add(join.cavalry),
            archers: sum.archers.saturating_add(join.archers),
            unfilled: sum.unfilled.saturating_add(join.unfilled),
        })
    }

    pub fn total_troops(&self) -> u64 {
        self.available.values.iter().fold(0u64, |acc, &n| acc.saturating_add(n))
    }

    pub fn rallies(&self) -> impl Iterator<Item = &RallyBreakdown> {
        std::iter::once(&self.lead).chain(self.joiners.iter())
    }
}

/// Split the capacity left after archers between cavalry and infantry.
///
/// Returns `(cavalry, infantry)`. Both start at half of `remaining` (or
/// everything available, if less). Unused capacity goes first to cavalry
/// when it has at least as much spare as infantry, then to infantry.
pub fn split_remaining(remaining: f64, cavalry_available: f64, infantry_available: f64) -> (f64, f64) {
    let half = remaining / 2.0;
    let mut cavalry = cavalry_available.min(half);
    let mut infantry = infantry_available.min(half);
    let mut leftover = remaining - cavalry - infantry;

    if leftover > 0.0 {
        let cavalry_room = cavalry_available - cavalry;
        let infantry_room = infantry_available - infantry;

        if cavalry_room >= infantry_room {
            let extra = leftover.min(cavalry_room);
            cavalry += extra;
            leftover -= extra;
        }

        if leftover > 0.0 {
            let extra = leftover.min(infantry_available - infantry);
            infantry += extra;
        }
    }

    (cavalry, infantry)
}

/// Effective capacity of a rally at the given coverage
fn effective_capacity(nominal: u64, coverage: f64) -> u64 {
    let effective = (nominal as f64 * coverage).round() as u64;
    effective.min(nominal)
}

fn rally_breakdown(nominal: u64, coverage: f64, percents: [f64; TroopType::COUNT]) -> RallyBreakdown {
    let effective = effective_capacity(nominal, coverage);
    let [infantry, cavalry, archers] = apportion(effective, percents);

    RallyBreakdown {
        capacity: nominal,
        infantry,
        cavalry,
        archers,
        unfilled: nominal - effective,
    }
}

/// Allocate a troop pool across the lead rally and every joining rally.
///
/// Never fails; a pool or capacity of zero gives an all-zero plan with
/// every slot unfilled. Values set directly on the public fields are capped
/// the same way the constructors cap them.
pub fn allocate(pool: &TroopPool, capacity: &CapacityConfig) -> AllocationPlan {
    let pool = &TroopPool::new(pool.infantry, pool.cavalry, pool.archers);
    let capacity = &CapacityConfig {
        lead_capacity: clamp_count(capacity.lead_capacity),
        join_capacity: clamp_count(capacity.join_capacity),
        join_count: capacity.join_count.min(MAX_JOIN_RALLIES),
    };

    let total_capacity = capacity.total();
    let capacity_f = total_capacity as f64;

    let archers_used = pool.archers.min(total_capacity);
    let remaining = total_capacity - archers_used;

    let (cavalry_used, infantry_used) =
        split_remaining(remaining as f64, pool.cavalry as f64, pool.infantry as f64);

    let deployment = Deployment {
        infantry: infantry_used,
        cavalry: cavalry_used,
        archers: archers_used as f64,
    };

    let deployed_total = capacity_f.min(deployment.total());
    let coverage = if total_capacity > 0 {
        deployed_total / capacity_f
    } else {
        0.0
    };

    let share = |used: f64| if deployed_total > 0.0 { used / deployed_total } else { 0.0 };
    let percent = TroopArray::new(
        share(deployment.infantry),
        share(deployment.cavalry),
        share(deployment.archers),
    );

    let lead = rally_breakdown(capacity.lead_capacity, coverage, percent.values);
    let joiners: Vec<RallyBreakdown> = (0..capacity.join_count)
        .map(|_| rally_breakdown(capacity.join_capacity, coverage, percent.values))
        .collect();

    let mut totals = PlanTotals {
        capacity: total_capacity,
        ..PlanTotals::default()
    };
    for rally in std::iter::once(&lead).chain(joiners.iter()) {
        totals.add(rally);
    }

    tracing::debug!(
        total_capacity,
        deployed_total,
        coverage,
        joiners = joiners.len(),
        "allocated rally troops"
    );

    AllocationPlan {
        lead,
        joiners,
        totals,
        deployment,
        deployed_total,
        coverage,
        percent,
        available: pool.as_array(),
    }
}

/// Allocate from raw, unvalidated numbers.
///
/// Negative counts are treated as 0 and `join_count` is clamped into
/// `bounds` before allocating.
pub fn allocate_raw(
    infantry: i64,
    cavalry: i64,
    archers: i64,
    lead_capacity: i64,
    join_capacity: i64,
    join_count: i64,
    bounds: &JoinBounds,
) -> AllocationPlan {
    let pool = TroopPool::from_signed(infantry, cavalry, archers);
    let capacity = CapacityConfig::from_signed(lead_capacity, join_capacity, join_count, bounds);
    allocate(&pool, &capacity)
}
