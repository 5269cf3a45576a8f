//! Core allocation types and rules

pub mod allocation;
pub mod apportion;
pub mod capacity;
pub mod display;
pub mod heroes;
pub mod pool;
pub mod roster;
pub mod sanitize;
pub mod troop;

pub use allocation::{allocate, allocate_raw, split_remaining, AllocationPlan, Deployment, PlanTotals, RallyBreakdown};
pub use apportion::apportion;
pub use capacity::{CapacityConfig, JoinBounds, MAX_JOIN_RALLIES};
pub use display::{format_number, format_percent, AvailabilityBars, HeroTable};
pub use heroes::{assign_heroes, HeroPools, RallyHeroes};
pub use pool::TroopPool;
pub use roster::TroopRoster;
pub use sanitize::{clamp_count, coerce_count, coerce_signed, parse_count, MAX_COUNT};
pub use troop::{TroopArray, TroopType};
