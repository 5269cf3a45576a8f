//! Rallyplan - troop allocation planner for rally events

pub mod core;
pub mod planner;
pub mod rpi;

// Re-export commonly used items
pub use crate::core::{allocate, AllocationPlan, CapacityConfig, JoinBounds, TroopPool};
pub use planner::{Planner, PlannerOptions};
