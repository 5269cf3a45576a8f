mod options;
mod planner;

pub use options::PlannerOptions;
pub use planner::Planner;
