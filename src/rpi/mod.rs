//! Rally Planner Interface: a line protocol for driving the planner

pub mod command;
pub mod protocol;

pub use command::{parse_command, Command};
pub use protocol::{handle_command, write_plan, Flow};
