//! Configuration options for the planner
use anyhow::{bail, Context, Result};

use crate::core::JoinBounds;

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    /// Allowed range for the number of joining rallies
    pub join_bounds: JoinBounds,
    /// Whether `go` also reports hero assignments
    pub heroes_enabled: bool,
    /// Whether a protocol error ends the session
    pub strict_mode: bool,
}

impl PlannerOptions {
    pub fn new(join_bounds: JoinBounds, heroes_enabled: bool, strict_mode: bool) -> Self {
        Self {
            join_bounds,
            heroes_enabled,
            strict_mode,
        }
    }

    /// Set an option by name
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "minjoins" => {
                let min = value.parse().context("invalid minjoins")?;
                self.join_bounds = JoinBounds::new(min, self.join_bounds.max)?;
            }
            "maxjoins" => {
                let max = value.parse().context("invalid maxjoins")?;
                self.join_bounds = JoinBounds::new(self.join_bounds.min, max)?;
            }
            "heroes" => self.heroes_enabled = value.parse().context("invalid heroes")?,
            "strictmode" => self.strict_mode = value.parse().context("invalid strictmode")?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            join_bounds: JoinBounds::default(),
            heroes_enabled: false,
            strict_mode: true,
        }
    }
}
