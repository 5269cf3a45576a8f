//! Human-readable plan output: summary, availability bars and rally table

use std::fmt;

use colored::Colorize;

use super::{
    allocation::{AllocationPlan, RallyBreakdown},
    heroes::RallyHeroes,
    troop::{TroopArray, TroopType},
};

/// Format a count with `,` thousands separators
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a fraction as a whole percentage, e.g. `0.375` is `38%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Fill levels for the availability bars, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityBars {
    pub troops: TroopArray<f64>,
    pub capacity: f64,
}

impl AvailabilityBars {
    pub fn new(available: TroopArray<u64>, total_capacity: u64) -> Self {
        let total = available.values.iter().fold(0u64, |acc, &n| acc.saturating_add(n));
        let fraction = |n: u64| {
            if total > 0 {
                (n as f64 / total as f64).clamp(0.0, 1.0)
            } else {
                0.0
            }
        };

        Self {
            troops: available.map(|&n| fraction(n)),
            capacity: fraction(total_capacity),
        }
    }
}

fn bar(fill: f64) -> String {
    const WIDTH: usize = 20;
    let filled = (fill.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, rally: &RallyBreakdown) -> fmt::Result {
    writeln!(
        f,
        "{:<26} {:>12} {:>12} {:>12} {:>12} {:>12}",
        label,
        format_number(rally.capacity),
        format_number(rally.infantry),
        format_number(rally.cavalry),
        format_number(rally.archers),
        format_number(rally.unfilled),
    )
}

impl fmt::Display for AllocationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capacity = self.totals.capacity;
        let deployed = self.deployed_total.round() as u64;

        writeln!(f)?;
        let capacity_note = if capacity > 0 {
            format!("Lead rally + {} join rallies.", self.joiners.len())
        } else {
            "Enter capacities to see totals.".to_string()
        };
        writeln!(f, "Total capacity: {} ({})", format_number(capacity).bold(), capacity_note)?;

        let split_note = if deployed > 0 {
            "Percent of deployed troops."
        } else {
            "No troops assigned yet."
        };
        writeln!(
            f,
            "Split: {} / {} / {} ({})",
            format_percent(self.percent[TroopType::Infantry]).bright_blue(),
            format_percent(self.percent[TroopType::Cavalry]).bright_yellow(),
            format_percent(self.percent[TroopType::Archer]).bright_green(),
            split_note,
        )?;

        let deployed_note = if capacity > 0 {
            format!("{} slots unfilled.", format_number(capacity.saturating_sub(deployed)))
        } else {
            "Enter capacity to start.".to_string()
        };
        writeln!(f, "Deployed: {} ({})", format_number(deployed).bold(), deployed_note)?;

        let coverage_note = if capacity > 0 {
            format!("{} / {} capacity filled.", format_number(deployed), format_number(capacity))
        } else {
            "Waiting for capacity inputs.".to_string()
        };
        writeln!(f, "Coverage: {} ({})", format_percent(self.coverage).bold(), coverage_note)?;
        writeln!(f)?;

        let bars = AvailabilityBars::new(self.available, capacity);
        for (troop, fill) in bars.troops.iter() {
            writeln!(f, "{:<10} {}", troop.label(), bar(*fill))?;
        }
        writeln!(f, "{:<10} {}", "Capacity", bar(bars.capacity))?;
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            format!(
                "{:<26} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "Rally", "Capacity", "Infantry", "Cavalry", "Archers", "Unfilled"
            )
            .underline()
        )?;
        write_row(f, "Lead rally", &self.lead)?;
        for (i, join) in self.joiners.iter().enumerate() {
            write_row(f, &format!("Joining rally {}", i + 1), join)?;
        }
        write_row(f, &format!("Joining rallies (x{})", self.joiners.len()), &self.joiners_total())?;

        let totals = RallyBreakdown {
            capacity: self.totals.capacity,
            infantry: self.totals.infantry,
            cavalry: self.totals.cavalry,
            archers: self.totals.archers,
            unfilled: self.totals.unfilled,
        };
        write!(f, "{}", "Grand total".bold())?;
        write!(f, "{}", " ".repeat(26 - "Grand total".len()))?;
        writeln!(
            f,
            " {:>12} {:>12} {:>12} {:>12} {:>12}",
            format_number(totals.capacity),
            format_number(totals.infantry),
            format_number(totals.cavalry),
            format_number(totals.archers),
            format_number(totals.unfilled),
        )
    }
}

/// Hero table for the joining rallies
pub struct HeroTable<'a>(pub &'a [RallyHeroes]);

impl fmt::Display for HeroTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, heroes) in self.0.iter().enumerate() {
            write!(f, "Joining rally {}:", i + 1)?;
            for (troop, hero) in heroes.iter() {
                write!(f, " {} {}", troop.label(), hero.as_deref().unwrap_or("-"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
