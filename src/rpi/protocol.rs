//! RPI protocol implementation

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use indoc::indoc;

use crate::core::{AllocationPlan, HeroTable, RallyBreakdown, TroopType};
use crate::planner::Planner;

use super::command::Command;

/// What the command loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HANDSHAKE: &str = indoc! {"
    id name rallyplan
    option name minjoins type spin default 1 min 0 max 6
    option name maxjoins type spin default 6 min 1 max 6
    option name heroes type check default false
    option name strictmode type check default true
    rpiok
"};

fn write_rally(out: &mut impl Write, label: &str, rally: &RallyBreakdown) -> Result<()> {
    writeln!(
        out,
        "plan {} capacity {} infantry {} cavalry {} archers {} unfilled {}",
        label, rally.capacity, rally.infantry, rally.cavalry, rally.archers, rally.unfilled
    )?;
    Ok(())
}

/// Write the machine-readable form of a plan
pub fn write_plan(out: &mut impl Write, plan: &AllocationPlan) -> Result<()> {
    writeln!(
        out,
        "info capacity {} deployed {} coverage {}",
        plan.totals.capacity, plan.deployed_total, plan.coverage
    )?;
    write!(out, "info split")?;
    for (troop, percent) in plan.percent.iter() {
        write!(out, " {} {}", troop.keyword(), percent)?;
    }
    writeln!(out)?;

    write_rally(out, "lead", &plan.lead)?;
    for (i, join) in plan.joiners.iter().enumerate() {
        write_rally(out, &format!("join {}", i + 1), join)?;
    }

    let t = &plan.totals;
    writeln!(
        out,
        "plan total capacity {} infantry {} cavalry {} archers {} unfilled {}",
        t.capacity, t.infantry, t.cavalry, t.archers, t.unfilled
    )?;
    Ok(())
}

/// Handle an RPI command
pub fn handle_command(cmd: &Command, planner: &mut Planner, out: &mut impl Write) -> Result<Flow> {
    let args = cmd.args();

    match cmd.name.as_str() {
        "rpi" => {
            write!(out, "{}", HANDSHAKE)?;
        }
        "isready" => {
            writeln!(out, "readyok")?;
        }
        "setoption" => {
            ensure!(args.len() == 4 && args[0] == "name" && args[2] == "value",
                "invalid setoption command");

            planner.set_option(args[1], args[3])?;
        }
        "troops" => {
            planner.set_troops(&args)?;
        }
        "capacity" => {
            planner.set_capacity(&args)?;
        }
        "roster" => {
            ensure!(!args.is_empty(), "roster command requires a troop type");
            let troop: TroopType = args[0].parse()?;
            planner.set_roster(troop, &args[1..])?;
        }
        "heroes" => {
            ensure!(!args.is_empty(), "heroes command requires a troop type");
            let troop: TroopType = args[0].parse()?;
            planner.set_heroes(troop, &args[1..].join(" "));
        }
        "go" => {
            ensure!(args.is_empty(), "go takes no arguments");
            let plan = planner.plan();
            write_plan(out, &plan)?;

            if planner.options.heroes_enabled {
                for (i, heroes) in planner.hero_plan().iter().enumerate() {
                    write!(out, "heroes join {}", i + 1)?;
                    for (troop, hero) in heroes.iter() {
                        write!(out, " {} {}", troop.keyword(), hero.as_deref().unwrap_or("-"))?;
                    }
                    writeln!(out)?;
                }
            }
        }
        "display" => {
            write!(out, "{}", planner.plan())?;
            if planner.options.heroes_enabled {
                write!(out, "{}", HeroTable(&planner.hero_plan()))?;
            }
        }
        "reset" => {
            planner.reset();
        }
        "quit" => {
            return Ok(Flow::Quit);
        }
        name => {
            bail!("Unknown command: {}", name);
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpi::command::parse_command;

    fn run(planner: &mut Planner, script: &str) -> Result<String> {
        let mut out = Vec::new();
        for line in script.lines() {
            if let Some(cmd) = parse_command(line) {
                handle_command(&cmd, planner, &mut out)?;
            }
        }
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_handshake() {
        let out = run(&mut Planner::new(), "rpi\nisready").unwrap();
        assert!(out.starts_with("id name rallyplan\n"));
        assert!(out.contains("option name maxjoins type spin default 6 min 1 max 6\n"));
        assert!(out.contains("rpiok\nreadyok\n"));
    }

    #[test]
    fn test_go_reports_plan() {
        let out = run(
            &mut Planner::new(),
            indoc! {"
                troops infantry 1000 cavalry 1000 archers 500
                capacity lead 1000 join 500 count 2
                go
            "},
        )
        .unwrap();

        assert_eq!(
            out,
            indoc! {"
                info capacity 2000 deployed 2000 coverage 1
                info split infantry 0.375 cavalry 0.375 archers 0.25
                plan lead capacity 1000 infantry 375 cavalry 375 archers 250 unfilled 0
                plan join 1 capacity 500 infantry 188 cavalry 187 archers 125 unfilled 0
                plan join 2 capacity 500 infantry 188 cavalry 187 archers 125 unfilled 0
                plan total capacity 2000 infantry 751 cavalry 749 archers 500 unfilled 0
            "}
        );
    }

    #[test]
    fn test_go_with_heroes() {
        let out = run(
            &mut Planner::new(),
            indoc! {"
                setoption name heroes value true
                capacity count 2
                heroes infantry Amadeus, Helga
                heroes archers Saul
                go
            "},
        )
        .unwrap();

        assert!(out.contains("heroes join 1 infantry Amadeus cavalry - archers Saul\n"));
        assert!(out.contains("heroes join 2 infantry Helga cavalry - archers -\n"));
    }

    #[test]
    fn test_quit_stops() {
        let cmd = parse_command("quit").unwrap();
        let flow = handle_command(&cmd, &mut Planner::new(), &mut Vec::new()).unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn test_errors() {
        let mut planner = Planner::new();
        assert!(run(&mut planner, "launch").is_err());
        assert!(run(&mut planner, "setoption name heroes true").is_err());
        assert!(run(&mut planner, "troops pikemen 5").is_err());
        assert!(run(&mut planner, "roster").is_err());
        assert!(run(&mut planner, "go now").is_err());
    }
}
