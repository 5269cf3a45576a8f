use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rallyplan::rpi::{handle_command, parse_command, Flow};
use rallyplan::{JoinBounds, Planner, PlannerOptions};

/// Rally troop allocation planner speaking the RPI line protocol
#[derive(Parser, Debug)]
#[command(name = "rallyplan", version, about)]
struct Cli {
    /// Read commands from this file instead of stdin
    script: Option<PathBuf>,

    /// Log protocol errors and keep going instead of exiting
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let options = PlannerOptions::new(JoinBounds::default(), false, !cli.lenient);
    let mut planner = Planner::with_options(options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (lineno, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;

        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match handle_command(&cmd, &mut planner, &mut out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                if planner.options.strict_mode {
                    return Err(err.context(format!("line {}: {}", lineno + 1, line.trim())));
                }
                tracing::error!(line = lineno + 1, "{:#}", err);
            }
        }
    }

    Ok(())
}
