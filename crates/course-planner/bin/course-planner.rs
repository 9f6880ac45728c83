//! Course planner binary entry point.
//!
//! This is a thin wrapper around the course-planner library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Runs a one-shot command or the interactive menu
//!
//! For library usage, see the course-planner crate documentation.

use anyhow::{Context, Result};
use course_planner::{Command, Menu, Planner, PlannerConfig};
use std::io::{self, Write};

fn main() -> Result<()> {
    let config = PlannerConfig::from_args();

    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!(
        catalog = %config.catalog.display(),
        index = %config.index,
        "configuration loaded"
    );

    config.validate()?;

    let mut planner = Planner::new(config.index);
    let stdout = io::stdout();

    let Some(command) = &config.command else {
        let stdin = io::stdin();
        Menu::new(&mut planner, &config.catalog, stdin.lock(), stdout.lock())
            .run()
            .context("interactive session failed")?;
        return Ok(());
    };

    planner
        .load(&config.catalog)
        .with_context(|| format!("failed to load {}", config.catalog.display()))?;

    let mut out = stdout.lock();
    match command {
        Command::Schedule { json: true } => {
            serde_json::to_writer_pretty(&mut out, &planner.schedule()?)?;
            writeln!(out)?;
        }
        Command::Schedule { json: false } => {
            for course in planner.schedule()? {
                writeln!(out, "{course}")?;
            }
        }
        Command::Show { course_id } => {
            let lookup = planner.lookup(course_id)?;
            match lookup.course {
                Some(course) => writeln!(out, "{}", course.details())?,
                None => anyhow::bail!("Course Id {} not found.", lookup.key),
            }
        }
        Command::Bench { iterations } => {
            planner.benchmark(*iterations, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
