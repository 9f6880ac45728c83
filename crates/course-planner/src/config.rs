//! Command-line configuration.
//!
//! # Configuration Sources
//!
//! Configuration can be provided via:
//! - CLI arguments (`--index`, `--log-level`, subcommands)
//! - Environment variables (`COURSE_PLANNER_CATALOG`, `COURSE_PLANNER_INDEX`)
//! - Default values
//!
//! Without a subcommand the planner starts the interactive menu.

use crate::error::ConfigError;
use crate::index::IndexKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default catalog file name, looked up in the working directory.
pub const DEFAULT_CATALOG: &str = "CS 300 ABCU_Advising_Program_Input.csv";

/// Default iterations per course ID for `bench`.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Planner configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course-planner",
    about = "Course catalog planner with BST and AVL indices",
    version
)]
pub struct PlannerConfig {
    /// Path to the course catalog CSV
    #[arg(env = "COURSE_PLANNER_CATALOG", default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// Index used for schedule and lookup queries
    #[arg(long, value_enum, env = "COURSE_PLANNER_INDEX", default_value = "avl")]
    pub index: IndexKind,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// One-shot command; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Non-interactive commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every course in key order
    Schedule {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one course and its prerequisites
    Show {
        /// Course ID, case-insensitive
        course_id: String,
    },
    /// Compare search time of both indices
    Bench {
        /// Searches per course ID
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,
    },
}

impl PlannerConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate configuration.
    ///
    /// The interactive menu reports a missing catalog itself, so the file is
    /// only required up front for one-shot commands.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - A one-shot command is given and the catalog file doesn't exist
    /// - `bench --iterations 0` is given
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(command) = &self.command else {
            return Ok(());
        };

        if !self.catalog.exists() {
            return Err(ConfigError::MissingCatalog(self.catalog.clone()));
        }

        if matches!(command, Command::Bench { iterations: 0 }) {
            return Err(ConfigError::InvalidIterations);
        }

        Ok(())
    }
}
