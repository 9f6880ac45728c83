//! Course planner.
//!
//! Loads a course catalog from CSV into two ordered keyed indices, an
//! unbalanced binary search tree and an AVL tree, and exposes sorted
//! enumeration, single-course lookup, and a search benchmark that drives both
//! indices with an identical workload.
//!
//! # Architecture
//!
//! - `index`: the [`CourseIndex`] contract and its two implementations
//! - `benchmark`: search benchmark harness
//! - `catalog`: CSV ingestion with per-row warnings
//! - `planner`: driver state holding the catalog and both indices
//! - `menu`: interactive menu loop
//! - `config`: CLI configuration
//! - `text`: key normalization helpers
//!
//! # Example
//!
//! ```
//! use course_planner::{Catalog, IndexKind, Planner};
//! use std::io::Cursor;
//!
//! let catalog = Catalog::from_reader(Cursor::new(
//!     "CSCI200,Data Structures,CSCI101\nCSCI101,Programming in C++\n",
//! ))?;
//!
//! let mut planner = Planner::new(IndexKind::Avl);
//! planner.load_catalog(catalog);
//!
//! let lookup = planner.lookup("csci200")?;
//! assert_eq!(lookup.course.map(|c| c.title.as_str()), Some("Data Structures"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod benchmark;
pub mod catalog;
pub mod config;
pub mod course;
pub mod error;
pub mod index;
pub mod menu;
pub mod planner;
pub mod text;

pub use benchmark::{BenchmarkReport, run_search_benchmark};
pub use catalog::{Catalog, LoadWarning};
pub use config::{Command, PlannerConfig};
pub use course::Course;
pub use error::{CatalogError, ConfigError, InvariantError, PlannerError};
pub use index::{AvlIndex, BstIndex, CourseIndex, IndexKind};
pub use menu::Menu;
pub use planner::{Lookup, Planner};
