//! Driver state shared by the interactive menu and the one-shot commands.
//!
//! A load parses the catalog into its staging map, then feeds the same records
//! into freshly built unbalanced and AVL indices. Rebuilding on every load means
//! a reload never mixes the previous population into the new one.

use crate::benchmark::{BenchmarkReport, run_search_benchmark};
use crate::catalog::{Catalog, LoadWarning};
use crate::course::Course;
use crate::error::PlannerError;
use crate::index::{AvlIndex, BstIndex, CourseIndex, IndexKind};
use crate::text::normalize_key;
use std::io::Write;
use std::path::Path;

/// Result of a single-course lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// The normalized key that was searched for
    pub key: String,
    /// The stored course, if any
    pub course: Option<&'a Course>,
}

/// Loaded catalog plus both indices built from it.
#[derive(Debug)]
pub struct Planner {
    catalog: Catalog,
    bst: BstIndex,
    avl: AvlIndex,
    ids: Vec<String>,
    primary: IndexKind,
    loaded: bool,
}

impl Planner {
    /// Create an empty planner; `primary` serves schedule and lookup queries.
    #[must_use]
    pub fn new(primary: IndexKind) -> Self {
        Self {
            catalog: Catalog::default(),
            bst: BstIndex::new(),
            avl: AvlIndex::new(),
            ids: Vec::new(),
            primary,
            loaded: false,
        }
    }

    /// Load a CSV catalog, replacing anything loaded before.
    ///
    /// On failure the planner is left empty and unloaded.
    pub fn load(&mut self, path: &Path) -> Result<usize, PlannerError> {
        self.reset();
        let catalog = Catalog::from_path(path)?;
        Ok(self.load_catalog(catalog))
    }

    /// Index an already parsed catalog, replacing anything loaded before.
    pub fn load_catalog(&mut self, catalog: Catalog) -> usize {
        self.reset();

        for course in catalog.courses().values() {
            self.bst.insert(course.clone());
            self.avl.insert(course.clone());
        }
        self.ids = catalog.sorted_ids();
        self.catalog = catalog;
        self.loaded = true;

        tracing::debug!(
            courses = self.avl.len(),
            bst_height = self.bst.height(),
            avl_height = self.avl.height(),
            "indices rebuilt"
        );

        self.primary().len()
    }

    fn reset(&mut self) {
        self.catalog = Catalog::default();
        self.bst = BstIndex::new();
        self.avl = AvlIndex::new();
        self.ids.clear();
        self.loaded = false;
    }

    /// Whether a catalog has been loaded successfully.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Rows skipped by the last load.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        self.catalog.warnings()
    }

    /// Sorted course IDs used as the benchmark workload.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Index implementation that serves schedule and lookup queries.
    #[must_use]
    pub const fn primary_kind(&self) -> IndexKind {
        self.primary
    }

    /// Index of the given kind.
    #[must_use]
    pub fn index(&self, kind: IndexKind) -> &dyn CourseIndex {
        match kind {
            IndexKind::Bst => &self.bst,
            IndexKind::Avl => &self.avl,
        }
    }

    /// The primary index.
    #[must_use]
    pub fn primary(&self) -> &dyn CourseIndex {
        self.index(self.primary)
    }

    fn ensure_loaded(&self) -> Result<(), PlannerError> {
        if self.loaded {
            Ok(())
        } else {
            Err(PlannerError::NotLoaded)
        }
    }

    /// All courses in ascending key order.
    pub fn schedule(&self) -> Result<Vec<&Course>, PlannerError> {
        self.ensure_loaded()?;
        let index = self.primary();
        let mut ordered = Vec::with_capacity(index.len());
        index.in_order(&mut ordered);
        Ok(ordered)
    }

    /// Normalize `raw` and look it up in the primary index.
    pub fn lookup(&self, raw: &str) -> Result<Lookup<'_>, PlannerError> {
        self.ensure_loaded()?;
        let key = normalize_key(raw);
        let course = self.primary().search(&key);
        Ok(Lookup { key, course })
    }

    /// Run the search benchmark against both indices with the same workload.
    pub fn benchmark<W: Write>(
        &self,
        iterations_per_key: usize,
        out: &mut W,
    ) -> Result<Vec<BenchmarkReport>, PlannerError> {
        self.ensure_loaded()?;

        let mut reports = Vec::with_capacity(IndexKind::ALL.len());
        for kind in IndexKind::ALL {
            if let Some(report) = run_search_benchmark(
                self.index(kind),
                &self.ids,
                iterations_per_key,
                kind.label(),
                out,
            )? {
                reports.push(report);
            }
        }
        Ok(reports)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(IndexKind::default())
    }
}
