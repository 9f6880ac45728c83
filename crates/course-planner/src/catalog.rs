//! CSV catalog ingestion.
//!
//! Each row is `courseId,title,prereq1,prereq2,...`. Rows are parsed into a
//! staging map keyed by normalized course ID; later rows overwrite earlier
//! ones. Malformed rows are skipped with a [`LoadWarning`] so one bad line
//! never aborts the load.

use crate::course::Course;
use crate::error::CatalogError;
use crate::text::{normalize_key, split_csv_line, trim};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A skipped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadWarning {
    /// Fewer than two fields
    InvalidFormat {
        /// 1-based line number
        line: usize,
    },
    /// Course ID or title empty after trimming
    MissingField {
        /// 1-based line number
        line: usize,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { line } => write!(
                f,
                "Line {line}: invalid format (expected at least CourseId,Title). Skipped."
            ),
            Self::MissingField { line } => {
                write!(f, "Line {line}: missing CourseId or Title. Skipped.")
            }
        }
    }
}

/// Parsed catalog: the staging map plus any rows that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<String, Course>,
    warnings: Vec<LoadWarning>,
}

impl Catalog {
    /// Load a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Open` if the file cannot be opened and
    /// `CatalogError::Read` if reading fails part-way.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            courses = catalog.len(),
            skipped = catalog.warnings.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` on an I/O failure.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| CatalogError::Read {
                line: line_no,
                source,
            })?;

            match parse_row(&line, line_no) {
                Ok(Some(course)) => {
                    catalog.courses.insert(course.course_id.clone(), course);
                }
                Ok(None) => {}
                Err(warning) => {
                    tracing::warn!("{warning}");
                    catalog.warnings.push(warning);
                }
            }
        }

        Ok(catalog)
    }

    /// Staging map keyed by normalized course ID.
    #[must_use]
    pub const fn courses(&self) -> &HashMap<String, Course> {
        &self.courses
    }

    /// Rows skipped during parsing, in file order.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Number of distinct courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All course IDs in ascending order.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.courses.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

/// `Ok(None)` for blank lines.
fn parse_row(line: &str, line_no: usize) -> Result<Option<Course>, LoadWarning> {
    let line = trim(line);
    if line.is_empty() {
        return Ok(None);
    }

    let fields = split_csv_line(line);
    let [id, title, prereqs @ ..] = fields.as_slice() else {
        return Err(LoadWarning::InvalidFormat { line: line_no });
    };

    let course_id = normalize_key(id);
    let title = trim(title);
    if course_id.is_empty() || title.is_empty() {
        return Err(LoadWarning::MissingField { line: line_no });
    }

    let prereq = prereqs
        .iter()
        .map(|field| normalize_key(field))
        .filter(|id| !id.is_empty())
        .collect();

    Ok(Some(Course {
        course_id,
        title: title.to_string(),
        prereq,
    }))
}
