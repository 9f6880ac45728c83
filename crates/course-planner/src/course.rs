//! Course records.
//!
//! A [`Course`] is the value stored by every index. Keys are the normalized
//! `course_id` (trimmed, ASCII upper-case); see [`crate::text::normalize_key`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique key, e.g. "CSCI200"
    pub course_id: String,

    /// Human-readable title, e.g. "Data Structures"
    pub title: String,

    /// Prerequisite course IDs in source order (not deduplicated)
    #[serde(default)]
    pub prereq: Vec<String>,
}

impl Course {
    /// Create a course from its parts.
    pub fn new(
        course_id: impl Into<String>,
        title: impl Into<String>,
        prereq: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            prereq: prereq.into_iter().map(Into::into).collect(),
        }
    }

    /// Prerequisites joined by single spaces, or "No prerequisites".
    #[must_use]
    pub fn prereq_line(&self) -> String {
        if self.prereq.is_empty() {
            "No prerequisites".to_string()
        } else {
            self.prereq.join(" ")
        }
    }

    /// Two-line detail view used by course lookups.
    #[must_use]
    pub const fn details(&self) -> CourseDetails<'_> {
        CourseDetails(self)
    }
}

/// Schedule row: `ID: Title | prerequisites`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | {}", self.course_id, self.title, self.prereq_line())
    }
}

/// Detail view returned by [`Course::details`].
#[derive(Debug, Clone, Copy)]
pub struct CourseDetails<'a>(&'a Course);

impl fmt::Display for CourseDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.0.course_id, self.0.title)?;
        write!(f, "Prerequisites: {}", self.0.prereq_line())
    }
}
