//! Ordered keyed indices over [`Course`] records.
//!
//! Two interchangeable implementations share the [`CourseIndex`] contract:
//!
//! - [`BstIndex`]: plain binary search tree, no rebalancing. Sorted input
//!   degrades it to a linked spine, which is what makes it a useful baseline.
//! - [`AvlIndex`]: AVL tree, height stays within ~1.44·log₂(n+2).
//!
//! Keys must already be normalized (see [`crate::text::normalize_key`]).
//! Inserting an existing key overwrites the stored course in place without
//! changing size or shape.
//!
//! # Example
//!
//! ```
//! use course_planner::{Course, CourseIndex, IndexKind};
//!
//! let mut index = IndexKind::Avl.build();
//! index.insert(Course::new("CS300", "Algorithms", ["CS200"]));
//! index.insert(Course::new("CS100", "Intro", Vec::<String>::new()));
//!
//! let mut sorted = Vec::new();
//! index.in_order(&mut sorted);
//! assert_eq!(sorted[0].course_id, "CS100");
//! assert!(index.search("CS999").is_none());
//! ```

mod avl;
mod bst;
mod node;

pub use avl::AvlIndex;
pub use bst::BstIndex;

use crate::course::Course;
use crate::error::InvariantError;
use clap::ValueEnum;
use std::fmt;

/// Insert-or-overwrite, point search, sorted enumeration and cardinality.
pub trait CourseIndex {
    /// Insert `course`, overwriting any stored course with the same key.
    fn insert(&mut self, course: Course);

    /// Look up a normalized key.
    fn search(&self, course_id: &str) -> Option<&Course>;

    /// Append every stored course to `sink` in ascending key order.
    ///
    /// `sink` is not cleared first.
    fn in_order<'a>(&'a self, sink: &mut Vec<&'a Course>);

    /// Number of stored courses.
    fn len(&self) -> usize;

    /// Whether the index holds no courses.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every course.
    fn clear(&mut self);

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    fn height(&self) -> usize;

    /// Verify the structural invariants of this implementation.
    fn check_invariants(&self) -> Result<(), InvariantError>;

    /// Implementation tag.
    fn kind(&self) -> IndexKind;
}

/// Selects an index implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum IndexKind {
    /// Unbalanced binary search tree
    Bst,
    /// Self-balancing AVL tree
    #[default]
    Avl,
}

impl IndexKind {
    /// Both kinds, baseline first.
    pub const ALL: [Self; 2] = [Self::Bst, Self::Avl];

    /// Create an empty index of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn CourseIndex> {
        match self {
            Self::Bst => Box::new(BstIndex::new()),
            Self::Avl => Box::new(AvlIndex::new()),
        }
    }

    /// Short label used in benchmark reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bst => "BST",
            Self::Avl => "AVL",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn course(id: &str, title: &str) -> Course {
        Course::new(id, title, Vec::<String>::new())
    }

    #[test]
    fn test_empty_index() {
        for kind in IndexKind::ALL {
            let index = kind.build();
            assert_eq!(index.len(), 0);
            assert!(index.is_empty());
            assert!(index.search("CS100").is_none());
            assert_eq!(index.height(), 0);

            let mut sink = Vec::new();
            index.in_order(&mut sink);
            assert!(sink.is_empty());
            assert_eq!(index.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn test_in_order_appends_without_clearing() {
        let existing = course("ZZ999", "Already here");
        for kind in IndexKind::ALL {
            let mut index = kind.build();
            index.insert(course("CS300", "C"));
            index.insert(course("CS100", "A"));
            index.insert(course("CS200", "B"));

            let mut sink = vec![&existing];
            index.in_order(&mut sink);
            let ids: Vec<&str> = sink.iter().map(|c| c.course_id.as_str()).collect();
            assert_eq!(ids, vec!["ZZ999", "CS100", "CS200", "CS300"]);
        }
    }

    #[test]
    fn test_overwrite_is_idempotent() {
        for kind in IndexKind::ALL {
            let mut index = kind.build();
            let c = Course::new("CS200", "Intermediate", ["CS100"]);
            index.insert(c.clone());
            let height = index.height();
            index.insert(c.clone());
            assert_eq!(index.len(), 1);
            assert_eq!(index.height(), height);
            assert_eq!(index.search("CS200"), Some(&c));
        }
    }

    #[test]
    fn test_clear_resets_index() {
        for kind in IndexKind::ALL {
            let mut index = kind.build();
            for id in ["CS100", "CS200", "CS300"] {
                index.insert(course(id, "x"));
            }
            index.clear();
            assert!(index.is_empty());
            assert_eq!(index.height(), 0);
            assert!(index.search("CS200").is_none());

            index.insert(course("CS400", "y"));
            assert_eq!(index.len(), 1);
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IndexKind::Bst.to_string(), "BST");
        assert_eq!(IndexKind::Avl.label(), "AVL");
        assert_eq!(IndexKind::default(), IndexKind::Avl);
        assert_eq!(IndexKind::Bst.build().kind(), IndexKind::Bst);
    }
}
