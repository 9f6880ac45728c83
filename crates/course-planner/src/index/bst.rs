//! Unbalanced binary search tree.
//!
//! No structural correction is ever applied: depth equals the longest monotone
//! run of the insertion order. Insert, search and teardown are iterative so a
//! sorted catalog of any size is safe.

use super::node::{self, TreeNode};
use super::{CourseIndex, IndexKind};
use crate::course::Course;
use crate::error::InvariantError;
use std::cmp::Ordering;

#[derive(Debug)]
struct Node {
    course: Course,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    const fn new(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}

impl TreeNode for Node {
    fn course(&self) -> &Course {
        &self.course
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>) {
        (self.left.take(), self.right.take())
    }
}

/// Baseline index without rebalancing.
#[derive(Debug, Default)]
pub struct BstIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl BstIndex {
    /// Create an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Key stored at the root.
    #[must_use]
    pub fn root_key(&self) -> Option<&str> {
        self.root.as_deref().map(Node::key)
    }

    /// Keys of the left and right children of `key`, or `None` if `key` is absent.
    #[must_use]
    pub fn children(&self, key: &str) -> Option<(Option<&str>, Option<&str>)> {
        node::children(self.root.as_deref(), key)
    }
}

impl CourseIndex for BstIndex {
    fn insert(&mut self, course: Course) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match course.course_id.cmp(&node.course.course_id) {
                Ordering::Equal => {
                    node.course = course;
                    return;
                }
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
            }
        }
        *slot = Some(Box::new(Node::new(course)));
        self.len += 1;
    }

    fn search(&self, course_id: &str) -> Option<&Course> {
        node::find(self.root.as_deref(), course_id).map(|node| &node.course)
    }

    fn in_order<'a>(&'a self, sink: &mut Vec<&'a Course>) {
        node::collect_in_order(self.root.as_deref(), sink);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        node::release(self.root.take());
        self.len = 0;
    }

    fn height(&self) -> usize {
        node::depth(self.root.as_deref())
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        node::check_order_and_count(self.root.as_deref(), self.len)
    }

    fn kind(&self) -> IndexKind {
        IndexKind::Bst
    }
}

impl Drop for BstIndex {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}
