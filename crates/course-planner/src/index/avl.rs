//! AVL tree.
//!
//! Insertion descends recursively; on the way back up every level replaces its
//! child link with the rebalanced child and then rebalances itself. Rotations
//! take a subtree by value and return its new root, so no node ever needs a
//! parent pointer.
//!
//! Heights follow the usual convention: an empty subtree is 0, a leaf is 1.

use super::node::{self, TreeNode};
use super::{CourseIndex, IndexKind};
use crate::course::Course;
use crate::error::InvariantError;
use std::cmp::Ordering;

type Link = Option<Box<AvlNode>>;

#[derive(Debug)]
struct AvlNode {
    course: Course,
    height: usize,
    left: Link,
    right: Link,
}

impl AvlNode {
    const fn leaf(course: Course) -> Self {
        Self {
            course,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left).cast_signed() - height(&self.right).cast_signed()
    }
}

impl TreeNode for AvlNode {
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

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Right rotation at `y`: its left child `x` becomes the subtree root.
fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation at `x`: its right child `y` becomes the subtree root.
fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        // LR: straighten the left child first.
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if factor < -1 {
        // RL
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Returns the new subtree root; sets `inserted` when a node was created.
fn insert_into(link: Link, course: Course, inserted: &mut bool) -> Box<AvlNode> {
    let Some(mut node) = link else {
        *inserted = true;
        return Box::new(AvlNode::leaf(course));
    };

    match course.course_id.cmp(&node.course.course_id) {
        Ordering::Equal => {
            // Shape is unchanged, so nothing above needs rebalancing either.
            node.course = course;
            return node;
        }
        Ordering::Less => {
            node.left = Some(insert_into(node.left.take(), course, inserted));
        }
        Ordering::Greater => {
            node.right = Some(insert_into(node.right.take(), course, inserted));
        }
    }

    rebalance(node)
}

/// Returns the verified height of the subtree.
fn verify(link: &Link) -> Result<usize, InvariantError> {
    let Some(node) = link else {
        return Ok(0);
    };

    let left = verify(&node.left)?;
    let right = verify(&node.right)?;
    let expected = 1 + left.max(right);

    if node.height != expected {
        return Err(InvariantError::Height {
            key: node.course.course_id.clone(),
            stored: node.height,
            expected,
        });
    }

    let factor = left.cast_signed() - right.cast_signed();
    if factor.abs() > 1 {
        return Err(InvariantError::Balance {
            key: node.course.course_id.clone(),
            factor,
        });
    }

    Ok(expected)
}

/// Self-balancing index with logarithmic worst-case depth.
#[derive(Debug, Default)]
pub struct AvlIndex {
    root: Link,
    len: usize,
}

impl AvlIndex {
    /// Create an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Key stored at the root.
    #[must_use]
    pub fn root_key(&self) -> Option<&str> {
        self.root.as_deref().map(AvlNode::key)
    }

    /// Keys of the left and right children of `key`, or `None` if `key` is absent.
    #[must_use]
    pub fn children(&self, key: &str) -> Option<(Option<&str>, Option<&str>)> {
        node::children(self.root.as_deref(), key)
    }

    /// Height recorded on the node holding `key`.
    #[must_use]
    pub fn node_height(&self, key: &str) -> Option<usize> {
        node::find(self.root.as_deref(), key).map(|node| node.height)
    }
}

impl CourseIndex for AvlIndex {
    fn insert(&mut self, course: Course) {
        let mut inserted = false;
        self.root = Some(insert_into(self.root.take(), course, &mut inserted));
        if inserted {
            self.len += 1;
        }
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
        height(&self.root)
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        verify(&self.root)?;
        node::check_order_and_count(self.root.as_deref(), self.len)
    }

    fn kind(&self) -> IndexKind {
        IndexKind::Avl
    }
}

impl Drop for AvlIndex {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}
