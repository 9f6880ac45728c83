//! Traversal helpers shared by both tree shapes.
//!
//! Everything here is iterative: an unbalanced tree built from sorted input is
//! as deep as it is large, so recursion over it is not an option.

use crate::course::Course;
use crate::error::InvariantError;
use std::cmp::Ordering;

/// Read access to a node plus the ability to detach its children.
pub(super) trait TreeNode: Sized {
    fn course(&self) -> &Course;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>);

    fn key(&self) -> &str {
        &self.course().course_id
    }
}

/// Descend from `root` to the node holding `key`.
pub(super) fn find<'a, N: TreeNode>(root: Option<&'a N>, key: &str) -> Option<&'a N> {
    let mut current = root;
    while let Some(node) = current {
        current = match key.cmp(node.key()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Left, self, right.
pub(super) fn collect_in_order<'a, N: TreeNode>(root: Option<&'a N>, sink: &mut Vec<&'a Course>) {
    let mut pending: Vec<&'a N> = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }
        let Some(node) = pending.pop() else {
            break;
        };
        sink.push(node.course());
        current = node.right();
    }
}

/// Longest root-to-leaf path, counted in nodes.
pub(super) fn depth<N: TreeNode>(root: Option<&N>) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&N, usize)> = root.map(|node| (node, 1)).into_iter().collect();
    while let Some((node, level)) = pending.pop() {
        deepest = deepest.max(level);
        pending.extend(node.left().map(|child| (child, level + 1)));
        pending.extend(node.right().map(|child| (child, level + 1)));
    }
    deepest
}

/// Keys of the children of the node holding `key`.
pub(super) fn children<'a, N: TreeNode>(
    root: Option<&'a N>,
    key: &str,
) -> Option<(Option<&'a str>, Option<&'a str>)> {
    find(root, key).map(|node| (node.left().map(N::key), node.right().map(N::key)))
}

/// Check strict key ordering, uniqueness and cardinality in one in-order pass.
pub(super) fn check_order_and_count<N: TreeNode>(
    root: Option<&N>,
    reported: usize,
) -> Result<(), InvariantError> {
    let mut visited = Vec::with_capacity(reported);
    collect_in_order(root, &mut visited);

    if let Some(pair) = visited
        .windows(2)
        .find(|pair| pair[0].course_id >= pair[1].course_id)
    {
        return Err(InvariantError::Ordering {
            previous: pair[0].course_id.clone(),
            next: pair[1].course_id.clone(),
        });
    }

    if visited.len() != reported {
        return Err(InvariantError::Cardinality {
            reported,
            reachable: visited.len(),
        });
    }

    Ok(())
}

/// Free a subtree children-first.
///
/// A node is pushed back childless and its children above it, so it is only
/// dropped once everything below it has been released.
pub(super) fn release<N: TreeNode>(root: Option<Box<N>>) {
    let mut pending: Vec<Box<N>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        match node.take_children() {
            (None, None) => drop(node),
            (left, right) => {
                pending.push(node);
                pending.extend(left);
                pending.extend(right);
            }
        }
    }
}
