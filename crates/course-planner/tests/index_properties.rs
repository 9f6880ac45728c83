//! Property tests shared by both index implementations.

#![allow(clippy::unwrap_used)]

use course_planner::{Course, CourseIndex, IndexKind};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Normalized course keys: upper-case letters followed by digits.
fn course_key() -> impl Strategy<Value = String> {
    "[A-Z]{2,4}[0-9]{3}"
}

fn course() -> impl Strategy<Value = Course> {
    (
        course_key(),
        "[A-Za-z ]{1,20}",
        prop::collection::vec(course_key(), 0..4),
    )
        .prop_map(|(id, title, prereq)| Course::new(id, title, prereq))
}

fn populate(kind: IndexKind, courses: &[Course]) -> Box<dyn CourseIndex> {
    let mut index = kind.build();
    for course in courses {
        index.insert(course.clone());
    }
    index
}

/// Last write wins, same as the indices.
fn model(courses: &[Course]) -> BTreeMap<String, Course> {
    courses
        .iter()
        .map(|c| (c.course_id.clone(), c.clone()))
        .collect()
}

proptest! {
    #[test]
    fn search_returns_latest_insert(courses in prop::collection::vec(course(), 0..200)) {
        let expected = model(&courses);
        for kind in IndexKind::ALL {
            let index = populate(kind, &courses);
            prop_assert_eq!(index.len(), expected.len());
            for (key, course) in &expected {
                prop_assert_eq!(index.search(key), Some(course));
            }
            prop_assert_eq!(index.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn in_order_is_strictly_ascending(courses in prop::collection::vec(course(), 0..200)) {
        for kind in IndexKind::ALL {
            let index = populate(kind, &courses);
            let mut sink = Vec::new();
            index.in_order(&mut sink);

            prop_assert_eq!(sink.len(), index.len());
            for pair in sink.windows(2) {
                prop_assert!(pair[0].course_id < pair[1].course_id);
            }
        }
    }

    #[test]
    fn implementations_agree(
        courses in prop::collection::vec(course(), 0..150),
        queries in prop::collection::vec(course_key(), 0..50),
    ) {
        let bst = populate(IndexKind::Bst, &courses);
        let avl = populate(IndexKind::Avl, &courses);

        let probes = courses.iter().map(|c| c.course_id.as_str()).chain(queries.iter().map(String::as_str));
        for key in probes {
            prop_assert_eq!(bst.search(key), avl.search(key));
        }
    }

    #[test]
    fn overwrite_replaces_whole_record(
        courses in prop::collection::vec(course(), 1..100),
        replacement in course(),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.get(&courses).course_id.clone();
        let replacement = Course { course_id: target.clone(), ..replacement };

        for kind in IndexKind::ALL {
            let mut index = populate(kind, &courses);
            let before = index.len();
            let height = index.height();
            index.insert(replacement.clone());

            prop_assert_eq!(index.len(), before);
            prop_assert_eq!(index.height(), height);
            prop_assert_eq!(index.search(&target), Some(&replacement));
        }
    }

    #[test]
    fn avl_height_is_logarithmic(keys in prop::collection::btree_set(course_key(), 0..500), shuffle in any::<u64>()) {
        let mut keys: Vec<String> = keys.into_iter().collect();
        // Alternate between sorted order and a cheap deterministic rotation.
        if shuffle % 2 == 1 && !keys.is_empty() {
            let split = (shuffle as usize) % keys.len();
            keys.rotate_left(split);
        }

        let mut index = IndexKind::Avl.build();
        for key in &keys {
            index.insert(Course::new(key.as_str(), "t", Vec::<String>::new()));
        }

        let n = keys.len() as f64;
        let bound = (1.44 * (n + 2.0).log2()).ceil() as usize;
        prop_assert!(index.height() <= bound, "height {} exceeds {} for n = {}", index.height(), bound, n);
        prop_assert_eq!(index.check_invariants(), Ok(()));
    }
}
