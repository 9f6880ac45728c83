//! End-to-end tests: CSV on disk through both indices and the benchmark.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use course_planner::{AvlIndex, BstIndex, Course, CourseIndex, IndexKind, Planner};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary catalog file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write catalog contents");
    file
}

fn course(id: &str) -> Course {
    Course::new(id, format!("Title of {id}"), Vec::<String>::new())
}

#[test]
fn test_sorted_insertion_stress() {
    let ids = ["CS100", "CS200", "CS300", "CS400"];
    let mut bst = BstIndex::new();
    let mut avl = AvlIndex::new();
    for id in ids {
        bst.insert(course(id));
        avl.insert(course(id));
    }

    for index in [&bst as &dyn CourseIndex, &avl] {
        assert_eq!(index.len(), 4);
        assert!(index.search("CS300").is_some());
        assert!(index.search("CS999").is_none());
    }

    assert_eq!(bst.height(), 4);
    assert_eq!(bst.root_key(), Some("CS100"));
    assert!(avl.height() <= 3);
    assert!(matches!(avl.root_key(), Some("CS200" | "CS300")));
}

#[test]
fn test_overwrite_scenario() {
    for kind in IndexKind::ALL {
        let mut index = kind.build();
        index.insert(course("CS100"));
        index.insert(Course::new("CS200", "Intermediate", Vec::<String>::new()));
        let size = index.len();

        index.insert(Course::new("CS200", "Intermediate II", ["CS100"]));

        assert_eq!(index.len(), size);
        let found = index.search("CS200").unwrap();
        assert_eq!(found.title, "Intermediate II");
        assert_eq!(found.prereq, vec!["CS100".to_string()]);
    }
}

#[test]
fn test_load_from_disk() {
    let file = catalog_file(
        "CSCI100,Introduction to Computer Science\n\
         csci101 , Introduction to Programming in C++ , csci100\n\
         CSCI200,Data Structures,CSCI101,\n\
         MATH201\n\
         CSCI300,Introduction to Algorithms,CSCI200,MATH201\n",
    );

    let mut planner = Planner::new(IndexKind::Bst);
    let count = planner.load(file.path()).unwrap();

    assert_eq!(count, 4);
    assert_eq!(planner.warnings().len(), 1);
    assert_eq!(
        planner.warnings()[0].to_string(),
        "Line 4: invalid format (expected at least CourseId,Title). Skipped."
    );

    let rows: Vec<String> = planner
        .schedule()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rows,
        vec![
            "CSCI100: Introduction to Computer Science | No prerequisites",
            "CSCI101: Introduction to Programming in C++ | CSCI100",
            "CSCI200: Data Structures | CSCI101",
            "CSCI300: Introduction to Algorithms | CSCI200 MATH201",
        ]
    );

    for kind in IndexKind::ALL {
        assert_eq!(planner.index(kind).check_invariants(), Ok(()));
    }
}

#[test]
fn test_benchmark_determinism() {
    let rows: String = (0..50)
        .map(|i| format!("CS{:03},Course {i}\n", i * 7 % 50))
        .collect();
    let file = catalog_file(&rows);

    let mut planner = Planner::default();
    planner.load(file.path()).unwrap();
    assert_eq!(planner.ids().len(), 50);

    let mut out = Vec::new();
    let reports = planner.benchmark(1000, &mut out).unwrap();

    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report.total_ops, 50_000);
        assert_eq!(report.hits, 50_000);
        assert!(report.mean_micros().is_finite());
        assert!(report.mean_micros() >= 0.0);
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("BST Benchmark Results"));
    assert!(text.contains("AVL Benchmark Results"));
    assert_eq!(text.matches("Total searches: 50000").count(), 2);
}
