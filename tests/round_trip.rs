use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use timebar::io::{Session, WriteDecision};
use timebar::model::{Task, TaskGroup};
use timebar::ops::sort_all_groups;
use timebar::parse::{
    Diagnostic, parse_raw_groups, serialize_groups, split_lines, validate_groups,
};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("could not read fixture {}: {}", name, e))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// All expectations below compute remaining days against this fixed day.
fn reference() -> NaiveDate {
    date(2025, 5, 1)
}

fn task(y: i32, m: u32, d: u32, name: &str) -> Task {
    Task::with_reference(date(y, m, d), name, reference())
}

/// Parse text the way a load does, collecting diagnostics instead of
/// printing them.
fn parse(text: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<TaskGroup> {
    let lines = split_lines(text);
    let raw_groups = parse_raw_groups(&lines, |d| diagnostics.push(d));
    validate_groups(raw_groups, reference(), |d| diagnostics.push(d))
}

// ============================================================================
// Fixture round-trips
// ============================================================================

#[test]
fn round_trip_grouping_fixture() {
    let source = fixture("grouping.txt");

    let mut diagnostics = Vec::new();
    let groups = parse(&source, &mut diagnostics);
    assert!(diagnostics.is_empty());

    assert_eq!(
        groups,
        vec![
            TaskGroup::singleton(task(2025, 5, 3, "cookies")),
            TaskGroup::singleton(task(2025, 5, 2, "waffles")),
            TaskGroup::new(
                "group",
                vec![task(2025, 5, 5, "coffee"), task(2025, 6, 7, "tea")],
            ),
            TaskGroup::singleton(task(2025, 5, 1, "fries")),
        ]
    );

    assert_eq!(serialize_groups(&groups), source);
}

#[test]
fn nested_grouping_fixture_recovers_with_two_warnings() {
    let source = fixture("nested_grouping.txt");

    let mut diagnostics = Vec::new();
    let groups = parse(&source, &mut diagnostics);

    // both inner opens warn; their tasks attach to the outermost open group
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::NestedGroup {
                outer: "group".to_string(),
                inner: "inner".to_string(),
            },
            Diagnostic::NestedGroup {
                outer: "group".to_string(),
                inner: "inner2".to_string(),
            },
        ]
    );
    assert_eq!(
        groups,
        vec![
            TaskGroup::singleton(task(2025, 5, 3, "cookies")),
            TaskGroup::singleton(task(2025, 5, 2, "waffles")),
            TaskGroup::new(
                "group",
                vec![task(2025, 5, 5, "coffee"), task(2025, 6, 7, "tea")],
            ),
            TaskGroup::singleton(task(2025, 5, 1, "fries")),
        ]
    );

    // the recovered form is a fixed point: serialize and parse again
    let normalized = serialize_groups(&groups);
    let mut diagnostics = Vec::new();
    assert_eq!(parse(&normalized, &mut diagnostics), groups);
    assert!(diagnostics.is_empty());
}

// ============================================================================
// Round-trip property
// ============================================================================

#[test]
fn round_trip_constructed_groups() {
    // singletons carry the empty name, grouped tasks may not; due dates
    // span the four-digit year range the file format can express
    let groups = vec![
        TaskGroup::singleton(task(1000, 1, 1, "earliest possible")),
        TaskGroup::new(
            "",
            vec![task(2025, 5, 5, "Coffee"), task(2025, 5, 5, "More coffee")],
        ),
        TaskGroup::new(
            "errands",
            vec![
                task(2025, 12, 9, "Waffles, with syrup"),
                task(2026, 1, 2, "Fries"),
                task(2025, 11, 30, "Cookies"),
            ],
        ),
        TaskGroup::singleton(task(9999, 12, 31, "latest possible")),
    ];

    let text = serialize_groups(&groups);
    let mut diagnostics = Vec::new();
    assert_eq!(parse(&text, &mut diagnostics), groups);
    assert!(diagnostics.is_empty());
}

#[test]
fn as_given_and_pre_sorted_paths_are_independent() {
    let unsorted = vec![TaskGroup::new(
        "project",
        vec![
            task(2025, 6, 7, "Tea"),
            task(2025, 5, 5, "Coffee"),
            task(2025, 5, 20, "Waffles"),
        ],
    )];

    // as-given: the serializer preserves file order
    assert_eq!(
        serialize_groups(&unsorted),
        "project{\n2025/06/07, Tea\n2025/05/05, Coffee\n2025/05/20, Waffles\n}"
    );

    // pre-sorted: the caller opts in before serializing
    let mut sorted = unsorted.clone();
    sort_all_groups(&mut sorted);
    assert_eq!(
        serialize_groups(&sorted),
        "project{\n2025/05/05, Coffee\n2025/05/20, Waffles\n2025/06/07, Tea\n}"
    );

    // both forms parse back to structurally equal task sets
    let mut diagnostics = Vec::new();
    let reparsed = parse(&serialize_groups(&sorted), &mut diagnostics);
    assert_eq!(reparsed, sorted);
    assert!(diagnostics.is_empty());
}

// ============================================================================
// Full load/save cycle through a session
// ============================================================================

#[test]
fn session_cycle_preserves_board() {
    let tmp = TempDir::new().unwrap();
    let session = Session::in_dir(tmp.path());

    fs::write(session.path(), fixture("grouping.txt")).unwrap();

    let groups = session
        .load(|d| panic!("unexpected diagnostic: {}", d))
        .unwrap();
    assert_eq!(groups.len(), 4);

    session.save(&groups, |_| WriteDecision::Accept);
    let reloaded = session
        .load(|d| panic!("unexpected diagnostic: {}", d))
        .unwrap();
    assert_eq!(reloaded, groups);
}

#[test]
fn session_load_drops_invalid_tasks_but_keeps_their_group() {
    let tmp = TempDir::new().unwrap();
    let session = Session::in_dir(tmp.path());

    fs::write(
        session.path(),
        "pair{\n2025/02/30, X\n2025/05/05, coffee\n}",
    )
    .unwrap();

    let mut diagnostics = Vec::new();
    let groups = session.load(|d| diagnostics.push(d)).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "pair");
    assert_eq!(groups[0].tasks.len(), 1);
    assert_eq!(groups[0].tasks[0].name(), "coffee");
    assert_eq!(diagnostics.len(), 1);
}

// ============================================================================
// Model export
// ============================================================================

#[test]
fn group_exports_to_json() {
    let group = TaskGroup::new("project", vec![task(2025, 5, 5, "Coffee")]);
    let value = serde_json::to_value(&group).unwrap();
    assert_eq!(value["name"], "project");
    assert_eq!(value["tasks"][0]["name"], "Coffee");
    assert_eq!(value["tasks"][0]["due_date"], "2025-05-05");
    assert_eq!(value["tasks"][0]["days_remaining"], 4);
}
