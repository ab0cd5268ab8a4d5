use std::collections::BTreeSet;

use semfix::catalogue;
use semfix::diagnostics::FixtureError;
use semfix::emit::{self, Drift};

#[test]
fn generate_writes_two_files_per_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated_tests");
    let report = semfix::generate(&out).unwrap();
    assert_eq!(report.fixtures, 27);
    assert_eq!(report.files, 54);

    let files: BTreeSet<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 54);
    for case in catalogue::standard().unwrap().enumerate() {
        assert!(files.contains(&format!("{}.in", case.name)), "{}", case.name);
        assert!(files.contains(&format!("{}.out", case.name)), "{}", case.name);
    }
}

#[test]
fn input_files_start_on_line_one() {
    let dir = tempfile::tempdir().unwrap();
    semfix::generate(dir.path()).unwrap();
    let src = std::fs::read_to_string(dir.path().join("test_fail_redef_var.in")).unwrap();
    assert_eq!(src, "void main() {\n    int x;\n    bool x;\n}");
}

#[test]
fn output_files_end_with_single_newline() {
    let dir = tempfile::tempdir().unwrap();
    semfix::generate(dir.path()).unwrap();
    for case in catalogue::standard().unwrap().enumerate() {
        let text = std::fs::read_to_string(dir.path().join(format!("{}.out", case.name))).unwrap();
        assert!(text.ends_with('\n'), "{}", case.name);
        assert!(!text.ends_with("\n\n"), "{}", case.name);
    }
}

#[test]
fn regenerating_is_byte_identical() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    semfix::generate(a.path()).unwrap();
    semfix::generate(b.path()).unwrap();
    for case in catalogue::standard().unwrap().enumerate() {
        for ext in ["in", "out"] {
            let file = format!("{}.{ext}", case.name);
            assert_eq!(
                std::fs::read(a.path().join(&file)).unwrap(),
                std::fs::read(b.path().join(&file)).unwrap(),
                "{file}"
            );
        }
    }
}

#[test]
fn existing_files_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("test_success_basic.out"), "stale\n\n\n").unwrap();
    semfix::generate(dir.path()).unwrap();
    let text = std::fs::read_to_string(dir.path().join("test_success_basic.out")).unwrap();
    assert!(text.starts_with("---begin global scope---\n"));
}

#[test]
fn check_after_generate_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    semfix::generate(dir.path()).unwrap();
    assert!(semfix::check(dir.path()).unwrap().is_empty());
}

#[test]
fn check_on_empty_dir_reports_everything_missing() {
    let dir = tempfile::tempdir().unwrap();
    let drift = semfix::check(dir.path()).unwrap();
    assert_eq!(drift.len(), 54);
    assert!(drift.iter().all(|d| matches!(d, Drift::Missing(_))));
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "file").unwrap();
    let err = semfix::generate(&blocker.join("nested")).unwrap_err();
    assert!(matches!(err, FixtureError::Io { .. }), "{err}");
}

#[test]
fn emit_case_writes_only_its_pair() {
    let dir = tempfile::tempdir().unwrap();
    let cat = catalogue::standard().unwrap();
    let case = cat.get("test_fail_continue").unwrap();
    assert_eq!(emit::emit_case(dir.path(), case).unwrap(), 2);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    assert_eq!(
        std::fs::read_to_string(emit::output_path(dir.path(), &case.name)).unwrap(),
        "line 2: unexpected continue statement\n"
    );
}
