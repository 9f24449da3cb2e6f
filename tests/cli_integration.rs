//! CLI integration tests for vtags
//!
//! These tests drive the built binary end to end: argument handling, exit
//! codes, traversal with exclusions, and output formats.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the vtags binary
fn vtags_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("vtags"))
}

/// Writes a file below `root`, creating parent directories
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const COMPONENT: &str = "export default {\n  props: ['value'],\n  methods: {\n    save() {\n    }\n  }\n}\n";

// =============================================================================
// Argument Handling
// =============================================================================

#[test]
fn test_help_exits_zero_with_usage() {
    vtags_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: vtags [options] [source_file(s)]"))
        .stdout(predicate::str::contains("--exclude"));
}

#[test]
fn test_short_help_exits_zero() {
    vtags_cmd().arg("-h").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_exits_zero() {
    vtags_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vtags"));
}

#[test]
fn test_no_sources_exits_two() {
    vtags_cmd()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no files specified. try \"vtags --help\""));
}

#[test]
fn test_only_flags_is_still_no_sources() {
    vtags_cmd()
        .args(["-R", "-es6", "--exclude=dist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no files specified"));
}

#[test]
fn test_missing_source_exits_two() {
    let dir = TempDir::new().unwrap();

    vtags_cmd()
        .current_dir(dir.path())
        .arg("nope.vue")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open input file \"nope.vue\""));
}

#[test]
fn test_unknown_option_exits_two() {
    vtags_cmd().arg("--frobnicate").assert().code(2);
}

#[test]
fn test_language_switches_are_not_exclusions() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "s5/App.vue", COMPONENT);

    // `-es5` must not be read as `-e s5`, which would exclude "s5/..."
    vtags_cmd()
        .current_dir(dir.path())
        .args(["-es5", "+es5", "-es6", "+es6", "s5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export\ts5/App.vue"));
}

// =============================================================================
// Traversal and Exclusion
// =============================================================================

#[test]
fn test_directory_is_walked_recursively() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project/App.vue", COMPONENT);
    write(dir.path(), "project/components/deep/Button.vue", COMPONENT);
    write(dir.path(), "project/main.js", "export default {\n");

    let assert = vtags_cmd()
        .current_dir(dir.path())
        .args(["-R", "project"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("project/App.vue"));
    assert!(stdout.contains("project/components/deep/Button.vue"));
    assert!(!stdout.contains("main.js"));
}

#[test]
fn test_exclude_skips_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project/skip/a.vue", COMPONENT);
    write(dir.path(), "project/keep/b.vue", COMPONENT);

    vtags_cmd()
        .current_dir(dir.path())
        .args(["-R", "--exclude=project/skip", "project/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.vue"))
        .stdout(predicate::str::contains("a.vue").not());
}

#[test]
fn test_short_exclude_alias() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project/skip/a.vue", COMPONENT);
    write(dir.path(), "project/keep/b.vue", COMPONENT);

    vtags_cmd()
        .current_dir(dir.path())
        .args(["-eproject/skip", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.vue"))
        .stdout(predicate::str::contains("a.vue").not());
}

#[test]
fn test_current_dir_root_yields_clean_paths_for_exclusion() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.vue", "export default {\n");
    write(dir.path(), "node_modules/lib/Dep.vue", "export default {\n");

    vtags_cmd()
        .current_dir(dir.path())
        .args(["-R", "--exclude=node_modules", "."])
        .assert()
        .success()
        .stdout("export\tApp.vue\t/^export default {$/;\"\tv\n");
}

#[test]
fn test_dot_slash_root_entries_have_no_prefix() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/components/Card.vue", "export default {\n");

    vtags_cmd()
        .current_dir(dir.path())
        .arg("./src")
        .assert()
        .success()
        .stdout("export\tsrc/components/Card.vue\t/^export default {$/;\"\tv\n");
}

#[test]
fn test_bare_exclude_switch_excludes_everything() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.vue", COMPONENT);

    // `-e` is an empty pattern; `App.vue` stays a source and is excluded
    vtags_cmd()
        .current_dir(dir.path())
        .args(["-e", "App.vue"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_exclude_is_anchored_at_path_start() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project/skip/a.vue", COMPONENT);

    // "skip" only matches paths that begin with it
    vtags_cmd()
        .current_dir(dir.path())
        .args(["--exclude=skip", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project/skip/a.vue"));
}

#[test]
fn test_invalid_exclude_pattern_exits_two() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.vue", COMPONENT);

    vtags_cmd()
        .current_dir(dir.path())
        .args(["--exclude=(", "App.vue"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid exclude pattern"));
}

#[test]
fn test_non_vue_file_yields_empty_listing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.js", "export default {\n");

    vtags_cmd()
        .current_dir(dir.path())
        .arg("main.js")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_multiple_roots_keep_argument_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b/B.vue", "export default {\n");
    write(dir.path(), "a/A.vue", "export default {\n");

    vtags_cmd()
        .current_dir(dir.path())
        .args(["b/B.vue", "a/A.vue"])
        .assert()
        .success()
        .stdout(
            "export\tb/B.vue\t/^export default {$/;\"\tv\n\
             export\ta/A.vue\t/^export default {$/;\"\tv\n",
        );
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn test_non_utf8_line_is_written_verbatim() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Cafe.vue"), b"  props: 'caf\xe9',\n").unwrap();

    vtags_cmd()
        .current_dir(dir.path())
        .arg("Cafe.vue")
        .assert()
        .success()
        .stdout(&b"props\tCafe.vue\t/^  props: 'caf\xe9',$/;\"\tv\n"[..]);
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.vue", COMPONENT);

    let assert = vtags_cmd()
        .current_dir(dir.path())
        .args(["--format", "json", "App.vue"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tags = json.as_array().unwrap();

    let keywords: Vec<_> = tags.iter().map(|t| t["keyword"].as_str().unwrap()).collect();
    assert_eq!(keywords, vec!["export", "props", "function"]);
    assert_eq!(tags[2]["pattern"], "/^    save() {$/;\"");
    assert_eq!(tags[2]["kind"], "f");
    assert_eq!(tags[2]["file"], "App.vue");
}

#[test]
fn test_verbose_writes_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.vue", "export default {\n");

    vtags_cmd()
        .current_dir(dir.path())
        .args(["--verbose", "App.vue"])
        .assert()
        .success()
        .stdout("export\tApp.vue\t/^export default {$/;\"\tv\n")
        .stderr(predicate::str::contains("[verbose:scan] App.vue: 1 tags"));
}
