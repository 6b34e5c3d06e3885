//! Edge case and error handling tests for overview


use harness::{TestRepo, run_overview};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_listed_as_file() {
    let repo = TestRepo::new();
    repo.add_file("target.js", "");
    symlink(repo.path().join("target.js"), repo.path().join("link-auth.js"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(
        stdout.contains("📄 link-auth.js → Google login/authentication"),
        "symlinked file should be classified: {}",
        stdout
    );
}

#[test]
fn test_symlink_to_directory_is_followed() {
    let repo = TestRepo::new();
    repo.add_file("realdir/calendar.js", "");
    symlink(repo.path().join("realdir"), repo.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("📁 linkdir/"), "link should look like a dir: {}", stdout);
    assert_eq!(stdout.matches("calendar.js").count(), 2);
}

#[test]
fn test_broken_symlink_is_listed_as_file() {
    let repo = TestRepo::new();
    repo.add_file("a.js", "");
    repo.add_file("z-last.js", "");
    symlink("nonexistent.js", repo.path().join("m-broken.js"))
        .expect("Failed to create broken symlink");

    let (stdout, stderr, success) = run_overview(repo.path(), &[]);
    assert!(success, "dangling link should not stop the run: {}", stderr);
    assert_eq!(
        stdout,
        "Project Overview\n\n\
         📄 a.js → Code file\n\
         📄 m-broken.js → Code file\n\
         📄 z-last.js → Code file\n"
    );
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
fn test_unreadable_directory_keeps_partial_output() {
    let repo = TestRepo::new();
    repo.add_file("a-first.js", "");
    let locked = repo.add_dir("b-locked");
    repo.add_file("b-locked/inner.js", "");
    repo.add_file("c-after.js", "");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything, in which case there is nothing to test
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_overview(repo.path(), &[]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!success);
    assert!(!stderr.is_empty());
    assert!(stdout.contains("📄 a-first.js"), "earlier lines stay: {}", stdout);
    assert!(stdout.contains("📁 b-locked/"));
    assert!(!stdout.contains("c-after.js"), "walk stops at the error: {}", stdout);
}

// ============================================================================
// Naming Edge Cases
// ============================================================================

#[test]
fn test_file_named_like_skipped_dir_is_listed() {
    let repo = TestRepo::new();
    repo.add_file("node_modules", "not a directory");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("📄 node_modules → Code file"), "{}", stdout);
}

#[test]
fn test_uppercase_names_are_classified_case_insensitively() {
    let repo = TestRepo::new();
    repo.add_file("README.md", "");
    repo.add_file("Schema.SQL", "");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("📄 README.md → Project documentation"));
    assert!(stdout.contains("📄 Schema.SQL → Database setup/queries"));
}

#[test]
fn test_index_ts_inside_pages_falls_through() {
    let repo = TestRepo::new();
    repo.add_file("pages/index.ts", "");
    repo.add_file("src/index.js", "");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("  📄 index.ts → Code file"), "{}", stdout);
    assert!(stdout.contains("  📄 index.js → Code file"), "{}", stdout);
}

#[test]
fn test_pages_directory_above_cwd_does_not_change_labels() {
    let repo = TestRepo::new();
    repo.add_file("pages/myproj/src/index.ts", "");
    repo.add_file("pages/myproj/src/index.js", "");
    let project = repo.path().join("pages").join("myproj");

    let (stdout, _stderr, success) = run_overview(&project, &[]);
    assert!(success);
    assert!(stdout.contains("  📄 index.ts → Main entry point"), "{}", stdout);
    assert!(stdout.contains("  📄 index.js → Code file"), "{}", stdout);
}

#[test]
fn test_unicode_file_names() {
    let repo = TestRepo::new();
    repo.add_file("日本語-test.js", "");
    repo.add_file("émoji-🦀.rs", "");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("📄 日本語-test.js → Testing script"));
    assert!(stdout.contains("📄 émoji-🦀.rs → Code file"));
}

#[test]
fn test_empty_subdirectories_show_header_only() {
    let repo = TestRepo::new();
    repo.add_dir("empty");
    repo.add_dir("holder/node_modules/pkg");

    let (stdout, _stderr, success) = run_overview(repo.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "Project Overview\n\n📁 empty/\n📁 holder/\n");
}
