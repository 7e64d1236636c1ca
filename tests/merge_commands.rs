use crate::common::command::{commit_file, init_repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

/// `feature` is one commit ahead of `master`; the current branch is `master`
fn feature_ahead(dir: &std::path::Path) -> String {
    run_vcs_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_vcs_command(dir, &["switch", "feature"])
        .assert()
        .success();
    commit_file(dir, "1.txt", "feature content", "feature work");
    let tip = common::head(dir);
    run_vcs_command(dir, &["switch", "master"])
        .assert()
        .success();
    tip
}

#[rstest]
fn merge_fast_forwards_to_the_other_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let feature = feature_ahead(dir);

    run_vcs_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fast-forward"));

    assert_eq!(common::head(dir), feature);
    assert_eq!(common::branch_tip(dir, "master"), feature);
    assert_eq!(
        common::read_repository_file(dir, "CURRENT_BRANCH"),
        "master"
    );
}

#[rstest]
fn merge_of_the_same_commit_is_up_to_date(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = common::head(dir);
    run_vcs_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_vcs_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Already up to date.\n");

    assert_eq!(common::head(dir), head);
}

#[rstest]
fn merge_of_divergent_history_overwrites_without_conflict(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let feature = feature_ahead(dir);
    commit_file(dir, "1.txt", "master content", "master work");
    let master = common::head(dir);

    run_vcs_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 commit(s) no longer on 'master'"))
        .stderr(predicate::str::contains("discarded divergent history"));

    assert_eq!(common::head(dir), feature);
    assert_eq!(common::branch_tip(dir, "master"), feature);
    assert!(dir.join(".vcs").join("objects").join(&master).is_file());
    run_vcs_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("master work").not())
        .stdout(predicate::str::contains("feature work"));
}

#[rstest]
fn merge_of_an_unknown_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = common::head(dir);

    run_vcs_command(dir, &["merge", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("branch 'nope' not found"));

    assert_eq!(common::head(dir), head);
}

#[rstest]
fn mark_conflicts_wraps_files_in_markers(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));

    run_vcs_command(dir, &["mark-conflicts", "--branch", "feature", "1.txt", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1.txt\n  ghost.txt\n"));

    assert_eq!(
        std::fs::read_to_string(dir.join("1.txt")).unwrap(),
        "<<<<<<< HEAD\none\n=======\none\n>>>>>>> feature\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("ghost.txt")).unwrap(),
        "<<<<<<< HEAD\n\n=======\n\n>>>>>>> feature\n"
    );
}

#[rstest]
fn mark_conflicts_without_paths(init_repository_dir: TempDir) {
    run_vcs_command(init_repository_dir.path(), &["mark-conflicts"])
        .assert()
        .success()
        .stdout("No merge conflicts.\n");
}

#[rstest]
fn merge_from_a_detached_head_warns_about_dropped_branch_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let base = common::head(dir);
    let feature = feature_ahead(dir);
    commit_file(dir, "1.txt", "master content", "master work");

    run_vcs_command(dir, &["checkout", &base])
        .assert()
        .success();

    run_vcs_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 commit(s) no longer on 'master'"))
        .stderr(predicate::str::contains("discarded divergent history"));

    assert_eq!(common::branch_tip(dir, "master"), feature);
}

#[rstest]
fn merge_with_a_corrupt_branch_pointer_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = common::head(dir);
    run_vcs_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.join(".vcs").join("branches").join("master"),
        "not a hash".to_string(),
    ));

    run_vcs_command(dir, &["merge", "feature"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid object id"));

    assert_eq!(common::head(dir), head);
}
