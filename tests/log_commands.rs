use crate::common::command::{commit_file, init_repository_dir, repository_dir, run_vcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

fn oneline_log(dir: &std::path::Path) -> Vec<String> {
    let output = run_vcs_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8_lossy(&output)
        .lines()
        .map(str::to_string)
        .collect()
}

#[rstest]
fn log_of_an_empty_repository_prints_nothing(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_vcs_command(dir, &["init"]).assert().success();

    run_vcs_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn log_lists_commits_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for index in 1..=3 {
        commit_file(dir, "1.txt", &format!("v{index}"), &format!("change {index}"));
    }

    let messages = oneline_log(dir)
        .iter()
        .map(|line| line.splitn(2, ' ').nth(1).unwrap_or_default().to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        messages,
        vec![
            "(HEAD -> master) change 3",
            "change 2",
            "change 1",
            "Initial commit"
        ]
    );
}

#[rstest]
fn log_shows_the_medium_format(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = common::head(dir);

    run_vcs_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "commit {head} (HEAD -> master)\nDate:   {}\n\n    Initial commit\n\n    Files: 1.txt a/2.txt a/b/3.txt\n\n",
            common::COMMIT_DATE
        )));
}

#[rstest]
fn log_decorates_every_branch_pointing_at_a_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_vcs_command(dir, &["branch", "feature"])
        .assert()
        .success();

    let log = oneline_log(dir);

    assert_eq!(log.len(), 1);
    assert!(log[0].contains("(HEAD -> master, feature) Initial commit"));
}

#[rstest]
fn log_starts_from_a_checked_out_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = common::head(dir);
    commit_file(dir, "1.txt", "changed", "second");

    run_vcs_command(dir, &["checkout", &first])
        .assert()
        .success();

    let log = oneline_log(dir);
    assert_eq!(log.len(), 1);
    assert!(log[0].ends_with("(HEAD) Initial commit"));
}
