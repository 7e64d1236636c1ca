use crate::common::command::{init_repository_dir, repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn print_nothing_when_no_files_are_changed(init_repository_dir: TempDir) {
    run_vcs_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("On branch master\n\nnothing to commit, working tree clean\n");
}

#[rstest]
fn status_of_an_empty_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_vcs_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("b.txt"), "b".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout("On branch master\n\nNo commits yet\n\nUntracked files:\n        a.txt\n        b.txt\n");
}

#[rstest]
fn report_staged_files_against_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_vcs_command(dir, &["add", "1.txt", "new.txt"])
        .assert()
        .success();

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes to be committed:"))
        .stdout(predicate::str::contains("modified:   1.txt"))
        .stdout(predicate::str::contains("new file:   new.txt"))
        .stdout(predicate::str::contains("Changes not staged").not());
}

#[rstest]
fn report_files_with_modified_contents(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "deux".to_string()));

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes not staged for commit:\n        modified:   a/2.txt\n",
        ))
        .stdout(predicate::str::contains("1.txt").not());
}

#[rstest]
fn print_nothing_if_a_file_is_rewritten_with_the_same_content(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("working tree clean"));
}

#[rstest]
fn report_deleted_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    delete_path(&dir.join("a"));

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "        deleted:    a/2.txt\n        deleted:    a/b/3.txt\n",
        ));
}

#[rstest]
fn list_untracked_files_inside_tracked_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("b").join("4.txt"), "four".to_string()));

    run_vcs_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Untracked files:\n        a/b/4.txt\n"));
}
