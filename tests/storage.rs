//! # Storage Integration Tests
//!
//! End-to-end invariants of the repository store: conflict guards,
//! stable filenames, and ID allocation against the live filesystem.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{create_raw_issue, setup_test_env};
use git_issue::{Error, Repository, Status};

#[test]
fn test_move_with_wrong_source_is_a_conflict() {
    let env = setup_test_env();
    create_raw_issue(&env, "closed", "001", "Already closed");

    let repo = Repository::at(env.issues_path());
    let err = repo
        .move_issue("001", Status::Open, Status::Closed)
        .expect_err("move from wrong source should fail");

    assert!(matches!(
        err,
        Error::MoveConflict {
            actual: Status::Closed,
            expected: Status::Open,
            ..
        }
    ));

    // The file never moved
    assert_eq!(env.find_issue("001").map(|(_, s)| s), Some("closed"));
}

#[test]
fn test_save_into_wrong_status_is_a_conflict() {
    let env = setup_test_env();
    create_raw_issue(&env, "open", "001", "Open issue");

    let repo = Repository::at(env.issues_path());
    let (issue, _) = repo.load_issue("001").expect("load issue");

    let err = repo
        .save_issue(&issue, Status::Closed)
        .expect_err("saving into the other directory should fail");

    assert!(matches!(
        err,
        Error::SaveConflict {
            actual: Status::Open,
            requested: Status::Closed,
            ..
        }
    ));
    assert!(env.list_closed_files().is_empty());
}

#[test]
fn test_save_reuses_existing_filename() {
    let env = setup_test_env();
    create_raw_issue(&env, "open", "001", "Original title");

    let repo = Repository::at(env.issues_path());
    let (mut issue, status) = repo.load_issue("001").expect("load issue");
    issue.title = "Renamed title".to_string();

    let path = repo.save_issue(&issue, status).expect("save should succeed");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("001-original-title.md")
    );
    assert_eq!(env.list_open_files().len(), 1);
}

#[test]
fn test_next_id_skips_files_in_both_directories() {
    let env = setup_test_env();
    create_raw_issue(&env, "open", "001", "First");
    create_raw_issue(&env, "closed", "002", "Second");
    // Counter still says 1; allocation must probe past both files
    std::fs::write(env.counter_path(), "1\n").expect("write counter");

    let repo = Repository::at(env.issues_path());
    let id = repo.next_id().expect("next_id should succeed");

    assert_eq!(id, 3);
    assert_eq!(env.counter_value(), "4\n");
}

#[test]
fn test_issue_with_empty_slug_is_findable_and_movable() {
    let env = setup_test_env();
    env.write_issue(
        "open",
        "001-.md",
        &common::make_issue_content("001", "!!!", "", &[], "Punctuation-only title."),
    );

    let repo = Repository::at(env.issues_path());
    let (issue, status) = repo.load_issue("001").expect("load issue");
    assert_eq!(issue.id(), "001");
    assert_eq!(status, Status::Open);

    let (path, _) = repo
        .move_issue("001", Status::Open, Status::Closed)
        .expect("move should succeed");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("001-.md"));
}

#[test]
fn test_keep_files_are_not_issues() {
    let env = setup_test_env();

    let repo = Repository::at(env.issues_path());
    assert!(repo.list_issues(Status::Open).expect("list").is_empty());
    assert!(repo.find_issue_file("").is_err());

    // .keep exists but is never picked up
    assert!(env.open_path().join(".keep").is_file());
}

#[test]
fn test_load_reports_unparseable_file() {
    let env = setup_test_env();
    env.write_issue("open", "001-broken.md", "not a record");

    let repo = Repository::at(env.issues_path());
    let err = repo.load_issue("001").expect_err("load should fail");
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_delete_removes_file() {
    let env = setup_test_env();
    create_raw_issue(&env, "open", "001", "Short lived");

    let repo = Repository::at(env.issues_path());
    repo.delete_issue("001").expect("delete should succeed");

    assert!(env.list_open_files().is_empty());
    assert!(matches!(
        repo.load_issue("001").expect_err("gone"),
        Error::NotFound(_)
    ));
}
