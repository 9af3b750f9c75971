use std::fs;
use std::path::Path;
use std::process::Command;

use chrono::Datelike;
use tempfile::TempDir;
use verman::services::git::{GitClient, GitError};

/// Integration tests for git repository queries
/// Each test builds a scratch repository with two tagged commits

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git binary is available");
    assert!(status.success(), "git {:?} failed", args);
}

fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.name", "Test Author"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "tag.gpgsign", "false"]);

    fs::write(dir.join("README"), "first\n").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "Initial commit"]);
    git(dir, &["tag", "1.0.0-rel.0"]);

    fs::write(dir.join("README"), "second\n").unwrap();
    git(dir, &["add", "."]);
    git(
        dir,
        &["commit", "-m", "Add the second revision\n\nTouches the README."],
    );
    git(dir, &["tag", "1.0.1-rc.1"]);

    temp_dir
}

#[tokio::test]
async fn test_current_and_previous_tag() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    assert_eq!(client.current_tag().await.unwrap(), "1.0.1-rc.1");
    assert_eq!(client.previous_tag().await.unwrap(), "1.0.0-rel.0");
}

#[tokio::test]
async fn test_current_and_previous_hash() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    let current = client.current_hash().await.unwrap();
    let previous = client.previous_hash().await.unwrap();

    assert_eq!(current.len(), 40);
    assert!(current.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(previous.len(), 40);
    assert_ne!(current, previous);
}

#[tokio::test]
async fn test_commits_between_head_and_parent() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    let commits = client.commits_between("HEAD", "HEAD~1").await.unwrap();
    assert_eq!(commits.len(), 1);

    let commit = &commits[0];
    assert_eq!(commit.hash, client.current_hash().await.unwrap());
    assert_eq!(commit.author.name, "Test Author");
    assert_eq!(commit.author.email, "test@example.com");
    assert_eq!(commit.title, "Add the second revision");
    assert_eq!(commit.message, "Touches the README.");
    assert!(commit.date.year() >= 2020);
}

#[tokio::test]
async fn test_commits_between_accepts_tags() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    let commits = client
        .commits_between("1.0.1-rc.1", "1.0.0-rel.0")
        .await
        .unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].title, "Add the second revision");
}

#[tokio::test]
async fn test_commits_between_identical_revisions_is_empty() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    let commits = client.commits_between("HEAD", "HEAD").await.unwrap();
    assert!(commits.is_empty());
}

#[tokio::test]
async fn test_tag_query_fails_without_tags() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.name", "Test Author"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    fs::write(dir.join("README"), "only\n").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "Initial commit"]);

    let client = GitClient::with_repo_dir(dir);
    let err = client.current_tag().await.unwrap_err();
    match err {
        GitError::CommandFailed { command, status, .. } => {
            assert!(command.starts_with("describe"));
            assert_ne!(status, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_push_tags_without_remote_fails() {
    let repo = setup_repo();
    let client = GitClient::with_repo_dir(repo.path());

    let err = client.push_tags().await.unwrap_err();
    match err {
        GitError::CommandFailed { command, stderr, .. } => {
            assert!(command.starts_with("push"));
            assert!(!stderr.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
