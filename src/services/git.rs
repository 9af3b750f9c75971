// Git repository queries for version tags and commit history

use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, error};

use crate::models::commit::{Author, Commit};
use crate::utils::dates;

/// Errors that can occur while running or interpreting git commands
#[derive(Error, Debug)]
pub enum GitError {
    /// Spawning the git binary failed
    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// git exited with a non-zero status
    #[error("Command 'git {command}' failed with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// git produced output that was not valid UTF-8
    #[error("Command 'git {0}' produced non UTF-8 output")]
    InvalidOutput(String),

    /// Commit log text did not have the expected shape
    #[error("Failed to parse commit log: {0}")]
    ParseError(String),
}

/// Client for querying and updating a project's git repository.
///
/// Tags are expected to carry the project version, so the newest reachable
/// tag is the current version and the newest tag reachable from the parent
/// commit is the previous one.
#[derive(Debug, Clone)]
pub struct GitClient {
    repo_dir: PathBuf,
}

impl GitClient {
    /// Create a client operating on the working directory
    pub fn new() -> Self {
        Self {
            repo_dir: PathBuf::from("."),
        }
    }

    /// Create a client operating on a specific repository directory
    pub fn with_repo_dir<P: Into<PathBuf>>(repo_dir: P) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// The repository directory this client runs commands in
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Newest tag reachable from the current commit
    pub async fn current_tag(&self) -> Result<String, GitError> {
        self.run(&["describe", "HEAD", "--abbrev=0", "--tags"]).await
    }

    /// Newest tag reachable from the previous commit
    pub async fn previous_tag(&self) -> Result<String, GitError> {
        self.run(&["describe", "HEAD~1", "--abbrev=0", "--tags"])
            .await
    }

    /// Hash of the current commit
    pub async fn current_hash(&self) -> Result<String, GitError> {
        self.run(&["rev-parse", "--verify", "HEAD"]).await
    }

    /// Hash of the previous commit
    pub async fn previous_hash(&self) -> Result<String, GitError> {
        self.run(&["rev-parse", "--verify", "HEAD~1"]).await
    }

    /// Commits that differ between two revisions, newest first.
    ///
    /// Revisions may be hashes, tags or symbolic names like `HEAD~1`.
    /// Identical revisions yield an empty list.
    pub async fn commits_between(&self, newer: &str, older: &str) -> Result<Vec<Commit>, GitError> {
        let range = format!("{}...{}", newer, older);
        let log = self.run(&["log", range.as_str()]).await?;
        parse_commit_log(&log)
    }

    /// Push the repository's tags to the origin remote
    pub async fn push_tags(&self) -> Result<(), GitError> {
        self.run(&["push", "origin", "--tags"]).await?;
        Ok(())
    }

    /// Run a git command in the repository directory and return its stdout
    /// with trailing whitespace removed
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .await?;

        if !output.status.success() {
            let command = args.join(" ");
            let status = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("git {} failed with status {}: {}", command, status, stderr);
            return Err(GitError::CommandFailed {
                command,
                status,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| GitError::InvalidOutput(args.join(" ")))?;
        Ok(stdout.trim_end().to_string())
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the human-readable output of `git log` into commit records.
///
/// Each entry has a `commit` header, optional `Merge:` line, `Author:` and
/// `Date:` headers, then an indented message whose first line becomes the
/// title and whose remaining lines become the body.
pub fn parse_commit_log(log: &str) -> Result<Vec<Commit>, GitError> {
    let commit_re = compile(r"^commit ([0-9a-f]+)")?;
    let author_re = compile(r"^Author: (.*) <(.*)>$")?;
    let date_re = compile(r"^Date: +(.*)$")?;

    let mut commits = Vec::new();
    let mut lines = log.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(caps) = commit_re.captures(line) else {
            continue;
        };
        let hash = caps[1].to_string();

        // Header lines run until the blank separator before the message
        let mut author = None;
        let mut date = None;
        while let Some(&header) = lines.peek() {
            if header.is_empty() {
                lines.next();
                break;
            }
            if let Some(caps) = author_re.captures(header) {
                author = Some(Author::new(
                    caps[1].trim().to_string(),
                    caps[2].to_string(),
                ));
            } else if let Some(caps) = date_re.captures(header) {
                let parsed = dates::parse_git_date(caps[1].trim()).map_err(|e| {
                    GitError::ParseError(format!("Bad date '{}' in commit {}: {}", &caps[1], hash, e))
                })?;
                date = Some(parsed);
            }
            lines.next();
        }

        let author = author
            .ok_or_else(|| GitError::ParseError(format!("Commit {} has no author header", hash)))?;
        let date = date
            .ok_or_else(|| GitError::ParseError(format!("Commit {} has no date header", hash)))?;

        // Indented message block, up to the next commit header
        let mut message_lines: Vec<&str> = Vec::new();
        while let Some(&text) = lines.peek() {
            if commit_re.is_match(text) {
                break;
            }
            message_lines.push(text.trim());
            lines.next();
        }
        while message_lines.first().is_some_and(|text| text.is_empty()) {
            message_lines.remove(0);
        }
        while message_lines.last().is_some_and(|text| text.is_empty()) {
            message_lines.pop();
        }

        let title = message_lines.first().copied().unwrap_or_default().to_string();
        let message = if message_lines.len() > 1 {
            message_lines[1..].join("\n").trim().to_string()
        } else {
            String::new()
        };

        commits.push(Commit::new(hash, author, date, title, message));
    }

    Ok(commits)
}

fn compile(pattern: &str) -> Result<Regex, GitError> {
    Regex::new(pattern).map_err(|e| GitError::ParseError(e.to_string()))
}
