use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A commit author as recorded in a repository's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The author's name
    pub name: String,
    /// The author's email address
    pub email: String,
}

impl Author {
    /// Create a new author record
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// A single entry of a repository's commit history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash
    pub hash: String,
    /// Who authored the change
    pub author: Author,
    /// Author timestamp, keeping the author's UTC offset
    pub date: DateTime<FixedOffset>,
    /// First line of the commit message
    pub title: String,
    /// Remaining message body, empty when the commit has none
    pub message: String,
}

impl Commit {
    /// Create a new commit record
    pub fn new(
        hash: String,
        author: Author,
        date: DateTime<FixedOffset>,
        title: String,
        message: String,
    ) -> Self {
        Self {
            hash,
            author,
            date,
            title,
            message,
        }
    }
}
