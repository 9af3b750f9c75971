// Common error types for verman

use std::error::Error;
use std::fmt;

use crate::models::version::VersionError;
use crate::services::git::GitError;

#[derive(Debug)]
pub enum VermanError {
    IoError(std::io::Error),
    ConfigError(String),
    GitError(GitError),
    VersionError(VersionError),
}

impl fmt::Display for VermanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VermanError::IoError(err) => write!(f, "IO error: {}", err),
            VermanError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            VermanError::GitError(err) => write!(f, "Git error: {}", err),
            VermanError::VersionError(err) => write!(f, "Version error: {}", err),
        }
    }
}

impl Error for VermanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VermanError::IoError(err) => Some(err),
            VermanError::GitError(err) => Some(err),
            VermanError::VersionError(err) => Some(err),
            VermanError::ConfigError(_) => None,
        }
    }
}

impl From<std::io::Error> for VermanError {
    fn from(err: std::io::Error) -> Self {
        VermanError::IoError(err)
    }
}

impl From<GitError> for VermanError {
    fn from(err: GitError) -> Self {
        VermanError::GitError(err)
    }
}

impl From<VersionError> for VermanError {
    fn from(err: VersionError) -> Self {
        VermanError::VersionError(err)
    }
}

pub type Result<T> = std::result::Result<T, VermanError>;
