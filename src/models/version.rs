use std::fmt;

use thiserror::Error;

/// Enumeration of the release lifecycle stages a build can be in.
///
/// Each stage is backed by a small integer code that appears verbatim in
/// generated version artifacts. The backing storage is pinned to one byte
/// with `repr(u8)`; [`ReleaseStage::MaxSentinel`] marks the reserved upper
/// bound of that code space and never denotes a real stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ReleaseStage {
    /// Ongoing development build
    Development = 0,
    /// Final release build
    Release = 1,
    /// Release candidate build
    ReleaseCandidate = 2,
    /// Alpha test build
    Alpha = 3,
    /// Beta test build
    Beta = 4,
    /// Reserved upper-bound code, not a real stage
    MaxSentinel = 255,
}

impl ReleaseStage {
    /// Returns the integer code backing this stage
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Builds a stage from its integer code.
    ///
    /// Only the codes of the five named stages (0 through 4) are accepted;
    /// everything else, including the reserved sentinel code 255, is an
    /// [`VersionError::InvalidReleaseStage`].
    pub fn from_code(code: u8) -> Result<Self, VersionError> {
        match code {
            0 => Ok(ReleaseStage::Development),
            1 => Ok(ReleaseStage::Release),
            2 => Ok(ReleaseStage::ReleaseCandidate),
            3 => Ok(ReleaseStage::Alpha),
            4 => Ok(ReleaseStage::Beta),
            other => Err(VersionError::InvalidReleaseStage(other)),
        }
    }

    /// Returns the short stage name used in version tags
    pub const fn name(self) -> &'static str {
        match self {
            ReleaseStage::Development => "dev",
            ReleaseStage::Release => "rel",
            ReleaseStage::ReleaseCandidate => "rc",
            ReleaseStage::Alpha => "alpha",
            ReleaseStage::Beta => "beta",
            ReleaseStage::MaxSentinel => "max",
        }
    }

    /// Whether this is the reserved sentinel code rather than a real stage
    pub const fn is_sentinel(self) -> bool {
        matches!(self, ReleaseStage::MaxSentinel)
    }

    /// Returns all meaningful stages, excluding the sentinel
    pub fn all() -> &'static [ReleaseStage] {
        &[
            ReleaseStage::Development,
            ReleaseStage::Release,
            ReleaseStage::ReleaseCandidate,
            ReleaseStage::Alpha,
            ReleaseStage::Beta,
        ]
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A project version as encoded from a version control tag.
///
/// Has the format `[major].[minor].[bug]-[stage].[stage revision]`, e.g.
/// `1.2.1-rc.3` is major 1, minor 2, bug 1, release candidate revision 3.
///
/// The record is immutable after construction, occupies exactly five bytes,
/// and compares in field order with stages ordered by their integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u8,
    minor: u8,
    bug: u8,
    stage: ReleaseStage,
    stage_rev: u8,
}

impl Version {
    /// Create a new Version from its five fields.
    ///
    /// The reserved [`ReleaseStage::MaxSentinel`] stage is rejected: a real
    /// version always carries one of the five named stages.
    pub fn new(
        major: u8,
        minor: u8,
        bug: u8,
        stage: ReleaseStage,
        stage_rev: u8,
    ) -> Result<Self, VersionError> {
        if stage.is_sentinel() {
            return Err(VersionError::InvalidReleaseStage(stage.code()));
        }
        Ok(Self {
            major,
            minor,
            bug,
            stage,
            stage_rev,
        })
    }

    /// Create a new Version from raw field codes, as embedded in generated
    /// version artifacts
    pub fn from_codes(
        major: u8,
        minor: u8,
        bug: u8,
        stage_code: u8,
        stage_rev: u8,
    ) -> Result<Self, VersionError> {
        let stage = ReleaseStage::from_code(stage_code)?;
        Self::new(major, minor, bug, stage, stage_rev)
    }

    /// The major version number
    pub const fn major(&self) -> u8 {
        self.major
    }

    /// The minor version number
    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// The bug fix version number
    pub const fn bug(&self) -> u8 {
        self.bug
    }

    /// The release stage
    pub const fn stage(&self) -> ReleaseStage {
        self.stage
    }

    /// The revision within the release stage
    pub const fn stage_rev(&self) -> u8 {
        self.stage_rev
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}.{}",
            self.major,
            self.minor,
            self.bug,
            self.stage.name(),
            self.stage_rev
        )
    }
}

/// Errors raised when constructing version records
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionError {
    /// The integer code does not name one of the five release stages
    #[error("Invalid release stage code: {0}")]
    InvalidReleaseStage(u8),
}
