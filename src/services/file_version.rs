//! Embedded binary version probe.
//!
//! Windows executables carry a version resource whose fixed part packs four
//! 16-bit version components into two 32-bit words (major.minor in the most
//! significant word, build.revision in the least significant one). The record
//! starts with a fixed signature, which lets us read the version of a game
//! binary from the raw file bytes without loading it as a module - the same
//! record the platform version APIs would return, minus the platform.
//!
//! Every failure mode is a typed, non-fatal error; callers are expected to
//! degrade to a safe default rather than propagate.

use std::fmt;
use std::fs;

use camino::Utf8Path;
use thiserror::Error;

/// Signature opening a fixed-version record.
const FIXED_VERSION_SIGNATURE: u32 = 0xFEEF_04BD;

/// Fixed-version records carry a structure version with a zero low word;
/// anything else is a stray byte pattern, not a version record.
const STRUC_VERSION_LOW_MASK: u32 = 0x0000_FFFF;

/// The two packed version words of a binary's fixed-version record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixedFileVersion {
    /// Major and minor components, packed high/low.
    pub ms: u32,
    /// Build and revision components, packed high/low.
    pub ls: u32,
}

impl FixedFileVersion {
    pub const fn new(ms: u32, ls: u32) -> Self {
        Self { ms, ls }
    }

    pub const fn major(self) -> u16 {
        (self.ms >> 16) as u16
    }

    pub const fn minor(self) -> u16 {
        (self.ms & 0xFFFF) as u16
    }

    pub const fn build(self) -> u16 {
        (self.ls >> 16) as u16
    }

    pub const fn revision(self) -> u16 {
        (self.ls & 0xFFFF) as u16
    }
}

impl fmt::Display for FixedFileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.build(),
            self.revision()
        )
    }
}

/// Errors that can occur while probing a binary's version record.
#[derive(Error, Debug)]
pub enum FileVersionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} carries no version record")]
    NoVersionInfo(String),

    #[error("version record in {0} is truncated")]
    Truncated(String),
}

/// Read the fixed-version record embedded in the binary at `path`.
///
/// Scans the file for the record signature and returns the two packed version
/// words. Fails when the file cannot be read, carries no record, or the
/// record is cut short by the end of the file. Never panics.
pub fn read_file_version(path: &Utf8Path) -> Result<FixedFileVersion, FileVersionError> {
    let bytes = fs::read(path).map_err(|source| FileVersionError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_fixed_version(&bytes, path)
}

fn parse_fixed_version(
    bytes: &[u8],
    path: &Utf8Path,
) -> Result<FixedFileVersion, FileVersionError> {
    // Record layout from the signature: signature, structure version,
    // version-MS, version-LS. 16 bytes minimum.
    let Some(scan_end) = bytes.len().checked_sub(4) else {
        return Err(FileVersionError::NoVersionInfo(path.to_string()));
    };

    for offset in 0..=scan_end {
        if le_u32(bytes, offset) != FIXED_VERSION_SIGNATURE {
            continue;
        }
        if offset + 16 > bytes.len() {
            return Err(FileVersionError::Truncated(path.to_string()));
        }
        if le_u32(bytes, offset + 4) & STRUC_VERSION_LOW_MASK != 0 {
            continue;
        }
        return Ok(FixedFileVersion::new(
            le_u32(bytes, offset + 8),
            le_u32(bytes, offset + 12),
        ));
    }

    Err(FileVersionError::NoVersionInfo(path.to_string()))
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
