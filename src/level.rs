// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::EmitError;
use serde::{Deserialize, Serialize};

/// Severity of a log event, as defined by the upstream pipeline's contract.
///
/// Six values, strictly ordered from least to most severe. The sink does not
/// filter on level (that happens upstream); it only maps the level to the
/// host's three-valued [`HostLevel`](crate::HostLevel) at emission time.
///
/// On the wire a level is its raw `u8` discriminant. Decoding goes through
/// [`Level::from_raw`], so a value outside `0..=5` is rejected before an
/// event carrying it can reach a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Level {
    /// Noisiest diagnostic detail.
    Verbose = 0,
    /// Internal debugging output.
    Debug = 1,
    /// Ordinary informational messages.
    Information = 2,
    /// Suspicious condition.
    Warning = 3,
    /// Runtime error.
    Error = 4,
    /// The application is about to terminate.
    Fatal = 5,
}

impl Level {
    /// Decodes a raw wire value into a level.
    ///
    /// This is the only entry point for untyped severity values. Anything
    /// outside the six recognized levels is an input-contract violation and
    /// fails loudly with [`EmitError::UnknownLevel`] rather than being
    /// guessed at.
    pub fn from_raw(raw: u8) -> Result<Self, EmitError> {
        match raw {
            0 => Ok(Level::Verbose),
            1 => Ok(Level::Debug),
            2 => Ok(Level::Information),
            3 => Ok(Level::Warning),
            4 => Ok(Level::Error),
            5 => Ok(Level::Fatal),
            unknown => Err(EmitError::UnknownLevel(unknown)),
        }
    }

    /// The raw wire value of this level.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = EmitError;

    fn try_from(raw: u8) -> Result<Self, EmitError> {
        Level::from_raw(raw)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.raw()
    }
}
