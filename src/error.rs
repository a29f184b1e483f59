// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;
use thiserror::Error;

/**
Errors surfaced while adapting a log event for the host logger.

The only contract violation in this system is a severity value outside the
six recognized levels; everything else (a missing context key, a malformed
context value, a registry miss) degrades to emitting without a context
object and is not an error.
*/
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EmitError {
    /// A raw severity value did not name one of the six recognized levels.
    ///
    /// Silently misclassifying severity would defeat the purpose of the
    /// sink, so this is rejected rather than mapped to a guess. The event
    /// carrying it is dropped; registry state and subsequent events are
    /// unaffected.
    #[error("unrecognized severity level {0}")]
    UnknownLevel(u8),

    /// The injected formatter failed while rendering the event's message
    /// text. No host logger call is made for the event.
    #[error("formatter failed to render log event")]
    Format(#[from] fmt::Error),
}

/*
Boilerplate notes.

# EmitError

PartialEq/Eq are implemented so tests can assert on exact error values.
Clone would be cheap but nothing needs to duplicate an error, so it's out.
Hash/Ord make no sense for an error taxonomy.
From<fmt::Error> comes from thiserror so `?` works at the formatter seam.
*/
