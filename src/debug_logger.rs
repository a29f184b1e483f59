// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::host_logger::{HostLevel, HostLogger, HostObject};
use std::sync::Arc;

/**
The default host logger: writes to stderr.

Used when a [`HostLogSink`](crate::HostLogSink) is constructed without an
explicit logger, the way a host environment's standard debug logger is the
fallback when nothing else is supplied.
 */
#[derive(Debug, Clone)]
pub struct DebugLogger {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for DebugLogger trait implementations:
//
// - Debug/Clone: Derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Hash: Implemented - consistent with Eq
// - Default: Implemented - convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: Automatic - zero-sized struct is always thread-safe

impl Copy for DebugLogger {}

impl PartialEq for DebugLogger {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for DebugLogger {}

impl std::hash::Hash for DebugLogger {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLogger {
    pub const fn new() -> Self {
        Self {}
    }

    fn label(level: HostLevel) -> &'static str {
        match level {
            HostLevel::Log => "LOG",
            HostLevel::Warning => "WARN",
            HostLevel::Error => "ERROR",
        }
    }
}

impl HostLogger for DebugLogger {
    fn log(&self, level: HostLevel, message: &str) {
        use std::io::Write;
        let mut lock = std::io::stderr().lock();
        writeln!(lock, "[{}] {}", Self::label(level), message).expect("Can't log to stderr");
    }

    fn log_with_context(&self, level: HostLevel, message: &str, context: &Arc<dyn HostObject>) {
        use std::io::Write;
        let mut lock = std::io::stderr().lock();
        writeln!(
            lock,
            "[{}] {} (context: {:?})",
            Self::label(level),
            message,
            context
        )
        .expect("Can't log to stderr");
    }
}
