// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;
use std::sync::Arc;

/// The host environment's three-valued severity enumeration.
///
/// The mapping from the pipeline's six [`Level`](crate::Level)s onto these
/// three values is owned by the sink, not by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostLevel {
    /// Ordinary output (Verbose, Debug and Information map here).
    Log,
    /// Warning output.
    Warning,
    /// Error output (Error and Fatal map here).
    Error,
}

/// An opaque reference to a host-environment entity.
///
/// The sink never inspects these; it only threads them from the
/// [`ContextRegistry`](crate::ContextRegistry) into the host logger call so
/// the host can offer inspection or navigation for the message. Lifetime of
/// the underlying entity is the host's problem; the registry only holds a
/// transient, revocable association.
pub trait HostObject: Debug + Send + Sync {}

/// The host environment's native logger capability.
///
/// Two overloads, matching native logging facilities that accept an
/// optional context object alongside the message. Both are synchronous and
/// one-shot; if the host logger fails it may panic or swallow, the sink
/// adds no retries on top.
pub trait HostLogger: Debug + Send + Sync {
    /// Writes a message with no attached context object.
    fn log(&self, level: HostLevel, message: &str);

    /// Writes a message with an attached context object.
    fn log_with_context(&self, level: HostLevel, message: &str, context: &Arc<dyn HostObject>);
}

/*
Boilerplate notes.

# HostLogger

Same reasoning as any logger trait: Clone is out (a host logger is a
capability, not data), equality is unclear between capabilities, ordering
and hashing make no sense. Send + Sync are required because events may be
delivered from any thread of the host application.

# HostObject

Deliberately a bare marker over Debug + Send + Sync. Anything more would
couple the sink to one particular host; downcasting, when a host needs it,
is the host's business on its own concrete types.
*/
