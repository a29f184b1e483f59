// SPDX-License-Identifier: MIT OR Apache-2.0

//! The emit adapter: the sole integration point between the structured
//! logging pipeline and the host's native logger.
//!
//! For each event the sink renders the message text, maps the pipeline's
//! six-valued severity onto the host's three, resolves an optional context
//! object through the [`ContextRegistry`], and issues exactly one host
//! logger call. No batching, no buffering, no retries, no level filtering;
//! all of that belongs upstream or to the host.

use crate::context_registry::ContextRegistry;
use crate::debug_logger::DebugLogger;
use crate::error::EmitError;
use crate::event::LogEvent;
use crate::formatter::TextFormatter;
use crate::host_logger::{HostLevel, HostLogger, HostObject};
use crate::level::Level;
use std::fmt::Debug;
use std::sync::Arc;

/// Reserved property-bag key under which a context identifier travels.
///
/// This constant is the wire contract between application code that wants a
/// host object attached to a message and the sink that attaches it; it must
/// stay stable across versions. Application code registers the object in
/// the shared [`ContextRegistry`] and embeds the same identifier as an
/// integer property under this key.
pub const CONTEXT_ID_KEY: &str = "%HOST_CONTEXT_ID%";

/// A consumer of log events.
///
/// The single-method interface the upstream pipeline drives. Events are
/// processed strictly in the order delivered per calling thread.
pub trait LogEventSink: Debug + Send + Sync {
    /// Forwards one event to this sink's destination.
    fn emit(&self, event: &LogEvent) -> Result<(), EmitError>;
}

/**
A sink that forwards each log event to the host environment's native
logger.

Construction is builder-style: the formatter is required, everything else
has a default.

```rust
use hostsink::{ContextRegistry, HostLogSink, MessageTemplateFormatter};
use std::sync::Arc;

let registry = Arc::new(ContextRegistry::new());
let sink = HostLogSink::new(Box::new(MessageTemplateFormatter::new()))
    .with_registry(registry.clone())
    .with_context_resolution(true);
```

The sink holds no per-event state; it is safe to share across the host
application's threads, and its only synchronization is the registry's
internal lock.
*/
#[derive(Debug)]
pub struct HostLogSink {
    formatter: Box<dyn TextFormatter>,
    logger: Arc<dyn HostLogger>,
    registry: Arc<ContextRegistry>,
    context_resolution: bool,
}

impl HostLogSink {
    /// Creates a sink that renders events with `formatter` and writes to
    /// the default [`DebugLogger`], with context resolution enabled and a
    /// fresh private registry.
    pub fn new(formatter: Box<dyn TextFormatter>) -> Self {
        Self {
            formatter,
            logger: Arc::new(DebugLogger::new()),
            registry: Arc::new(ContextRegistry::new()),
            context_resolution: true,
        }
    }

    /// Replaces the host logger capability.
    pub fn with_logger(mut self, logger: Arc<dyn HostLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Shares a registry with the application code that registers context
    /// objects. Without this the sink's private registry is reachable only
    /// through [`registry`](Self::registry).
    pub fn with_registry(mut self, registry: Arc<ContextRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Turns context resolution on or off.
    ///
    /// Off means the sink never consults the registry and always emits
    /// without a context object, even when an event carries a matching
    /// identifier. Deployments where context attachment is meaningless
    /// (anything non-interactive) should disable it; the lookup would buy
    /// nothing. Registered entries are left untouched when disabled.
    pub fn with_context_resolution(mut self, enabled: bool) -> Self {
        self.context_resolution = enabled;
        self
    }

    /// The registry this sink consumes from.
    pub fn registry(&self) -> Arc<ContextRegistry> {
        self.registry.clone()
    }

    /// Resolves the event's context object, consuming the registry entry.
    ///
    /// Every miss along the way (resolution disabled, key absent, value not
    /// an integer scalar, no registry entry) is the default no-context
    /// path, not an error.
    fn resolve_context(&self, event: &LogEvent) -> Option<Arc<dyn HostObject>> {
        if !self.context_resolution {
            return None;
        }
        let id = event.property(CONTEXT_ID_KEY)?.as_integer()?;
        self.registry.take_if_present(id)
    }
}

/// Maps the pipeline's severity onto the host's. The table is exhaustive:
/// `Level` admits no value outside the six recognized levels, out-of-range
/// raw values having been rejected at [`Level::from_raw`].
fn host_level(level: Level) -> HostLevel {
    match level {
        Level::Verbose | Level::Debug | Level::Information => HostLevel::Log,
        Level::Warning => HostLevel::Warning,
        Level::Error | Level::Fatal => HostLevel::Error,
    }
}

impl LogEventSink for HostLogSink {
    /// Emits one event: render, trim, map the level, resolve context,
    /// exactly one host logger call.
    ///
    /// A formatter failure aborts this event before any host call and
    /// leaves the registry and subsequent events unaffected. A host logger
    /// failure, should the host panic, propagates unmodified.
    fn emit(&self, event: &LogEvent) -> Result<(), EmitError> {
        let mut buffer = String::new();
        self.formatter.format(event, &mut buffer)?;
        let message = buffer.trim();
        let level = host_level(event.level());
        match self.resolve_context(event) {
            Some(context) => self.logger.log_with_context(level, message, &context),
            None => self.logger.log(level, message),
        }
        Ok(())
    }
}
