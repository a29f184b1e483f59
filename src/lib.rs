//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# hostsink

hostsink is a logging-sink adapter: it receives structured log events from a
logging pipeline and forwards each one to a host engine's native logger.

# The problem

Host environments with an embedded scene or entity model (game engines,
editors, simulators) have their own logging facility, and that facility can
usually attach a *context object* to a message so clicking the log line
navigates to the entity that produced it. A structured logging pipeline
can't use that: its events are plain, serializable data and cannot carry a
live reference to a host object.

hostsink bridges the two with a small context-association protocol:

1. Application code picks a process-unique integer identifier and registers
   the host object under it in a shared [`ContextRegistry`].
2. The same identifier is embedded into the log event as an integer
   property under the reserved [`CONTEXT_ID_KEY`].
3. When the event reaches the sink, the sink consumes the registry entry
   and attaches the object to the native log call.

Lookup is consume-on-read: the registry holds only pending associations,
and an identifier cannot silently re-attach its object to an unrelated
later message.

# What the sink does per event

Render the message text through the injected formatter, trim it, map the
pipeline's six severity levels onto the host's three, resolve the optional
context object, and make exactly one host logger call. Level filtering,
output destinations, batching and buffering are all upstream or host
concerns, not this crate's.

# Example

```rust
use hostsink::{
    HostLogSink, Level, LogEvent, LogEventSink, MessageTemplateFormatter, CONTEXT_ID_KEY,
};

let sink = HostLogSink::new(Box::new(MessageTemplateFormatter::new()));
sink.emit(&LogEvent::new(Level::Warning, "disk low")).unwrap();
```

# Deployment

Context resolution only pays off where the host can do something with the
attached object (an interactive editor, typically). Build the sink with
[`HostLogSink::with_context_resolution`]`(false)` everywhere else; the sink
then never consults the registry and always emits without a context object.

# Multithreading

Events may be delivered from any thread of the host application. The sink
holds no per-event state; the registry's single lock is the only
synchronization, and it guarantees at-most-once consumption of each entry.
*/

mod context_registry;
mod debug_logger;
mod error;
mod event;
mod formatter;
mod host_logger;
mod level;
mod recording_logger;
mod sink;

pub use context_registry::ContextRegistry;
pub use debug_logger::DebugLogger;
pub use error::EmitError;
pub use event::{LogEvent, PropertyValue};
pub use formatter::{MessageTemplateFormatter, TextFormatter};
pub use host_logger::{HostLevel, HostLogger, HostObject};
pub use level::Level;
pub use recording_logger::{RecordedCall, RecordingLogger};
pub use sink::{HostLogSink, LogEventSink, CONTEXT_ID_KEY};
