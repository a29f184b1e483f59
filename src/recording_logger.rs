// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recording host logger
//!
//! An in-memory [`HostLogger`] that captures every call it receives instead
//! of writing anywhere, for:
//!
//! - Unit testing code that emits through a [`HostLogSink`](crate::HostLogSink)
//! - Asserting on the exact host-level/message/context triple a scenario
//!   produced
//! - Verifying the no-context overload was chosen when it should be
//!
//! Calls are stored behind a mutex so multiple threads can emit
//! concurrently while tests get a consistent view of what was received.

use crate::host_logger::{HostLevel, HostLogger, HostObject};
use std::sync::{Arc, Mutex};

/// One call received by a [`RecordingLogger`].
///
/// `context` is `Some` exactly when the sink used the with-context
/// overload.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub level: HostLevel,
    pub message: String,
    pub context: Option<Arc<dyn HostObject>>,
}

/// A host logger that records calls in memory.
///
/// # Example
///
/// ```rust
/// use hostsink::{
///     HostLogSink, Level, LogEvent, LogEventSink, MessageTemplateFormatter, RecordingLogger,
/// };
/// use std::sync::Arc;
///
/// let logger = Arc::new(RecordingLogger::new());
/// let sink = HostLogSink::new(Box::new(MessageTemplateFormatter::new()))
///     .with_logger(logger.clone());
///
/// sink.emit(&LogEvent::new(Level::Warning, "disk low")).unwrap();
///
/// let calls = logger.take_calls();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].message, "disk low");
/// assert!(calls[0].context.is_none());
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingLogger {
    /// Creates a new `RecordingLogger` with an empty call buffer.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Takes all recorded calls, clearing the internal buffer.
    ///
    /// Subsequent calls return an empty vector until new calls arrive.
    pub fn take_calls(&self) -> Vec<RecordedCall> {
        let mut calls = self.calls.lock().unwrap();
        std::mem::take(&mut *calls)
    }

    /// The number of calls recorded so far, without draining them.
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HostLogger for RecordingLogger {
    fn log(&self, level: HostLevel, message: &str) {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            level,
            message: message.to_string(),
            context: None,
        });
    }

    fn log_with_context(&self, level: HostLevel, message: &str, context: &Arc<dyn HostObject>) {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            level,
            message: message.to_string(),
            context: Some(context.clone()),
        });
    }
}
