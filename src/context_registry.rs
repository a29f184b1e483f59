// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide side table associating context identifiers with host
//! objects.
//!
//! A log event is plain, serializable data and cannot carry a live
//! reference to a host-environment object. The registry bridges that gap:
//! application code picks an integer identifier, registers the host object
//! under it, and embeds the identifier as a scalar property under
//! [`CONTEXT_ID_KEY`](crate::CONTEXT_ID_KEY) before logging. At emission
//! time the sink consumes the entry and attaches the object to the native
//! log call.
//!
//! # Lifecycle
//!
//! Entries are expected to be short-lived: registered immediately before a
//! log call, consumed when that event is emitted. Lookup is
//! consume-on-read, which bounds the table to the number of pending
//! associations rather than growing with total log volume, and prevents an
//! identifier from silently re-attaching its object to an unrelated later
//! message.
//!
//! Known caveat: an identifier that is registered but never matched by a
//! subsequent event is never cleaned up. The registry does not expire
//! entries; bounding it is the application's discipline.
//!
//! # Sharing
//!
//! The registry is an explicit capability, not an ambient singleton.
//! Construct one per application session, wrap it in an `Arc`, and hand it
//! both to the sink and to whatever application code registers objects.

use crate::host_logger::HostObject;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mapping from context identifier to host object, with consume-on-read
/// lookup.
///
/// A single mutex guards the map. Entries are short-lived and contention is
/// one entry per in-flight attached-context log call, so coarse locking is
/// plenty; what the lock buys is the at-most-once guarantee that two
/// concurrent [`take_if_present`](Self::take_if_present) calls for the same
/// identifier cannot both succeed.
#[derive(Debug, Default)]
pub struct ContextRegistry {
    entries: Mutex<HashMap<i64, Arc<dyn HostObject>>>,
}

impl ContextRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts or overwrites the association for `id`.
    ///
    /// The registry enforces nothing about identifier uniqueness; the last
    /// writer wins. Identifiers are generated and owned by the caller.
    pub fn register(&self, id: i64, object: Arc<dyn HostObject>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(id, object);
    }

    /// Returns the association for `id` and removes it, or `None` if there
    /// is none. Absence is not an error; it is the default path for events
    /// that carry no pending association.
    pub fn take_if_present(&self, id: i64) -> Option<Arc<dyn HostObject>> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&id)
    }

    /// The number of pending, not-yet-consumed associations.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
