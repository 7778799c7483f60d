// In-memory object URLs.
//
// Stands in for the browser's object-URL facility: a payload is registered
// under a `memory://<id>` handle the host can be redirected to. Payloads live
// until revoked or until the registry is dropped; the document flow
// deliberately does not revoke (see `documents`), so `revoke` is the caller's
// cleanup path.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

/// Scheme of registry handles.
pub const OBJECT_URL_SCHEME: &str = "memory://";

/// Registry mapping object URLs to binary payloads.
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    entries: Mutex<HashMap<String, Bytes>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload and return its addressable URL.
    pub fn create(&self, payload: Bytes) -> String {
        let url = format!("{OBJECT_URL_SCHEME}{}", nanoid::nanoid!());
        self.entries
            .lock()
            .expect("object URL registry lock poisoned")
            .insert(url.clone(), payload);
        url
    }

    /// Resolve a previously created URL.
    pub fn get(&self, url: &str) -> Option<Bytes> {
        self.entries
            .lock()
            .expect("object URL registry lock poisoned")
            .get(url)
            .cloned()
    }

    /// Drop a payload. Returns `false` if the URL was unknown.
    pub fn revoke(&self, url: &str) -> bool {
        self.entries
            .lock()
            .expect("object URL registry lock poisoned")
            .remove(url)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("object URL registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
