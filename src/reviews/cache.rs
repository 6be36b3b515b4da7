use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Process-wide bearer token slot. Concurrent refreshes are last-write-wins;
/// every token the exchange hands out is equivalent.
pub struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        TokenCache {
            slot: RwLock::new(None),
        }
    }

    /// The cached token, if it has not expired.
    pub fn get(&self) -> Option<String> {
        self.slot
            .read()
            .as_ref()
            .filter(|cached| Instant::now() < cached.expires_at)
            .map(|cached| cached.token.clone())
    }

    pub fn set(&self, token: String, ttl: Duration) {
        *self.slot.write() = Some(CachedToken {
            token,
            expires_at: Instant::now() + ttl,
        });
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    pub fn is_valid(&self) -> bool {
        self.get().is_some()
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Short-lived cache of remote JSON bodies keyed by request parameters.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Value)>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        ResponseCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock();
        let cached = entries
            .get(key)
            .map(|(stored_at, value)| (stored_at.elapsed() <= self.ttl, value.clone()));
        match cached {
            Some((true, value)) => Some(value),
            Some((false, _)) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` and drops every expired entry, so keys that are never
    /// read again do not pile up.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        let mut entries = self.entries.lock();
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() <= self.ttl);
        entries.insert(key.into(), (Instant::now(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
