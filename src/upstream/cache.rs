//! Deduplication cache for upstream invocations.
//!
//! Keyed by a SHA-256 digest of the exact outbound history plus the model
//! identifier, so byte-identical requests hit the same entry. The cache is a
//! pure optimization: a miss only costs latency, never correctness. Entries
//! expire on a TTL independent of the session-memory TTL, with lazy expiry
//! on access plus a periodic sweep driven by the server.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use super::ConversationTurn;

/// Compute the deterministic cache key for an outbound request.
///
/// Hashes the canonical JSON serialization of the history and the model id.
/// Two requests with byte-identical outbound payloads and model ids always
/// produce the same key.
pub fn cache_key(history: &[ConversationTurn], model_id: &str) -> String {
    let payload = serde_json::to_string(history).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update([0x1f]);
    hasher.update(model_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

struct CacheSlot {
    answer: String,
    stored_at: Instant,
}

/// TTL-bounded store of raw upstream answers.
pub struct ResponseCache {
    entries: DashMap<String, CacheSlot>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache whose entries live for `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Look up a cached answer, expiring the entry lazily if it is stale.
    ///
    /// A hit returns an owned copy — callers may mutate the returned value
    /// without affecting later lookups for the same key.
    pub fn get(&self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(slot) if slot.stored_at.elapsed() <= self.ttl => {
                return Some(slot.answer.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Store an answer under the given key, resetting its lifetime.
    pub fn insert(&self, key: impl Into<String>, answer: impl Into<String>) {
        self.entries.insert(
            key.into(),
            CacheSlot {
                answer: answer.into(),
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop all expired entries. Returns how many were evicted.
    pub fn sweep_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, slot| slot.stored_at.elapsed() <= self.ttl);
        before.saturating_sub(self.entries.len())
    }

    /// Number of live (possibly stale, not yet swept) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
