//! Per-conversation session memory.
//!
//! A [`Session`] accumulates two kinds of memory: volatile recent-topic
//! summaries recomputed every turn, and long-lived user-disclosed facts that
//! survive for the life of the session. Sessions are owned exclusively by the
//! [`SessionStore`]; request handlers take a copy through
//! [`SessionStore::get_or_create`], mutate it, and persist it with
//! [`SessionStore::save`] — every mutation path goes through that write-back,
//! which is where the TTL refresh is enforced.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

pub mod facts;
pub mod topics;

/// How a session was identified.
///
/// The peer-address fallback exists for clients that never send a session id.
/// It is a degraded mode: everyone behind one NAT address shares a session,
/// so it carries weaker isolation and privacy guarantees than an explicit id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Client-supplied session identifier — normal isolation.
    Explicit(String),
    /// Fallback keyed by caller network address — degraded isolation.
    PeerFallback(String),
}

impl SessionKey {
    /// Resolve the key for a request: explicit id wins, else peer address.
    pub fn resolve(explicit: Option<&str>, peer_addr: Option<&str>) -> Self {
        match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => Self::Explicit(id.to_owned()),
            None => Self::PeerFallback(peer_addr.unwrap_or("unknown").to_owned()),
        }
    }

    /// Storage key string. Fallback keys are namespaced so an explicit id
    /// can never collide with an address.
    pub fn storage_key(&self) -> String {
        match self {
            Self::Explicit(id) => id.clone(),
            Self::PeerFallback(addr) => format!("peer:{addr}"),
        }
    }

    /// Whether this key uses the degraded address-based strategy.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::PeerFallback(_))
    }
}

/// Accumulated memory for one conversation.
#[derive(Debug, Clone)]
pub struct Session {
    /// When the session was first created.
    pub created_at: DateTime<Utc>,
    /// Derived, volatile summary of recent conversation topics.
    pub recent_topics: String,
    /// Long-lived user-disclosed facts, deduplicated by exact text,
    /// insertion-ordered.
    pub important_facts: Vec<String>,
    /// Mood hint supplied by the client, embedded into voice instructions.
    pub user_mood: String,
    /// Current topic hint supplied by the client.
    pub current_topic: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            created_at: Utc::now(),
            recent_topics: String::new(),
            important_facts: Vec::new(),
            user_mood: String::new(),
            current_topic: String::new(),
        }
    }
}

impl Session {
    /// Add a fact unless an exact-text duplicate is already stored.
    ///
    /// Returns `true` if the fact was newly added.
    pub fn add_fact(&mut self, fact: impl Into<String>) -> bool {
        let fact = fact.into();
        if fact.is_empty() || self.important_facts.iter().any(|f| *f == fact) {
            return false;
        }
        self.important_facts.push(fact);
        true
    }

    /// Merge client-supplied facts, deduplicating by exact text.
    pub fn merge_client_facts<I, S>(&mut self, facts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for fact in facts {
            self.add_fact(fact);
        }
    }
}

struct SessionSlot {
    session: Session,
    last_seen: Instant,
}

/// Concurrent, TTL-evicted store of sessions keyed by session key.
///
/// Sessions are independent per key; concurrent requests on different keys
/// never contend on a shared lock.
pub struct SessionStore {
    slots: DashMap<String, SessionSlot>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose sessions expire after `ttl` of inactivity.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: DashMap::new(),
            ttl,
        }
    }

    /// Fetch the session for a key, creating it lazily with defaults.
    ///
    /// An expired session is discarded and replaced by a fresh one, so a
    /// stale entry can never leak across the inactivity window.
    pub fn get_or_create(&self, key: &SessionKey) -> Session {
        let storage_key = key.storage_key();
        if let Some(slot) = self.slots.get(&storage_key) {
            if slot.last_seen.elapsed() <= self.ttl {
                return slot.session.clone();
            }
        }
        if self.slots.remove(&storage_key).is_some() {
            debug!(key = %storage_key, "expired session discarded on access");
        }
        Session::default()
    }

    /// Write a session back, refreshing its expiry window.
    pub fn save(&self, key: &SessionKey, session: Session) {
        self.slots.insert(
            key.storage_key(),
            SessionSlot {
                session,
                last_seen: Instant::now(),
            },
        );
    }

    /// Drop all sessions past their inactivity window. Returns the count.
    pub fn sweep_expired(&self) -> usize {
        let before = self.slots.len();
        self.slots
            .retain(|_, slot| slot.last_seen.elapsed() <= self.ttl);
        before.saturating_sub(self.slots.len())
    }

    /// Number of live (possibly stale, not yet swept) sessions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
