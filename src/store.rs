//! Per-actor durable key-value store
//!
//! Backing service for the persistence behaviors. Keys are integrator-chosen
//! strings, unique per binding; slots are typed (float or bool) and a typed
//! read of a mismatched slot is a miss. Snapshots serialize to JSON so store
//! contents survive across sessions.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scene::ActorId;

/// One persisted slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    Float(f32),
    Bool(bool),
}

/// Durable key-value store, keyed by (actor, key)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorStore {
    slots: HashMap<u32, HashMap<String, StoredValue>>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_float(&mut self, actor: ActorId, key: &str, value: f32) {
        self.slots
            .entry(actor.0)
            .or_default()
            .insert(key.to_string(), StoredValue::Float(value));
    }

    pub fn try_get_float(&self, actor: ActorId, key: &str) -> Option<f32> {
        match self.slots.get(&actor.0)?.get(key)? {
            StoredValue::Float(v) => Some(*v),
            StoredValue::Bool(_) => None,
        }
    }

    pub fn set_bool(&mut self, actor: ActorId, key: &str, value: bool) {
        self.slots
            .entry(actor.0)
            .or_default()
            .insert(key.to_string(), StoredValue::Bool(value));
    }

    pub fn try_get_bool(&self, actor: ActorId, key: &str) -> Option<bool> {
        match self.slots.get(&actor.0)?.get(key)? {
            StoredValue::Bool(v) => Some(*v),
            StoredValue::Float(_) => None,
        }
    }

    /// Total number of persisted slots across all actors
    pub fn len(&self) -> usize {
        self.slots.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.values().all(|m| m.is_empty())
    }

    /// Load a snapshot from disk; a missing or unreadable file yields an
    /// empty store.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(store) => {
                    log::info!("Loaded actor store from {}", path.display());
                    store
                }
                Err(err) => {
                    log::warn!("Corrupt actor store at {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No actor store at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Write a snapshot to disk. Failures are logged, never fatal.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Failed to write actor store to {}: {err}", path.display());
                } else {
                    log::info!("Actor store saved ({} slots)", self.len());
                }
            }
            Err(err) => log::warn!("Failed to serialize actor store: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTOR: ActorId = ActorId(1);
    const OTHER: ActorId = ActorId(2);

    #[test]
    fn test_float_round_trip() {
        let mut store = ActorStore::new();
        assert_eq!(store.try_get_float(ACTOR, "volume"), None);

        store.set_float(ACTOR, "volume", 0.8);
        assert_eq!(store.try_get_float(ACTOR, "volume"), Some(0.8));
        // Same key for a different actor is a separate slot
        assert_eq!(store.try_get_float(OTHER, "volume"), None);
    }

    #[test]
    fn test_bool_round_trip() {
        let mut store = ActorStore::new();
        store.set_bool(ACTOR, "mute", true);
        assert_eq!(store.try_get_bool(ACTOR, "mute"), Some(true));

        store.set_bool(ACTOR, "mute", false);
        assert_eq!(store.try_get_bool(ACTOR, "mute"), Some(false));
    }

    #[test]
    fn test_type_mismatch_is_a_miss() {
        let mut store = ActorStore::new();
        store.set_float(ACTOR, "k", 1.0);
        assert_eq!(store.try_get_bool(ACTOR, "k"), None);
        store.set_bool(ACTOR, "k", true);
        assert_eq!(store.try_get_float(ACTOR, "k"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = ActorStore::new();
        store.set_float(ACTOR, "k", 0.25);
        store.set_float(ACTOR, "k", 0.75);
        assert_eq!(store.try_get_float(ACTOR, "k"), Some(0.75));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let mut store = ActorStore::new();
        store.set_float(ACTOR, "volume", 0.5);
        store.set_bool(OTHER, "mute", true);

        let json = serde_json::to_string(&store).unwrap();
        let restored: ActorStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.try_get_float(ACTOR, "volume"), Some(0.5));
        assert_eq!(restored.try_get_bool(OTHER, "mute"), Some(true));
        assert_eq!(restored.len(), 2);
    }
}
