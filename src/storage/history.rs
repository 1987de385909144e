use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::backend::KeyValueStore;
use crate::models::{SaveCandidate, SavedEntry};

/// Storage key holding the serialized history
pub const STORAGE_KEY: &str = "qr-saved-configs";

/// What [`HistoryStore::save`] did with a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entry with this id was inserted at the front
    Created(String),
    /// An identical entry was refreshed and moved to the front
    Refreshed(String),
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Refreshed(id) => id,
        }
    }
}

/// Read the persisted history; unreadable or malformed data yields an empty list
pub fn load_entries<S: KeyValueStore>(backend: &S) -> Vec<SavedEntry> {
    let raw = match backend.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to load saved configs: {:#}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<SavedEntry>>(&raw) {
        Ok(entries) => with_unique_ids(entries),
        Err(e) => {
            warn!("Failed to parse saved configs, starting with empty history: {}", e);
            Vec::new()
        }
    }
}

/// Keep the first entry for each id and re-key later repeats
fn with_unique_ids(mut entries: Vec<SavedEntry>) -> Vec<SavedEntry> {
    let taken: HashSet<String> = entries.iter().map(|entry| entry.id.clone()).collect();
    if taken.len() == entries.len() {
        return entries;
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &mut entries {
        if seen.insert(entry.id.clone()) {
            continue;
        }
        let fresh = loop {
            let candidate = Uuid::new_v4().to_string();
            if !taken.contains(&candidate) && !seen.contains(&candidate) {
                break candidate;
            }
        };
        warn!("Saved config id {} is repeated, re-keyed as {}", entry.id, fresh);
        entry.id = fresh.clone();
        seen.insert(fresh);
    }
    entries
}

/// Newest-activity-first history of configuration snapshots
///
/// The in-memory list is authoritative for the session; every mutation is
/// mirrored to the backend, and backend failures are only logged.
pub struct HistoryStore<S: KeyValueStore> {
    backend: S,
    entries: Vec<SavedEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Open the store, hydrating from the backend
    pub fn open(backend: S) -> Self {
        let entries = load_entries(&backend);
        debug!("Loaded {} saved configs", entries.len());
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SavedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Re-read the backend, replacing the in-memory list
    pub fn reload(&mut self) -> &[SavedEntry] {
        self.entries = load_entries(&self.backend);
        &self.entries
    }

    pub fn save(&mut self, candidate: SaveCandidate) -> SaveOutcome {
        self.save_at(candidate, Utc::now())
    }

    /// Save with an explicit timestamp
    ///
    /// A candidate equal to an existing entry refreshes that entry's timestamp
    /// and moves it to the front, keeping its id. Otherwise a new entry is
    /// inserted at the front.
    pub fn save_at(&mut self, candidate: SaveCandidate, now: DateTime<Utc>) -> SaveOutcome {
        let outcome = match self.entries.iter().position(|entry| entry.matches(&candidate)) {
            Some(index) => {
                let mut existing = self.entries.remove(index);
                existing.created_at = now;
                let id = existing.id.clone();
                debug!("Refreshed saved config {} (was at position {})", id, index);
                self.entries.insert(0, existing);
                SaveOutcome::Refreshed(id)
            }
            None => {
                let id = self.generate_id();
                debug!("Created saved config {}", id);
                self.entries.insert(0, SavedEntry::new(id.clone(), now, candidate));
                SaveOutcome::Created(id)
            }
        };

        self.persist();
        outcome
    }

    /// Remove an entry by id; returns whether one was removed
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        self.persist();
        removed
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn generate_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize saved configs: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            error!("Failed to save configs: {:#}", e);
        }
    }
}
