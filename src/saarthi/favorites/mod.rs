//! # Favorites storage
//!
//! The favorites set is a list of property ids persisted as a single JSON
//! array. Persistence is abstracted behind [`FavoritesBackend`]:
//!
//! - [`fs::FileBackend`]: production file-based storage
//! - [`memory::MemoryBackend`]: in-memory storage for tests
//!
//! [`FavoritesStore`] owns the in-session set and is the only mutation path,
//! which keeps the invariants local: ids are unique, insertion order is
//! preserved (that is the order in the stored array), toggles are idempotent
//! pairs, and every mutation is written through the backend before the call
//! returns. Opening a store from missing or corrupt data fails soft to an
//! empty set rather than erroring.
//!
//! Two processes pointed at the same backing file are last-writer-wins;
//! there is no cross-process reconciliation.
//!
//! The store deliberately performs no authentication check. Whether a
//! favorite action is permitted is the caller's policy decision, made
//! against [`crate::auth::AuthSignal`] before invoking a mutation.

use crate::auth::InteractionSink;
use crate::error::Result;
use crate::model::PropertyId;
use serde_json::json;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Abstract persistence for the favorites id list.
pub trait FavoritesBackend {
    /// Load the persisted ids, in stored order.
    ///
    /// A missing store is `Ok(vec![])`; unreadable or malformed data is an
    /// error (the store converts it into a soft reset).
    fn load(&self) -> Result<Vec<PropertyId>>;

    /// Replace the persisted ids with `ids`, in order.
    fn save(&mut self, ids: &[PropertyId]) -> Result<()>;
}

/// The persistent favorites set for one storage scope.
///
/// One instance per session; shared by whoever uses the browser profile or
/// data directory, not scoped per user.
pub struct FavoritesStore<B: FavoritesBackend> {
    backend: B,
    ids: Vec<PropertyId>,
    index: HashSet<PropertyId>,
    sink: Option<Box<dyn InteractionSink>>,
    load_warning: Option<String>,
}

impl<B: FavoritesBackend> FavoritesStore<B> {
    /// Open the store, rehydrating from the backend.
    ///
    /// Never fails: corrupt or unreadable data resets to an empty set and
    /// the warning is kept for the caller to surface.
    pub fn open(backend: B) -> Self {
        let (ids, load_warning) = match backend.load() {
            Ok(ids) => (ids, None),
            Err(e) => (
                Vec::new(),
                Some(format!("Could not load saved favorites, starting empty: {}", e)),
            ),
        };
        let mut store = Self {
            backend,
            ids: Vec::new(),
            index: HashSet::new(),
            sink: None,
            load_warning,
        };
        // Deduplicate defensively; stored data is outside our control.
        for id in ids {
            if store.index.insert(id) {
                store.ids.push(id);
            }
        }
        store
    }

    /// Attach an instrumentation sink for mutation events.
    pub fn with_sink(mut self, sink: Box<dyn InteractionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Warning produced if opening had to reset corrupt data.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.index.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorited ids in insertion order.
    pub fn ids(&self) -> &[PropertyId] {
        &self.ids
    }

    /// Add `id` to the set. Idempotent; persists only on actual change.
    pub fn add(&mut self, id: PropertyId) -> Result<()> {
        if !self.index.insert(id) {
            return Ok(());
        }
        self.ids.push(id);
        self.persist()?;
        self.emit("property_favorited", id);
        Ok(())
    }

    /// Remove `id` from the set. Idempotent; persists only on actual change.
    pub fn remove(&mut self, id: PropertyId) -> Result<()> {
        if !self.index.remove(&id) {
            return Ok(());
        }
        self.ids.retain(|existing| *existing != id);
        self.persist()?;
        self.emit("property_unfavorited", id);
        Ok(())
    }

    /// Flip membership of `id`, returning the post-mutation state.
    pub fn toggle(&mut self, id: PropertyId) -> Result<bool> {
        if self.is_favorite(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Empty the set in one mutation, persisted with a single write.
    pub fn clear(&mut self) -> Result<()> {
        if self.ids.is_empty() {
            return Ok(());
        }
        self.ids.clear();
        self.index.clear();
        self.persist()?;
        if let Some(sink) = &self.sink {
            sink.track("favorites_cleared_all", json!({}));
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.ids)
    }

    fn emit(&self, action: &str, id: PropertyId) {
        if let Some(sink) = &self.sink {
            sink.track(action, json!({ "propertyId": id }));
        }
    }
}
