//! # API Facade
//!
//! Thin entry point over the command layer, generic over both collaborators
//! so every UI goes through the same surface:
//!
//! - Production: `SaarthiApi<StaticCatalog, FileBackend>`
//! - Testing: `SaarthiApi<StaticCatalog, MemoryBackend>`
//!
//! The facade dispatches and normalizes; business logic lives in
//! `commands/*.rs` and never touches stdout or the filesystem directly.
//! Authorization is deliberately absent here too — whether the caller is
//! allowed to mutate favorites is decided against `AuthSignal` at the UI
//! layer, and an ungated call still succeeds.

use crate::catalog::PropertyCatalog;
use crate::commands;
use crate::error::Result;
use crate::favorites::{FavoritesBackend, FavoritesStore};
use crate::filter::FilterState;
use crate::model::PropertyId;
use crate::sort::SortKey;

pub struct SaarthiApi<C: PropertyCatalog, B: FavoritesBackend> {
    catalog: C,
    favorites: FavoritesStore<B>,
}

impl<C: PropertyCatalog, B: FavoritesBackend> SaarthiApi<C, B> {
    pub fn new(catalog: C, favorites: FavoritesStore<B>) -> Self {
        Self { catalog, favorites }
    }

    /// Run the search pipeline: filter the catalog, then sort.
    pub fn search(&self, filters: &FilterState, sort_by: SortKey) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, filters, sort_by)
    }

    pub fn view(&self, id: PropertyId) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, id)
    }

    pub fn toggle_favorite(&mut self, id: PropertyId) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&mut self.favorites, id)
    }

    pub fn add_favorite(&mut self, id: PropertyId) -> Result<commands::CmdResult> {
        commands::favorites::add(&mut self.favorites, id)
    }

    pub fn remove_favorite(&mut self, id: PropertyId) -> Result<commands::CmdResult> {
        commands::favorites::remove(&mut self.favorites, id)
    }

    pub fn favorites(&self, sort_by: SortKey) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.catalog, &self.favorites, sort_by)
    }

    pub fn clear_favorites(&mut self) -> Result<commands::CmdResult> {
        commands::favorites::clear(&mut self.favorites)
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.count()
    }

    /// Warning from favorites rehydration, if corrupt data had to be reset.
    pub fn favorites_load_warning(&self) -> Option<&str> {
        self.favorites.load_warning()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
