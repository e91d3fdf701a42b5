//! Favorite operations over the [`FavoritesStore`], plus the favorites
//! listing that resolves saved ids back to catalog records.

use crate::catalog::PropertyCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::{FavoritesBackend, FavoritesStore};
use crate::model::PropertyId;
use crate::sort::{self, SortKey};

pub fn toggle<B: FavoritesBackend>(
    store: &mut FavoritesStore<B>,
    id: PropertyId,
) -> Result<CmdResult> {
    let now_favorite = store.toggle(id)?;
    let message = if now_favorite {
        CmdMessage::success(format!("Property {} added to favorites", id))
    } else {
        CmdMessage::info(format!("Property {} removed from favorites", id))
    };
    Ok(CmdResult::default()
        .with_favorite_state(now_favorite)
        .with_favorite_ids(store.ids().to_vec())
        .with_message(message))
}

pub fn add<B: FavoritesBackend>(
    store: &mut FavoritesStore<B>,
    id: PropertyId,
) -> Result<CmdResult> {
    store.add(id)?;
    Ok(CmdResult::default()
        .with_favorite_state(true)
        .with_favorite_ids(store.ids().to_vec()))
}

pub fn remove<B: FavoritesBackend>(
    store: &mut FavoritesStore<B>,
    id: PropertyId,
) -> Result<CmdResult> {
    store.remove(id)?;
    Ok(CmdResult::default()
        .with_favorite_state(false)
        .with_favorite_ids(store.ids().to_vec()))
}

/// List the favorited properties, resolved against the catalog.
///
/// Ids come back in the order they were favorited unless a sort key reorders
/// them. Saved ids with no catalog record (a delisted property) are skipped
/// rather than erroring.
pub fn list<C: PropertyCatalog, B: FavoritesBackend>(
    catalog: &C,
    store: &FavoritesStore<B>,
    sort_by: SortKey,
) -> Result<CmdResult> {
    let resolved: Vec<_> = store
        .ids()
        .iter()
        .filter_map(|id| catalog.get(*id).cloned())
        .collect();

    let listed = sort::sorted(resolved, sort_by);
    Ok(CmdResult::default()
        .with_listed_properties(listed)
        .with_favorite_ids(store.ids().to_vec()))
}

pub fn clear<B: FavoritesBackend>(store: &mut FavoritesStore<B>) -> Result<CmdResult> {
    let removed = store.count();
    store.clear()?;
    let message = if removed == 0 {
        CmdMessage::info("No favorites to clear")
    } else {
        CmdMessage::success(format!("Removed {} properties from favorites", removed))
    };
    Ok(CmdResult::default().with_message(message))
}
