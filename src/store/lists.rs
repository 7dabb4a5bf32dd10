//! Favorites, recently viewed vehicles and the comparison selection, each kept
//! as an ordered list of ids under its own store key.

use super::{Store, StoreError};

pub const FAVORITES_KEY: &str = "favorites";
pub const RECENT_VIEWS_KEY: &str = "recent-views";
pub const COMPARISON_KEY: &str = "comparison";

pub const MAX_RECENT_VIEWS: usize = 10;
/// Hard cap on side-by-side comparison, whatever the plan allows
pub const MAX_COMPARISON: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

pub fn favorites(store: &dyn Store) -> Result<Vec<String>, StoreError> {
    Ok(store.get(FAVORITES_KEY)?)
}

/// Add a favorite. Returns false if it was already saved.
/// `limit` of None means unlimited.
pub fn add_favorite(store: &mut dyn Store, id: &str, limit: Option<usize>) -> Result<bool, StoreError> {
    let mut ids = store.get(FAVORITES_KEY)?;
    if ids.iter().any(|f| f == id) {
        return Ok(false);
    }
    if let Some(limit) = limit {
        if ids.len() >= limit {
            return Err(StoreError::LimitReached {
                list: "favorites",
                limit,
            });
        }
    }
    ids.push(id.to_string());
    store.set(FAVORITES_KEY, &ids)?;
    Ok(true)
}

/// Remove a favorite. Returns true if it was previously saved.
pub fn remove_favorite(store: &mut dyn Store, id: &str) -> Result<bool, StoreError> {
    let mut ids = store.get(FAVORITES_KEY)?;
    let before = ids.len();
    ids.retain(|f| f != id);
    if ids.len() == before {
        return Ok(false);
    }
    store.set(FAVORITES_KEY, &ids)?;
    Ok(true)
}

pub fn toggle_favorite(store: &mut dyn Store, id: &str, limit: Option<usize>) -> Result<Toggle, StoreError> {
    if remove_favorite(store, id)? {
        Ok(Toggle::Removed)
    } else {
        add_favorite(store, id, limit)?;
        Ok(Toggle::Added)
    }
}

/// Most recent first
pub fn recent_views(store: &dyn Store) -> Result<Vec<String>, StoreError> {
    Ok(store.get(RECENT_VIEWS_KEY)?)
}

/// Move `id` to the front of the recently viewed list, dropping the oldest
/// entries past `MAX_RECENT_VIEWS`
pub fn record_view(store: &mut dyn Store, id: &str) -> Result<(), StoreError> {
    let previous = store.get(RECENT_VIEWS_KEY)?;
    let mut ids = Vec::with_capacity(MAX_RECENT_VIEWS);
    ids.push(id.to_string());
    ids.extend(previous.into_iter().filter(|v| v != id));
    ids.truncate(MAX_RECENT_VIEWS);
    store.set(RECENT_VIEWS_KEY, &ids)?;
    Ok(())
}

pub fn comparison(store: &dyn Store) -> Result<Vec<String>, StoreError> {
    Ok(store.get(COMPARISON_KEY)?)
}

/// Add a vehicle to the comparison. Returns false if it was already there.
/// The effective limit never exceeds `MAX_COMPARISON`.
pub fn add_to_comparison(store: &mut dyn Store, id: &str, limit: usize) -> Result<bool, StoreError> {
    let limit = limit.min(MAX_COMPARISON);
    let mut ids = store.get(COMPARISON_KEY)?;
    if ids.iter().any(|c| c == id) {
        return Ok(false);
    }
    if ids.len() >= limit {
        return Err(StoreError::LimitReached {
            list: "comparison",
            limit,
        });
    }
    ids.push(id.to_string());
    store.set(COMPARISON_KEY, &ids)?;
    Ok(true)
}

/// Returns true if the vehicle was in the comparison
pub fn remove_from_comparison(store: &mut dyn Store, id: &str) -> Result<bool, StoreError> {
    let mut ids = store.get(COMPARISON_KEY)?;
    let before = ids.len();
    ids.retain(|c| c != id);
    if ids.len() == before {
        return Ok(false);
    }
    store.set(COMPARISON_KEY, &ids)?;
    Ok(true)
}

pub fn clear_comparison(store: &mut dyn Store) -> Result<(), StoreError> {
    store.set(COMPARISON_KEY, &[])?;
    Ok(())
}
