pub mod file;
pub mod lists;
pub mod memory;

pub use file::{get_store_path, FileStore};
pub use lists::{
    add_favorite, add_to_comparison, clear_comparison, comparison, favorites, recent_views,
    record_view, remove_favorite, remove_from_comparison, toggle_favorite, Toggle,
    COMPARISON_KEY, FAVORITES_KEY, MAX_COMPARISON, MAX_RECENT_VIEWS, RECENT_VIEWS_KEY,
};
pub use memory::MemoryStore;

use anyhow::Result;
use thiserror::Error;

/// Key-value repository for the user's saved lists of vehicle ids.
///
/// The scoring core never sees a store; callers read ids out of it and pass
/// plain slices down.
pub trait Store {
    /// Ids saved under `key`. A key that was never set reads as empty.
    fn get(&self, key: &str) -> Result<Vec<String>>;

    /// Replace the ids saved under `key`
    fn set(&mut self, key: &str, ids: &[String]) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{list} is full ({limit} max)")]
    LimitReached { list: &'static str, limit: usize },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
