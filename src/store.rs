//! Board State Store
//!
//! Last-known server state with field-level reactivity via Leptos
//! reactive_stores. The board renders from here and only from here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Server-owned board state as last fetched
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cached "tasks" collection; `None` until the first fetch resolves.
    /// Fully replaced by each successful fetch, never merged.
    pub tasks: Option<Vec<Task>>,
    /// True until the first fetch settles either way
    pub loading: bool,
    /// Most recent fetch failure; cleared by the next successful fetch
    pub fetch_error: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
