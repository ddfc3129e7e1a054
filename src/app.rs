//! Task Board Frontend App
//!
//! Root component wiring the board store, the cache handle and the page
//! frame.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::TaskCache;
use crate::components::TaskBoard;
use crate::store::{BoardState, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    let store: BoardStore = Store::new(BoardState::new());
    let cache = TaskCache::new(store);

    // Provide context to all children
    provide_context(store);
    provide_context(cache);

    // First read populates the empty cache.
    cache.invalidate();

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"ДОСКА ЗАДАЧ"</h1>
            </header>

            <main class="main-content">
                <TaskBoard />
            </main>
        </div>
    }
}
