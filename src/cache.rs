//! Server-State Cache
//!
//! The cached task collection is never patched in place: every successful
//! mutation invalidates it and the next read re-fetches. Invalidations
//! arriving while a fetch is in flight coalesce into a single trailing
//! re-fetch, so overlapping mutations never cause a request storm.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{BoardStateStoreFields, BoardStore};

/// Coalescing decision for invalidation-triggered re-fetches.
///
/// At most one fetch runs at a time; any number of invalidations landing
/// during a fetch fold into one trailing re-fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RefetchGate {
    in_flight: bool,
    pending: bool,
}

impl RefetchGate {
    /// An invalidation arrived. True means a fetch should start now.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            self.pending = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// A fetch settled. True means the coalesced trailing fetch should
    /// run next; the gate stays in flight for it.
    pub fn finish(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Handle over the cached "tasks" entry.
///
/// Reads are non-blocking signal reads through the board store;
/// [`TaskCache::invalidate`] is the only way the collection changes.
#[derive(Clone, Copy)]
pub struct TaskCache {
    store: BoardStore,
    gate: StoredValue<RefetchGate>,
}

/// Get the cache handle from context
pub fn use_task_cache() -> TaskCache {
    expect_context::<TaskCache>()
}

impl TaskCache {
    pub fn new(store: BoardStore) -> Self {
        Self {
            store,
            gate: StoredValue::new(RefetchGate::default()),
        }
    }

    /// Mark the cached collection stale and schedule a re-fetch.
    ///
    /// Called exactly once after every successful mutation. Safe to call
    /// while a fetch is in flight; overlapping calls coalesce.
    pub fn invalidate(&self) {
        let fetch_now = self.gate.try_update_value(|g| g.begin()).unwrap_or(false);
        web_sys::console::log_1(&format!("[CACHE] invalidate tasks, fetch_now={}", fetch_now).into());
        if fetch_now {
            self.spawn_fetch();
        }
    }

    fn spawn_fetch(&self) {
        let store = self.store;
        let gate = self.gate;
        spawn_local(async move {
            loop {
                match api::list_tasks().await {
                    Ok(tasks) => {
                        web_sys::console::log_1(&format!("[CACHE] fetched {} tasks", tasks.len()).into());
                        *store.tasks().write() = Some(tasks);
                        *store.fetch_error().write() = None;
                    }
                    Err(err) => {
                        // The previous collection stays visible.
                        web_sys::console::log_1(&format!("[CACHE] fetch failed: {}", err).into());
                        *store.fetch_error().write() = Some(err.to_string());
                    }
                }
                *store.loading().write() = false;
                let run_trailing = gate.try_update_value(|g| g.finish()).unwrap_or(false);
                if !run_trailing {
                    break;
                }
                web_sys::console::log_1(&"[CACHE] running coalesced re-fetch".into());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_invalidation_starts_a_fetch() {
        let mut gate = RefetchGate::default();
        assert!(gate.begin());
        assert!(gate.in_flight());
    }

    #[test]
    fn test_overlapping_invalidations_coalesce_into_one_trailing_fetch() {
        let mut gate = RefetchGate::default();
        assert!(gate.begin());
        // Three more mutations land while the fetch is in flight.
        assert!(!gate.begin());
        assert!(!gate.begin());
        assert!(!gate.begin());
        // The settling fetch triggers exactly one follow-up...
        assert!(gate.finish());
        assert!(gate.in_flight());
        // ...and the follow-up settles with nothing left pending.
        assert!(!gate.finish());
        assert!(!gate.in_flight());
    }

    #[test]
    fn test_quiet_gate_fetches_again_after_settling() {
        let mut gate = RefetchGate::default();
        assert!(gate.begin());
        assert!(!gate.finish());
        // The next mutation after a quiet period starts a fresh fetch.
        assert!(gate.begin());
    }

    #[test]
    fn test_never_more_than_one_fetch_in_flight() {
        let mut gate = RefetchGate::default();
        let mut running = 0u32;
        // Deterministic interleave of invalidations and completions.
        for step in 0..24 {
            if step % 2 == 0 {
                if gate.begin() {
                    running += 1;
                }
            } else if running > 0 && !gate.finish() {
                running -= 1;
            }
            assert!(running <= 1, "fetch storm at step {}", step);
        }
    }
}
