//! Leptos Overlay Utilities
//!
//! Anchored floating menus rendered outside the normal layout tree.
//! Content mounts on a shared top-level surface so ancestor overflow never
//! clips it, and one global pointer-down listener dismisses any open
//! session whose trigger and content do not contain the event target.

mod menu;

pub use menu::{DropdownItem, DropdownMenu, MenuHandle};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Vertical gap between the trigger's bottom edge and the overlay content.
pub const ANCHOR_GAP: f64 = 8.0;

/// Page-coordinate position for overlay content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorCoords {
    pub top: f64,
    pub left: f64,
}

/// Place the overlay below the trigger rectangle, left-aligned with it.
///
/// Inputs are viewport coordinates plus the page scroll offsets; the result
/// is in page coordinates, suitable for absolute positioning on `body`.
pub fn anchor_below_left(rect_bottom: f64, rect_left: f64, scroll_x: f64, scroll_y: f64) -> AnchorCoords {
    AnchorCoords {
        top: rect_bottom + scroll_y + ANCHOR_GAP,
        left: rect_left + scroll_x,
    }
}

/// Fresh coordinates for a trigger element at the moment of opening.
pub fn coords_for_trigger(el: &web_sys::Element) -> AnchorCoords {
    let rect = el.get_bounding_client_rect();
    let (scroll_x, scroll_y) = web_sys::window()
        .map(|win| (win.scroll_x().unwrap_or(0.0), win.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));
    anchor_below_left(rect.bottom(), rect.left(), scroll_x, scroll_y)
}

pub type SessionId = u64;

struct Session<T> {
    id: SessionId,
    hit_test: Box<dyn Fn(&T) -> bool>,
    close: Rc<dyn Fn()>,
}

/// Open-session registry shared by every menu instance.
///
/// Generic over the event-target type so dismissal fan-out is testable
/// without a DOM; the WASM glue below instantiates it with `EventTarget`.
pub struct OverlayRegistry<T> {
    sessions: Vec<Session<T>>,
}

impl<T> OverlayRegistry<T> {
    pub fn new() -> Self {
        Self { sessions: Vec::new() }
    }

    /// Register an open session. A stale session under the same id is
    /// replaced, never reused.
    pub fn register(&mut self, id: SessionId, hit_test: impl Fn(&T) -> bool + 'static, close: Rc<dyn Fn()>) {
        self.sessions.retain(|s| s.id != id);
        self.sessions.push(Session { id, hit_test: Box::new(hit_test), close });
    }

    pub fn unregister(&mut self, id: SessionId) {
        self.sessions.retain(|s| s.id != id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Close callbacks of every session the target falls outside of.
    ///
    /// Callbacks are returned rather than invoked so the caller can drop
    /// its borrow first; closing unregisters and would alias the registry.
    pub fn outside(&self, target: &T) -> Vec<Rc<dyn Fn()>> {
        self.sessions
            .iter()
            .filter(|s| !(s.hit_test)(target))
            .map(|s| Rc::clone(&s.close))
            .collect()
    }
}

impl<T> Default for OverlayRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static REGISTRY: RefCell<OverlayRegistry<web_sys::EventTarget>> = RefCell::new(OverlayRegistry::new());
    static NEXT_SESSION_ID: Cell<SessionId> = const { Cell::new(1) };
    static LISTENER_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Allocate an id for a menu instance.
pub fn next_session_id() -> SessionId {
    NEXT_SESSION_ID.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    })
}

/// Register an open session and make sure the shared listener is installed.
pub fn register_session(
    id: SessionId,
    hit_test: impl Fn(&web_sys::EventTarget) -> bool + 'static,
    close: impl Fn() + 'static,
) {
    bind_global_pointerdown();
    REGISTRY.with(|r| r.borrow_mut().register(id, hit_test, Rc::new(close)));
}

/// Drop a session once its menu closed.
pub fn unregister_session(id: SessionId) {
    REGISTRY.with(|r| r.borrow_mut().unregister(id));
}

/// Install the single shared pointer-down listener. Idempotent; one
/// listener serves however many menu instances exist.
fn bind_global_pointerdown() {
    if LISTENER_BOUND.with(|b| b.get()) {
        return;
    }

    let on_pointerdown = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let to_close = REGISTRY.with(|r| r.borrow().outside(&target));
        for close in to_close {
            close();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointerdown", on_pointerdown.as_ref().unchecked_ref());
            LISTENER_BOUND.with(|b| b.set(true));
        }
    }
    on_pointerdown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn anchor_sits_below_left_with_fixed_gap() {
        let coords = anchor_below_left(120.0, 40.0, 0.0, 0.0);
        assert_eq!(coords, AnchorCoords { top: 128.0, left: 40.0 });
    }

    #[test]
    fn anchor_accounts_for_page_scroll() {
        let coords = anchor_below_left(120.0, 40.0, 15.0, 300.0);
        assert_eq!(coords.top, 428.0);
        assert_eq!(coords.left, 55.0);
    }

    fn closed_flag(registry: &mut OverlayRegistry<i32>, id: SessionId, min: i32, max: i32) -> Rc<Cell<bool>> {
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        registry.register(id, move |target| (min..=max).contains(target), Rc::new(move || flag.set(true)));
        closed
    }

    #[test]
    fn outside_target_selects_only_non_containing_sessions() {
        let mut registry = OverlayRegistry::new();
        let a = closed_flag(&mut registry, 1, 0, 10);
        let b = closed_flag(&mut registry, 2, 20, 30);

        for close in registry.outside(&25) {
            close();
        }
        assert!(a.get(), "session not containing the target closes");
        assert!(!b.get(), "session containing the target stays open");
    }

    #[test]
    fn target_outside_every_session_closes_them_all() {
        let mut registry = OverlayRegistry::new();
        let a = closed_flag(&mut registry, 1, 0, 10);
        let b = closed_flag(&mut registry, 2, 20, 30);

        for close in registry.outside(&99) {
            close();
        }
        assert!(a.get());
        assert!(b.get());
    }

    #[test]
    fn reopening_replaces_the_stale_session() {
        let mut registry = OverlayRegistry::new();
        let stale = closed_flag(&mut registry, 7, 0, 10);
        let fresh = closed_flag(&mut registry, 7, 100, 110);
        assert_eq!(registry.len(), 1);

        for close in registry.outside(&5) {
            close();
        }
        assert!(!stale.get(), "stale session is gone, not dismissed");
        assert!(fresh.get(), "fresh session hit-tests with fresh bounds");
    }

    #[test]
    fn unregister_removes_the_session() {
        let mut registry = OverlayRegistry::new();
        let a = closed_flag(&mut registry, 1, 0, 10);
        registry.unregister(1);
        assert!(registry.is_empty());

        for close in registry.outside(&99) {
            close();
        }
        assert!(!a.get());
    }
}
