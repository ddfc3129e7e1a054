//! Dropdown Menu Components
//!
//! Anchored menu built on the overlay registry. Content renders through a
//! portal onto `document.body`, so a menu anchored to an icon inside a
//! scrollable column is never clipped by its ancestors.

use leptos::children::{Children, ChildrenFn, ViewFn};
use leptos::portal::Portal;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::{coords_for_trigger, next_session_id, register_session, unregister_session, AnchorCoords};

/// Close handle provided to menu children via context.
#[derive(Clone, Copy)]
pub struct MenuHandle {
    close: Callback<()>,
}

impl MenuHandle {
    /// End the session. Action handlers run first, then call this.
    pub fn close(&self) {
        self.close.run(());
    }
}

/// Anchored dropdown menu with outside-click dismissal.
///
/// Each instance owns its own trigger/session pair; any number of menus can
/// coexist, all dismissed through the one shared pointer-down listener.
#[component]
pub fn DropdownMenu(
    /// Trigger content; the wrapping element toggles the menu
    #[prop(into)] trigger: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let (open, set_open) = signal(false);
    let (coords, set_coords) = signal(AnchorCoords::default());
    let trigger_ref = NodeRef::<leptos::html::Div>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();
    let session_id = next_session_id();

    let close = move || {
        unregister_session(session_id);
        set_open.set(false);
    };

    let open_menu = move || {
        // The trigger may have moved since the last session; never reuse
        // stale coordinates.
        if let Some(el) = trigger_ref.get_untracked() {
            set_coords.set(coords_for_trigger(&el));
        }
        let hit_test = move |target: &web_sys::EventTarget| {
            let node = target.dyn_ref::<web_sys::Node>();
            let contains = |el: Option<web_sys::HtmlDivElement>| match (&el, node) {
                (Some(el), Some(node)) => el.contains(Some(node)),
                _ => false,
            };
            contains(trigger_ref.get_untracked().map(Into::into))
                || contains(content_ref.get_untracked().map(Into::into))
        };
        register_session(session_id, hit_test, close);
        set_open.set(true);
    };

    let toggle = move |_| {
        if open.get_untracked() {
            close();
        } else {
            open_menu();
        }
    };

    provide_context(MenuHandle { close: Callback::new(move |_| close()) });

    view! {
        <div class="dropdown-trigger" node_ref=trigger_ref on:click=toggle>
            {trigger.run()}
        </div>
        <Show when=move || open.get()>
            <Portal>
                <div
                    class="dropdown-menu"
                    node_ref=content_ref
                    style=move || {
                        let c = coords.get();
                        format!("position: absolute; top: {}px; left: {}px;", c.top, c.left)
                    }
                >
                    {children.get_value()()}
                </div>
            </Portal>
        </Show>
    }
}

/// One action entry inside a [`DropdownMenu`].
#[component]
pub fn DropdownItem(
    /// Handler to run on selection; the session closes right after it
    #[prop(into)] on_select: Callback<()>,
    /// Extra class, e.g. for destructive entries
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let handle = use_context::<MenuHandle>();

    let on_click = move |_| {
        on_select.run(());
        if let Some(handle) = handle {
            handle.close();
        }
    };

    let item_class = if class.is_empty() {
        "dropdown-item".to_string()
    } else {
        format!("dropdown-item {class}")
    };

    view! {
        <button type="button" class=item_class on:click=on_click>
            {children()}
        </button>
    }
}
