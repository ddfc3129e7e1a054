//! New Task Form Component
//!
//! Creation form for the board. The open/closed flag lives with the
//! board; the title is form-local and reset on successful submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::cache::use_task_cache;
use crate::notify;

#[component]
pub fn NewTaskForm(set_open: WriteSignal<bool>) -> impl IntoView {
    let cache = use_task_cache();

    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        // Whitespace-only titles never reach the server.
        if text.trim().is_empty() { return; }

        spawn_local(async move {
            match api::create_task(text.trim()).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_open.set(false);
                    cache.invalidate();
                }
                Err(err) => notify::mutation_failed("create", &err),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="form-caption">"НОВАЯ КОМАНДА"</div>
            <input
                type="text"
                placeholder="Введите название задачи..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>
                    "[ESC] ОТМЕНА"
                </button>
                <button type="submit">"ВЫПОЛНИТЬ"</button>
            </div>
        </form>
    }
}
