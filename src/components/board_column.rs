//! Board Column Component
//!
//! One status column: header with live count and bulk menu, a drop
//! target for card drags, and the card list.

use leptos::prelude::*;
use leptos_overlay::{DropdownItem, DropdownMenu};

use crate::board::{bulk_move_targets, dispatch_bulk_delete, dispatch_bulk_move, dispatch_update_status};
use crate::cache::use_task_cache;
use crate::components::TaskCard;
use crate::dnd;
use crate::models::{Task, TaskStatus};
use crate::notify;

#[component]
pub fn BoardColumn(status: TaskStatus, tasks: Memo<Vec<Task>>) -> impl IntoView {
    let cache = use_task_cache();

    let on_dragover = move |ev: web_sys::DragEvent| dnd::column_drag_over(&ev);

    let on_drop = move |ev: web_sys::DragEvent| {
        // A drop without a usable task id changes nothing.
        if let Some(id) = dnd::dropped_task_id(&ev) {
            dispatch_update_status(cache, id, status);
        }
    };

    view! {
        <div
            class=format!("board-column column-{}", status.as_str())
            on:dragover=on_dragover
            on:drop=on_drop
        >
            <div class="column-header">
                <div class="column-header-row">
                    <h3 class="column-title">{status.label()}</h3>
                    <DropdownMenu trigger=|| view! { <span class="column-menu-btn">"⋮"</span> }>
                        {move || bulk_move_targets(status).iter().map(|(target, label)| {
                            let target = *target;
                            view! {
                                <DropdownItem on_select=move |_| dispatch_bulk_move(cache, status, target)>
                                    {*label}
                                </DropdownItem>
                            }
                        }).collect_view()}
                        <div class="menu-divider"></div>
                        <DropdownItem
                            class="danger"
                            on_select=move |_| {
                                if notify::confirm("ВНИМАНИЕ: УДАЛИТЬ ВСЕ ЗАДАЧИ В ЭТОМ СЕКТОРЕ?") {
                                    dispatch_bulk_delete(cache, status);
                                }
                            }
                        >
                            "ОЧИСТИТЬ СЕКТОР"
                        </DropdownItem>
                    </DropdownMenu>
                </div>
                <p class="column-count">{move || format!("// {} ЗАДАЧ", tasks.get().len())}</p>
            </div>

            <div class="column-cards">
                <For
                    each=move || tasks.get()
                    key=|task| {
                        // Key over the mutable fields so server-side edits re-render the card
                        (
                            task.id,
                            task.title.clone(),
                            task.status,
                            task.priority,
                            task.due_date.clone(),
                            task.assigned_to_username.clone(),
                        )
                    }
                    children=move |task| view! { <TaskCard task=task /> }
                />
                <Show when=move || tasks.get().is_empty()>
                    <div class="column-empty">"[ НЕТ ЗАДАЧ ]"</div>
                </Show>
            </div>
        </div>
    }
}
