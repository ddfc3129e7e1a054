//! Task Card Component
//!
//! A draggable card with priority badge, id code, due date and assignee,
//! plus a per-task action menu.

use leptos::prelude::*;
use leptos_overlay::{DropdownItem, DropdownMenu};

use crate::board::{dispatch_delete, dispatch_update_status};
use crate::cache::use_task_cache;
use crate::dnd;
use crate::models::{Task, TaskStatus};

/// Zero-padded card id code shown on every card
fn card_code(id: u32) -> String {
    format!("TASK-{:04}", id)
}

/// Date part of an ISO-8601 timestamp
fn due_date_label(due: &str) -> String {
    due.split('T').next().unwrap_or(due).to_string()
}

/// Uppercase initial of the assignee, "U" when unassigned
fn assignee_initial(assigned_to: Option<&str>) -> String {
    assigned_to
        .and_then(|name| name.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

/// Menu label for moving a task to `target`
fn move_action_label(target: TaskStatus) -> &'static str {
    match target {
        TaskStatus::New => "ВЕРНУТЬ В НОВЫЕ",
        TaskStatus::InProgress => "НАЧАТЬ РАБОТУ",
        TaskStatus::Done => "ЗАВЕРШИТЬ",
        TaskStatus::Unknown => "",
    }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let cache = use_task_cache();
    let id = task.id;
    let status = task.status;

    let on_dragstart = move |ev: web_sys::DragEvent| {
        dnd::card_drag_start(&ev, id);
    };

    view! {
        <div
            class=format!("task-card card-{}", status.as_str())
            draggable="true"
            on:dragstart=on_dragstart
        >
            <div class="card-top">
                <span class=format!("priority-badge {}", task.priority.css_class())>
                    {task.priority.label()}
                </span>
                <DropdownMenu trigger=|| view! { <span class="card-menu-btn">"⋮"</span> }>
                    {move || TaskStatus::COLUMNS.iter().copied()
                        .filter(|target| *target != status)
                        .map(|target| view! {
                            <DropdownItem on_select=move |_| dispatch_update_status(cache, id, target)>
                                {move_action_label(target)}
                            </DropdownItem>
                        })
                        .collect_view()}
                    <div class="menu-divider"></div>
                    <DropdownItem class="danger" on_select=move |_| dispatch_delete(cache, id)>
                        "УНИЧТОЖИТЬ"
                    </DropdownItem>
                </DropdownMenu>
            </div>

            <div class="card-code">{card_code(id)}</div>
            <h4 class="card-title">{task.title.clone()}</h4>

            <div class="card-footer">
                <span class="assignee-initial">
                    {assignee_initial(task.assigned_to_username.as_deref())}
                </span>
                {task.due_date.as_ref().map(|due| view! {
                    <span class="due-date">{due_date_label(due)}</span>
                })}
            </div>
        </div>
    }
}
