//! Board Controller
//!
//! Column partitioning and mutation dispatch. Every dispatcher is
//! fire-and-forget: the board never patches itself optimistically, it
//! re-renders from the cache after the post-success invalidation.

use leptos::task::spawn_local;

use crate::api;
use crate::cache::TaskCache;
use crate::models::{Task, TaskStatus};
use crate::notify;

/// Split the cached collection into the three status columns.
///
/// A task whose status matches no column is left out rather than failing
/// the partition.
pub fn partition_by_status(tasks: &[Task]) -> [Vec<Task>; 3] {
    let mut columns: [Vec<Task>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for task in tasks {
        if let Some(idx) = task.status.column_index() {
            columns[idx].push(task.clone());
        }
    }
    columns
}

/// Bulk move entries offered by a column's menu, as (target, label).
///
/// Single-step affordances only; the underlying operation accepts any
/// status pair.
pub fn bulk_move_targets(status: TaskStatus) -> &'static [(TaskStatus, &'static str)] {
    match status {
        TaskStatus::New => &[(TaskStatus::InProgress, "ВСЕ → В РАБОТЕ")],
        TaskStatus::InProgress => &[
            (TaskStatus::Done, "ВСЕ → ГОТОВО"),
            (TaskStatus::New, "ВЕРНУТЬ ВСЕ В НОВЫЕ"),
        ],
        TaskStatus::Done => &[(TaskStatus::New, "ВЕРНУТЬ ВСЕ В НОВЫЕ")],
        TaskStatus::Unknown => &[],
    }
}

/// Move one task to `status`. The only single-task status path; any
/// status-to-status jump is accepted.
pub fn dispatch_update_status(cache: TaskCache, id: u32, status: TaskStatus) {
    spawn_local(async move {
        web_sys::console::log_1(&format!("[BOARD] update task {} -> {}", id, status.as_str()).into());
        match api::update_task_status(id, status).await {
            Ok(_) => cache.invalidate(),
            Err(err) => notify::mutation_failed("update", &err),
        }
    });
}

pub fn dispatch_delete(cache: TaskCache, id: u32) {
    spawn_local(async move {
        match api::delete_task(id).await {
            Ok(()) => cache.invalidate(),
            Err(err) => notify::mutation_failed("delete", &err),
        }
    });
}

/// One set-based request; the server decides which tasks are in
/// `from` at processing time.
pub fn dispatch_bulk_move(cache: TaskCache, from: TaskStatus, to: TaskStatus) {
    spawn_local(async move {
        web_sys::console::log_1(&format!("[BOARD] bulk move {} -> {}", from.as_str(), to.as_str()).into());
        match api::bulk_move(from, to).await {
            Ok(()) => cache.invalidate(),
            Err(err) => notify::mutation_failed("bulk move", &err),
        }
    });
}

/// Irreversible; the caller confirms destructive intent before calling.
pub fn dispatch_bulk_delete(cache: TaskCache, status: TaskStatus) {
    spawn_local(async move {
        web_sys::console::log_1(&format!("[BOARD] bulk delete {}", status.as_str()).into());
        match api::bulk_delete(status).await {
            Ok(()) => cache.invalidate(),
            Err(err) => notify::mutation_failed("bulk delete", &err),
        }
    });
}
