//! Task Board Component
//!
//! Reads the cached collection, partitions it into the three status
//! columns and hosts the creation form.

use leptos::prelude::*;

use crate::board::partition_by_status;
use crate::components::{BoardColumn, NewTaskForm};
use crate::models::TaskStatus;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn TaskBoard() -> impl IntoView {
    let store = use_board_store();
    let (form_open, set_form_open) = signal(false);

    let columns = Memo::new(move |_| {
        let tasks = store.tasks().get().unwrap_or_default();
        partition_by_status(&tasks)
    });

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="board-loading">"ЗАГРУЗКА ДАННЫХ СИСТЕМЫ..."</div> }
        >
            <div class="task-board">
                <Show when=move || store.fetch_error().get().is_some()>
                    <div class="fetch-error-banner">
                        {move || store.fetch_error().get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="board-actions">
                    <button class="create-task-btn" on:click=move |_| set_form_open.set(true)>
                        "+ СОЗДАТЬ ЗАДАЧУ"
                    </button>
                </div>

                <Show when=move || form_open.get()>
                    <NewTaskForm set_open=set_form_open />
                </Show>

                <div class="board-columns">
                    {TaskStatus::COLUMNS.iter().enumerate().map(|(idx, status)| {
                        let status = *status;
                        let column_tasks = Memo::new(move |_| columns.get()[idx].clone());
                        view! { <BoardColumn status=status tasks=column_tasks /> }
                    }).collect_view()}
                </div>
            </div>
        </Show>
    }
}
