//! Tasks List Page
//!
//! All tasks across events, with inline edit modal and delete. Confirmed
//! mutations patch the in-memory list in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::models::{self, EventTask};
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};

#[component]
pub fn TasksPage() -> impl IntoView {
    let notifier = use_notifier();
    let tasks = use_remote(|| async { api::admin::list_tasks().await });

    let (editing, set_editing) = signal(None::<EventTask>);
    let (agenda, set_agenda) = signal(String::new());
    let (due, set_due) = signal(String::new());

    let open_edit = move |task: EventTask| {
        set_agenda.set(task.agenda.clone());
        set_due.set(task.due.clone());
        set_editing.set(Some(task));
    };

    let delete_task = move |task_id: String| {
        spawn_local(async move {
            match api::admin::delete_task(&task_id).await {
                Ok(_) => {
                    notifier.success("Task deleted.");
                    tasks.patch(|list| models::remove_task(list, &task_id));
                }
                Err(err) => notifier.error(err.user_message("Error deleting task.")),
            }
        });
    };

    let submit_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(task) = editing.get() else { return };
        let agenda = agenda.get();
        let due = due.get();
        if agenda.trim().is_empty() || due.trim().is_empty() {
            notifier.error("Please fill in all fields.");
            return;
        }
        spawn_local(async move {
            match api::admin::update_task(&task.id, &agenda, &due).await {
                Ok(_) => {
                    notifier.success("Task updated.");
                    tasks.patch(|list| models::rewrite_task(list, &task.id, &agenda, &due));
                    set_editing.set(None);
                }
                Err(err) => notifier.error(err.user_message("Error updating task.")),
            }
        });
    };

    view! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <h1 class="text-3xl font-bold text-gray-700">"Tasks"</h1>

            <A
                href="/dashboard/tasks/add-task"
                attr:class="inline-block mt-4 bg-indigo-600 text-white py-2 px-4 rounded hover:bg-indigo-700 transition duration-300"
            >
                "Add Task"
            </A>

            <div class="mt-6 flex flex-wrap gap-4">
                {move || tasks.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-xl font-bold text-gray-500">"Loading..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-xl font-bold text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) if list.is_empty() => view! {
                        <p class="text-gray-600">"No tasks available."</p>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => list
                        .iter()
                        .map(|task| {
                            let task = task.clone();
                            let edit_target = task.clone();
                            let task_id = task.id.clone();
                            view! {
                                <div class="bg-white p-4 rounded shadow mb-4">
                                    <h2 class="text-xl font-semibold">{task.agenda.clone()}</h2>
                                    <p>"Status: " {task.status.clone()}</p>
                                    <p>"Last Date: " {task.due.clone()}</p>
                                    <p>
                                        "Related Event: "
                                        {task
                                            .related_event
                                            .as_ref()
                                            .map(|event| event.label().to_string())
                                            .unwrap_or_default()}
                                    </p>

                                    <div class="mt-4 flex space-x-4">
                                        <button
                                            on:click=move |_| open_edit(edit_target.clone())
                                            class="bg-yellow-500 text-white px-4 py-2 rounded hover:bg-yellow-600"
                                        >
                                            "Edit Task"
                                        </button>
                                        <button
                                            on:click=move |_| delete_task(task_id.clone())
                                            class="bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600"
                                        >
                                            "Delete Task"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                })}
            </div>

            <Show when=move || editing.with(|e| e.is_some())>
                <div class="fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center">
                    <div class="bg-white p-6 rounded shadow-lg">
                        <h2 class="text-2xl font-semibold">"Edit Task"</h2>
                        <form on:submit=submit_edit>
                            <div class="mb-4">
                                <label class="block text-sm font-medium text-gray-700">"Agenda"</label>
                                <input
                                    type="text"
                                    prop:value=move || agenda.get()
                                    on:input=move |ev| set_agenda.set(event_target_value(&ev))
                                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                                />
                            </div>
                            <div class="mb-4">
                                <label class="block text-sm font-medium text-gray-700">"Last Date"</label>
                                <input
                                    type="date"
                                    prop:value=move || due.get()
                                    on:input=move |ev| set_due.set(event_target_value(&ev))
                                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                                />
                            </div>
                            <div class="flex space-x-4">
                                <button
                                    type="submit"
                                    class="bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600"
                                >
                                    "Update"
                                </button>
                                <button
                                    type="button"
                                    on:click=move |_| set_editing.set(None)
                                    class="bg-gray-500 text-white px-4 py-2 rounded hover:bg-gray-600"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
