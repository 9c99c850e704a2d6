//! Add Task Page
//!
//! Pick an event card first, then fill in the task details for it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};
use crate::validate;

#[component]
pub fn AddTaskPage() -> impl IntoView {
    let notifier = use_notifier();
    let events = use_remote(|| async { api::admin::list_events().await });

    let (selected, set_selected) = signal(None::<String>);
    let (agenda, set_agenda) = signal(String::new());
    let (due, set_due) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let agenda_value = agenda.get();
        let due_value = due.get();
        let event_id = selected.get();

        if let Err(msg) = validate::new_task(event_id.is_some(), &agenda_value, &due_value) {
            notifier.error(msg);
            return;
        }
        let Some(event_id) = event_id else { return };
        spawn_local(async move {
            match api::admin::create_task(&event_id, &agenda_value, &due_value).await {
                Ok(_) => {
                    notifier.success("Task successfully created!");
                    set_agenda.set(String::new());
                    set_due.set(String::new());
                    set_selected.set(None);
                }
                Err(err) => notifier.error(err.user_message("Error creating task.")),
            }
        });
    };

    view! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <h1 class="text-3xl font-bold text-gray-700 mb-6">"Add Task"</h1>
            <div>
                <h2 class="text-xl font-semibold text-gray-700 mb-4">"Select an Event"</h2>
                {move || events.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-gray-500">"Loading events..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-6">
                            {list.iter().map(|event| {
                                let event_id = event.id.clone();
                                let card_id = event.id.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if selected.get().as_deref() == Some(card_id.as_str()) {
                                                "p-4 border rounded border-indigo-500"
                                            } else {
                                                "p-4 border rounded border-gray-300"
                                            }
                                        }
                                        on:click=move |_| set_selected.set(Some(event_id.clone()))
                                    >
                                        <h3 class="text-lg font-bold text-gray-800">
                                            {event.title.clone()}
                                        </h3>
                                        <p class="text-gray-600">{event.description.clone()}</p>
                                        <p class="text-sm text-gray-500">
                                            <strong>"Date: "</strong> {event.date.clone()}
                                        </p>
                                        <p class="text-sm text-gray-500">
                                            <strong>"Location: "</strong> {event.location.clone()}
                                        </p>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any(),
                })}
            </div>

            <Show when=move || selected.with(|s| s.is_some())>
                <form on:submit=submit class="bg-white p-6 shadow rounded-lg">
                    <h2 class="text-2xl font-semibold text-gray-800 mb-4">"Add Task Details"</h2>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-2" for="agenda">"Agenda"</label>
                        <input
                            type="text"
                            id="agenda"
                            placeholder="Enter task agenda"
                            prop:value=move || agenda.get()
                            on:input=move |ev| set_agenda.set(event_target_value(&ev))
                            class="w-full p-2 border rounded"
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-2" for="lastDate">"Last Date"</label>
                        <input
                            type="date"
                            id="lastDate"
                            prop:value=move || due.get()
                            on:input=move |ev| set_due.set(event_target_value(&ev))
                            class="w-full p-2 border rounded"
                        />
                    </div>
                    <button
                        type="submit"
                        class="bg-indigo-600 text-white py-2 px-4 rounded hover:bg-indigo-700 transition duration-300"
                    >
                        "Create Task"
                    </button>
                </form>
            </Show>
        </div>
    }
}
