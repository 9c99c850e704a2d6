//! Event Detail Page
//!
//! Task table for one event, with per-task attendee assignment through the
//! modal. A confirmed assignment patches the task row in place; no reload.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::AssignModal;
use crate::models::{self, AttendeeRef};
use crate::remote::{use_remote, RemoteState};

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let event_id = use_params_map()
        .get_untracked()
        .get("eventId")
        .unwrap_or_default();
    let navigate = use_navigate();

    let tasks = use_remote({
        let event_id = event_id.clone();
        move || {
            let id = event_id.clone();
            async move { api::admin::tasks_for_event(&id).await }
        }
    });

    // Which task the assignment modal is open for, if any
    let (assigning, set_assigning) = signal(None::<String>);

    let on_assigned = move |(task_id, attendee): (String, AttendeeRef)| {
        tasks.patch(|list| models::assign_to_task(list, &task_id, attendee));
    };

    let back = move |_| navigate("/dashboard/events", Default::default());

    view! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <div class="max-w-5xl mx-auto">
                <h1 class="text-4xl font-bold text-gray-800 mb-6 text-center">"Tasks for Event"</h1>

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
                        <p class="text-gray-600">"No tasks found for this event."</p>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => view! {
                        <table class="min-w-full bg-white border border-gray-200">
                            <thead>
                                <tr class="bg-gray-100">
                                    <th class="py-2 px-4 text-left">"Agenda"</th>
                                    <th class="py-2 px-4 text-left">"Status"</th>
                                    <th class="py-2 px-4 text-left">"Due Date"</th>
                                    <th class="py-2 px-4 text-left">"Assigned Attendees"</th>
                                    <th class="py-2 px-4 text-left">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.iter().map(|task| {
                                    let task_id = task.id.clone();
                                    view! {
                                        <tr class="border-t border-gray-200">
                                            <td class="py-2 px-4">{task.agenda.clone()}</td>
                                            <td class="py-2 px-4">{task.status.clone()}</td>
                                            <td class="py-2 px-4">{task.due.clone()}</td>
                                            <td class="py-2 px-4">
                                                {if task.assigned.is_empty() {
                                                    view! {
                                                        <p class="text-sm text-gray-600">
                                                            "No attendees assigned"
                                                        </p>
                                                    }
                                                    .into_any()
                                                } else {
                                                    view! {
                                                        <ul>
                                                            {task.assigned.iter().map(|attendee| view! {
                                                                <li class="text-sm text-gray-600">
                                                                    {attendee.full_name.clone()}
                                                                    " (" {attendee.email.clone()} ")"
                                                                </li>
                                                            }).collect_view()}
                                                        </ul>
                                                    }
                                                    .into_any()
                                                }}
                                            </td>
                                            <td class="py-2 px-4">
                                                <button
                                                    on:click=move |_| {
                                                        set_assigning.set(Some(task_id.clone()))
                                                    }
                                                    class="mt-2 bg-indigo-600 text-white py-2 px-6 rounded-md hover:bg-indigo-700"
                                                >
                                                    "Assign Attendee"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                })}

                <button
                    on:click=back
                    class="mt-6 bg-gray-600 text-white py-2 px-6 rounded-md hover:bg-gray-700 transition duration-300"
                >
                    "Back to Events"
                </button>
            </div>

            {move || assigning.get().map(|task_id| view! {
                <AssignModal
                    task_id=task_id
                    on_close=move |_: ()| set_assigning.set(None)
                    on_assigned=on_assigned
                />
            })}
        </div>
    }
}
