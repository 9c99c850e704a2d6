//! Attendee Assignment Modal
//!
//! Overlays the event-detail page. The roster is fetched fresh every time
//! the modal opens; picking an attendee submits one assignment call scoped
//! to the task the modal was opened for. Success closes the modal and hands
//! the new assignee back to the host page; any failure leaves the modal
//! open for retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Attendee, AttendeeRef};
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};

const DEFAULT_COVER: &str = "/default-cover.jpg";

#[component]
pub fn AssignModal(
    task_id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_assigned: Callback<(String, AttendeeRef)>,
) -> impl IntoView {
    let notifier = use_notifier();
    let roster = use_remote(|| async { api::admin::list_attendees().await });
    let task_id = StoredValue::new(task_id);

    let assign = move |attendee: Attendee| {
        spawn_local(async move {
            let tid = task_id.get_value();
            match api::admin::assign_attendee(&tid, &attendee.id).await {
                Ok(_) => {
                    notifier.success("Attendee assigned successfully!");
                    on_assigned.run((
                        tid,
                        AttendeeRef {
                            id: attendee.id,
                            full_name: attendee.full_name,
                            email: attendee.email,
                        },
                    ));
                    on_close.run(());
                }
                Err(err) => notifier.error(err.user_message("Error assigning attendee.")),
            }
        });
    };

    view! {
        <div class="fixed inset-0 bg-gray-500 bg-opacity-50 flex justify-center items-center">
            <div class="bg-white p-6 rounded-lg max-w-4xl w-full">
                <h2 class="text-xl font-semibold mb-4">"Select an Attendee"</h2>
                {move || roster.with(|state| match state {
                    RemoteState::Loading => {
                        view! { <p class="text-gray-500">"Loading attendees..."</p> }.into_any()
                    }
                    RemoteState::Errored(msg) => {
                        view! { <p class="text-red-500">{msg.clone()}</p> }.into_any()
                    }
                    RemoteState::Ready(attendees) => view! {
                        <table class="min-w-full bg-white border border-gray-200">
                            <thead>
                                <tr class="bg-gray-100">
                                    <th class="py-2 px-4 text-left">"Cover Image"</th>
                                    <th class="py-2 px-4 text-left">"Name"</th>
                                    <th class="py-2 px-4 text-left">"Email"</th>
                                    <th class="py-2 px-4 text-left">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {attendees.iter().map(|attendee| {
                                    let attendee = attendee.clone();
                                    let cover = attendee
                                        .cover_image
                                        .clone()
                                        .unwrap_or_else(|| DEFAULT_COVER.to_string());
                                    let row = attendee.clone();
                                    view! {
                                        <tr class="border-t border-gray-200">
                                            <td class="py-2 px-4">
                                                <img
                                                    src=cover
                                                    alt=attendee.full_name.clone()
                                                    class="w-12 h-12 rounded-full object-cover"
                                                />
                                            </td>
                                            <td class="py-2 px-4">{attendee.full_name.clone()}</td>
                                            <td class="py-2 px-4">{attendee.email.clone()}</td>
                                            <td class="py-2 px-4">
                                                <button
                                                    on:click=move |_| assign(row.clone())
                                                    class="bg-indigo-600 text-white py-1 px-4 rounded-md hover:bg-indigo-700"
                                                >
                                                    "Assign"
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
                <div class="mt-4 flex justify-end">
                    <button
                        on:click=move |_| on_close.run(())
                        class="bg-gray-600 text-white py-2 px-6 rounded-md hover:bg-gray-700"
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
