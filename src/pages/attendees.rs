//! Attendees List Page
//!
//! Roster of attendee cards with delete. Deletion refetches the roster
//! rather than patching, because the backend recomputes assignment state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};

const DEFAULT_COVER: &str = "/default-cover.jpg";

#[component]
pub fn AttendeesPage() -> impl IntoView {
    let notifier = use_notifier();
    let attendees = use_remote(|| async { api::admin::list_attendees().await });

    let delete_attendee = move |user_id: String| {
        spawn_local(async move {
            match api::admin::delete_attendee(&user_id).await {
                Ok(_) => {
                    notifier.success("Attendee deleted successfully!");
                    attendees.retry();
                }
                Err(err) => notifier.error(err.user_message("Error deleting attendee.")),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 py-8 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <h1 class="text-3xl font-bold text-gray-700 mb-6">"Attendees"</h1>

                <A
                    href="/dashboard/attendees/add"
                    attr:class="inline-block bg-indigo-600 text-white py-3 px-6 rounded-md hover:bg-indigo-700 transition duration-300 mb-6"
                >
                    "Add Attendee"
                </A>

                {move || attendees.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-gray-500">"Loading attendees..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-red-500 mb-4">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) if list.is_empty() => view! {
                        <div class="text-center text-gray-500">"No attendees available."</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                            {list.iter().map(|attendee| {
                                let cover = attendee
                                    .cover_image
                                    .clone()
                                    .unwrap_or_else(|| DEFAULT_COVER.to_string());
                                let assigned = attendee.is_assigned();
                                let user_id = attendee.id.clone();
                                view! {
                                    <div class="bg-white p-6 rounded-lg shadow-lg hover:shadow-2xl transition duration-300 ease-in-out transform hover:scale-105">
                                        <div class="flex items-center space-x-4">
                                            <img
                                                src=cover
                                                alt=attendee.full_name.clone()
                                                class="w-16 h-16 rounded-full object-cover"
                                            />
                                            <div>
                                                <h2 class="text-xl font-semibold text-gray-800">
                                                    {attendee.full_name.clone()}
                                                </h2>
                                                <p class="text-gray-600">{attendee.email.clone()}</p>
                                            </div>
                                        </div>
                                        <div class="mt-4 text-sm">
                                            <span class=if assigned {
                                                "text-green-600 font-semibold"
                                            } else {
                                                "text-red-600 font-semibold"
                                            }>
                                                {if assigned { "Assigned" } else { "Not Assigned" }}
                                            </span>
                                        </div>
                                        <button
                                            on:click=move |_| delete_attendee(user_id.clone())
                                            class="mt-4 bg-red-600 text-white py-2 px-6 rounded-md hover:bg-red-700 transition duration-300"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any(),
                })}
            </div>
        </div>
    }
}
