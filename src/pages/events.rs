//! Events List Page
//!
//! Fetch-on-mount list of event cards with view/update/delete affordances.
//! A confirmed delete removes the card from the in-memory list without a
//! refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::models::{self, Event};
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};

#[component]
pub fn EventsPage() -> impl IntoView {
    let notifier = use_notifier();
    let events = use_remote(|| async { api::admin::list_events().await });

    let delete_event = move |event_id: String| {
        spawn_local(async move {
            match api::admin::delete_event(&event_id).await {
                Ok(_) => {
                    notifier.success("Event deleted successfully!");
                    events.patch(|list| models::remove_event(list, &event_id));
                }
                Err(err) => notifier.error(err.user_message("Failed to delete event.")),
            }
        });
    };

    view! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <div class="max-w-7xl mx-auto">
                <h1 class="text-4xl font-extrabold text-gray-800 mb-8">"Upcoming Events"</h1>

                <A
                    href="/dashboard/events/add"
                    attr:class="inline-block bg-indigo-600 text-white py-2 px-6 rounded-md hover:bg-indigo-700 transition duration-300 mb-6"
                >
                    "Add New Event"
                </A>

                {move || events.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-xl font-bold text-gray-500">"Loading..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-xl font-bold text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) if list.is_empty() => view! {
                        <div class="text-center text-lg text-gray-600">
                            "No events available at the moment."
                        </div>
                    }
                    .into_any(),
                    RemoteState::Ready(list) => view! {
                        <div class="flex flex-wrap gap-6">
                            {list
                                .iter()
                                .map(|event| view! {
                                    <EventCard event=event.clone() on_delete=delete_event />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })}
            </div>
        </div>
    }
}

#[component]
fn EventCard(event: Event, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let pct = event.completion_pct();
    let event_id = event.id.clone();

    view! {
        <div class="bg-white p-6 rounded-lg shadow-lg hover:shadow-xl transition duration-300 w-[25%]">
            <div>
                <h2 class="text-2xl font-semibold text-gray-800">{event.title.clone()}</h2>
                <p class="text-lg text-gray-600 mt-2">{event.description.clone()}</p>
                <div class="mt-4 text-sm text-gray-500">
                    <p>"Attendees: " {event.total_attendees}</p>
                    <p>"Location: " {event.location.clone()}</p>
                    <p>"Date: " {event.date.clone()}</p>
                </div>

                <div class="mt-4">
                    <p class="font-semibold text-gray-700">"Task Completion: " {pct} "%"</p>
                    <div class="w-full bg-gray-300 rounded-full h-2.5 mt-2">
                        <div
                            class="bg-indigo-600 h-2.5 rounded-full"
                            style=format!("width: {}%", pct)
                        ></div>
                    </div>
                </div>
            </div>

            <div class="mt-4 flex space-x-4">
                <A
                    href=format!("/dashboard/event/{}", event.id)
                    attr:class="text-indigo-600 hover:text-indigo-800 font-semibold"
                >
                    "View Details"
                </A>
                <A
                    href=format!("/dashboard/events/update/{}", event.id)
                    attr:class="text-yellow-600 hover:text-yellow-800 font-semibold"
                >
                    "Update"
                </A>
                <button
                    on:click=move |_| on_delete.run(event_id.clone())
                    class="text-red-600 hover:text-red-800 font-semibold"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
