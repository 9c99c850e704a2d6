//! Update Event Page
//!
//! Fetches the existing event, prefills the form, and routes back to the
//! events list on a confirmed update.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::models::Event;
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};
use crate::validate;

#[component]
pub fn UpdateEventPage() -> impl IntoView {
    let event_id = use_params_map()
        .get_untracked()
        .get("eventId")
        .unwrap_or_default();

    let event = use_remote({
        let event_id = event_id.clone();
        move || {
            let id = event_id.clone();
            async move { api::admin::get_event(&id).await }
        }
    });

    view! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <div class="max-w-4xl mx-auto bg-white p-8 shadow-md rounded-lg">
                <h1 class="text-2xl font-bold text-gray-700 mb-6">"Update Event"</h1>
                {move || event.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-xl font-bold text-gray-500">"Loading..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-xl font-bold text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(event) => {
                        view! { <UpdateEventForm event=event.clone() /> }.into_any()
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn UpdateEventForm(event: Event) -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();

    let event_id = StoredValue::new(event.id.clone());
    let (name, set_name) = signal(event.title.clone());
    let (description, set_description) = signal(event.description.clone());
    let (location, set_location) = signal(event.location.clone());
    let (date, set_date) = signal(event.date.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let description = description.get();
        let location = location.get();
        let date = date.get();

        if let Err(msg) = validate::new_event(&name, &description, &location, &date) {
            notifier.error(msg);
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            let id = event_id.get_value();
            match api::admin::update_event(&id, &name, &description, &location, &date).await {
                Ok(_) => {
                    notifier.success("Event updated successfully!");
                    navigate("/dashboard/events", Default::default());
                }
                Err(err) => {
                    notifier.error(err.user_message("Error updating event. Please try again."))
                }
            }
        });
    };

    view! {
        <form on:submit=submit class="space-y-4">
            <div class="mb-4">
                <label class="block text-sm font-semibold" for="name">"Event Name"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <div class="mb-4">
                <label class="block text-sm font-semibold" for="description">"Description"</label>
                <textarea
                    id="description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                ></textarea>
            </div>
            <div class="mb-4">
                <label class="block text-sm font-semibold" for="location">"Location"</label>
                <input
                    type="text"
                    id="location"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <div class="mb-4">
                <label class="block text-sm font-semibold" for="date">"Date"</label>
                <input
                    type="date"
                    id="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <button type="submit" class="bg-blue-500 text-white py-2 px-4 rounded-md">
                "Update Event"
            </button>
        </form>
    }
}
