//! Add Event Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, admin::NewEventArgs};
use crate::notify::use_notifier;
use crate::validate;

#[component]
pub fn AddEventPage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (date, set_date) = signal(String::new());

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
            let args = NewEventArgs {
                name: &name,
                description: &description,
                location: &location,
                date: &date,
            };
            match api::admin::add_event(&args).await {
                Ok(message) => {
                    if message.is_empty() {
                        notifier.success("Event created.");
                    } else {
                        notifier.success(message);
                    }
                    navigate("/dashboard/events", Default::default());
                }
                Err(err) => {
                    notifier.error(err.user_message("Error adding event. Please try again."))
                }
            }
        });
    };

    view! {
        <div>
            <h1 class="text-3xl font-bold text-gray-700 mb-4">"Add New Event"</h1>

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
                    "Add Event"
                </button>
            </form>
        </div>
    }
}
