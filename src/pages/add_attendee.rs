//! Add Attendee Page (admin side)
//!
//! Same field set as self-registration, submitted as multipart because of
//! the cover image.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::FormData;

use crate::api;
use crate::components::{FileSlot, ImagePicker};
use crate::notify::use_notifier;
use crate::validate;

#[component]
pub fn AddAttendeePage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let cover = FileSlot::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get();
        let email = email.get();
        let username = username.get();
        let password = password.get();

        if let Err(msg) =
            validate::new_attendee(&full_name, &email, &username, &password, cover.is_set())
        {
            notifier.error(msg);
            return;
        }
        let Some(file) = cover.get() else { return };
        let navigate = navigate.clone();
        spawn_local(async move {
            let form = FormData::new().unwrap();
            form.append_with_str("fullName", &full_name).unwrap();
            form.append_with_str("email", &email).unwrap();
            form.append_with_str("username", &username).unwrap();
            form.append_with_str("password", &password).unwrap();
            form.append_with_blob("coverImage", &file).unwrap();

            match api::admin::add_attendee(form).await {
                Ok(_) => {
                    notifier.success("Attendee added successfully!");
                    navigate("/dashboard/attendees", Default::default());
                }
                Err(err) => {
                    notifier.error(err.user_message("Failed to add attendee. Please try again."))
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 py-8 px-4 sm:px-6 lg:px-8">
            <div class="max-w-xl mx-auto bg-white p-8 shadow-md rounded-lg">
                <h1 class="text-3xl font-bold text-gray-700 mb-6">"Add Attendee"</h1>
                <form on:submit=submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-semibold" for="fullName">"Full Name"</label>
                        <input
                            type="text"
                            id="fullName"
                            placeholder="Enter full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            class="w-full p-2 border border-gray-300 rounded-md"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-semibold" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full p-2 border border-gray-300 rounded-md"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-semibold" for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full p-2 border border-gray-300 rounded-md"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-semibold" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="8 to 15 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full p-2 border border-gray-300 rounded-md"
                        />
                    </div>
                    <ImagePicker label="Cover Image" slot=cover />
                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 transition duration-300"
                    >
                        "Add Attendee"
                    </button>
                </form>
            </div>
        </div>
    }
}
