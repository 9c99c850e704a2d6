//! End-User Registration Page
//!
//! Multipart registration with a local cover-image preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::FormData;

use crate::api;
use crate::components::{FileSlot, ImagePicker};
use crate::notify::use_notifier;
use crate::validate;

#[component]
pub fn UserRegisterPage() -> impl IntoView {
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

        let form = FormData::new().unwrap();
        form.append_with_str("fullName", &full_name).unwrap();
        form.append_with_str("email", &email).unwrap();
        form.append_with_str("username", &username).unwrap();
        form.append_with_str("password", &password).unwrap();
        form.append_with_blob("coverImage", &file).unwrap();

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::user::register(form).await {
                Ok(message) => {
                    if message.is_empty() {
                        notifier.success("Registered. You can log in now.");
                    } else {
                        notifier.success(message);
                    }
                    navigate("/user-login", Default::default());
                }
                Err(err) => notifier.error(err.user_message("Something went wrong!")),
            }
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="bg-white shadow-md rounded-lg p-4 w-full max-w-md">
                <form on:submit=submit>
                    <h2 class="text-2xl font-bold mb-6 text-center text-gray-800">"Register"</h2>

                    <ImagePicker label="Cover Image" slot=cover />

                    <div class="mb-4">
                        <label for="email" class="block text-gray-700 font-medium mb-2">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div class="mb-4">
                        <label for="fullName" class="block text-gray-700 font-medium mb-2">"Full Name"</label>
                        <input
                            type="text"
                            id="fullName"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div class="mb-4">
                        <label for="username" class="block text-gray-700 font-medium mb-2">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div class="mb-4">
                        <label for="password" class="block text-gray-700 font-medium mb-2">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-blue-500 text-white py-2 px-4 rounded-md hover:bg-blue-600 transition duration-200"
                    >
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
