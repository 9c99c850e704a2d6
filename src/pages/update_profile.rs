//! Update Profile Page
//!
//! Prefills from the current profile. Password is optional; when given it
//! must match the confirmation field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::UserProfile;
use crate::notify::use_notifier;
use crate::remote::{use_remote, RemoteState};
use crate::session::use_session;
use crate::validate;

#[component]
pub fn UpdateProfilePage() -> impl IntoView {
    let profile = use_remote(|| async { api::user::me().await });

    view! {
        <div class="min-h-screen bg-gray-100 py-8 px-4">
            <div class="max-w-xl mx-auto bg-white p-8 shadow-md rounded-lg">
                <h1 class="text-3xl font-bold text-gray-700 mb-6">"Update Profile"</h1>
                {move || profile.with(|state| match state {
                    RemoteState::Loading => view! {
                        <div class="text-center text-xl font-bold text-gray-500">"Loading..."</div>
                    }
                    .into_any(),
                    RemoteState::Errored(msg) => view! {
                        <div class="text-center text-xl font-bold text-red-500">{msg.clone()}</div>
                    }
                    .into_any(),
                    RemoteState::Ready(profile) => {
                        view! { <ProfileForm profile=profile.clone() /> }.into_any()
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn ProfileForm(profile: UserProfile) -> impl IntoView {
    let notifier = use_notifier();
    let session = use_session();
    let navigate = use_navigate();

    let (full_name, set_full_name) = signal(profile.full_name.clone());
    let (email, set_email) = signal(profile.email.clone());
    let (username, set_username) = signal(profile.username.clone());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get();
        let email = email.get();
        let username = username.get();
        let password = password.get();
        let confirm = confirm.get();

        if let Err(msg) =
            validate::profile_update(&full_name, &email, &username, &password, &confirm)
        {
            notifier.error(msg);
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            let new_password = if password.is_empty() {
                None
            } else {
                Some(password.as_str())
            };
            match api::user::update_profile(&full_name, &email, &username, new_password).await {
                Ok(_) => {
                    session.set_user(Some(UserProfile {
                        full_name: full_name.clone(),
                        email: email.clone(),
                        username: username.clone(),
                    }));
                    notifier.success("Profile updated successfully.");
                    navigate("/user-home", Default::default());
                }
                Err(err) => notifier.error(err.user_message("Failed to update profile.")),
            }
        });
    };

    view! {
        <form on:submit=submit class="space-y-4">
            <div>
                <label class="block text-sm font-semibold" for="fullName">"Full Name"</label>
                <input
                    type="text"
                    id="fullName"
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
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <div>
                <label class="block text-sm font-semibold" for="password">
                    "New Password (optional)"
                </label>
                <input
                    type="password"
                    id="password"
                    placeholder="Leave blank to keep current password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <div>
                <label class="block text-sm font-semibold" for="confirm">"Confirm Password"</label>
                <input
                    type="password"
                    id="confirm"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    class="w-full p-2 border border-gray-300 rounded-md"
                />
            </div>
            <button
                type="submit"
                class="w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 transition duration-300"
            >
                "Save Changes"
            </button>
        </form>
    }
}
