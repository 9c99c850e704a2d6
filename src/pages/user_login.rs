//! End-User Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::notify::use_notifier;
use crate::session::use_session;
use crate::validate;

#[component]
pub fn UserLoginPage() -> impl IntoView {
    let notifier = use_notifier();
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if let Err(msg) = validate::login(&email, &password) {
            notifier.error(msg);
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::user::login(&email, &password).await {
                Ok(message) => {
                    if message.is_empty() {
                        notifier.success("Logged in.");
                    } else {
                        notifier.success(message);
                    }
                    if let Ok(profile) = api::user::me().await {
                        session.set_user(Some(profile));
                    }
                    navigate("/user-home", Default::default());
                }
                Err(err) => notifier.error(err.user_message("Something went wrong!")),
            }
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="bg-white shadow-md rounded-lg p-8 w-full max-w-md">
                <form on:submit=submit>
                    <h2 class="text-2xl font-bold mb-6 text-center text-gray-800">"Login"</h2>
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
                        "Login"
                    </button>
                    <A href="/user-register" attr:class="underline text-blue-500 mt-4 inline-block">
                        "Don't have an account? Register here"
                    </A>
                </form>
            </div>
        </div>
    }
}
