//! Dashboard Sidebar
//!
//! Fixed navigation column for the admin area, with logout at the bottom.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::notify::use_notifier;
use crate::session::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let notifier = use_notifier();
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::admin::logout().await {
                Ok(message) => {
                    session.clear_admin();
                    if message.is_empty() {
                        notifier.success("Logged out.");
                    } else {
                        notifier.success(message);
                    }
                    navigate("/login", Default::default());
                }
                Err(err) => notifier.error(err.user_message("Failed to logout!")),
            }
        });
    };

    view! {
        <div class="w-64 bg-gray-800 text-white fixed h-screen top-0 left-0">
            <div class="p-4">
                <h2 class="text-2xl font-bold">"Dashboard"</h2>
            </div>

            <ul class="mt-6">
                <li>
                    <A href="/dashboard/events" attr:class="block py-2 px-4 hover:bg-gray-700 text-center">
                        "Events"
                    </A>
                </li>
                <li>
                    <A href="/dashboard/tasks" attr:class="block py-2 px-4 hover:bg-gray-700 text-center">
                        "Tasks"
                    </A>
                </li>
                <li>
                    <A href="/dashboard/attendees" attr:class="block py-2 px-4 hover:bg-gray-700 text-center">
                        "Attendees"
                    </A>
                </li>
            </ul>

            <div class="absolute bottom-4 w-full px-4">
                <button
                    on:click=logout
                    class="w-full bg-red-500 text-white py-2 px-4 rounded-md hover:bg-red-600 transition duration-200"
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
