//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="w-full">
            <nav class="p-4 w-full flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"EventDesk"</h1>
                </div>
                <div class="flex items-center gap-2">
                    <Show when=move || session.is_admin()>
                        <A
                            href="/dashboard"
                            attr:class="p-1 px-2 bg-indigo-600 text-white border-gray-400 border rounded-md shadow-lg font-semibold"
                        >
                            "Dashboard"
                        </A>
                    </Show>
                    <A
                        href="/login"
                        attr:class="bg-gray-100 p-1 px-2 border-gray-400 border rounded-md shadow-lg font-semibold"
                    >
                        "Log in as admin"
                    </A>
                    <A
                        href="/user-login"
                        attr:class="p-1 px-2 bg-blue-500 text-white border-gray-400 border rounded-md shadow-lg font-semibold"
                    >
                        "Log in as user"
                    </A>
                </div>
            </nav>

            <main class="w-[80%] mx-auto mt-48 flex flex-col gap-4">
                <h1 class="text-7xl flex flex-col font-bold">
                    <span>"Create, Manage"</span>
                    <span>"Events and Tasks at"</span>
                    <span class="text-blue-500">"EventDesk"</span>
                </h1>
                <h2 class="text-[1.2rem] font-semibold text-gray-500 ml-3">
                    "Register or log in to unlock the features of EventDesk"
                </h2>
            </main>
        </div>
    }
}
