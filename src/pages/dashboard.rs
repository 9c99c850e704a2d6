//! Admin Dashboard Shell
//!
//! Sidebar plus an outlet for the nested admin pages. The shell renders for
//! any visitor; unauthenticated fetches inside simply land in their errored
//! state when the backend rejects the cookie.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::Sidebar;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex">
            <Sidebar />
            <div class="flex-1 p-6 overflow-y-auto bg-gray-100 ml-64">
                <Outlet />
            </div>
        </div>
    }
}
