//! Application Shell
//!
//! Router wiring plus the app-wide contexts (notifier, session) and the
//! toast host that overlays every page.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::ToastHost;
use crate::notify::provide_notifier;
use crate::pages::{
    AddAttendeePage, AddEventPage, AddTaskPage, AdminLoginPage, AttendeesPage, DashboardPage,
    EventDetailPage, EventsPage, HomePage, TasksPage, UpdateEventPage, UpdateProfilePage,
    UserHomePage, UserLoginPage, UserRegisterPage,
};
use crate::session::provide_session;

#[component]
pub fn App() -> impl IntoView {
    provide_notifier();
    provide_session();

    view! {
        <Router>
            <ToastHost />
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=AdminLoginPage />
                    <Route path=path!("/user-login") view=UserLoginPage />
                    <Route path=path!("/user-register") view=UserRegisterPage />
                    <Route path=path!("/user-home") view=UserHomePage />
                    <Route path=path!("/update-profile") view=UpdateProfilePage />
                    <ParentRoute path=path!("/dashboard") view=DashboardPage>
                        <Route path=path!("") view=EventsPage />
                        <Route path=path!("events") view=EventsPage />
                        <Route path=path!("events/add") view=AddEventPage />
                        <Route path=path!("events/update/:eventId") view=UpdateEventPage />
                        <Route path=path!("event/:eventId") view=EventDetailPage />
                        <Route path=path!("tasks") view=TasksPage />
                        <Route path=path!("tasks/add-task") view=AddTaskPage />
                        <Route path=path!("attendees") view=AttendeesPage />
                        <Route path=path!("attendees/add") view=AddAttendeePage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100">
            <h1 class="text-4xl font-bold text-gray-800">"404"</h1>
            <p class="text-gray-600 mt-2">"The page you are looking for does not exist."</p>
        </div>
    }
}
