//! Routed Pages
//!
//! One component per resource-and-action pair.

mod add_attendee;
mod add_event;
mod add_task;
mod admin_login;
mod attendees;
mod dashboard;
mod event_detail;
mod events;
mod home;
mod tasks;
mod update_event;
mod update_profile;
mod user_home;
mod user_login;
mod user_register;

pub use add_attendee::AddAttendeePage;
pub use add_event::AddEventPage;
pub use add_task::AddTaskPage;
pub use admin_login::AdminLoginPage;
pub use attendees::AttendeesPage;
pub use dashboard::DashboardPage;
pub use event_detail::EventDetailPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use tasks::TasksPage;
pub use update_event::UpdateEventPage;
pub use update_profile::UpdateProfilePage;
pub use user_home::UserHomePage;
pub use user_login::UserLoginPage;
pub use user_register::UserRegisterPage;
