//! Admin Endpoints
//!
//! Frontend bindings for the admin-facing backend routes. Identifiers ride
//! in the body as plain string fields, matching the backend's contract.

use serde::{Deserialize, Serialize};
use web_sys::FormData;

use super::{get_json, post_form_ack, post_json, post_json_ack, ApiResult};
use crate::models::{Attendee, Event, EventTask};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
pub struct NewEventArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub date: &'a str,
}

#[derive(Serialize)]
struct EventIdArgs<'a> {
    eventid: &'a str,
}

#[derive(Serialize)]
struct UpdateEventArgs<'a> {
    eventid: &'a str,
    name: &'a str,
    description: &'a str,
    location: &'a str,
    date: &'a str,
}

#[derive(Serialize)]
struct NewTaskArgs<'a> {
    eventid: &'a str,
    agenda: &'a str,
    lastdate: &'a str,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    taskid: &'a str,
    agenda: &'a str,
    lastdate: &'a str,
}

#[derive(Serialize)]
struct TaskIdArgs<'a> {
    taskid: &'a str,
}

// The tasks-by-event route alone expects camelCase
#[derive(Serialize)]
struct TasksByEventArgs<'a> {
    #[serde(rename = "eventId")]
    event_id: &'a str,
}

#[derive(Serialize)]
struct UserIdArgs<'a> {
    userid: &'a str,
}

#[derive(Serialize)]
struct AssignArgs<'a> {
    taskid: &'a str,
    userid: &'a str,
}

// ========================
// Payload Wrappers
// ========================

#[derive(Deserialize)]
struct TaskListPayload {
    #[serde(default)]
    tasks: Vec<EventTask>,
}

#[derive(Deserialize)]
struct EventTasksPayload {
    #[serde(rename = "formattedTasks", default)]
    formatted_tasks: Vec<EventTask>,
}

#[derive(Deserialize)]
struct AttendeesPayload {
    #[serde(default)]
    attendees: Vec<Attendee>,
}

// ========================
// Auth
// ========================

pub async fn login(email: &str, password: &str) -> ApiResult<String> {
    post_json_ack("admins/login", &LoginArgs { email, password }).await
}

pub async fn logout() -> ApiResult<String> {
    post_json_ack("admins/logout", &Empty {}).await
}

// ========================
// Events
// ========================

pub async fn add_event(args: &NewEventArgs<'_>) -> ApiResult<String> {
    post_json_ack("admins/addEvent", args).await
}

pub async fn list_events() -> ApiResult<Vec<Event>> {
    post_json("admins/getEvent", &Empty {}).await
}

pub async fn get_event(event_id: &str) -> ApiResult<Event> {
    post_json("admins/getevent", &EventIdArgs { eventid: event_id }).await
}

pub async fn update_event(
    event_id: &str,
    name: &str,
    description: &str,
    location: &str,
    date: &str,
) -> ApiResult<String> {
    post_json_ack(
        "admins/updateEvent",
        &UpdateEventArgs {
            eventid: event_id,
            name,
            description,
            location,
            date,
        },
    )
    .await
}

pub async fn delete_event(event_id: &str) -> ApiResult<String> {
    post_json_ack("admins/deleteEvent", &EventIdArgs { eventid: event_id }).await
}

// ========================
// Tasks
// ========================

pub async fn create_task(event_id: &str, agenda: &str, due: &str) -> ApiResult<String> {
    post_json_ack(
        "admins/createTask",
        &NewTaskArgs {
            eventid: event_id,
            agenda,
            lastdate: due,
        },
    )
    .await
}

pub async fn list_tasks() -> ApiResult<Vec<EventTask>> {
    let payload: TaskListPayload = get_json("admins/getTask").await?;
    Ok(payload.tasks)
}

pub async fn tasks_for_event(event_id: &str) -> ApiResult<Vec<EventTask>> {
    let payload: EventTasksPayload =
        post_json("admins/gettask", &TasksByEventArgs { event_id }).await?;
    Ok(payload.formatted_tasks)
}

pub async fn update_task(task_id: &str, agenda: &str, due: &str) -> ApiResult<String> {
    post_json_ack(
        "admins/updateTask",
        &UpdateTaskArgs {
            taskid: task_id,
            agenda,
            lastdate: due,
        },
    )
    .await
}

pub async fn delete_task(task_id: &str) -> ApiResult<String> {
    post_json_ack("admins/deleteTask", &TaskIdArgs { taskid: task_id }).await
}

// ========================
// Attendees
// ========================

pub async fn list_attendees() -> ApiResult<Vec<Attendee>> {
    let payload: AttendeesPayload = post_json("admins/getallattendees", &Empty {}).await?;
    Ok(payload.attendees)
}

/// Multipart: fullName, email, username, password, coverImage
pub async fn add_attendee(form: FormData) -> ApiResult<String> {
    post_form_ack("admins/addattendee", form).await
}

pub async fn delete_attendee(user_id: &str) -> ApiResult<String> {
    post_json_ack("admins/deleteattendee", &UserIdArgs { userid: user_id }).await
}

pub async fn assign_attendee(task_id: &str, user_id: &str) -> ApiResult<String> {
    post_json_ack(
        "admins/assignAttendee",
        &AssignArgs {
            taskid: task_id,
            userid: user_id,
        },
    )
    .await
}
