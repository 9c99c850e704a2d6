//! End-User Endpoints
//!
//! Frontend bindings for the attendee-facing backend routes: registration,
//! session lifecycle, own-task listing, proof submission, profile.

use serde::Serialize;
use web_sys::FormData;

use super::{get_ack, get_json, post_form_ack, post_json_ack, put_json_ack, ApiResult};
use crate::models::{UserProfile, UserTask};

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct UpdateProfileArgs<'a> {
    #[serde(rename = "fullName")]
    full_name: &'a str,
    email: &'a str,
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

/// Multipart: fullName, email, username, password, coverImage
pub async fn register(form: FormData) -> ApiResult<String> {
    post_form_ack("users/register", form).await
}

pub async fn login(email: &str, password: &str) -> ApiResult<String> {
    post_json_ack("users/login", &LoginArgs { email, password }).await
}

pub async fn logout() -> ApiResult<String> {
    get_ack("users/logout").await
}

pub async fn delete_account() -> ApiResult<String> {
    post_json_ack("users/delete", &Empty {}).await
}

pub async fn my_tasks() -> ApiResult<Vec<UserTask>> {
    get_json("users/alltask").await
}

/// Multipart: taskid + proof file
pub async fn submit_proof(form: FormData) -> ApiResult<String> {
    post_form_ack("users/submittask", form).await
}

pub async fn me() -> ApiResult<UserProfile> {
    get_json("users/me").await
}

/// Password is only sent when the user typed a new one
pub async fn update_profile(
    full_name: &str,
    email: &str,
    username: &str,
    password: Option<&str>,
) -> ApiResult<String> {
    put_json_ack(
        "users/update",
        &UpdateProfileArgs {
            full_name,
            email,
            username,
            password,
        },
    )
    .await
}
