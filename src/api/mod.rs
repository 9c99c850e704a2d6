//! Remote API Client
//!
//! Thin fire-once wrappers over the backend's JSON and multipart HTTP
//! endpoints, organized by actor. Every call carries the session cookie and
//! expects the uniform `{success, message, data}` envelope; branching is on
//! the `success` field only, never on the HTTP status. No retries, caching,
//! or deduplication.

pub mod admin;
pub mod user;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::{FormData, RequestCredentials};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with `success=false` and (usually) a message
    Rejected(String),
    /// Network failure, non-JSON body, or an envelope missing its payload
    Transport(String),
}

impl ApiError {
    /// Text fit to surface to the user: server-reported messages verbatim,
    /// transport noise replaced by the caller's fallback
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(msg) if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Rejected(msg) => write!(f, "rejected by backend: {}", msg),
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// The uniform response envelope every endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope branching for payload-carrying calls. A successful envelope
    /// without its payload counts as a transport fault, not a business error.
    pub fn into_data(self) -> ApiResult<T> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Transport("envelope carried no data".to_string()))
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }

    /// Envelope branching for acknowledgement-only calls: any payload is
    /// ignored and the server message is handed back for display.
    pub fn into_ack(self) -> ApiResult<String> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

pub fn api_base() -> &'static str {
    option_env!("EVENTDESK_API_BASE").unwrap_or("http://localhost:4000/api/v1")
}

fn endpoint(path: &str) -> String {
    format!("{}/{}", api_base(), path)
}

fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read_envelope<T: DeserializeOwned>(resp: Response) -> ApiResult<ApiResponse<T>> {
    resp.json::<ApiResponse<T>>().await.map_err(transport)
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_envelope(resp).await?.into_data()
}

pub(crate) async fn post_json_ack<B: Serialize>(path: &str, body: &B) -> ApiResult<String> {
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_envelope::<serde_json::Value>(resp).await?.into_ack()
}

pub(crate) async fn put_json_ack<B: Serialize>(path: &str, body: &B) -> ApiResult<String> {
    let resp = Request::put(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_envelope::<serde_json::Value>(resp).await?.into_ack()
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let resp = Request::get(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport)?;
    read_envelope(resp).await?.into_data()
}

pub(crate) async fn get_ack(path: &str) -> ApiResult<String> {
    let resp = Request::get(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport)?;
    read_envelope::<serde_json::Value>(resp).await?.into_ack()
}

/// Multipart submission; the browser sets the content type and boundary
pub(crate) async fn post_form_ack(path: &str, form: FormData) -> ApiResult<String> {
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_envelope::<serde_json::Value>(resp).await?.into_ack()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    #[test]
    fn test_successful_envelope_yields_data() {
        let envelope: ApiResponse<Vec<Event>> = serde_json::from_str(
            r#"{"success":true,"data":[{"_id":"e1","title":"Kickoff","location":"HQ","date":"2025-01-10"}]}"#,
        )
        .expect("decode");
        let events = envelope.into_data().expect("data");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kickoff");
        assert_eq!(events[0].location, "HQ");
    }

    #[test]
    fn test_rejected_envelope_surfaces_message() {
        let envelope: ApiResponse<Vec<Event>> =
            serde_json::from_str(r#"{"success":false,"message":"not authorized"}"#)
                .expect("decode");
        assert_eq!(
            envelope.into_data(),
            Err(ApiError::Rejected("not authorized".to_string()))
        );
    }

    #[test]
    fn test_success_without_data_is_transport_fault() {
        let envelope: ApiResponse<Vec<Event>> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).expect("decode");
        assert!(matches!(
            envelope.into_data(),
            Err(ApiError::Transport(_))
        ));
    }

    #[test]
    fn test_ack_ignores_payload_and_returns_message() {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"Event created","data":{}}"#)
                .expect("decode");
        assert_eq!(envelope.into_ack(), Ok("Event created".to_string()));

        let rejected: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":false}"#).expect("decode");
        assert_eq!(rejected.into_ack(), Err(ApiError::Rejected(String::new())));
    }

    #[test]
    fn test_malformed_body_fails_decode() {
        let result = serde_json::from_str::<ApiResponse<Vec<Event>>>("<html>502</html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_message_substitutes_fallback_for_transport() {
        let rejected = ApiError::Rejected("taken".to_string());
        assert_eq!(rejected.user_message("fallback"), "taken");

        let blank_rejection = ApiError::Rejected(String::new());
        assert_eq!(blank_rejection.user_message("fallback"), "fallback");

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.user_message("fallback"), "fallback");
    }
}
