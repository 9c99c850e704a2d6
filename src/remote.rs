//! Remote Resource Lifecycle
//!
//! The one reusable fetch-on-mount abstraction behind every list and detail
//! page: a resource starts `Loading`, issues exactly one fetch, then lands in
//! `Ready` or `Errored`. `retry` issues exactly one new fetch; `patch`
//! mutates the ready value in place after a server-confirmed mutation.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

/// Fallback text for failures the server gave no message for
pub const FETCH_FALLBACK: &str = "Request failed. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Ready(T),
    Errored(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    /// Apply an optimistic patch; no-op unless the value is ready
    pub fn patch(&mut self, patch: impl FnOnce(&mut T)) {
        if let RemoteState::Ready(value) = self {
            patch(value);
        }
    }
}

/// Handle to a remote resource. Copy, so closures can capture it freely.
pub struct Remote<T: Send + Sync + 'static> {
    state: ReadSignal<RemoteState<T>>,
    set_state: WriteSignal<RemoteState<T>>,
    attempt: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Remote<T> {}

impl<T: Clone + Send + Sync + 'static> Remote<T> {
    pub fn with<U>(&self, read: impl FnOnce(&RemoteState<T>) -> U) -> U {
        self.state.with(read)
    }

    /// Reset to `Loading` and issue one more fetch
    pub fn retry(&self) {
        self.set_state.set(RemoteState::Loading);
        self.attempt.update(|n| *n += 1);
    }

    /// Patch the ready value in place (optimistic local mutation)
    pub fn patch(&self, patch: impl FnOnce(&mut T)) {
        self.set_state.update(|state| state.patch(patch));
    }
}

/// Drive `fetch` through the three-state lifecycle: once on mount and once
/// more per `retry`. In-flight calls are not cancelled on unmount; a late
/// resolution writes into a disposed signal and is dropped silently, which
/// matches the accepted client behavior.
pub fn use_remote<T, Fut>(fetch: impl Fn() -> Fut + Clone + Send + Sync + 'static) -> Remote<T>
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let (state, set_state) = signal(RemoteState::Loading);
    let attempt = RwSignal::new(0u32);

    Effect::new(move |_| {
        let _ = attempt.get();
        let fetch = fetch.clone();
        spawn_local(async move {
            match fetch().await {
                Ok(value) => {
                    let _ = set_state.try_set(RemoteState::Ready(value));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("remote fetch failed: {}", err).into());
                    let _ =
                        set_state.try_set(RemoteState::Errored(err.user_message(FETCH_FALLBACK)));
                }
            }
        });
    });

    Remote {
        state,
        set_state,
        attempt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_applies_when_ready() {
        let mut state = RemoteState::Ready(vec![1, 2, 3]);
        state.patch(|list| list.retain(|n| *n != 2));
        assert_eq!(state.ready(), Some(&vec![1, 3]));

        let mut loading: RemoteState<Vec<i32>> = RemoteState::Loading;
        loading.patch(|list| list.push(9));
        assert!(loading.is_loading());

        let mut errored: RemoteState<Vec<i32>> = RemoteState::Errored("down".to_string());
        errored.patch(|list| list.push(9));
        assert_eq!(errored.error(), Some("down"));
    }

    #[test]
    fn test_accessors() {
        let state: RemoteState<u32> = RemoteState::Errored("no".to_string());
        assert!(!state.is_loading());
        assert_eq!(state.ready(), None);
        assert_eq!(state.error(), Some("no"));
    }
}
