//! Notification Surface
//!
//! Process-wide transient message channel. Components obtain a publish-only
//! `Notifier` from context; the queue itself is rendered exactly once by the
//! `ToastHost` at the application root, in insertion order, and entries
//! expire on a timer or on click.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a toast stays up before it expires on its own
pub const TOAST_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Toast queue state, append-only from the publishing side
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    entries: Vec<Toast>,
    next_id: u32,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, text: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, kind, text });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Publish-only handle to the toast queue
#[derive(Clone, Copy)]
pub struct Notifier {
    store: Store<ToastState>,
}

impl Notifier {
    pub fn success(&self, text: impl Into<String>) {
        self.publish(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(ToastKind::Error, text.into());
    }

    fn publish(&self, kind: ToastKind, text: String) {
        let id = self.store.write().push(kind, text);
        let store = self.store;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            // The app may have been torn down while the timer was pending
            if let Some(mut state) = store.try_write() {
                state.dismiss(id);
            }
        });
    }

    /// Read side, reserved for the single root-level renderer
    pub(crate) fn snapshot(&self) -> Vec<Toast> {
        self.store.entries().get()
    }

    pub(crate) fn dismiss(&self, id: u32) {
        self.store.write().dismiss(id);
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier {
        store: Store::new(ToastState::default()),
    };
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut state = ToastState::default();
        state.push(ToastKind::Success, "first".to_string());
        state.push(ToastKind::Error, "second".to_string());
        state.push(ToastKind::Success, "third".to_string());

        let texts: Vec<&str> = state.entries().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut state = ToastState::default();
        let a = state.push(ToastKind::Success, "a".to_string());
        let b = state.push(ToastKind::Success, "b".to_string());
        state.dismiss(a);
        let c = state.push(ToastKind::Success, "c".to_string());
        assert!(a < b && b < c);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut state = ToastState::default();
        let a = state.push(ToastKind::Success, "a".to_string());
        let b = state.push(ToastKind::Error, "b".to_string());
        state.dismiss(a);
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].id, b);

        // Dismissing an already-expired id is a no-op
        state.dismiss(a);
        assert_eq!(state.entries().len(), 1);
    }
}
