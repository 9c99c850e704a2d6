//! Session Capability State
//!
//! The real session lives in an opaque backend cookie that rides along on
//! every call. The client keeps only an explicit capability snapshot: an
//! admin flag set by admin login/logout, and the end-user profile probed
//! once at startup (a cookie from a previous load may still be live).
//!
//! There is deliberately no route guarding: any URL renders its shell and
//! attempts its fetches, which fail into their errored state when the
//! backend rejects the credential.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::UserProfile;

#[derive(Clone, Copy)]
pub struct Session {
    admin: RwSignal<bool>,
    user: RwSignal<Option<UserProfile>>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.admin.get()
    }

    pub fn mark_admin(&self) {
        self.admin.set(true);
    }

    pub fn clear_admin(&self) {
        self.admin.set(false);
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn set_user(&self, profile: Option<UserProfile>) {
        self.user.set(profile);
    }
}

/// Provide the session context and probe the backend once for a still-live
/// end-user session
pub fn provide_session() -> Session {
    let session = Session {
        admin: RwSignal::new(false),
        user: RwSignal::new(None),
    };
    provide_context(session);
    spawn_local(async move {
        if let Ok(profile) = api::user::me().await {
            session.set_user(Some(profile));
        }
    });
    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
