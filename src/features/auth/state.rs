//! Reactive session state shared through context.
//!
//! The provider restores any persisted session synchronously on mount so
//! a reload keeps the user signed in. Storage writes stay with the flows
//! that own them (login saves, logout clears); this module only mirrors
//! the session for the UI.

use leptos::prelude::*;

use crate::app_lib::session::{BrowserSession, Session, SessionStore};

/// Session signals available to any component under [`SessionProvider`].
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Publishes a fresh session after login.
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    /// Drops the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
    }
}

/// Provides [`SessionContext`], restored from local storage.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(BrowserSession.load());
    provide_context(SessionContext::new(session));

    view! { {children()} }
}

/// Returns the session context, or an empty one outside the provider so
/// components degrade to the signed-out rendering instead of panicking.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
