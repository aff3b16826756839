use leptos::*;
use std::rc::Rc;

use crate::log_debug;

use crate::domain::{
    logging::LogComponent,
    session::{AuthState, CredentialProvider, Destination, Session},
};

/// Per-tab session state, handed explicitly to every component that reads or
/// changes it. `Copy`, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub destination: RwSignal<Destination>,
    /// "Login successful" is shown until the user navigates.
    pub login_notice: RwSignal<bool>,
    credentials: StoredValue<Rc<dyn CredentialProvider>>,
}

impl SessionContext {
    pub fn new(credentials: Rc<dyn CredentialProvider>) -> Self {
        Self {
            session: create_rw_signal(Session::new()),
            destination: create_rw_signal(Destination::default()),
            login_notice: create_rw_signal(false),
            credentials: store_value(credentials),
        }
    }

    pub fn state(&self) -> AuthState {
        self.session.with(|s| s.state())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn attempt_login(&self, email: &str, password: &str) -> bool {
        let accepted = self.credentials.with_value(|provider| {
            self.session
                .try_update(|s| s.attempt_login(provider.as_ref(), email, password))
                .unwrap_or(false)
        });
        if accepted {
            self.login_notice.set(true);
        }
        accepted
    }

    /// Back to the login form; the next login starts on Home.
    pub fn logout(&self) {
        self.session.update(|s| s.logout());
        self.destination.set(Destination::Home);
        self.login_notice.set(false);
    }

    pub fn select(&self, destination: Destination) {
        log_debug!(LogComponent::Presentation("Menu"), "selected '{}'", destination);
        self.login_notice.set(false);
        if destination.ends_session() {
            self.logout();
        } else {
            self.destination.set(destination);
        }
    }
}
