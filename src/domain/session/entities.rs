use derive_more::Display;

use super::credentials::CredentialProvider;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};

/// Authentication state of one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AuthState {
    #[default]
    #[display(fmt = "logged out")]
    LoggedOut,
    #[display(fmt = "logged in")]
    LoggedIn,
}

/// Per-session state surviving across reactive updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: AuthState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::LoggedIn
    }

    /// Flip to `LoggedIn` when the provider accepts the pair.
    ///
    /// A rejected attempt leaves the state untouched and reports nothing
    /// beyond the `false` return.
    pub fn attempt_login(&mut self, provider: &dyn CredentialProvider, email: &str, password: &str) -> bool {
        if !provider.validate(email, password) {
            log_debug!(LogComponent::Domain("Session"), "login rejected");
            return false;
        }
        self.state = AuthState::LoggedIn;
        log_info!(LogComponent::Domain("Session"), "login accepted");
        true
    }

    pub fn logout(&mut self) {
        if self.state == AuthState::LoggedIn {
            log_info!(LogComponent::Domain("Session"), "logged out");
        }
        self.state = AuthState::LoggedOut;
    }
}
