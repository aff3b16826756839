/// Source of truth for the login check. Swappable without touching the gate.
pub trait CredentialProvider {
    fn validate(&self, email: &str, password: &str) -> bool;
}

/// The single hardcoded account the dashboard ships with.
///
/// Plain string equality; this is a visibility gate, not an authentication
/// system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub const DEFAULT_EMAIL: &'static str = "Panel";
    pub const DEFAULT_PASSWORD: &'static str = "123456";

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EMAIL, Self::DEFAULT_PASSWORD)
    }
}

impl CredentialProvider for StaticCredentials {
    fn validate(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}
