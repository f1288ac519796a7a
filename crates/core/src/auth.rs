use serde::{Deserialize, Serialize};

/// Authenticated principal issued by the session provider.
///
/// The identity is trusted once obtained: the session provider has already
/// validated the cookie-backed session, so no further shape checking happens
/// downstream. Resolution code always receives it as an explicit argument,
/// never from ambient request state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    subject: String,
    email: Option<String>,
}

impl Identity {
    /// Creates an identity from session data.
    #[must_use]
    pub fn new(subject: impl Into<String>, email: Option<String>) -> Self {
        Self {
            subject: subject.into(),
            email,
        }
    }

    /// Returns the stable opaque subject for this principal.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the email, if the session provider returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
