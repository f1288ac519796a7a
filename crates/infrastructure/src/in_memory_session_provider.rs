use async_trait::async_trait;
use tokio::sync::RwLock;

use garrison_application::SessionProvider;
use garrison_core::{AppResult, Identity};

/// In-memory session provider for tests and local development.
///
/// Stands in for the cookie-backed session layer: `login`/`logout` model
/// identity changes so callers can exercise cache invalidation across them.
#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    current: RwLock<Option<Identity>>,
}

impl InMemorySessionProvider {
    /// Creates a provider with no signed-in identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs an identity in, replacing any current one.
    pub async fn login(&self, identity: Identity) {
        *self.current.write().await = Some(identity);
    }

    /// Signs the current identity out.
    pub async fn logout(&self) {
        *self.current.write().await = None;
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_identity(&self) -> AppResult<Option<Identity>> {
        Ok(self.current.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use garrison_application::SessionProvider;
    use garrison_core::Identity;

    use super::InMemorySessionProvider;

    #[tokio::test]
    async fn login_and_logout_change_the_current_identity() {
        let sessions = InMemorySessionProvider::new();
        assert!(matches!(sessions.current_identity().await, Ok(None)));

        sessions.login(Identity::new("subject-1", None)).await;
        let current = sessions.current_identity().await;
        assert!(
            current
                .ok()
                .flatten()
                .is_some_and(|identity| identity.subject() == "subject-1")
        );

        sessions.logout().await;
        assert!(matches!(sessions.current_identity().await, Ok(None)));
    }

    #[tokio::test]
    async fn login_replaces_the_previous_identity() {
        let sessions = InMemorySessionProvider::new();

        sessions.login(Identity::new("subject-1", None)).await;
        sessions.login(Identity::new("subject-2", None)).await;

        let current = sessions.current_identity().await;
        assert!(
            current
                .ok()
                .flatten()
                .is_some_and(|identity| identity.subject() == "subject-2")
        );
    }
}
