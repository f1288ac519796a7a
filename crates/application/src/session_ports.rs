use async_trait::async_trait;
use garrison_core::{AppResult, Identity};

/// Port over the cookie-backed session layer.
///
/// Resolution never inspects cookies or tokens; whatever issues sessions
/// sits behind this trait and hands over an already-validated identity.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the identity for the current session, if one is signed in.
    async fn current_identity(&self) -> AppResult<Option<Identity>>;
}
