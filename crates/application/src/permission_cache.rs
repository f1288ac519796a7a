use async_trait::async_trait;
use garrison_core::AppResult;
use garrison_domain::PermissionView;

/// Optional cache port for resolved permission views.
///
/// Purely a performance layer: entries must expire, and an identity change
/// (logout, login as someone else) must invalidate the subject's entry.
/// Correctness never depends on a hit.
#[async_trait]
pub trait PermissionViewCache: Send + Sync {
    /// Returns the cached view for a subject, if present and unexpired.
    async fn get(&self, subject: &str) -> AppResult<Option<PermissionView>>;

    /// Stores a view for a subject with a ttl. A zero ttl stores nothing.
    async fn set(&self, subject: &str, view: PermissionView, ttl_seconds: u32) -> AppResult<()>;

    /// Drops the cached view for a subject.
    async fn invalidate(&self, subject: &str) -> AppResult<()>;
}
