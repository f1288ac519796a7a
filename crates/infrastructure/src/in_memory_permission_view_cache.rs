use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use garrison_application::PermissionViewCache;
use garrison_core::AppResult;
use garrison_domain::PermissionView;

#[derive(Debug, Clone)]
struct CacheEntry {
    view: PermissionView,
    expires_at: Instant,
}

/// In-memory, ttl-expiring cache for resolved permission views.
#[derive(Default)]
pub struct InMemoryPermissionViewCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryPermissionViewCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionViewCache for InMemoryPermissionViewCache {
    async fn get(&self, subject: &str) -> AppResult<Option<PermissionView>> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(subject) {
                if entry.expires_at > Instant::now() {
                    return Ok(Some(entry.view.clone()));
                }
            } else {
                return Ok(None);
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(subject)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(subject);
        }

        Ok(None)
    }

    async fn set(&self, subject: &str, view: PermissionView, ttl_seconds: u32) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::from(ttl_seconds)))
            .unwrap_or(now);

        self.entries
            .write()
            .await
            .insert(subject.to_owned(), CacheEntry { view, expires_at });

        Ok(())
    }

    async fn invalidate(&self, subject: &str) -> AppResult<()> {
        self.entries.write().await.remove(subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::time::Duration;

    use garrison_application::PermissionViewCache;
    use garrison_domain::{PermissionView, RoleName, TrainerId};

    use super::InMemoryPermissionViewCache;

    fn view(subject: &str) -> PermissionView {
        PermissionView {
            subject: subject.to_owned(),
            trainer_id: TrainerId::new(),
            email: None,
            trainer_name: "Park Jiho".to_owned(),
            role: RoleName::Trainee,
            role_level: 0,
            rank: None,
            permissions: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn stored_view_is_returned_until_invalidated() {
        let cache = InMemoryPermissionViewCache::new();

        let stored = cache.set("subject-1", view("subject-1"), 300).await;
        assert!(stored.is_ok());

        let hit = cache.get("subject-1").await;
        assert!(hit.ok().flatten().is_some());

        let invalidated = cache.invalidate("subject-1").await;
        assert!(invalidated.is_ok());

        let miss = cache.get("subject-1").await;
        assert!(matches!(miss, Ok(None)));
    }

    #[tokio::test]
    async fn zero_ttl_stores_nothing() {
        let cache = InMemoryPermissionViewCache::new();

        let stored = cache.set("subject-1", view("subject-1"), 0).await;
        assert!(stored.is_ok());

        let miss = cache.get("subject-1").await;
        assert!(matches!(miss, Ok(None)));
    }

    #[tokio::test]
    async fn expired_view_is_not_returned() {
        let cache = InMemoryPermissionViewCache::new();

        let stored = cache.set("subject-1", view("subject-1"), 1).await;
        assert!(stored.is_ok());

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let miss = cache.get("subject-1").await;
        assert!(matches!(miss, Ok(None)));
    }

    #[tokio::test]
    async fn subjects_are_cached_independently() {
        let cache = InMemoryPermissionViewCache::new();

        let first = cache.set("subject-1", view("subject-1"), 300).await;
        let second = cache.set("subject-2", view("subject-2"), 300).await;
        assert!(first.is_ok());
        assert!(second.is_ok());

        let invalidated = cache.invalidate("subject-1").await;
        assert!(invalidated.is_ok());

        assert!(matches!(cache.get("subject-1").await, Ok(None)));
        assert!(cache.get("subject-2").await.ok().flatten().is_some());
    }
}
