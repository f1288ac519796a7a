use std::collections::BTreeSet;
use std::sync::Arc;

use garrison_core::{AppResult, Identity};
use garrison_domain::PermissionView;

use crate::directory_ports::DirectoryRepository;
use crate::permission_cache::PermissionViewCache;
use crate::session_ports::SessionProvider;

/// Application service resolving an identity into a permission view.
///
/// Resolution joins identity → trainer → role → grants through the
/// directory port. It is read-only and idempotent: the same backing data
/// yields an equal view. Any of the three joins coming back empty resolves
/// to `Ok(None)` — an unprovisioned identity and a dangling role reference
/// are deliberately indistinguishable — while directory outages propagate
/// as `AppError::DirectoryUnavailable` and are never coerced into absence.
#[derive(Clone)]
pub struct RoleResolutionService {
    directory: Arc<dyn DirectoryRepository>,
    cache: Option<Arc<dyn PermissionViewCache>>,
    cache_ttl_seconds: u32,
}

impl RoleResolutionService {
    /// Creates a service over a directory repository, without caching.
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryRepository>) -> Self {
        Self {
            directory,
            cache: None,
            cache_ttl_seconds: 0,
        }
    }

    /// Attaches an advisory view cache with a ttl per stored entry.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn PermissionViewCache>, ttl_seconds: u32) -> Self {
        self.cache = Some(cache);
        self.cache_ttl_seconds = ttl_seconds;
        self
    }

    /// Resolves the permission view for an authenticated identity.
    ///
    /// Returns `Ok(None)` when the identity has no trainer profile, the
    /// profile has no role reference, or the reference points at no role
    /// row. For `ADMIN` the grant lookup is skipped and the set left empty;
    /// the override lives in the access predicates, not in stored rows.
    pub async fn resolve(&self, identity: &Identity) -> AppResult<Option<PermissionView>> {
        if self.cache_ttl_seconds > 0
            && let Some(cache) = &self.cache
            && let Some(view) = cache.get(identity.subject()).await.ok().flatten()
        {
            return Ok(Some(view));
        }

        let Some(trainer) = self
            .directory
            .find_trainer_by_subject(identity.subject())
            .await?
        else {
            return Ok(None);
        };

        let Some(role_id) = trainer.role_id else {
            return Ok(None);
        };

        let Some(role) = self.directory.find_role_by_id(role_id).await? else {
            return Ok(None);
        };

        let permissions: BTreeSet<_> = if role.name.is_admin() {
            BTreeSet::new()
        } else {
            self.directory
                .list_role_grants(role_id)
                .await?
                .into_iter()
                .collect()
        };

        let view = PermissionView {
            subject: identity.subject().to_owned(),
            trainer_id: trainer.trainer_id,
            email: identity.email().map(ToOwned::to_owned),
            trainer_name: trainer.name,
            role: role.name,
            role_level: role.level,
            rank: trainer.rank,
            permissions,
        };

        if self.cache_ttl_seconds > 0
            && let Some(cache) = &self.cache
        {
            // Advisory only: a failed cache write must not fail resolution.
            cache
                .set(identity.subject(), view.clone(), self.cache_ttl_seconds)
                .await
                .ok();
        }

        Ok(Some(view))
    }

    /// Resolves the view for whoever the session provider says is signed in.
    pub async fn resolve_current(
        &self,
        sessions: &dyn SessionProvider,
    ) -> AppResult<Option<PermissionView>> {
        match sessions.current_identity().await? {
            Some(identity) => self.resolve(&identity).await,
            None => Ok(None),
        }
    }

    /// Drops any cached view for a subject.
    ///
    /// Callers invoke this on identity changes (logout, or login as a
    /// different user) so a stale view is never served across them.
    pub async fn invalidate(&self, subject: &str) -> AppResult<()> {
        if let Some(cache) = &self.cache {
            cache.invalidate(subject).await?;
        }

        Ok(())
    }
}
