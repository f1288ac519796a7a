use async_trait::async_trait;
use garrison_core::AppResult;
use garrison_domain::{PermissionGrant, RoleId, RoleName, TrainerId};

/// Trainer profile row as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerRecord {
    /// Stable trainer identifier.
    pub trainer_id: TrainerId,
    /// Identity subject this profile is linked to.
    pub subject: String,
    /// Display name.
    pub name: String,
    /// Rank, if recorded.
    pub rank: Option<String>,
    /// Assigned role reference; `None` is unauthenticated-equivalent.
    pub role_id: Option<RoleId>,
}

/// Role row as stored in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRecord {
    /// Stable role identifier.
    pub role_id: RoleId,
    /// Role name from the fixed enumeration.
    pub name: RoleName,
    /// Numeric tier level.
    pub level: i16,
}

/// Repository port for the external directory store.
///
/// Each method is one equality-predicate read. A missing row is `Ok(None)`
/// (or an empty list); only infrastructure failures are errors, surfaced as
/// `AppError::DirectoryUnavailable` so callers can tell an outage apart from
/// an unprovisioned user.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Finds the trainer profile linked to an identity subject.
    async fn find_trainer_by_subject(&self, subject: &str) -> AppResult<Option<TrainerRecord>>;

    /// Finds a role row by identifier.
    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>>;

    /// Lists the permission grants attached to a role.
    async fn list_role_grants(&self, role_id: RoleId) -> AppResult<Vec<PermissionGrant>>;
}
