use std::collections::BTreeSet;

use garrison_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::permission::{Action, PermissionGrant};
use crate::role::RoleName;
use crate::trainer::TrainerId;

/// Resolved, request-scoped access bundle for one identity.
///
/// Derived per request from directory data and never persisted. The grant
/// set is a `BTreeSet` so two resolutions over unchanged directory data
/// compare equal regardless of row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionView {
    /// Opaque subject of the resolved identity.
    pub subject: String,
    /// Trainer profile linked to the identity.
    pub trainer_id: TrainerId,
    /// Email carried by the identity, if any.
    pub email: Option<String>,
    /// Trainer display name.
    pub trainer_name: String,
    /// Resolved role name.
    pub role: RoleName,
    /// Numeric level of the resolved role.
    pub role_level: i16,
    /// Trainer rank, if recorded.
    pub rank: Option<String>,
    /// Effective grants. Empty for `ADMIN`, whose access is implicit.
    pub permissions: BTreeSet<PermissionGrant>,
}

impl PermissionView {
    /// Returns whether this view allows `action` on `resource`.
    ///
    /// `ADMIN` allows everything, including resources that appear in no
    /// grant table; every other role needs an exact (resource, action)
    /// grant — no wildcard or prefix matching. This is the only place the
    /// admin override exists.
    #[must_use]
    pub fn allows(&self, resource: &str, action: Action) -> bool {
        if self.role.is_admin() {
            return true;
        }

        self.permissions
            .iter()
            .any(|grant| grant.resource() == resource && grant.action() == action)
    }
}

/// Returns whether a possibly-absent view allows `action` on `resource`.
///
/// An absent view (unauthenticated, unprovisioned, or role-less caller)
/// allows nothing.
#[must_use]
pub fn has_permission(view: Option<&PermissionView>, resource: &str, action: Action) -> bool {
    view.is_some_and(|view| view.allows(resource, action))
}

/// Ensures the resolved role is one of `allowed_roles`.
///
/// Absent views fail with `Unauthenticated`; a resolved role outside the
/// list fails with `Unauthorized` carrying the allowed names. An empty list
/// denies every caller, `ADMIN` included — the admin override applies to
/// permission checks, not to role-list membership.
pub fn require_role(view: Option<&PermissionView>, allowed_roles: &[RoleName]) -> AppResult<()> {
    let view = view.ok_or_else(|| {
        AppError::Unauthenticated("sign-in with an assigned role is required".to_owned())
    })?;

    if allowed_roles.contains(&view.role) {
        return Ok(());
    }

    Err(AppError::Unauthorized {
        required_roles: allowed_roles
            .iter()
            .map(|role| role.as_str().to_owned())
            .collect(),
    })
}
