use std::str::FromStr;

use garrison_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Actions a role can be granted on a resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create new rows of the resource.
    Create,
    /// Read existing rows of the resource.
    Read,
    /// Update existing rows of the resource.
    Update,
    /// Delete rows of the resource.
    Delete,
}

impl Action {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Action] = &[
            Action::Create,
            Action::Read,
            Action::Update,
            Action::Delete,
        ];

        ALL
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!("unknown action '{value}'"))),
        }
    }
}

/// A (resource, action) pair granted to a role.
///
/// Grant rows are validated here, at the directory boundary, so resolved
/// permission sets never contain loosely-shaped data.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PermissionGrant {
    resource: String,
    action: Action,
}

impl PermissionGrant {
    /// Creates a validated grant; the resource name must be non-empty.
    pub fn new(resource: impl Into<String>, action: Action) -> AppResult<Self> {
        let resource = NonEmptyString::new(resource)?;

        Ok(Self {
            resource: resource.into(),
            action,
        })
    }

    /// Returns the resource name this grant applies to.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.resource.as_str()
    }

    /// Returns the granted action.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Action, PermissionGrant};

    #[test]
    fn action_round_trips_storage_value() {
        for action in Action::all() {
            let restored = Action::from_str(action.as_str());
            assert_eq!(restored.ok(), Some(*action));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Action::from_str("publish").is_err());
        assert!(Action::from_str("READ").is_err());
    }

    #[test]
    fn action_serializes_as_snake_case() {
        let encoded = serde_json::to_string(&Action::Create);
        assert_eq!(encoded.ok(), Some("\"create\"".to_owned()));
    }

    #[test]
    fn grant_rejects_empty_resource() {
        assert!(PermissionGrant::new("", Action::Read).is_err());
        assert!(PermissionGrant::new("   ", Action::Read).is_err());
    }

    #[test]
    fn grant_exposes_resource_and_action() {
        let grant = PermissionGrant::new("events", Action::Create);
        assert!(grant.is_ok());
        if let Ok(grant) = grant {
            assert_eq!(grant.resource(), "events");
            assert_eq!(grant.action(), Action::Create);
        }
    }
}
