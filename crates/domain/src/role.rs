use std::str::FromStr;

use garrison_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a role row in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Named permission tiers assigned to trainers.
///
/// `Admin` is special-cased in access checks: it implicitly holds every
/// (resource, action) pair and never carries enumerated grant rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    /// Full access to every resource and action.
    Admin,
    /// Plans schedules and events across training groups.
    Coordinator,
    /// Runs training sessions for assigned groups.
    Instructor,
    /// Participates in training; read-mostly access.
    Trainee,
}

impl RoleName {
    /// Returns a stable storage value for this role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Coordinator => "COORDINATOR",
            Self::Instructor => "INSTRUCTOR",
            Self::Trainee => "TRAINEE",
        }
    }

    /// Returns whether this role carries the universal access override.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns all known role names.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RoleName] = &[
            RoleName::Admin,
            RoleName::Coordinator,
            RoleName::Instructor,
            RoleName::Trainee,
        ];

        ALL
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "COORDINATOR" => Ok(Self::Coordinator),
            "INSTRUCTOR" => Ok(Self::Instructor),
            "TRAINEE" => Ok(Self::Trainee),
            _ => Err(AppError::Validation(format!(
                "unknown role name '{value}'"
            ))),
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::RoleName;

    #[test]
    fn role_name_round_trips_storage_value() {
        for role in RoleName::all() {
            let restored = RoleName::from_str(role.as_str());
            assert_eq!(restored.ok(), Some(*role));
        }
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        assert!(RoleName::from_str("SUPERVISOR").is_err());
        assert!(RoleName::from_str("admin").is_err());
    }

    #[test]
    fn only_admin_carries_the_override() {
        assert!(RoleName::Admin.is_admin());
        assert!(!RoleName::Coordinator.is_admin());
        assert!(!RoleName::Instructor.is_admin());
        assert!(!RoleName::Trainee.is_admin());
    }
}
