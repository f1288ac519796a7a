//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod permission;
mod role;
mod trainer;

pub use access::{PermissionView, has_permission, require_role};
pub use permission::{Action, PermissionGrant};
pub use role::{RoleId, RoleName};
pub use trainer::TrainerId;
