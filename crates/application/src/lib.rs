//! Application services and ports.

#![forbid(unsafe_code)]

mod directory_ports;
mod permission_cache;
mod role_resolution_service;
mod session_ports;

pub use directory_ports::{DirectoryRepository, RoleRecord, TrainerRecord};
pub use permission_cache::PermissionViewCache;
pub use role_resolution_service::RoleResolutionService;
pub use session_ports::SessionProvider;
