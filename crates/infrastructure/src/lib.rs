//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod config;
mod database;
mod in_memory_directory_repository;
mod in_memory_permission_view_cache;
mod in_memory_session_provider;
mod postgres_directory_repository;

pub use config::{DirectoryConfig, init_tracing};
pub use database::connect_and_migrate;
pub use in_memory_directory_repository::InMemoryDirectoryRepository;
pub use in_memory_permission_view_cache::InMemoryPermissionViewCache;
pub use in_memory_session_provider::InMemorySessionProvider;
pub use postgres_directory_repository::PostgresDirectoryRepository;
