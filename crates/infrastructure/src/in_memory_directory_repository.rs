use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use garrison_application::{DirectoryRepository, RoleRecord, TrainerRecord};
use garrison_core::{AppError, AppResult};
use garrison_domain::{PermissionGrant, RoleId};

/// In-memory directory repository for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    trainers: RwLock<HashMap<String, TrainerRecord>>,
    roles: RwLock<HashMap<RoleId, RoleRecord>>,
    grants: RwLock<HashMap<RoleId, Vec<PermissionGrant>>>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a trainer profile. A profile is linked to exactly one
    /// subject, so a duplicate subject is a conflict.
    pub async fn insert_trainer(&self, trainer: TrainerRecord) -> AppResult<()> {
        let mut trainers = self.trainers.write().await;

        if trainers.contains_key(trainer.subject.as_str()) {
            return Err(AppError::Conflict(format!(
                "trainer for subject '{}' already exists",
                trainer.subject
            )));
        }

        trainers.insert(trainer.subject.clone(), trainer);
        Ok(())
    }

    /// Stores or replaces a role row.
    pub async fn insert_role(&self, role: RoleRecord) {
        self.roles.write().await.insert(role.role_id, role);
    }

    /// Attaches a grant to a role.
    pub async fn insert_grant(&self, role_id: RoleId, grant: PermissionGrant) {
        self.grants
            .write()
            .await
            .entry(role_id)
            .or_default()
            .push(grant);
    }

    /// Replaces a trainer's role reference, for reassignment scenarios.
    pub async fn assign_role(&self, subject: &str, role_id: Option<RoleId>) -> AppResult<()> {
        let mut trainers = self.trainers.write().await;

        let trainer = trainers
            .get_mut(subject)
            .ok_or_else(|| AppError::NotFound(format!("no trainer for subject '{subject}'")))?;
        trainer.role_id = role_id;

        Ok(())
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn find_trainer_by_subject(&self, subject: &str) -> AppResult<Option<TrainerRecord>> {
        Ok(self.trainers.read().await.get(subject).cloned())
    }

    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>> {
        Ok(self.roles.read().await.get(&role_id).copied())
    }

    async fn list_role_grants(&self, role_id: RoleId) -> AppResult<Vec<PermissionGrant>> {
        Ok(self
            .grants
            .read()
            .await
            .get(&role_id)
            .cloned()
            .unwrap_or_default())
    }
}
