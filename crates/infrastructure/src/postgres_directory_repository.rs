use std::str::FromStr;

use async_trait::async_trait;
use uuid::Uuid;

use garrison_application::{DirectoryRepository, RoleRecord, TrainerRecord};
use garrison_core::{AppError, AppResult};
use garrison_domain::{Action, PermissionGrant, RoleId, RoleName, TrainerId};

use sqlx::{FromRow, PgPool};

/// PostgreSQL-backed repository for the directory store.
#[derive(Clone)]
pub struct PostgresDirectoryRepository {
    pool: PgPool,
}

impl PostgresDirectoryRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TrainerRow {
    id: Uuid,
    subject: String,
    full_name: String,
    rank: Option<String>,
    role_id: Option<Uuid>,
}

impl From<TrainerRow> for TrainerRecord {
    fn from(row: TrainerRow) -> Self {
        Self {
            trainer_id: TrainerId::from_uuid(row.id),
            subject: row.subject,
            name: row.full_name,
            rank: row.rank,
            role_id: row.role_id.map(RoleId::from_uuid),
        }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: Uuid,
    name: String,
    level: i16,
}

#[derive(Debug, FromRow)]
struct GrantRow {
    resource: String,
    action: String,
}

#[async_trait]
impl DirectoryRepository for PostgresDirectoryRepository {
    async fn find_trainer_by_subject(&self, subject: &str) -> AppResult<Option<TrainerRecord>> {
        let row = sqlx::query_as::<_, TrainerRow>(
            r#"
            SELECT id, subject, full_name, rank, role_id
            FROM trainers
            WHERE subject = $1
            LIMIT 1
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| unavailable("failed to find trainer by subject", &error))?;

        Ok(row.map(TrainerRecord::from))
    }

    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<RoleRecord>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, level
            FROM roles
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| unavailable("failed to find role by id", &error))?;

        row.map(|row| {
            let name = RoleName::from_str(row.name.as_str()).map_err(|error| {
                AppError::Internal(format!(
                    "failed to decode role '{}' for id '{role_id}': {error}",
                    row.name
                ))
            })?;

            Ok(RoleRecord {
                role_id: RoleId::from_uuid(row.id),
                name,
                level: row.level,
            })
        })
        .transpose()
    }

    async fn list_role_grants(&self, role_id: RoleId) -> AppResult<Vec<PermissionGrant>> {
        let rows = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT resource, action
            FROM role_permissions
            WHERE role_id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| unavailable("failed to list role grants", &error))?;

        rows.into_iter()
            .map(|row| {
                let action = Action::from_str(row.action.as_str()).map_err(|error| {
                    AppError::Internal(format!(
                        "failed to decode grant action '{}' for role '{role_id}': {error}",
                        row.action
                    ))
                })?;

                PermissionGrant::new(row.resource, action).map_err(|error| {
                    AppError::Internal(format!(
                        "failed to decode grant resource for role '{role_id}': {error}"
                    ))
                })
            })
            .collect()
    }
}

fn unavailable(context: &str, error: &sqlx::Error) -> AppError {
    tracing::warn!("{context}: {error}");
    AppError::DirectoryUnavailable(format!("{context}: {error}"))
}
