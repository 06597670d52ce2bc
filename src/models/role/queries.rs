use sqlx::PgPool;

use super::types::Role;
use crate::dialogs::collaborators::{DirectoryError, RoleDirectory};

/// Role directory backed by the `roles` table.
#[derive(Debug, Clone)]
pub struct PgRoleDirectory {
    pool: PgPool,
}

impl PgRoleDirectory {
    pub fn new(pool: PgPool) -> Self {
        PgRoleDirectory { pool }
    }
}

/// Find all roles in display order. The order is significant: the create
/// dialog defaults to the first row.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        "SELECT id, name, description, permissions FROM roles ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await
}

/// Count role rows (used by the seeder).
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM roles")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Insert a role at the given sort position.
pub async fn insert(pool: &PgPool, role: &Role, sort_order: i32) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO roles (id, name, description, permissions, sort_order) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&role.id)
    .bind(&role.name)
    .bind(&role.description)
    .bind(&role.permissions)
    .bind(sort_order)
    .execute(pool)
    .await?;
    Ok(())
}

impl RoleDirectory for PgRoleDirectory {
    async fn get_all_roles(&self) -> Result<Vec<Role>, DirectoryError> {
        find_all(&self.pool).await.map_err(DirectoryError::from)
    }
}
