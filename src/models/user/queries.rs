use rand::Rng;
use sqlx::PgPool;

use super::types::{NewUser, User, UserUpdate};
use crate::auth::password;
use crate::dialogs::collaborators::{StoreError, UserStore};

/// User store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }
}

/// SQL for a user with its role label joined from `roles.name`.
const SELECT_USER: &str = "\
    SELECT u.id, u.username, u.email, u.full_name, \
           COALESCE(r.name, '') AS role \
    FROM users u \
    LEFT JOIN roles r ON r.id = u.role_id";

/// Generate a random 16-byte hex id for a new user row.
fn generate_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let sql = format!("{SELECT_USER} WHERE u.id = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a user. `password_hash` must already be hashed. Returns the new id.
pub async fn create(pool: &PgPool, new: &NewUser, password_hash: &str) -> Result<String, sqlx::Error> {
    let id = generate_id();
    sqlx::query(
        "INSERT INTO users (id, username, email, full_name, password, role_id) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&id)
    .bind(&new.username)
    .bind(&new.email)
    .bind(&new.full_name)
    .bind(password_hash)
    .bind(&new.role_id)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Update identity fields and role. Returns false when no row matched.
pub async fn update(pool: &PgPool, id: &str, update: &UserUpdate) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET username = $1, email = $2, full_name = $3, role_id = $4, \
                updated_at = now() \
         WHERE id = $5",
    )
    .bind(&update.username)
    .bind(&update.email)
    .bind(&update.full_name)
    .bind(&update.role_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> Result<(), StoreError> {
        let hashed = password::hash_password(&user.password).map_err(|e| {
            log::error!("Password hash error for '{}': {e}", user.username);
            StoreError::silent()
        })?;
        let id = create(&self.pool, &user, &hashed).await?;
        log::info!("Created user '{}' ({id})", user.username);
        Ok(())
    }

    async fn update(&self, id: &str, changes: UserUpdate) -> Result<(), StoreError> {
        if !update(&self.pool, id, &changes).await? {
            return Err(StoreError::new("User not found"));
        }
        log::info!("Updated user '{}' ({id})", changes.username);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(find_by_id(&self.pool, id).await?)
    }
}
