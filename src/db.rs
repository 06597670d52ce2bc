use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::role::{self, Role};

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Roles inserted into an empty `roles` table, in display order.
fn default_roles() -> Vec<Role> {
    vec![
        Role {
            description: Some("Full access to user administration".to_string()),
            permissions: vec!["admin".to_string()],
            ..Role::new("admin", "Admin")
        },
        Role {
            description: Some("Regular account".to_string()),
            ..Role::new("user", "User")
        },
        Role {
            description: Some("Read-only access".to_string()),
            ..Role::new("viewer", "Viewer")
        },
    ]
}

/// Seed default roles if the table is empty.
pub async fn seed_roles(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count = role::count(pool).await?;
    if count > 0 {
        log::info!("Roles already seeded ({count} rows), skipping");
        return Ok(());
    }
    for (i, r) in default_roles().iter().enumerate() {
        role::insert(pool, r, i as i32).await?;
    }
    log::info!("Seeded default roles");
    Ok(())
}
