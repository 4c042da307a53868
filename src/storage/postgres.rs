//! PostgreSQL implementation of the storage contract.

use crate::error::AppError;
use crate::models::account::Account;
use crate::storage::Storage;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// Connections are created lazily and reused across requests.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server is
/// unreachable.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each one runs
/// only once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds the migration files at compile time
    sqlx::migrate!("./migrations").run(pool).await
}

/// Account storage backed by PostgreSQL.
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(id))?;

        Ok(account)
    }

    async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AccountNotFound(id));
        }

        Ok(())
    }
}
