#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use bank_account_server::config::Config;
use bank_account_server::error::AppError;
use bank_account_server::models::account::Account;
use bank_account_server::routes::app_router;
use bank_account_server::state::AppState;
use bank_account_server::storage::Storage;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-signing-secret";

/// In-memory storage backend so handler tests run without a database.
pub struct MemoryStorage {
    accounts: Mutex<Vec<Account>>,
    next_id: Mutex<i64>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_account(&self, mut account: Account) -> Result<Account, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        account.id = *next_id;
        *next_id += 1;

        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        let len_before = accounts.len();
        accounts.retain(|account| account.id != id);

        if accounts.len() == len_before {
            return Err(AppError::AccountNotFound(id));
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
    }
}

pub fn create_test_state(storage: Arc<MemoryStorage>) -> AppState {
    AppState::new(storage, Arc::new(test_config()))
}

pub fn make_server() -> (TestServer, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let app = app_router(create_test_state(storage.clone()));

    (TestServer::new(app).unwrap(), storage)
}

pub async fn seed_account(storage: &MemoryStorage, first_name: &str, last_name: &str) -> Account {
    storage
        .create_account(Account::new(first_name.to_string(), last_name.to_string()))
        .await
        .unwrap()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestClaims {
    account_number: i64,
    expires_at: i64,
}

/// Sign a well-formed token for the given account number with the test
/// secret.
pub fn token_for(account_number: i64) -> String {
    token_with(
        account_number,
        TEST_SECRET,
        Algorithm::HS256,
        Utc::now() + Duration::hours(1),
    )
}

/// Sign a token with full control over secret, algorithm, and expiry, for
/// exercising the guard's rejection paths.
pub fn token_with(
    account_number: i64,
    secret: &str,
    algorithm: Algorithm,
    expires_at: DateTime<Utc>,
) -> String {
    let claims = TestClaims {
        account_number,
        expires_at: expires_at.timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}
