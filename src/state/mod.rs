//! Persistence collaborator
//!
//! Profile and streak records keyed by user id. A missing record loads as
//! `None`; the engine substitutes defaults. Postgres is used when a database
//! URL is configured, with an in-memory map otherwise.

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::models::{FinancialProfile, UserStreak};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info, warn};

/// Key-value store for per-user records
#[async_trait::async_trait]
pub trait AdvisorStore: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Result<Option<FinancialProfile>>;
    async fn save_profile(&self, user_id: &str, profile: &FinancialProfile) -> Result<()>;
    async fn load_streak(&self, user_id: &str) -> Result<Option<UserStreak>>;
    async fn save_streak(&self, user_id: &str, streak: &UserStreak) -> Result<()>;
}

// ===== In-memory =====

pub struct InMemoryStore {
    profiles: Arc<RwLock<HashMap<String, FinancialProfile>>>,
    streaks: Arc<RwLock<HashMap<String, UserStreak>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            streaks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AdvisorStore for InMemoryStore {
    async fn load_profile(&self, user_id: &str) -> Result<Option<FinancialProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn save_profile(&self, user_id: &str, profile: &FinancialProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(user_id.to_string(), profile.clone());
        Ok(())
    }

    async fn load_streak(&self, user_id: &str) -> Result<Option<UserStreak>> {
        let streaks = self.streaks.read().await;
        Ok(streaks.get(user_id).copied())
    }

    async fn save_streak(&self, user_id: &str, streak: &UserStreak) -> Result<()> {
        let mut streaks = self.streaks.write().await;
        streaks.insert(user_id.to_string(), *streak);
        Ok(())
    }
}

// ===== Postgres =====

const PROFILE_TABLE: &str = "advisor_profiles";
const STREAK_TABLE: &str = "advisor_streaks";

/// Records are stored as JSON text, one row per user per table.
pub struct PostgresStore {
    pool: PgPool,
    schema_ready: Arc<OnceCell<()>>,
}

impl PostgresStore {
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
            .map_err(|e| AdvisorError::PersistenceError(format!("Invalid database URL: {}", e)))?;

        Ok(Self {
            pool,
            schema_ready: Arc::new(OnceCell::new()),
        })
    }

    async fn ensure_schema(&self) -> Result<()> {
        let pool = &self.pool;

        self.schema_ready
            .get_or_try_init(|| async {
                for table in [PROFILE_TABLE, STREAK_TABLE] {
                    let ddl = format!(
                        r#"
                        CREATE TABLE IF NOT EXISTS {} (
                          user_id TEXT PRIMARY KEY,
                          data TEXT NOT NULL,
                          updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                        );
                        "#,
                        table
                    );
                    sqlx::query(&ddl).execute(pool).await?;
                }
                Ok::<(), sqlx::Error>(())
            })
            .await
            .map_err(|e| {
                AdvisorError::PersistenceError(format!("Failed to initialize advisor schema: {}", e))
            })?;

        Ok(())
    }

    async fn load_record<T: DeserializeOwned>(&self, table: &str, user_id: &str) -> Result<Option<T>> {
        self.ensure_schema().await?;

        let query = format!("SELECT data FROM {} WHERE user_id = $1", table);
        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AdvisorError::PersistenceError(format!("Failed to load from {}: {}", table, e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data: String = row
            .try_get("data")
            .map_err(|e| AdvisorError::PersistenceError(format!("Malformed row in {}: {}", table, e)))?;

        Ok(Some(serde_json::from_str(&data)?))
    }

    async fn save_record<T: Serialize>(&self, table: &str, user_id: &str, record: &T) -> Result<()> {
        self.ensure_schema().await?;

        let data = serde_json::to_string(record)?;
        let query = format!(
            r#"
            INSERT INTO {} (user_id, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
            "#,
            table
        );

        sqlx::query(&query)
            .bind(user_id)
            .bind(data)
            .execute(&self.pool)
            .await
            .map_err(|e| AdvisorError::PersistenceError(format!("Failed to save to {}: {}", table, e)))?;

        debug!(user_id = %user_id, table = table, "Record saved");
        Ok(())
    }
}

#[async_trait::async_trait]
impl AdvisorStore for PostgresStore {
    async fn load_profile(&self, user_id: &str) -> Result<Option<FinancialProfile>> {
        self.load_record(PROFILE_TABLE, user_id).await
    }

    async fn save_profile(&self, user_id: &str, profile: &FinancialProfile) -> Result<()> {
        self.save_record(PROFILE_TABLE, user_id, profile).await
    }

    async fn load_streak(&self, user_id: &str) -> Result<Option<UserStreak>> {
        self.load_record(STREAK_TABLE, user_id).await
    }

    async fn save_streak(&self, user_id: &str, streak: &UserStreak) -> Result<()> {
        self.save_record(STREAK_TABLE, user_id, streak).await
    }
}

/// Postgres when configured and the URL is usable, in-memory otherwise.
pub fn build_store(config: &AdvisorConfig) -> Arc<dyn AdvisorStore> {
    if let Some(url) = config.database_url.as_deref() {
        match PostgresStore::connect_lazy(url) {
            Ok(store) => {
                info!("Advisor store backend: postgres");
                return Arc::new(store);
            }
            Err(error) => {
                warn!(
                    "Failed to initialize postgres store, falling back to in-memory: {}",
                    error
                );
            }
        }
    }

    info!("Advisor store backend: in-memory");
    Arc::new(InMemoryStore::new())
}
