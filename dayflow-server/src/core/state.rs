//! Server state

use dashmap::DashMap;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Per-user mutual-exclusion scope for check-in.
///
/// Check-in is a read-then-insert; holding the user's lock across that
/// window means two concurrent check-ins cannot both observe "no record
/// yet" - the second sees the first's row and fails with AlreadyCheckedIn
/// instead of a raw constraint error.
#[derive(Debug, Default)]
pub struct CheckInLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl CheckInLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the lock for one user. The guard releases on drop.
    pub async fn acquire(&self, user_id: i64) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }
}

/// Server state - shared references to every service
///
/// Cloning is shallow (Arc-backed) and cheap; one instance is shared by
/// all request handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// Per-user check-in serialization
    pub checkin_locks: Arc<CheckInLocks>,
}

impl ServerState {
    /// Assemble state from an existing pool (used by tests)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
            checkin_locks: Arc::new(CheckInLocks::new()),
        }
    }

    /// Initialize server state: working directories, database, services
    pub async fn initialize(config: &Config) -> Result<Self, shared::AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| shared::AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_path = config.database_dir().join("dayflow.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.pool))
    }
}
