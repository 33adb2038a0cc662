//! PostgreSQL persistence for saved forecasts.
//!
//! [`Database`] owns a single lazily opened connection. The first call to
//! [`Database::connection`] connects; later calls ping the cached connection
//! and reconnect if the server dropped it. The connection sits behind an async
//! mutex, so concurrent callers in one process take turns instead of
//! interleaving statements.
//!
//! # Example
//!
//! ```no_run
//! use database::{forecast_store, Database, DatabaseConfig};
//! use forecast::ForecastResult;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()?);
//!
//!     let forecast = ForecastResult {
//!         city: Some("London".to_string()),
//!         country: Some("GB".to_string()),
//!         forecast: Vec::new(),
//!     };
//!     let id = forecast_store::save_forecast(&db, "alice", "London", &forecast).await?;
//!     println!("saved as {}", id);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod forecast_store;
pub mod models;

pub use config::DatabaseConfig;
pub use error::{DatabaseError, Result};
pub use models::StoredForecastRecord;

use std::sync::Arc;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{info, warn};

/// Exclusive access to the shared connection, released on drop.
pub type ConnectionGuard<'a> = MappedMutexGuard<'a, PgConnection>;

/// Lazily connected, self-healing database handle.
///
/// Clones share the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
    conn: Arc<Mutex<Option<PgConnection>>>,
}

impl Database {
    /// Create a handle. No connection is opened until first use.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self::with_options(config.connect_options())
    }

    /// Create a handle from raw sqlx connect options.
    pub fn with_options(options: PgConnectOptions) -> Self {
        Self {
            options,
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the shared connection, opening or reopening it as needed.
    ///
    /// A cached connection is pinged before it is handed out; if the ping
    /// fails the stale connection is dropped and a new one is opened.
    pub async fn connection(&self) -> Result<ConnectionGuard<'_>> {
        let mut slot = self.conn.lock().await;

        let healthy = match slot.as_mut() {
            Some(conn) => match conn.ping().await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "Cached database connection is closed, reconnecting");
                    false
                }
            },
            None => false,
        };

        if !healthy {
            // Drop the stale connection before dialing a new one.
            *slot = None;
            *slot = Some(self.connect().await?);
        }

        MutexGuard::try_map(slot, Option::as_mut).map_err(|_| {
            DatabaseError::Connection(sqlx::Error::Protocol(
                "connection slot empty after connect".to_string(),
            ))
        })
    }

    /// Whether a connection is currently cached (healthy or not).
    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    async fn connect(&self) -> Result<PgConnection> {
        let conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(DatabaseError::Connection)?;

        info!(
            host = self.options.get_host(),
            port = self.options.get_port(),
            database = self.options.get_database().unwrap_or_default(),
            "Connected to database"
        );

        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            name: "weather".to_string(),
            user: "app".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_is_lazy() {
        let db = Database::new(&unreachable_config());
        assert!(!db.is_connected().await);
    }

    #[tokio::test]
    async fn test_connection_error() {
        let db = Database::new(&unreachable_config());

        let result = db.connection().await;

        assert!(matches!(result, Err(DatabaseError::Connection(_))));
        assert!(!db.is_connected().await);
    }
}
