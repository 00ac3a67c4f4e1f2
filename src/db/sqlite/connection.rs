//! SQLite database connection and migration management.

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{debug, info};

use super::executor::{Executor, Params};
use super::statements::person::SEED_ADMIN;
use super::{
    SqliteBookingRepository, SqliteBookingServiceRepository, SqlitePaymentRepository,
    SqlitePersonRepository, SqlitePropertyRepository, SqliteRosterRepository,
    SqliteServiceRepository,
};
use crate::auth::{DEFAULT_ADMIN_PASSWORD, hash_password};
use crate::db::{ADMIN_ID, Database, DbError, DbResult};
use crate::notifier::ChangeNotifier;

const SCHEMA: &str = include_str!("../../../data/sql/sqlite/schema.sql");
const DROP: &str = include_str!("../../../data/sql/sqlite/drop.sql");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database implementation.
///
/// Owns the connection pool and the change notifier every repository
/// reports through.
pub struct SqliteDatabase {
    pool: SqlitePool,
    notifier: ChangeNotifier,
}

impl SqliteDatabase {
    /// Open (creating if missing) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::open_with_notifier(path, ChangeNotifier::new()).await
    }

    /// Open a database file, raising changes on an existing notifier.
    pub async fn open_with_notifier<P: AsRef<Path>>(
        path: P,
        notifier: ChangeNotifier,
    ) -> DbResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Connection {
                    message: format!("cannot create {}: {}", parent.display(), e),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "opened database");
        Ok(Self { pool, notifier })
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Self::in_memory_with_notifier(ChangeNotifier::new()).await
    }

    pub async fn in_memory_with_notifier(notifier: ChangeNotifier) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        // One connection that never expires, otherwise the database vanishes.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool, notifier })
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub(crate) fn executor(&self) -> Executor<'_> {
        Executor::new(&self.pool, &self.notifier)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Database for SqliteDatabase {
    type Persons<'a> = SqlitePersonRepository<'a>;
    type Properties<'a> = SqlitePropertyRepository<'a>;
    type Bookings<'a> = SqliteBookingRepository<'a>;
    type Services<'a> = SqliteServiceRepository<'a>;
    type BookingServices<'a> = SqliteBookingServiceRepository<'a>;
    type Payments<'a> = SqlitePaymentRepository<'a>;
    type Rosters<'a> = SqliteRosterRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        let params = Params::new()
            .with("id", ADMIN_ID)
            .with("hashed_password", hash_password(DEFAULT_ADMIN_PASSWORD));
        let seeded = self
            .executor()
            .run(&SEED_ADMIN, &params)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        // A fresh admin row has already raised the signal.
        if seeded.rows_affected == 0 {
            self.notifier.notify();
        }

        debug!(seeded_admin = seeded.rows_affected > 0, "schema migrated");
        Ok(())
    }

    async fn reset(&self) -> DbResult<()> {
        sqlx::raw_sql(DROP)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;
        info!("dropped all tables");
        self.migrate().await
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    fn persons(&self) -> Self::Persons<'_> {
        SqlitePersonRepository {
            exec: self.executor(),
        }
    }

    fn properties(&self) -> Self::Properties<'_> {
        SqlitePropertyRepository {
            exec: self.executor(),
        }
    }

    fn bookings(&self) -> Self::Bookings<'_> {
        SqliteBookingRepository {
            exec: self.executor(),
        }
    }

    fn services(&self) -> Self::Services<'_> {
        SqliteServiceRepository {
            exec: self.executor(),
        }
    }

    fn booking_services(&self) -> Self::BookingServices<'_> {
        SqliteBookingServiceRepository {
            exec: self.executor(),
        }
    }

    fn payments(&self) -> Self::Payments<'_> {
        SqlitePaymentRepository {
            exec: self.executor(),
        }
    }

    fn rosters(&self) -> Self::Rosters<'_> {
        SqliteRosterRepository {
            exec: self.executor(),
        }
    }
}
