//! The execution shim between typed query functions and SQLite.
//!
//! [`Executor::run`] binds a catalog statement from a [`Params`] mapping,
//! executes it on the shared connection and reports rows, affected-row count
//! and last inserted id. Every driver error becomes a [`DbError`]; nothing
//! here panics. A mutation that changed at least one row fires the change
//! notifier exactly once.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use super::statements::{Statement, StatementKind};
use crate::db::{DbError, DbResult, Page};
use crate::notifier::ChangeNotifier;

/// A value bound to a named statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Name → value mapping a statement is bound from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<&'static str, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a parameter.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.0.insert(name, value.into());
        self
    }

    /// Add `limit` and `offset` for a page.
    pub fn page(self, page: Page) -> Self {
        self.with("limit", page.limit).with("offset", page.offset)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Decode one result row into a record.
pub trait FromRow: Sized {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// What a statement produced.
#[derive(Default)]
pub struct Execution {
    pub rows: Vec<SqliteRow>,
    pub rows_affected: u64,
    /// Set for [`StatementKind::Insert`] statements only.
    pub last_insert_id: Option<i64>,
}

impl fmt::Debug for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Execution")
            .field("rows", &self.rows.len())
            .field("rows_affected", &self.rows_affected)
            .field("last_insert_id", &self.last_insert_id)
            .finish()
    }
}

impl Execution {
    /// Map every row into a record; the first failure aborts the mapping.
    pub fn records<T: FromRow>(&self) -> DbResult<Vec<T>> {
        self.rows.iter().map(|row| decode(row, T::from_row)).collect()
    }

    /// The first row as a record, if any.
    pub fn first<T: FromRow>(&self) -> DbResult<Option<T>> {
        self.rows
            .first()
            .map(|row| decode(row, T::from_row))
            .transpose()
    }

    /// Integer column of the first row.
    pub fn scalar_i64(&self, column: &str) -> DbResult<i64> {
        self.scalar(column)
    }

    /// Real column of the first row.
    pub fn scalar_f64(&self, column: &str) -> DbResult<f64> {
        self.scalar(column)
    }

    fn scalar<T>(&self, column: &str) -> DbResult<T>
    where
        T: for<'r> sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
    {
        let row = self.rows.first().ok_or_else(|| DbError::InvalidData {
            message: format!("expected a row with column '{}'", column),
            help: "aggregate statements always return one row".to_string(),
        })?;
        decode(row, |row| row.try_get::<T, _>(column))
    }
}

fn decode<T>(
    row: &SqliteRow,
    f: impl FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
) -> DbResult<T> {
    f(row).map_err(|e| {
        warn!(error = %e, "failed to map row");
        DbError::InvalidData {
            message: e.to_string(),
            help: "the stored row does not match the record layout".to_string(),
        }
    })
}

/// Runs catalog statements on the shared pool and raises the change signal.
#[derive(Clone, Copy)]
pub struct Executor<'a> {
    pool: &'a SqlitePool,
    notifier: &'a ChangeNotifier,
}

impl<'a> Executor<'a> {
    pub fn new(pool: &'a SqlitePool, notifier: &'a ChangeNotifier) -> Self {
        Self { pool, notifier }
    }

    /// Execute one statement. Each call commits on its own.
    pub async fn run(&self, stmt: &Statement, params: &Params) -> DbResult<Execution> {
        let mut query = sqlx::query(stmt.sql);
        for name in stmt.params {
            let value = params.get(name).ok_or_else(|| {
                let e = DbError::Database {
                    message: format!("statement {} is missing parameter '{}'", stmt.name, name),
                };
                warn!(statement = stmt.name, error = %e, "statement not executed");
                e
            })?;
            query = match value {
                Value::Null => query.bind(None::<i64>),
                Value::Integer(v) => query.bind(*v),
                Value::Real(v) => query.bind(*v),
                Value::Text(v) => query.bind(v.clone()),
                Value::Date(v) => query.bind(*v),
            };
        }

        let execution = match stmt.kind {
            StatementKind::Query => {
                let rows = query
                    .fetch_all(self.pool)
                    .await
                    .map_err(|e| self.fail(stmt, e))?;
                Execution {
                    rows,
                    ..Execution::default()
                }
            }
            StatementKind::Insert | StatementKind::Mutation => {
                let result = query
                    .execute(self.pool)
                    .await
                    .map_err(|e| self.fail(stmt, e))?;
                Execution {
                    rows: Vec::new(),
                    rows_affected: result.rows_affected(),
                    last_insert_id: (stmt.kind == StatementKind::Insert)
                        .then(|| result.last_insert_rowid()),
                }
            }
        };

        debug!(
            statement = stmt.name,
            rows = execution.rows.len(),
            rows_affected = execution.rows_affected,
            "statement executed"
        );

        if stmt.kind.is_mutation() && execution.rows_affected > 0 {
            self.notifier.notify();
        }

        Ok(execution)
    }

    fn fail(&self, stmt: &Statement, e: sqlx::Error) -> DbError {
        let err = DbError::from(e);
        warn!(statement = stmt.name, error = %err, "statement failed");
        err
    }
}
