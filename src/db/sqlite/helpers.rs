//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Execution, Params};
use crate::db::{DbError, DbResult, Page};

/// Decode a 0/1 integer column as a bool, rejecting any other value.
pub fn flag(row: &SqliteRow, column: &str) -> Result<bool, sqlx::Error> {
    match row.try_get::<i64, _>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("expected 0 or 1, found {}", other).into(),
        }),
    }
}

/// Parameters for a page, rejecting windows SQLite would misread.
pub fn page_params(page: Page) -> DbResult<Params> {
    if page.offset < 0 {
        return Err(DbError::validation(format!(
            "page offset must not be negative (got {})",
            page.offset
        )));
    }
    if page.limit < 1 {
        return Err(DbError::validation(format!(
            "page limit must be at least 1 (got {})",
            page.limit
        )));
    }
    Ok(Params::new().page(page))
}

/// Reject records that already carry an id where a new one is expected.
pub fn require_transient(entity: &str, id: i64) -> DbResult<()> {
    if id == crate::db::TRANSIENT_ID {
        Ok(())
    } else {
        Err(DbError::validation(format!(
            "{} {} is already persisted; use save() to update it",
            entity, id
        )))
    }
}

/// Fail with NotFound when an aggregate's `found` column is 0.
pub fn require_booking(result: &Execution, id: i64) -> DbResult<()> {
    if result.scalar_i64("found")? == 0 {
        Err(DbError::not_found("Booking", id))
    } else {
        Ok(())
    }
}

/// The id SQLite assigned to an insert.
pub fn inserted_id(entity: &str, last_insert_id: Option<i64>) -> DbResult<i64> {
    last_insert_id.ok_or_else(|| DbError::Database {
        message: format!("{} insert did not report a row id", entity),
    })
}
