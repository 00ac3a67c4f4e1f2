//! Database error types.
//!
//! This module provides the error type returned by every query function.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! Driver errors are classified here so callers never see raw `sqlx` errors.

use miette::Diagnostic;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(lawncare::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Entity already exists: {message}")]
    #[diagnostic(
        code(lawncare::db::already_exists),
        help("Usernames, emails and service ids must be unique.")
    )]
    AlreadyExists { message: String },

    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(lawncare::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(lawncare::db::validation_error))]
    Validation { message: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(code(lawncare::db::authentication))]
    Authentication { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(lawncare::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(lawncare::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(lawncare::db::connection_error))]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(
        code(lawncare::db::constraint),
        help("Referenced rows must exist, and rows still referenced cannot be deleted.")
    )]
    Constraint { message: String },
}

impl DbError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        DbError::Validation {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.kind() {
                    ErrorKind::UniqueViolation => DbError::AlreadyExists { message },
                    ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => DbError::Constraint { message },
                    _ => DbError::Database { message },
                }
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => DbError::InvalidData {
                message: e.to_string(),
                help: "the stored row does not match the record layout".to_string(),
            },
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DbError::Connection {
                    message: e.to_string(),
                }
            }
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
