//! Database abstraction layer.
//!
//! The repository traits are the only query surface front-ends see; the
//! SQLite backend implements them on top of a named statement catalog.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Person, Property, Booking, Service, ...)
//! - `fields`: Static field tables used for validation and display
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLite implementation

mod error;
pub mod fields;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
