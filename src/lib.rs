//! Data-access layer for a lawn-care booking business.
//!
//! [`db`] holds the models, the repository traits and their SQLite
//! implementation. [`notifier`] broadcasts a signal after every change so
//! front-ends can refresh, and [`auth`] hashes passwords for login.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod db;
pub mod notifier;
