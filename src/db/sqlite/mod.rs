//! SQLite implementation of the database traits.
//!
//! Every query goes through the statement catalog in [`statements`] and the
//! [`executor`] shim; the repositories only bind arguments and map rows.

mod booking;
mod booking_service;
mod connection;
pub mod executor;
mod helpers;
mod payment;
mod person;
mod property;
mod roster;
mod service;
pub mod statements;

#[cfg(test)]
mod booking_service_test;
#[cfg(test)]
mod booking_test;
#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod property_test;

pub use booking::SqliteBookingRepository;
pub use booking_service::SqliteBookingServiceRepository;
pub use connection::SqliteDatabase;
pub use payment::SqlitePaymentRepository;
pub use person::SqlitePersonRepository;
pub use property::SqlitePropertyRepository;
pub use roster::SqliteRosterRepository;
pub use service::SqliteServiceRepository;
