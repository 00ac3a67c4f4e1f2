//! Domain models for the lawn-care database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application. A record whose id is [`TRANSIENT_ID`]
//! has not been persisted yet.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Integer primary key used by every entity except [`Service`].
pub type Id = i64;

/// Sentinel id of a record that has not been written to the database.
pub const TRANSIENT_ID: Id = -1;

/// Fixed id of the seeded administrator account.
pub const ADMIN_ID: Id = 1;

/// Page size used when callers do not pick one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// =============================================================================
// Pagination
// =============================================================================

/// Offset/limit window over a listing ordered by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of rows to skip.
    pub offset: i64,
    /// Maximum number of rows to return.
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Window for a 1-based page number. Page numbers below 1 clamp to 1.
    pub fn number(page: i64, page_size: i64) -> Self {
        Self {
            offset: (page.max(1) - 1).saturating_mul(page_size),
            limit: page_size,
        }
    }
}

/// Result of a paginated list query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of all rows (before pagination).
    pub total: i64,
    /// Limit that was applied.
    pub limit: i64,
    /// Offset that was applied.
    pub offset: i64,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total: i64, page: Page) -> Self {
        Self {
            items,
            total,
            limit: page.limit,
            offset: page.offset,
        }
    }

    /// Number of pages of `limit` rows needed to cover `total`.
    pub fn page_count(&self) -> i64 {
        crate::db::utils::page_count(self.total, self.limit)
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Whether a person is a customer or a member of staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Employee,
}

impl Role {
    pub fn from_employee_flag(is_employee: bool) -> Self {
        if is_employee {
            Role::Employee
        } else {
            Role::Customer
        }
    }

    pub fn is_employee(self) -> bool {
        matches!(self, Role::Employee)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "employee" => Ok(Role::Employee),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A customer or employee account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Id,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub is_employee: bool,
    #[serde(default, skip_serializing)]
    pub hashed_password: String,
}

impl Person {
    /// A transient customer record.
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        Self {
            id: TRANSIENT_ID,
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            is_employee: false,
            hashed_password: hashed_password.into(),
        }
    }

    pub fn role(&self) -> Role {
        Role::from_employee_flag(self.is_employee)
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = if self.is_employee { "Employee" } else { "Customer" };
        write!(f, "{} {} ({})", self.first_name, self.last_name, role)
    }
}

/// A serviceable address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: Id,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub post_code: String,
}

impl Property {
    pub fn new(
        street_address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        post_code: impl Into<String>,
    ) -> Self {
        Self {
            id: TRANSIENT_ID,
            street_address: street_address.into(),
            city: city.into(),
            state: state.into(),
            post_code: post_code.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street_address, self.city, self.state, self.post_code
        )
    }
}

/// A customer's visit to a property on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Id,
    /// The customer.
    pub person_id: Id,
    pub property_id: Id,
    pub booking_date: NaiveDate,
}

impl Booking {
    pub fn new(person_id: Id, property_id: Id, booking_date: NaiveDate) -> Self {
        Self {
            id: TRANSIENT_ID,
            person_id,
            property_id,
            booking_date,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking {} for {} at {} on {}",
            self.id, self.person_id, self.property_id, self.booking_date
        )
    }
}

/// A catalog entry keyed by a human-chosen id such as `"mow"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub description: String,
    pub price: f64,
}

impl Service {
    pub fn new(id: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            price,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (${:.2})", self.id, self.description, self.price)
    }
}

/// A service scheduled on a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingService {
    pub id: Id,
    pub booking_id: Id,
    pub service_id: String,
    /// Minutes.
    pub duration: i64,
    pub completed: bool,
}

impl BookingService {
    /// Default duration in minutes, matching the column default.
    pub const DEFAULT_DURATION: i64 = 60;

    pub fn new(booking_id: Id, service_id: impl Into<String>, duration: i64) -> Self {
        Self {
            id: TRANSIENT_ID,
            booking_id,
            service_id: service_id.into(),
            duration,
            completed: false,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

/// A (possibly partial) payment toward a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Id,
    pub booking_id: Id,
    pub amount: f64,
    pub payment_date: NaiveDate,
}

impl Payment {
    pub fn new(booking_id: Id, amount: f64, payment_date: NaiveDate) -> Self {
        Self {
            id: TRANSIENT_ID,
            booking_id,
            amount,
            payment_date,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment {} - Booking {} - ${:.2} on {}",
            self.id, self.booking_id, self.amount, self.payment_date
        )
    }
}

/// Assignment of an employee to a booked service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub id: Id,
    pub person_id: Id,
    pub booking_service_id: Id,
}

impl Roster {
    pub fn new(person_id: Id, booking_service_id: Id) -> Self {
        Self {
            id: TRANSIENT_ID,
            person_id,
            booking_service_id,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == TRANSIENT_ID
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// Money paid against a booking compared with what its services cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentProgress {
    pub paid: f64,
    pub payments: i64,
    pub cost: f64,
}

/// Whole cents of a summed amount, which may carry float error.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

impl PaymentProgress {
    /// Compared in whole cents.
    pub fn is_pending(&self) -> bool {
        to_cents(self.paid) < to_cents(self.cost)
    }

    /// Amount still owed, never negative.
    pub fn outstanding(&self) -> f64 {
        (to_cents(self.cost) - to_cents(self.paid)).max(0) as f64 / 100.0
    }
}

/// Completed versus scheduled services on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub completed: i64,
    pub total: i64,
}

impl Completion {
    /// True once no service on the booking is left uncompleted.
    pub fn is_completed(&self) -> bool {
        self.completed >= self.total
    }
}
