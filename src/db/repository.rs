//! Repository traits for data access abstraction.
//!
//! These traits define the query boundary: every use case is one method
//! taking plain scalar, string or date arguments and returning a
//! [`DbResult`]. Front-ends only ever talk to these traits.

#![allow(async_fn_in_trait)]

use chrono::NaiveDate;

use crate::db::{
    DbResult,
    models::{
        Booking, BookingService, Completion, Id, ListResult, Page, Payment, PaymentProgress,
        Person, Property, Role, Roster, Service,
    },
};
use crate::notifier::ChangeNotifier;

/// Repository for Person operations.
pub trait PersonRepository {
    /// Insert a transient person; returns it with the assigned id.
    async fn create(&self, person: &Person) -> DbResult<Person>;

    /// Insert a transient person or update the row with the same id.
    async fn save(&self, person: &Person) -> DbResult<Person>;

    /// Get a person by ID.
    async fn get(&self, id: Id) -> DbResult<Person>;

    async fn find_by_username(&self, username: &str) -> DbResult<Option<Person>>;

    async fn find_by_email(&self, email: &str) -> DbResult<Option<Person>>;

    /// Resolve a username and password hash to the matching person.
    async fn login(&self, username: &str, hashed_password: &str) -> DbResult<Person>;

    async fn set_role(&self, id: Id, role: Role) -> DbResult<u64>;

    /// Delete a person by ID, returning the number of rows removed.
    async fn delete(&self, id: Id) -> DbResult<u64>;

    async fn count(&self) -> DbResult<i64>;

    async fn count_by_role(&self, role: Role) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Person>>;

    async fn list_by_role(&self, role: Role, page: Page) -> DbResult<Vec<Person>>;

    /// Case-insensitive substring search; an empty query lists a plain page.
    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Person>>;

    async fn list_page(&self, page: Page) -> DbResult<ListResult<Person>> {
        let total = self.count().await?;
        let items = self.page(page).await?;
        Ok(ListResult::new(items, total, page))
    }
}

/// Repository for Property operations.
pub trait PropertyRepository {
    async fn create(&self, property: &Property) -> DbResult<Property>;

    async fn save(&self, property: &Property) -> DbResult<Property>;

    async fn get(&self, id: Id) -> DbResult<Property>;

    /// First property with exactly this street address.
    async fn find_by_address(&self, street_address: &str) -> DbResult<Option<Property>>;

    async fn delete(&self, id: Id) -> DbResult<u64>;

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Property>>;

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Property>>;

    async fn list_page(&self, page: Page) -> DbResult<ListResult<Property>> {
        let total = self.count().await?;
        let items = self.page(page).await?;
        Ok(ListResult::new(items, total, page))
    }
}

/// Repository for Booking operations.
pub trait BookingRepository {
    async fn create(&self, booking: &Booking) -> DbResult<Booking>;

    async fn save(&self, booking: &Booking) -> DbResult<Booking>;

    async fn get(&self, id: Id) -> DbResult<Booking>;

    async fn delete(&self, id: Id) -> DbResult<u64>;

    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Booking>>;

    async fn list_by_property(&self, property_id: Id) -> DbResult<Vec<Booking>>;

    async fn count_by_person(&self, person_id: Id) -> DbResult<i64>;

    async fn count_by_property(&self, property_id: Id) -> DbResult<i64>;

    /// Bookings dated within `from..=to`, earliest first.
    async fn list_between(&self, from: NaiveDate, to: NaiveDate) -> DbResult<Vec<Booking>>;

    /// The person's bookings with at least one service not yet completed.
    async fn list_uncompleted_by_person(&self, person_id: Id) -> DbResult<Vec<Booking>>;

    /// Bookings with at least one service not yet completed.
    async fn list_uncompleted(&self) -> DbResult<Vec<Booking>>;

    async fn count_uncompleted(&self) -> DbResult<i64>;

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Booking>>;

    /// Also matches the customer's and the property's text columns.
    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Booking>>;

    /// Sum of the prices of the booking's services. NotFound for an unknown
    /// booking, as are `completion` and `is_completed`.
    async fn cost(&self, id: Id) -> DbResult<f64>;

    async fn completion(&self, id: Id) -> DbResult<Completion>;

    async fn is_completed(&self, id: Id) -> DbResult<bool> {
        Ok(self.completion(id).await?.is_completed())
    }

    async fn list_page(&self, page: Page) -> DbResult<ListResult<Booking>> {
        let total = self.count().await?;
        let items = self.page(page).await?;
        Ok(ListResult::new(items, total, page))
    }
}

/// Repository for the service catalog. Services are keyed by their text id.
pub trait ServiceRepository {
    async fn create(&self, service: &Service) -> DbResult<Service>;

    /// Insert or update the service with the same id.
    async fn save(&self, service: &Service) -> DbResult<Service>;

    async fn get(&self, id: &str) -> DbResult<Service>;

    async fn delete(&self, id: &str) -> DbResult<u64>;

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Service>>;

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Service>>;

    async fn list_page(&self, page: Page) -> DbResult<ListResult<Service>> {
        let total = self.count().await?;
        let items = self.page(page).await?;
        Ok(ListResult::new(items, total, page))
    }
}

/// Repository for services scheduled on bookings.
pub trait BookingServiceRepository {
    async fn create(&self, booking_service: &BookingService) -> DbResult<BookingService>;

    async fn save(&self, booking_service: &BookingService) -> DbResult<BookingService>;

    async fn get(&self, id: Id) -> DbResult<BookingService>;

    /// First entry for this service on this booking.
    async fn find(&self, booking_id: Id, service_id: &str) -> DbResult<Option<BookingService>>;

    async fn delete(&self, id: Id) -> DbResult<u64>;

    /// Remove every entry of a service from a booking.
    async fn remove(&self, booking_id: Id, service_id: &str) -> DbResult<u64>;

    async fn remove_all_for_booking(&self, booking_id: Id) -> DbResult<u64>;

    async fn list_by_booking(&self, booking_id: Id) -> DbResult<Vec<BookingService>>;

    async fn list_by_service(&self, service_id: &str) -> DbResult<Vec<BookingService>>;

    async fn count_by_booking(&self, booking_id: Id) -> DbResult<i64>;

    async fn page_by_booking(&self, booking_id: Id, page: Page) -> DbResult<Vec<BookingService>>;

    /// Matches service id and service description within one booking.
    async fn search_by_booking(
        &self,
        booking_id: Id,
        query: &str,
        page: Page,
    ) -> DbResult<Vec<BookingService>>;

    async fn set_completed(&self, id: Id, completed: bool) -> DbResult<u64>;

    /// Flip the completion flag and return the updated entry.
    async fn toggle_completed(&self, id: Id) -> DbResult<BookingService>;

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<BookingService>>;
}

/// Repository for Payment operations.
pub trait PaymentRepository {
    async fn create(&self, payment: &Payment) -> DbResult<Payment>;

    async fn save(&self, payment: &Payment) -> DbResult<Payment>;

    async fn get(&self, id: Id) -> DbResult<Payment>;

    async fn delete(&self, id: Id) -> DbResult<u64>;

    async fn list_by_booking(&self, booking_id: Id) -> DbResult<Vec<Payment>>;

    /// Payments on any booking made by this customer.
    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Payment>>;

    async fn list_by_property(&self, property_id: Id) -> DbResult<Vec<Payment>>;

    async fn total_for_booking(&self, booking_id: Id) -> DbResult<f64>;

    async fn count_for_booking(&self, booking_id: Id) -> DbResult<i64>;

    /// NotFound for an unknown booking.
    async fn progress(&self, booking_id: Id) -> DbResult<PaymentProgress>;

    /// True while less has been paid than the booking costs.
    async fn has_pending_payment(&self, booking_id: Id) -> DbResult<bool> {
        Ok(self.progress(booking_id).await?.is_pending())
    }

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Payment>>;

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Payment>>;

    async fn list_page(&self, page: Page) -> DbResult<ListResult<Payment>> {
        let total = self.count().await?;
        let items = self.page(page).await?;
        Ok(ListResult::new(items, total, page))
    }
}

/// Repository for staff assignments.
pub trait RosterRepository {
    async fn create(&self, roster: &Roster) -> DbResult<Roster>;

    async fn save(&self, roster: &Roster) -> DbResult<Roster>;

    async fn get(&self, id: Id) -> DbResult<Roster>;

    async fn delete(&self, id: Id) -> DbResult<u64>;

    /// Unassign a person from a booked service.
    async fn remove(&self, person_id: Id, booking_service_id: Id) -> DbResult<u64>;

    async fn list_by_booking_service(&self, booking_service_id: Id) -> DbResult<Vec<Roster>>;

    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Roster>>;

    async fn count_by_booking_service(&self, booking_service_id: Id) -> DbResult<i64>;

    async fn count_by_person(&self, person_id: Id) -> DbResult<i64>;

    async fn page_by_booking_service(
        &self,
        booking_service_id: Id,
        page: Page,
    ) -> DbResult<Vec<Roster>>;

    async fn page_by_person(&self, person_id: Id, page: Page) -> DbResult<Vec<Roster>>;

    async fn count(&self) -> DbResult<i64>;

    async fn page(&self, page: Page) -> DbResult<Vec<Roster>>;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Persons<'a>: PersonRepository
    where
        Self: 'a;
    type Properties<'a>: PropertyRepository
    where
        Self: 'a;
    type Bookings<'a>: BookingRepository
    where
        Self: 'a;
    type Services<'a>: ServiceRepository
    where
        Self: 'a;
    type BookingServices<'a>: BookingServiceRepository
    where
        Self: 'a;
    type Payments<'a>: PaymentRepository
    where
        Self: 'a;
    type Rosters<'a>: RosterRepository
    where
        Self: 'a;

    /// Create missing tables and seed rows. Safe to run repeatedly.
    async fn migrate(&self) -> DbResult<()>;

    /// Drop every table and run [`Database::migrate`] again.
    async fn reset(&self) -> DbResult<()>;

    /// The notifier raised after every change.
    fn notifier(&self) -> &ChangeNotifier;

    fn persons(&self) -> Self::Persons<'_>;

    fn properties(&self) -> Self::Properties<'_>;

    fn bookings(&self) -> Self::Bookings<'_>;

    fn services(&self) -> Self::Services<'_>;

    fn booking_services(&self) -> Self::BookingServices<'_>;

    fn payments(&self) -> Self::Payments<'_>;

    fn rosters(&self) -> Self::Rosters<'_>;
}
