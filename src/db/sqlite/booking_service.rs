//! SQLite BookingServiceRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{flag, inserted_id, page_params, require_transient};
use super::statements::booking_service as stmt;
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{BookingService, BookingServiceRepository, DbError, DbResult, Id, Page};

/// SQLx-backed repository for services scheduled on bookings.
pub struct SqliteBookingServiceRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for BookingService {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(BookingService {
            id: row.try_get("id")?,
            booking_id: row.try_get("booking_id")?,
            service_id: row.try_get("service_id")?,
            duration: row.try_get("duration")?,
            completed: flag(row, "completed")?,
        })
    }
}

impl<'a> BookingServiceRepository for SqliteBookingServiceRepository<'a> {
    async fn create(&self, booking_service: &BookingService) -> DbResult<BookingService> {
        require_transient(BookingService::ENTITY, booking_service.id)?;
        booking_service.validate()?;

        let params = Params::new()
            .with("booking_id", booking_service.booking_id)
            .with("service_id", &booking_service.service_id)
            .with("duration", booking_service.duration)
            .with("completed", booking_service.completed);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        Ok(BookingService {
            id: inserted_id(BookingService::ENTITY, result.last_insert_id)?,
            ..booking_service.clone()
        })
    }

    async fn save(&self, booking_service: &BookingService) -> DbResult<BookingService> {
        if booking_service.is_transient() {
            return self.create(booking_service).await;
        }
        booking_service.validate()?;

        let params = Params::new()
            .with("id", booking_service.id)
            .with("booking_id", booking_service.booking_id)
            .with("service_id", &booking_service.service_id)
            .with("duration", booking_service.duration)
            .with("completed", booking_service.completed);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(booking_service.id).await
    }

    async fn get(&self, id: Id) -> DbResult<BookingService> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(BookingService::ENTITY, id))
    }

    async fn find(&self, booking_id: Id, service_id: &str) -> DbResult<Option<BookingService>> {
        let params = Params::new()
            .with("booking_id", booking_id)
            .with("service_id", service_id);
        self.exec.run(&stmt::FIND, &params).await?.first()
    }

    async fn delete(&self, id: Id) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn remove(&self, booking_id: Id, service_id: &str) -> DbResult<u64> {
        let params = Params::new()
            .with("booking_id", booking_id)
            .with("service_id", service_id);
        Ok(self.exec.run(&stmt::REMOVE, &params).await?.rows_affected)
    }

    async fn remove_all_for_booking(&self, booking_id: Id) -> DbResult<u64> {
        let params = Params::new().with("booking_id", booking_id);
        Ok(self
            .exec
            .run(&stmt::REMOVE_ALL_FOR_BOOKING, &params)
            .await?
            .rows_affected)
    }

    async fn list_by_booking(&self, booking_id: Id) -> DbResult<Vec<BookingService>> {
        let params = Params::new().with("booking_id", booking_id);
        self.exec
            .run(&stmt::LIST_BY_BOOKING, &params)
            .await?
            .records()
    }

    async fn list_by_service(&self, service_id: &str) -> DbResult<Vec<BookingService>> {
        let params = Params::new().with("service_id", service_id);
        self.exec
            .run(&stmt::LIST_BY_SERVICE, &params)
            .await?
            .records()
    }

    async fn count_by_booking(&self, booking_id: Id) -> DbResult<i64> {
        let params = Params::new().with("booking_id", booking_id);
        self.exec
            .run(&stmt::COUNT_BY_BOOKING, &params)
            .await?
            .scalar_i64("count")
    }

    async fn page_by_booking(&self, booking_id: Id, page: Page) -> DbResult<Vec<BookingService>> {
        let params = page_params(page)?.with("booking_id", booking_id);
        self.exec
            .run(&stmt::PAGE_BY_BOOKING, &params)
            .await?
            .records()
    }

    async fn search_by_booking(
        &self,
        booking_id: Id,
        query: &str,
        page: Page,
    ) -> DbResult<Vec<BookingService>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page_by_booking(booking_id, page).await;
        };
        let params = page_params(page)?
            .with("booking_id", booking_id)
            .with("query", pattern);
        self.exec
            .run(&stmt::SEARCH_BY_BOOKING, &params)
            .await?
            .records()
    }

    async fn set_completed(&self, id: Id, completed: bool) -> DbResult<u64> {
        let params = Params::new().with("completed", completed).with("id", id);
        Ok(self
            .exec
            .run(&stmt::SET_COMPLETED, &params)
            .await?
            .rows_affected)
    }

    async fn toggle_completed(&self, id: Id) -> DbResult<BookingService> {
        let params = Params::new().with("id", id);
        let result = self.exec.run(&stmt::TOGGLE_COMPLETED, &params).await?;
        if result.rows_affected == 0 {
            return Err(DbError::not_found(BookingService::ENTITY, id));
        }
        self.get(id).await
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<BookingService>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }
}
