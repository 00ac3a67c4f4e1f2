//! SQLite BookingRepository implementation.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{inserted_id, page_params, require_booking, require_transient};
use super::statements::booking as stmt;
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{Booking, BookingRepository, Completion, DbError, DbResult, Id, Page};

/// SQLx-backed booking repository.
pub struct SqliteBookingRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Booking {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Booking {
            id: row.try_get("id")?,
            person_id: row.try_get("person_id")?,
            property_id: row.try_get("property_id")?,
            booking_date: row.try_get::<NaiveDate, _>("booking_date")?,
        })
    }
}

impl<'a> BookingRepository for SqliteBookingRepository<'a> {
    async fn create(&self, booking: &Booking) -> DbResult<Booking> {
        require_transient(Booking::ENTITY, booking.id)?;
        booking.validate()?;

        let params = Params::new()
            .with("person_id", booking.person_id)
            .with("property_id", booking.property_id)
            .with("booking_date", booking.booking_date);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        Ok(Booking {
            id: inserted_id(Booking::ENTITY, result.last_insert_id)?,
            ..booking.clone()
        })
    }

    async fn save(&self, booking: &Booking) -> DbResult<Booking> {
        if booking.is_transient() {
            return self.create(booking).await;
        }
        booking.validate()?;

        let params = Params::new()
            .with("id", booking.id)
            .with("person_id", booking.person_id)
            .with("property_id", booking.property_id)
            .with("booking_date", booking.booking_date);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(booking.id).await
    }

    async fn get(&self, id: Id) -> DbResult<Booking> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(Booking::ENTITY, id))
    }

    async fn delete(&self, id: Id) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Booking>> {
        let params = Params::new().with("person_id", person_id);
        self.exec.run(&stmt::LIST_BY_PERSON, &params).await?.records()
    }

    async fn list_by_property(&self, property_id: Id) -> DbResult<Vec<Booking>> {
        let params = Params::new().with("property_id", property_id);
        self.exec
            .run(&stmt::LIST_BY_PROPERTY, &params)
            .await?
            .records()
    }

    async fn count_by_person(&self, person_id: Id) -> DbResult<i64> {
        let params = Params::new().with("person_id", person_id);
        self.exec
            .run(&stmt::COUNT_BY_PERSON, &params)
            .await?
            .scalar_i64("count")
    }

    async fn count_by_property(&self, property_id: Id) -> DbResult<i64> {
        let params = Params::new().with("property_id", property_id);
        self.exec
            .run(&stmt::COUNT_BY_PROPERTY, &params)
            .await?
            .scalar_i64("count")
    }

    async fn list_between(&self, from: NaiveDate, to: NaiveDate) -> DbResult<Vec<Booking>> {
        if from > to {
            return Err(DbError::validation(format!(
                "date range starts after it ends ({} > {})",
                from, to
            )));
        }
        let params = Params::new().with("from", from).with("to", to);
        self.exec.run(&stmt::LIST_BETWEEN, &params).await?.records()
    }

    async fn list_uncompleted_by_person(&self, person_id: Id) -> DbResult<Vec<Booking>> {
        let params = Params::new().with("person_id", person_id);
        self.exec
            .run(&stmt::LIST_UNCOMPLETED_BY_PERSON, &params)
            .await?
            .records()
    }

    async fn list_uncompleted(&self) -> DbResult<Vec<Booking>> {
        self.exec
            .run(&stmt::LIST_UNCOMPLETED, &Params::new())
            .await?
            .records()
    }

    async fn count_uncompleted(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT_UNCOMPLETED, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Booking>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Booking>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page(page).await;
        };
        let params = page_params(page)?.with("query", pattern);
        self.exec.run(&stmt::SEARCH, &params).await?.records()
    }

    async fn cost(&self, id: Id) -> DbResult<f64> {
        let params = Params::new().with("booking_id", id);
        let result = self.exec.run(&stmt::COST, &params).await?;
        require_booking(&result, id)?;
        result.scalar_f64("cost")
    }

    async fn completion(&self, id: Id) -> DbResult<Completion> {
        let params = Params::new().with("booking_id", id);
        let result = self.exec.run(&stmt::COMPLETION, &params).await?;
        require_booking(&result, id)?;
        Ok(Completion {
            completed: result.scalar_i64("completed")?,
            total: result.scalar_i64("total")?,
        })
    }
}
