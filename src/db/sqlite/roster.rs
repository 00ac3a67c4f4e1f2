//! SQLite RosterRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{inserted_id, page_params, require_transient};
use super::statements::roster as stmt;
use crate::db::fields::Described;
use crate::db::{DbError, DbResult, Id, Page, Roster, RosterRepository};

/// SQLx-backed roster repository.
pub struct SqliteRosterRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Roster {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Roster {
            id: row.try_get("id")?,
            person_id: row.try_get("person_id")?,
            booking_service_id: row.try_get("booking_service_id")?,
        })
    }
}

impl<'a> RosterRepository for SqliteRosterRepository<'a> {
    async fn create(&self, roster: &Roster) -> DbResult<Roster> {
        require_transient(Roster::ENTITY, roster.id)?;
        roster.validate()?;

        let params = Params::new()
            .with("person_id", roster.person_id)
            .with("booking_service_id", roster.booking_service_id);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        Ok(Roster {
            id: inserted_id(Roster::ENTITY, result.last_insert_id)?,
            ..roster.clone()
        })
    }

    async fn save(&self, roster: &Roster) -> DbResult<Roster> {
        if roster.is_transient() {
            return self.create(roster).await;
        }
        roster.validate()?;

        let params = Params::new()
            .with("id", roster.id)
            .with("person_id", roster.person_id)
            .with("booking_service_id", roster.booking_service_id);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(roster.id).await
    }

    async fn get(&self, id: Id) -> DbResult<Roster> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(Roster::ENTITY, id))
    }

    async fn delete(&self, id: Id) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn remove(&self, person_id: Id, booking_service_id: Id) -> DbResult<u64> {
        let params = Params::new()
            .with("person_id", person_id)
            .with("booking_service_id", booking_service_id);
        Ok(self.exec.run(&stmt::REMOVE, &params).await?.rows_affected)
    }

    async fn list_by_booking_service(&self, booking_service_id: Id) -> DbResult<Vec<Roster>> {
        let params = Params::new().with("booking_service_id", booking_service_id);
        self.exec
            .run(&stmt::LIST_BY_BOOKING_SERVICE, &params)
            .await?
            .records()
    }

    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Roster>> {
        let params = Params::new().with("person_id", person_id);
        self.exec.run(&stmt::LIST_BY_PERSON, &params).await?.records()
    }

    async fn count_by_booking_service(&self, booking_service_id: Id) -> DbResult<i64> {
        let params = Params::new().with("booking_service_id", booking_service_id);
        self.exec
            .run(&stmt::COUNT_BY_BOOKING_SERVICE, &params)
            .await?
            .scalar_i64("count")
    }

    async fn count_by_person(&self, person_id: Id) -> DbResult<i64> {
        let params = Params::new().with("person_id", person_id);
        self.exec
            .run(&stmt::COUNT_BY_PERSON, &params)
            .await?
            .scalar_i64("count")
    }

    async fn page_by_booking_service(
        &self,
        booking_service_id: Id,
        page: Page,
    ) -> DbResult<Vec<Roster>> {
        let params = page_params(page)?.with("booking_service_id", booking_service_id);
        self.exec
            .run(&stmt::PAGE_BY_BOOKING_SERVICE, &params)
            .await?
            .records()
    }

    async fn page_by_person(&self, person_id: Id, page: Page) -> DbResult<Vec<Roster>> {
        let params = page_params(page)?.with("person_id", person_id);
        self.exec
            .run(&stmt::PAGE_BY_PERSON, &params)
            .await?
            .records()
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Roster>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }
}
