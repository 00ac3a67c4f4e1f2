//! SQLite PropertyRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{inserted_id, page_params, require_transient};
use super::statements::property as stmt;
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{DbError, DbResult, Id, Page, Property, PropertyRepository};

/// SQLx-backed property repository.
pub struct SqlitePropertyRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Property {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Property {
            id: row.try_get("id")?,
            street_address: row.try_get("street_address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            post_code: row.try_get("post_code")?,
        })
    }
}

impl<'a> PropertyRepository for SqlitePropertyRepository<'a> {
    async fn create(&self, property: &Property) -> DbResult<Property> {
        require_transient(Property::ENTITY, property.id)?;
        property.validate()?;

        let params = Params::new()
            .with("street_address", &property.street_address)
            .with("city", &property.city)
            .with("state", &property.state)
            .with("post_code", &property.post_code);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        Ok(Property {
            id: inserted_id(Property::ENTITY, result.last_insert_id)?,
            ..property.clone()
        })
    }

    async fn save(&self, property: &Property) -> DbResult<Property> {
        if property.is_transient() {
            return self.create(property).await;
        }
        property.validate()?;

        let params = Params::new()
            .with("id", property.id)
            .with("street_address", &property.street_address)
            .with("city", &property.city)
            .with("state", &property.state)
            .with("post_code", &property.post_code);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(property.id).await
    }

    async fn get(&self, id: Id) -> DbResult<Property> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(Property::ENTITY, id))
    }

    async fn find_by_address(&self, street_address: &str) -> DbResult<Option<Property>> {
        let params = Params::new().with("street_address", street_address);
        self.exec.run(&stmt::GET_BY_ADDRESS, &params).await?.first()
    }

    async fn delete(&self, id: Id) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Property>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Property>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page(page).await;
        };
        let params = page_params(page)?.with("query", pattern);
        self.exec.run(&stmt::SEARCH, &params).await?.records()
    }
}
