//! SQLite ServiceRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::page_params;
use super::statements::service as stmt;
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{DbError, DbResult, Page, Service, ServiceRepository};

/// SQLx-backed service catalog repository.
pub struct SqliteServiceRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Service {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Service {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        })
    }
}

fn params_for(service: &Service) -> Params {
    Params::new()
        .with("id", &service.id)
        .with("description", &service.description)
        .with("price", service.price)
}

impl<'a> ServiceRepository for SqliteServiceRepository<'a> {
    async fn create(&self, service: &Service) -> DbResult<Service> {
        service.validate()?;
        self.exec.run(&stmt::CREATE, &params_for(service)).await?;
        Ok(service.clone())
    }

    async fn save(&self, service: &Service) -> DbResult<Service> {
        service.validate()?;
        self.exec.run(&stmt::UPSERT, &params_for(service)).await?;
        self.get(&service.id).await
    }

    async fn get(&self, id: &str) -> DbResult<Service> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(Service::ENTITY, id))
    }

    async fn delete(&self, id: &str) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Service>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Service>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page(page).await;
        };
        let params = page_params(page)?.with("query", pattern);
        self.exec.run(&stmt::SEARCH, &params).await?.records()
    }
}
