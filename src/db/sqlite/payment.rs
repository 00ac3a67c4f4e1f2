//! SQLite PaymentRepository implementation.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{inserted_id, page_params, require_booking, require_transient};
use super::statements::payment as stmt;
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{DbError, DbResult, Id, Page, Payment, PaymentProgress, PaymentRepository};

/// SQLx-backed payment repository.
pub struct SqlitePaymentRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Payment {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Payment {
            id: row.try_get("id")?,
            booking_id: row.try_get("booking_id")?,
            amount: row.try_get("amount")?,
            payment_date: row.try_get::<NaiveDate, _>("payment_date")?,
        })
    }
}

impl<'a> PaymentRepository for SqlitePaymentRepository<'a> {
    async fn create(&self, payment: &Payment) -> DbResult<Payment> {
        require_transient(Payment::ENTITY, payment.id)?;
        payment.validate()?;

        let params = Params::new()
            .with("booking_id", payment.booking_id)
            .with("amount", payment.amount)
            .with("payment_date", payment.payment_date);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        Ok(Payment {
            id: inserted_id(Payment::ENTITY, result.last_insert_id)?,
            ..payment.clone()
        })
    }

    async fn save(&self, payment: &Payment) -> DbResult<Payment> {
        if payment.is_transient() {
            return self.create(payment).await;
        }
        payment.validate()?;

        let params = Params::new()
            .with("id", payment.id)
            .with("booking_id", payment.booking_id)
            .with("amount", payment.amount)
            .with("payment_date", payment.payment_date);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(payment.id).await
    }

    async fn get(&self, id: Id) -> DbResult<Payment> {
        self.exec
            .run(&stmt::GET_BY_ID, &Params::new().with("id", id))
            .await?
            .first()?
            .ok_or_else(|| DbError::not_found(Payment::ENTITY, id))
    }

    async fn delete(&self, id: Id) -> DbResult<u64> {
        let params = Params::new().with("id", id);
        Ok(self.exec.run(&stmt::DELETE, &params).await?.rows_affected)
    }

    async fn list_by_booking(&self, booking_id: Id) -> DbResult<Vec<Payment>> {
        let params = Params::new().with("booking_id", booking_id);
        self.exec
            .run(&stmt::LIST_BY_BOOKING, &params)
            .await?
            .records()
    }

    async fn list_by_person(&self, person_id: Id) -> DbResult<Vec<Payment>> {
        let params = Params::new().with("person_id", person_id);
        self.exec.run(&stmt::LIST_BY_PERSON, &params).await?.records()
    }

    async fn list_by_property(&self, property_id: Id) -> DbResult<Vec<Payment>> {
        let params = Params::new().with("property_id", property_id);
        self.exec
            .run(&stmt::LIST_BY_PROPERTY, &params)
            .await?
            .records()
    }

    async fn total_for_booking(&self, booking_id: Id) -> DbResult<f64> {
        let params = Params::new().with("booking_id", booking_id);
        self.exec
            .run(&stmt::TOTAL_FOR_BOOKING, &params)
            .await?
            .scalar_f64("total")
    }

    async fn count_for_booking(&self, booking_id: Id) -> DbResult<i64> {
        let params = Params::new().with("booking_id", booking_id);
        self.exec
            .run(&stmt::COUNT_FOR_BOOKING, &params)
            .await?
            .scalar_i64("count")
    }

    async fn progress(&self, booking_id: Id) -> DbResult<PaymentProgress> {
        let params = Params::new().with("booking_id", booking_id);
        let result = self.exec.run(&stmt::PROGRESS, &params).await?;
        require_booking(&result, booking_id)?;
        Ok(PaymentProgress {
            paid: result.scalar_f64("paid")?,
            payments: result.scalar_i64("payments")?,
            cost: result.scalar_f64("cost")?,
        })
    }

    async fn count(&self) -> DbResult<i64> {
        self.exec
            .run(&stmt::COUNT, &Params::new())
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Payment>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Payment>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page(page).await;
        };
        let params = page_params(page)?.with("query", pattern);
        self.exec.run(&stmt::SEARCH, &params).await?.records()
    }
}
