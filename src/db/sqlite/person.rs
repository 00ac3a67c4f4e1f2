//! SQLite PersonRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::executor::{Executor, FromRow, Params};
use super::helpers::{flag, inserted_id, page_params, require_transient};
use super::statements::{Statement, person as stmt};
use crate::db::fields::Described;
use crate::db::utils::like_pattern;
use crate::db::{DbError, DbResult, Id, Page, Person, PersonRepository, Role};

/// SQLx-backed person repository.
pub struct SqlitePersonRepository<'a> {
    pub(crate) exec: Executor<'a>,
}

impl FromRow for Person {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Person {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            is_employee: flag(row, "is_employee")?,
            hashed_password: row.try_get("hashed_password")?,
        })
    }
}

impl<'a> SqlitePersonRepository<'a> {
    async fn find_one(&self, statement: &Statement, params: Params) -> DbResult<Option<Person>> {
        self.exec.run(statement, &params).await?.first()
    }
}

impl<'a> PersonRepository for SqlitePersonRepository<'a> {
    async fn create(&self, person: &Person) -> DbResult<Person> {
        require_transient(Person::ENTITY, person.id)?;
        person.validate()?;

        let params = Params::new()
            .with("username", &person.username)
            .with("first_name", &person.first_name)
            .with("last_name", &person.last_name)
            .with("email", &person.email)
            .with("phone_number", &person.phone_number)
            .with("hashed_password", &person.hashed_password);
        let result = self.exec.run(&stmt::CREATE, &params).await?;

        // New accounts always start as customers.
        Ok(Person {
            id: inserted_id(Person::ENTITY, result.last_insert_id)?,
            is_employee: false,
            ..person.clone()
        })
    }

    async fn save(&self, person: &Person) -> DbResult<Person> {
        if person.is_transient() {
            return self.create(person).await;
        }
        person.validate()?;

        let params = Params::new()
            .with("id", person.id)
            .with("username", &person.username)
            .with("first_name", &person.first_name)
            .with("last_name", &person.last_name)
            .with("email", &person.email)
            .with("phone_number", &person.phone_number)
            .with("is_employee", person.is_employee)
            .with("hashed_password", &person.hashed_password);
        self.exec.run(&stmt::UPSERT, &params).await?;
        self.get(person.id).await
    }

    async fn get(&self, id: Id) -> DbResult<Person> {
        self.find_one(&stmt::GET_BY_ID, Params::new().with("id", id))
            .await?
            .ok_or_else(|| DbError::not_found(Person::ENTITY, id))
    }

    async fn find_by_username(&self, username: &str) -> DbResult<Option<Person>> {
        self.find_one(&stmt::GET_BY_USERNAME, Params::new().with("username", username))
            .await
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<Person>> {
        self.find_one(&stmt::GET_BY_EMAIL, Params::new().with("email", email))
            .await
    }

    async fn login(&self, username: &str, hashed_password: &str) -> DbResult<Person> {
        let params = Params::new()
            .with("username", username)
            .with("hashed_password", hashed_password);
        self.find_one(&stmt::LOGIN, params)
            .await?
            .ok_or_else(|| DbError::Authentication {
                message: format!("invalid username or password for '{}'", username),
            })
    }

    async fn set_role(&self, id: Id, role: Role) -> DbResult<u64> {
        let params = Params::new()
            .with("is_employee", role.is_employee())
            .with("id", id);
        Ok(self.exec.run(&stmt::SET_ROLE, &params).await?.rows_affected)
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

    async fn count_by_role(&self, role: Role) -> DbResult<i64> {
        let params = Params::new().with("is_employee", role.is_employee());
        self.exec
            .run(&stmt::COUNT_BY_ROLE, &params)
            .await?
            .scalar_i64("count")
    }

    async fn page(&self, page: Page) -> DbResult<Vec<Person>> {
        self.exec
            .run(&stmt::PAGE, &page_params(page)?)
            .await?
            .records()
    }

    async fn list_by_role(&self, role: Role, page: Page) -> DbResult<Vec<Person>> {
        let params = page_params(page)?.with("is_employee", role.is_employee());
        self.exec
            .run(&stmt::PAGE_BY_ROLE, &params)
            .await?
            .records()
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Person>> {
        let Some(pattern) = like_pattern(query) else {
            return self.page(page).await;
        };
        let params = page_params(page)?.with("query", pattern);
        self.exec.run(&stmt::SEARCH, &params).await?.records()
    }
}
