use crate::cli::commands::PageParams;
use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, format_list, format_records};
use crate::db::{Database, PersonRepository, Role};

/// List people, optionally only customers or only employees.
pub async fn list_persons<D: Database>(
    db: &D,
    role: Option<Role>,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let repo = db.persons();
    match role {
        None => {
            let result = repo.list_page(page.into()).await?;
            format_list(&result, format, "people")
        }
        Some(role) => {
            let items = repo.list_by_role(role, page.into()).await?;
            format_records(&items, format, "people")
        }
    }
}

pub async fn search_persons<D: Database>(
    db: &D,
    query: &str,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let items = db.persons().search(query, page.into()).await?;
    format_records(&items, format, "people")
}
