use crate::cli::commands::PageParams;
use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, format_list, format_records};
use crate::db::{Database, ServiceRepository};

/// List the service catalog.
pub async fn list_services<D: Database>(
    db: &D,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let result = db.services().list_page(page.into()).await?;
    format_list(&result, format, "services")
}

pub async fn search_services<D: Database>(
    db: &D,
    query: &str,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let items = db.services().search(query, page.into()).await?;
    format_records(&items, format, "services")
}
