use crate::cli::commands::PageParams;
use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, format_list, format_records};
use crate::db::{Database, PropertyRepository};

pub async fn list_properties<D: Database>(
    db: &D,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let result = db.properties().list_page(page.into()).await?;
    format_list(&result, format, "properties")
}

pub async fn search_properties<D: Database>(
    db: &D,
    query: &str,
    page: PageParams,
    format: OutputFormat,
) -> CliResult<String> {
    let items = db.properties().search(query, page.into()).await?;
    format_records(&items, format, "properties")
}
