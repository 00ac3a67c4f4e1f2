//! Shared utilities for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, builder::Builder, settings::Style};

use crate::cli::error::CliResult;
use crate::db::ListResult;
use crate::db::fields::Described;

/// How list and show commands print their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

/// Render records as a table whose columns come from the model's field table.
pub fn records_table<T: Described>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::header());
    for record in records {
        builder.push_record(
            record
                .row()
                .into_iter()
                .map(|cell| truncate_with_ellipsis(&cell, 40)),
        );
    }
    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// Two-column field/value table.
pub fn detail_table<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, value) in rows {
        builder.push_record([field.to_string(), value]);
    }
    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// Print records that carry no total, such as search hits.
pub fn format_records<T: Described + Serialize>(
    items: &[T],
    format: OutputFormat,
    plural: &str,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Table if items.is_empty() => Ok(format!("No {} found.", plural)),
        OutputFormat::Table => Ok(records_table(items)),
    }
}

/// Print one page of a listing in the requested format.
pub fn format_list<T: Described + Serialize>(
    result: &ListResult<T>,
    format: OutputFormat,
    plural: &str,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Table if result.items.is_empty() => Ok(format!("No {} found.", plural)),
        OutputFormat::Table => {
            let page = result.offset / result.limit.max(1) + 1;
            Ok(format!(
                "{}\nPage {} of {} ({} {} total)",
                records_table(&result.items),
                page,
                result.page_count().max(1),
                result.total,
                plural
            ))
        }
    }
}
