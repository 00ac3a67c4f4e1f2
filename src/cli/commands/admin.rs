use std::path::Path;

use crate::cli::error::{CliError, CliResult};
use crate::db::{Database, PersonRepository, ServiceRepository};

/// Create the schema and seed rows if they are missing.
pub async fn init<D: Database>(db: &D, path: &Path) -> CliResult<String> {
    db.migrate().await?;
    let people = db.persons().count().await?;
    let services = db.services().count().await?;
    Ok(format!(
        "✓ Database ready at {} ({} people, {} services)",
        path.display(),
        people,
        services
    ))
}

/// Drop every table and recreate the seeded schema.
pub async fn reset<D: Database>(db: &D, force: bool) -> CliResult<String> {
    if !force {
        return Err(CliError::ResetNotConfirmed);
    }
    db.reset().await?;
    Ok("✓ Database reset to its seeded state".to_string())
}
