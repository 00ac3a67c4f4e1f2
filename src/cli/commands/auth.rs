use crate::auth;
use crate::cli::error::CliResult;
use crate::db::Database;

/// Check a username and password against the stored hash.
pub async fn login<D: Database>(db: &D, username: &str, password: &str) -> CliResult<String> {
    let person = auth::login(db, username, password).await?;
    Ok(format!("✓ Logged in as {} (id {})", person, person.id))
}
