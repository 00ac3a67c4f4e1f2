//! Password hashing and login.
//!
//! Passwords are stored as the lower-case hex SHA-256 digest of the
//! plaintext, without a salt.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::db::{Database, DbResult, Person, PersonRepository};

/// Password of the seeded administrator account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Hash a plaintext password for storage or comparison.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

pub fn verify_password(plaintext: &str, hashed_password: &str) -> bool {
    hash_password(plaintext) == hashed_password
}

/// Look up the person matching a username and plaintext password.
///
/// Fails with `DbError::Authentication` when either is wrong.
pub async fn login<D: Database>(db: &D, username: &str, plaintext: &str) -> DbResult<Person> {
    let person = db
        .persons()
        .login(username, &hash_password(plaintext))
        .await?;
    info!(username, role = %person.role(), "login succeeded");
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn verify_matches_only_the_same_plaintext() {
        let hashed = hash_password("hunter2");
        assert!(verify_password("hunter2", &hashed));
        assert!(!verify_password("hunter3", &hashed));
    }
}
