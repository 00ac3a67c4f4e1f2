use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Refusing to reset the database without --force")]
    #[diagnostic(
        code(lawncare::cli::reset_not_confirmed),
        help("Every booking, payment and account will be deleted. Re-run with --force.")
    )]
    ResetNotConfirmed,

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(lawncare::cli::serialization))]
    Serialization { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
