use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JuzztError {
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    /// Login was refused. The server's reason is deliberately not carried.
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Registration failed. Try again.")]
    RegistrationFailed,

    #[error("Not logged in. Run `juzzt login` first.")]
    NotLoggedIn,
}

pub type Result<T> = std::result::Result<T, JuzztError>;
