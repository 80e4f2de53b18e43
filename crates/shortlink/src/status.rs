//! Failure classes of the handlers and their HTTP mapping.

use shortlink_record::{DecodeError, EncodeError};
use thiserror::Error;

use crate::http::StatusCode;
use crate::store::KvError;

/// Why a handler could not produce its success response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("GET method expected")]
    MethodNotAllowed,
    #[error("No key provided in user request")]
    MissingKey,
    #[error("No url provided in user request")]
    MissingUrl,
    /// Reading the record failed.
    #[error(transparent)]
    Store(#[from] KvError),
    /// Writing the record failed.
    #[error("{0}")]
    Write(KvError),
    #[error("Stored record is invalid: {0}")]
    Record(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("Requested alias is already taken and your password doesn't grant you a permission to change it")]
    AliasTaken,
    #[error("Generated short string already exists")]
    GeneratedKeyTaken,
}

/// Maps a failure to the status and body reported to the client.
pub fn status_for(err: &ErrorKind) -> (StatusCode, String) {
    let status = match err {
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::MissingKey | ErrorKind::MissingUrl => StatusCode::BAD_REQUEST,
        ErrorKind::Store(KvError::Unauthorized) => StatusCode::UNAUTHORIZED,
        ErrorKind::Store(KvError::NotFound) => StatusCode::NOT_FOUND,
        ErrorKind::Store(KvError::Other(_)) => StatusCode::BAD_REQUEST,
        ErrorKind::Write(_) | ErrorKind::Encode(_) => StatusCode::BAD_REQUEST,
        ErrorKind::Record(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::AliasTaken => StatusCode::FORBIDDEN,
        ErrorKind::GeneratedKeyTaken => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
