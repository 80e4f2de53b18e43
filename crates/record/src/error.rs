//! Record codec error types.

use thiserror::Error;

use crate::Member;

/// Error returned when bytes do not form exactly one record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before both fields were complete.
    #[error("record truncated: input ended before all fields were read")]
    Truncated,
    /// Bytes remain after the record is complete.
    #[error("record has trailing data after the last field")]
    TrailingData,
    #[error("record {member} field is not valid UTF-8")]
    InvalidUtf8 { member: Member },
}

/// Error returned when a value cannot be represented as a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The field length collides with the absent-secret marker or overflows
    /// the 32-bit length prefix.
    #[error("{member} field is too large to encode: {len} bytes")]
    ValueTooLarge { member: Member, len: usize },
}
