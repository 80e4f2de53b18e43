//! Binary codec for the records a short key points at.
//!
//! A record is two length-prefixed fields in fixed order:
//!
//! ```text
//! | URL_LENGTH (u32 BE) | URL DATA | SECRET_LENGTH (u32 BE) | SECRET DATA |
//! ```
//!
//! A missing secret is written as the length `0xFFFFFFFF` with no data.
//! That marker never leaks out of this crate: callers only ever see
//! [`StoredValue::secret`] as an `Option`.
//!
//! # Example
//!
//! ```
//! use shortlink_record::{decode, encode, StoredValue};
//!
//! let value = StoredValue::new("https://x");
//! let bytes = encode(&value).unwrap();
//! assert_eq!(&bytes[..4], &[0, 0, 0, 9]);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

mod decoder;
mod encoder;
mod error;
mod value;

pub use decoder::{decode, DecodeState, Field, RecordDecoder};
pub use encoder::{encode, encoded_len, RecordEncoder};
pub use error::{DecodeError, EncodeError};
pub use value::{Member, StoredValue};

/// Length prefix marking an absent secret.
pub(crate) const ABSENT_LENGTH: u32 = u32::MAX;

/// Size of every length prefix on the wire.
pub(crate) const LENGTH_PREFIX_SIZE: usize = 4;
