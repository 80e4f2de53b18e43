//! Record value and member cursor.

use std::fmt;

/// The value stored under a short key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StoredValue {
    /// Redirect target.
    pub url: String,
    /// Optional secret guarding edits of the record.
    pub secret: Option<String>,
}

impl StoredValue {
    /// Creates a value without a secret.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: None,
        }
    }

    /// Creates a value protected by `secret`.
    pub fn with_secret(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: Some(secret.into()),
        }
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

/// Which logical field of a record is being read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Url,
    Password,
    /// Every field has been read.
    Done,
}

impl Member {
    /// The member following this one in wire order.
    pub fn next(self) -> Member {
        match self {
            Member::Url => Member::Password,
            Member::Password | Member::Done => Member::Done,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Url => write!(f, "url"),
            Member::Password => write!(f, "password"),
            Member::Done => write!(f, "end of record"),
        }
    }
}
