//! Generated short keys.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use tracing::debug;

use crate::store::{KvError, KvStore};

/// Number of distinct characters in a generated key.
pub const ALPHABET_SIZE: u32 = 36;

const ALPHABET: &[u8; ALPHABET_SIZE as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Upper bound on candidates tried before giving up.
const MAX_ATTEMPTS: u64 = 4096;

/// Renders `number` in base 36, keeping at most its `len` lowest digits.
///
/// ```
/// use shortlink::as_characters;
///
/// assert_eq!(as_characters(0, 8), "0");
/// assert_eq!(as_characters(36 * 36 + 35, 8), "10z");
/// assert_eq!(as_characters(36 * 36 + 35, 2), "0z");
/// ```
pub fn as_characters(number: u64, len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    let base = u64::from(ALPHABET_SIZE);
    let mut digits = number;
    let mut out = Vec::new();
    loop {
        out.push(ALPHABET[(digits % base) as usize]);
        digits /= base;
        if digits == 0 || out.len() == len {
            break;
        }
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Whether `key` is free to take, i.e. the store reports it missing.
pub(crate) fn key_available<S: KvStore + ?Sized>(store: &S, key: &str) -> bool {
    matches!(store.get(key), Err(KvError::NotFound))
}

/// Derives an unused short key from `url`.
///
/// Candidates come from repeatedly feeding `url` into one hasher, so the
/// sequence is the same for the same url. After every possible key of the
/// current length has been tried, keys grow by one character. Returns `None`
/// when no free key turns up within a bounded number of attempts.
pub fn generate_key<S: KvStore + ?Sized>(store: &S, url: &str, length: usize) -> Option<String> {
    let mut hasher = DefaultHasher::new();
    let mut length = length.max(1);
    let mut tried_at_length: u64 = 0;
    for _ in 0..MAX_ATTEMPTS {
        hasher.write(url.as_bytes());
        let candidate = as_characters(hasher.finish(), length);
        if key_available(store, &candidate) {
            debug!(key = %candidate, "generated short key");
            return Some(candidate);
        }
        tried_at_length += 1;
        let space = u64::from(ALPHABET_SIZE)
            .checked_pow(length as u32)
            .unwrap_or(u64::MAX);
        if tried_at_length >= space {
            length += 1;
            tried_at_length = 0;
        }
    }
    None
}
