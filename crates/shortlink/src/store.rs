//! Key-value store interface.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Failure classes reported by a key-value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KvError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("key not found")]
    NotFound,
    #[error("{0}")]
    Other(String),
}

/// Byte-valued key-value store holding encoded records.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError>;

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), KvError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> KvError {
    KvError::Other("store lock poisoned".to_owned())
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError> {
        let entries = self.entries.read().map_err(poisoned)?;
        entries.get(key).cloned().ok_or(KvError::NotFound)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), KvError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope"), Err(KvError::NotFound));
        assert!(store.is_empty());
    }

    #[test]
    fn put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", vec![1]).unwrap();
        store.put("k", vec![2]).unwrap();
        assert_eq!(store.get("k"), Ok(vec![2]));
        assert_eq!(store.len(), 1);
    }
}
