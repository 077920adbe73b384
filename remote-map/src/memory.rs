//! Thread-safe in-process key-value store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::pattern::glob_match;
use crate::store::RemoteStore;

#[derive(Debug, Error)]
pub enum MemoryStoreError {
    #[error("store lock poisoned by a panicking writer")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for MemoryStoreError {
    fn from(_: PoisonError<T>) -> Self {
        MemoryStoreError::Poisoned
    }
}

/// A [`RemoteStore`] that keeps its data in process memory.
///
/// Behaves like a single Redis database: per-key operations are atomic,
/// [`list_keys`](RemoteStore::list_keys) takes `KEYS`-style glob patterns and
/// returns matching keys in sorted order. Useful for tests and for running
/// code written against [`RemoteMap`](crate::RemoteMap) without a server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let data = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: RwLock::new(data),
        }
    }
}

impl RemoteStore for MemoryStore {
    type Error = MemoryStoreError;

    fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.inner.read()?.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.inner.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.inner.write()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.inner.write()?.remove(key);
        Ok(())
    }

    fn key_count(&self) -> Result<i64, Self::Error> {
        // A HashMap cannot hold more than isize::MAX entries.
        Ok(self.inner.read()?.len() as i64)
    }

    fn list_keys(&self, pattern: &str) -> Result<Vec<String>, Self::Error> {
        let guard = self.inner.read()?;
        let mut keys: Vec<String> = guard
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect();
        keys.sort_unstable();
        Ok(keys)
    }

    fn flush_all(&self) -> Result<(), Self::Error> {
        self.inner.write()?.clear();
        Ok(())
    }
}
