//! String map adapter over a remote key-value store.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::store::{RemoteStore, ALL_KEYS};

/// A text argument that may be absent.
///
/// Implemented for `str`, `String`, references to them, and `Option` of any of
/// them, so both `map.insert("k", "v")` and `map.insert("k", maybe_value)`
/// read naturally. `None` is the absent case and is rejected by
/// [`StringMap::insert`].
pub trait TextArg {
    fn as_text(&self) -> Option<&str>;
}

impl TextArg for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextArg for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: TextArg + ?Sized> TextArg for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: TextArg> TextArg for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(TextArg::as_text)
    }
}

/// The operations of a string-to-string map.
///
/// Methods take `&self` and return `Result`, since an implementation may be
/// backed by something that can fail on every call.
pub trait StringMap {
    type Error;

    /// Number of entries.
    fn len(&self) -> Result<usize, Self::Error>;

    /// Returns `true` if [`len`](StringMap::len) is zero.
    fn is_empty(&self) -> Result<bool, Self::Error> {
        Ok(self.len()? == 0)
    }

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error>;

    /// Returns `true` if some key maps to exactly `value`.
    fn contains_value(&self, value: &str) -> Result<bool, Self::Error>;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Maps `key` to `value` and returns `value`.
    ///
    /// Fails without modifying the map if either argument is absent.
    fn insert<K, V>(&self, key: K, value: V) -> Result<String, Self::Error>
    where
        K: TextArg,
        V: TextArg;

    /// Removes `key`, returning the value it held.
    fn remove(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Inserts every entry in iteration order, one [`insert`](StringMap::insert)
    /// at a time.
    ///
    /// Stops at the first failure. Entries inserted before it stay inserted.
    fn insert_all<I, K, V>(&self, entries: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: TextArg,
        V: TextArg,
    {
        for (key, value) in entries {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Removes every entry.
    fn clear(&self) -> Result<(), Self::Error>;

    fn keys(&self) -> Result<HashSet<String>, Self::Error>;

    /// Every value, one per key. A value that could not be read is `None`.
    fn values(&self) -> Result<Vec<Option<String>>, Self::Error>;

    /// Every key paired with its value. A value that could not be read is `None`.
    fn entries(&self) -> Result<HashSet<(String, Option<String>)>, Self::Error>;
}

/// A [`StringMap`] whose contents live in a [`RemoteStore`].
///
/// `RemoteMap` keeps nothing but the store handle. Every call goes to the
/// store, so results always reflect the store as of that call, and nothing
/// read by one call is reused by the next.
///
/// # Cost
///
/// Single-key operations ([`get`](StringMap::get), [`insert`](StringMap::insert),
/// [`contains_key`](StringMap::contains_key), [`len`](StringMap::len)) are one
/// round-trip each; [`remove`](StringMap::remove) is two. The store has no
/// primitive for whole-map reads, so [`contains_value`](StringMap::contains_value),
/// [`values`](StringMap::values) and [`entries`](StringMap::entries) list every
/// key and then fetch values one by one: N + 1 round-trips for N keys. This is
/// not a drop-in replacement for an in-memory map.
///
/// # Scope
///
/// The map is the whole store. [`len`](StringMap::len) counts every key in it
/// and [`clear`](StringMap::clear) flushes all of them, including keys written
/// by other clients.
///
/// # Consistency
///
/// Nothing spanning more than one round-trip is atomic. A concurrent writer
/// can change a value between the read and the delete of `remove`, or delete
/// a key between listing and fetching it. Keys that vanish that way are
/// reported as `None` by `values` and `entries` and do not match in
/// `contains_value`.
///
/// # Example
///
/// ```
/// use remote_map::{MemoryStore, RemoteMap, StringMap};
///
/// let map = RemoteMap::new(MemoryStore::new());
///
/// map.insert("a", "1")?;
/// assert_eq!(map.get("a")?, Some("1".to_string()));
/// assert!(map.contains_value("1")?);
///
/// assert_eq!(map.remove("a")?, Some("1".to_string()));
/// assert!(map.is_empty()?);
/// # Ok::<(), remote_map::Error<remote_map::MemoryStoreError>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RemoteMap<S> {
    store: S,
}

impl<S: RemoteStore> RemoteMap<S> {
    /// Creates a map over `store`.
    ///
    /// Pass `&store` or an `Arc` to keep ownership of the handle; the map
    /// never closes it.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store handle back.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Lists every key, then fetches each value in listing order.
    fn fetch_all(&self) -> Result<Vec<(String, Option<String>)>, Error<S::Error>> {
        let keys = self.store.list_keys(ALL_KEYS)?;
        debug!(keys = keys.len(), "fetching values for all keys");

        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            let value = self.store.get(&key)?;
            if value.is_none() {
                debug!(key = %key, "key vanished between listing and fetch");
            }
            entries.push((key, value));
        }
        Ok(entries)
    }
}

impl<S: RemoteStore> StringMap for RemoteMap<S> {
    type Error = Error<S::Error>;

    fn len(&self) -> Result<usize, Self::Error> {
        let count = self.store.key_count()?;
        usize::try_from(count).map_err(|_| Error::SizeOverflow(count))
    }

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error> {
        trace!(key, "exists");
        Ok(self.store.exists(key)?)
    }

    fn contains_value(&self, value: &str) -> Result<bool, Self::Error> {
        let keys = self.store.list_keys(ALL_KEYS)?;
        debug!(keys = keys.len(), "scanning for value");

        for key in keys {
            match self.store.get(&key)? {
                Some(found) if found == value => {
                    debug!(key = %key, "value matched");
                    return Ok(true);
                }
                Some(_) => {}
                None => debug!(key = %key, "key vanished between listing and fetch"),
            }
        }
        Ok(false)
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        trace!(key, "get");
        Ok(self.store.get(key)?)
    }

    fn insert<K, V>(&self, key: K, value: V) -> Result<String, Self::Error>
    where
        K: TextArg,
        V: TextArg,
    {
        let key = key
            .as_text()
            .ok_or(Error::<S::Error>::InvalidArgument("key must not be absent"))?;
        let value = value
            .as_text()
            .ok_or(Error::<S::Error>::InvalidArgument("value must not be absent"))?;

        trace!(key, "set");
        self.store.set(key, value)?;
        Ok(value.to_owned())
    }

    fn remove(&self, key: &str) -> Result<Option<String>, Self::Error> {
        trace!(key, "remove");
        let previous = self.store.get(key)?;
        self.store.delete(key)?;
        Ok(previous)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        warn!("flushing every key in the store");
        Ok(self.store.flush_all()?)
    }

    fn keys(&self) -> Result<HashSet<String>, Self::Error> {
        let keys: HashSet<String> = self.store.list_keys(ALL_KEYS)?.into_iter().collect();
        debug!(keys = keys.len(), "listed keys");
        Ok(keys)
    }

    fn values(&self) -> Result<Vec<Option<String>>, Self::Error> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .map(|(_, value)| value)
            .collect())
    }

    fn entries(&self) -> Result<HashSet<(String, Option<String>)>, Self::Error> {
        Ok(self.fetch_all()?.into_iter().collect())
    }
}
