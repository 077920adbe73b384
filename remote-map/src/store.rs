//! The key-value store collaborator consumed by [`RemoteMap`](crate::RemoteMap).

use std::sync::Arc;

/// Pattern passed to [`RemoteStore::list_keys`] to enumerate every key.
pub const ALL_KEYS: &str = "*";

/// A remote key-value store with text keys and values.
///
/// Each method is one blocking round-trip to the store. Implementations decide
/// their own connection handling and thread-safety; methods take `&self`, so a
/// store with mutable connection state keeps it behind a lock.
pub trait RemoteStore {
    /// Failure raised while talking to the store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `true` if `key` exists.
    fn exists(&self, key: &str) -> Result<bool, Self::Error>;

    /// Fetches the value stored at `key`.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Stores `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;

    /// Number of keys in the store.
    fn key_count(&self) -> Result<i64, Self::Error>;

    /// Lists the distinct keys matching a glob `pattern`, in the store's
    /// enumeration order. [`ALL_KEYS`] matches every key.
    fn list_keys(&self, pattern: &str) -> Result<Vec<String>, Self::Error>;

    /// Deletes every key in the store.
    fn flush_all(&self) -> Result<(), Self::Error>;
}

macro_rules! forward_remote_store {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<S: RemoteStore + ?Sized> RemoteStore for $ty {
                type Error = S::Error;

                fn exists(&self, key: &str) -> Result<bool, Self::Error> {
                    (**self).exists(key)
                }

                fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
                    (**self).get(key)
                }

                fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
                    (**self).set(key, value)
                }

                fn delete(&self, key: &str) -> Result<(), Self::Error> {
                    (**self).delete(key)
                }

                fn key_count(&self) -> Result<i64, Self::Error> {
                    (**self).key_count()
                }

                fn list_keys(&self, pattern: &str) -> Result<Vec<String>, Self::Error> {
                    (**self).list_keys(pattern)
                }

                fn flush_all(&self) -> Result<(), Self::Error> {
                    (**self).flush_all()
                }
            }
        )+
    };
}

forward_remote_store!(&S, Box<S>, Arc<S>);
