//! A string-to-string map backed by a remote key-value store.
//!
//! `remote-map` exposes a key-value store (anything implementing
//! [`RemoteStore`]: single-key get/set/delete, existence checks, a key count,
//! pattern-based key listing and a full flush) through the ordinary map
//! operations of [`StringMap`].
//!
//! # Features
//!
//! - Map operations translated one-to-one onto store calls, with no caching
//! - Whole-map reads (`contains_value`, `values`, `entries`) built from a key
//!   listing plus one fetch per key
//! - Store errors passed through unchanged, argument errors reported separately
//! - [`MemoryStore`], an in-process store with Redis-style glob key listing
//!
//! Whole-map operations cost one round-trip per key and [`StringMap::clear`]
//! flushes the entire store. See [`RemoteMap`] for the cost and consistency
//! model before using it where an in-memory map is expected.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use remote_map::{MemoryStore, RemoteMap, StringMap};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     let map = RemoteMap::new(Arc::clone(&store));
//!
//!     map.insert("a", "1")?;
//!     map.insert("b", "2")?;
//!     assert_eq!(map.len()?, 2);
//!     assert!(map.contains_value("2")?);
//!
//!     map.clear()?;
//!     assert!(map.keys()?.is_empty());
//!     Ok(())
//! }
//! ```

mod error;
mod map;
mod memory;
pub mod pattern;
mod store;

pub use error::Error;
pub use map::{RemoteMap, StringMap, TextArg};
pub use memory::{MemoryStore, MemoryStoreError};
pub use store::{RemoteStore, ALL_KEYS};
