//! Error types for remote-map operations.

use thiserror::Error;

/// Errors returned by [`RemoteMap`](crate::RemoteMap).
///
/// `E` is the error type of the underlying [`RemoteStore`](crate::RemoteStore).
/// Store failures are passed through as-is; the adapter never retries them.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("store reported {0} keys, which does not fit in usize")]
    SizeOverflow(i64),

    #[error(transparent)]
    Store(#[from] E),
}

impl<E> Error<E> {
    /// Returns the store error, if this error came from the store.
    pub fn store_error(&self) -> Option<&E> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}
