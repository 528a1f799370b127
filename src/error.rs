//! Error types for the hash index.

use thiserror::Error;

use crate::common::{FrameId, PageKey, PoolType};

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the hash index can report.
///
/// `BadIndex` and `DuplicateKey` mean the caller broke a contract and are
/// never worth retrying. `NotFound` is an ordinary miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Frame index outside `[0, capacity)` for the pool type.
    ///
    /// Checked before any mutation, so the table is untouched.
    #[error("bad buffer index {frame_id} for {pool_type} pool of capacity {capacity}")]
    BadIndex {
        frame_id: FrameId,
        pool_type: PoolType,
        capacity: usize,
    },

    /// No entry for the key in the pool type's hash table.
    #[error("{key} not found in {pool_type} hash table")]
    NotFound { key: PageKey, pool_type: PoolType },

    /// The key is already mapped to a different frame.
    ///
    /// Only the checked `register` path detects this.
    #[error("{key} is already mapped to {frame_id} in {pool_type} pool")]
    DuplicateKey {
        key: PageKey,
        pool_type: PoolType,
        frame_id: FrameId,
    },

    /// Pool sizes that cannot back a hash table.
    #[error("invalid buffer pool configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for a lookup/delete miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BadIndex {
            frame_id: FrameId::new(12),
            pool_type: PoolType::Page,
            capacity: 10,
        };
        assert_eq!(
            err.to_string(),
            "bad buffer index Frame(12) for page pool of capacity 10"
        );

        let err = Error::NotFound {
            key: PageKey::new(1, 9),
            pool_type: PoolType::LargeObject,
        };
        assert_eq!(
            err.to_string(),
            "Page(1:9) not found in large-object hash table"
        );
    }

    #[test]
    fn test_is_not_found() {
        let miss = Error::NotFound {
            key: PageKey::new(0, 0),
            pool_type: PoolType::Page,
        };
        assert!(miss.is_not_found());
        assert!(!Error::InvalidConfig("x".into()).is_not_found());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
