//! Configuration for buffer pools and their hash tables.

use crate::common::PoolType;
use crate::error::{Error, Result};

/// Default number of frames in the page pool.
pub const DEFAULT_PAGE_BUFFERS: usize = 100;

/// Default number of frames in the large-object pool.
pub const DEFAULT_LARGE_OBJECT_BUFFERS: usize = 30;

/// Hash table size as a multiple of pool capacity.
///
/// With three buckets per frame the load factor stays at or below 1/3,
/// so chains are expected to hold one or two frames.
pub const HASH_TABLE_FACTOR: usize = 3;

/// Sizes for one pool type. Fixed for the lifetime of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of frames in the pool's frame array.
    pub capacity: usize,
    /// Number of buckets in the pool's hash table.
    pub table_size: usize,
}

impl PoolConfig {
    /// Pool with `capacity` frames and the default table size for it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            table_size: capacity * HASH_TABLE_FACTOR,
        }
    }

    /// Pool with explicit capacity and table size.
    pub fn new(capacity: usize, table_size: usize) -> Self {
        Self {
            capacity,
            table_size,
        }
    }

    /// Reject pools that could never hold or index a frame.
    pub fn validate(&self, pool_type: PoolType) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig(format!(
                "{pool_type} pool capacity must be > 0"
            )));
        }
        if self.table_size == 0 {
            return Err(Error::InvalidConfig(format!(
                "{pool_type} hash table size must be > 0"
            )));
        }
        Ok(())
    }
}

/// Per-pool-type configuration for a [`BufferPool`](crate::BufferPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferPoolConfig {
    pools: [PoolConfig; PoolType::COUNT],
}

impl BufferPoolConfig {
    /// Build a configuration from explicit page and large-object settings.
    pub fn new(page: PoolConfig, large_object: PoolConfig) -> Self {
        Self {
            pools: [page, large_object],
        }
    }

    /// Settings for one pool type.
    #[inline]
    pub fn pool(&self, pool_type: PoolType) -> PoolConfig {
        self.pools[pool_type.index()]
    }

    /// Validate every pool type.
    pub fn validate(&self) -> Result<()> {
        for pool_type in PoolType::ALL {
            self.pool(pool_type).validate(pool_type)?;
        }
        Ok(())
    }
}

impl Default for BufferPoolConfig {
    fn default() -> Self {
        Self::new(
            PoolConfig::with_capacity(DEFAULT_PAGE_BUFFERS),
            PoolConfig::with_capacity(DEFAULT_LARGE_OBJECT_BUFFERS),
        )
    }
}
