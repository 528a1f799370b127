//! Coarse latch around a [`BufferPool`].
//!
//! The hash index does no synchronization of its own: chain relinking is a
//! multi-step read-modify-write. [`SharedBufferPool`] puts the pool behind
//! one `parking_lot::RwLock`: lookups share the latch, mutations take it
//! exclusively. [`PoolLatchGuard`] keeps the exclusive latch held across a
//! multi-step operation such as evict-then-reinsert; [`PoolReadGuard`]
//! holds the shared latch across several lookups.

use std::ops::{Deref, DerefMut};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::buffer::BufferPool;
use crate::common::{FrameId, PageKey, PoolType};
use crate::error::Result;

/// A [`BufferPool`] that can be shared between threads.
///
/// Each convenience method takes the latch for the duration of one index
/// operation. Use [`latch`](Self::latch) or [`read_latch`](Self::read_latch)
/// to hold it longer.
///
/// # Example
/// ```
/// use bufhash::{BufferPool, BufferPoolConfig, FrameId, PageKey, PoolType, SharedBufferPool};
///
/// let shared = SharedBufferPool::new(BufferPool::new(BufferPoolConfig::default()).unwrap());
/// let key = PageKey::new(2, 17);
///
/// shared.register(key, FrameId::new(4), PoolType::Page).unwrap();
/// assert_eq!(shared.lookup(key, PoolType::Page), Some(FrameId::new(4)));
/// ```
pub struct SharedBufferPool {
    pool: RwLock<BufferPool>,
}

impl SharedBufferPool {
    /// Wrap a pool behind a latch.
    pub fn new(pool: BufferPool) -> Self {
        Self {
            pool: RwLock::new(pool),
        }
    }

    /// Acquire the latch exclusively.
    ///
    /// The guard derefs to the pool; the latch is released when it drops.
    pub fn latch(&self) -> PoolLatchGuard<'_> {
        PoolLatchGuard {
            guard: self.pool.write(),
        }
    }

    /// Acquire the latch shared, for lookups and inspection.
    pub fn read_latch(&self) -> PoolReadGuard<'_> {
        PoolReadGuard {
            guard: self.pool.read(),
        }
    }

    /// See [`BufferPool::insert`].
    pub fn insert(&self, key: PageKey, frame_id: FrameId, pool_type: PoolType) -> Result<()> {
        self.pool.write().insert(key, frame_id, pool_type)
    }

    /// See [`BufferPool::register`].
    pub fn register(&self, key: PageKey, frame_id: FrameId, pool_type: PoolType) -> Result<()> {
        self.pool.write().register(key, frame_id, pool_type)
    }

    /// See [`BufferPool::lookup`].
    pub fn lookup(&self, key: PageKey, pool_type: PoolType) -> Option<FrameId> {
        self.pool.read().lookup(key, pool_type)
    }

    /// See [`BufferPool::delete`].
    pub fn delete(&self, key: PageKey, pool_type: PoolType) -> Result<()> {
        self.pool.write().delete(key, pool_type)
    }

    /// See [`BufferPool::delete_all`].
    pub fn delete_all(&self) {
        self.pool.write().delete_all()
    }

    /// Unwrap the pool.
    pub fn into_inner(self) -> BufferPool {
        self.pool.into_inner()
    }
}

/// Shared access to a latched [`BufferPool`].
///
/// Many `PoolReadGuard`s can exist at once.
pub struct PoolReadGuard<'a> {
    guard: RwLockReadGuard<'a, BufferPool>,
}

impl Deref for PoolReadGuard<'_> {
    type Target = BufferPool;

    #[inline]
    fn deref(&self) -> &BufferPool {
        &self.guard
    }
}

/// Exclusive access to a latched [`BufferPool`].
pub struct PoolLatchGuard<'a> {
    guard: RwLockWriteGuard<'a, BufferPool>,
}

impl Deref for PoolLatchGuard<'_> {
    type Target = BufferPool;

    #[inline]
    fn deref(&self) -> &BufferPool {
        &self.guard
    }
}

impl DerefMut for PoolLatchGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut BufferPool {
        &mut self.guard
    }
}
