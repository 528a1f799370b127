//! Buffer pool - owner of the frame arrays and their hash tables.
//!
//! The [`BufferPool`] holds, per pool type:
//! - A fixed-capacity array of [`BufferFrame`] descriptors
//! - A fixed-size [`HashTable`] whose chains run through those frames
//!
//! and exposes the index operations the buffer manager calls around every
//! page fetch and eviction.

use std::sync::atomic::Ordering;

use log::{info, warn};

use crate::buffer::{BufferFrame, HashTable, IndexStats};
use crate::common::{BufferPoolConfig, FrameId, PageKey, PoolConfig, PoolType};
use crate::error::{Error, Result};

/// Frames and hash table for a single pool type.
#[derive(Debug)]
struct FramePool {
    frames: Vec<BufferFrame>,
    table: HashTable,
}

impl FramePool {
    fn new(pool_type: PoolType, config: PoolConfig) -> Self {
        Self {
            frames: (0..config.capacity).map(|_| BufferFrame::new()).collect(),
            table: HashTable::new(pool_type, config.table_size),
        }
    }

    fn check_index(&self, frame_id: FrameId) -> Result<()> {
        if frame_id.0 < self.frames.len() {
            Ok(())
        } else {
            Err(Error::BadIndex {
                frame_id,
                pool_type: self.table.pool_type(),
                capacity: self.frames.len(),
            })
        }
    }
}

/// Frame arrays and hash indexes for every pool type.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                       BufferPool                         │
/// │  Page:        table [b0][b1]..[bN]   frames [F0][F1]..   │
/// │  LargeObject: table [b0][b1]..[bM]   frames [F0][F1]..   │
/// │  stats: IndexStats (atomic)                              │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Thread Safety
/// None internally. Mutations take `&mut self`; share the pool across
/// threads through [`SharedBufferPool`](crate::SharedBufferPool), which
/// holds one coarse latch for the whole pool.
///
/// # Usage
/// ```
/// use bufhash::{BufferPool, BufferPoolConfig, FrameId, PageKey, PoolType};
///
/// let mut pool = BufferPool::new(BufferPoolConfig::default()).unwrap();
/// let key = PageKey::new(1, 42);
///
/// pool.frame_mut(PoolType::Page, FrameId::new(0)).unwrap().set_key(Some(key));
/// pool.insert(key, FrameId::new(0), PoolType::Page).unwrap();
///
/// assert_eq!(pool.lookup(key, PoolType::Page), Some(FrameId::new(0)));
/// ```
#[derive(Debug)]
pub struct BufferPool {
    pools: [FramePool; PoolType::COUNT],
    config: BufferPoolConfig,
    stats: IndexStats,
}

impl BufferPool {
    /// Allocate every frame array and hash table up front.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if any pool has zero capacity or table size.
    pub fn new(config: BufferPoolConfig) -> Result<Self> {
        config.validate()?;

        let pools = PoolType::ALL.map(|pool_type| FramePool::new(pool_type, config.pool(pool_type)));

        Ok(Self {
            pools,
            config,
            stats: IndexStats::new(),
        })
    }

    // ========================================================================
    // Public API: Index operations
    // ========================================================================

    /// Map `key` to `frame_id` in `pool_type`'s hash table.
    ///
    /// The frame's key must already be set to `key`, and `key` must not be
    /// mapped to another frame; neither is checked here (see
    /// [`register`](Self::register) for the checked variant).
    ///
    /// # Errors
    /// `Error::BadIndex` if `frame_id` is outside the pool. The table is
    /// left unchanged.
    pub fn insert(&mut self, key: PageKey, frame_id: FrameId, pool_type: PoolType) -> Result<()> {
        let pool = &mut self.pools[pool_type.index()];

        match pool.table.insert(&mut pool.frames, key, frame_id) {
            Ok(()) => {
                self.stats.inserts.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(e) => {
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    /// Frame holding `key` in `pool_type`, or None on a cache miss.
    pub fn lookup(&self, key: PageKey, pool_type: PoolType) -> Option<FrameId> {
        let pool = &self.pools[pool_type.index()];
        let probe = pool.table.find(&pool.frames, key);
        self.stats.record_lookup(probe.found.is_some(), probe.steps);
        probe.found
    }

    /// Remove `key`'s entry from `pool_type`'s hash table.
    ///
    /// The evicted frame's key is cleared so a later
    /// [`rebuild_index`](Self::rebuild_index) cannot bring it back. Its chain
    /// link is left stale; callers must reset the frame (or go through
    /// [`register`](Self::register)) before reusing it.
    ///
    /// # Errors
    /// `Error::NotFound` if `key` is not indexed.
    pub fn delete(&mut self, key: PageKey, pool_type: PoolType) -> Result<()> {
        let pool = &mut self.pools[pool_type.index()];
        let evicted = pool.table.delete(&mut pool.frames, key)?;
        pool.frames[evicted.0].set_key(None);
        self.stats.deletes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Empty every pool type's hash table.
    ///
    /// Frame descriptors are untouched. Meant for full pool resets.
    pub fn delete_all(&mut self) {
        for pool in &mut self.pools {
            pool.table.clear();
        }
        info!("cleared hash tables for all buffer pools");
    }

    // ========================================================================
    // Public API: Checked registration and rebuild
    // ========================================================================

    /// Bind `key` to `frame_id`, enforcing the caller contract of
    /// [`insert`](Self::insert).
    ///
    /// Any entry the frame previously held is unlinked, the frame's key is
    /// set and its stale link cleared, then the frame is inserted. A no-op
    /// if `key` already maps to `frame_id`.
    ///
    /// # Errors
    /// - `Error::BadIndex` if `frame_id` is outside the pool
    /// - `Error::DuplicateKey` if `key` is mapped to a different frame
    pub fn register(&mut self, key: PageKey, frame_id: FrameId, pool_type: PoolType) -> Result<()> {
        let pool = &mut self.pools[pool_type.index()];
        if let Err(e) = pool.check_index(frame_id) {
            warn!(
                "{} pool: rejected insert of {} at {} (capacity {})",
                pool_type,
                key,
                frame_id,
                pool.frames.len()
            );
            self.stats.rejected.fetch_add(1, Ordering::Relaxed);
            return Err(e);
        }

        match pool.table.lookup(&pool.frames, key) {
            Some(existing) if existing == frame_id => return Ok(()),
            Some(existing) => {
                return Err(Error::DuplicateKey {
                    key,
                    pool_type,
                    frame_id: existing,
                })
            }
            None => {}
        }

        if let Some(old_key) = pool.frames[frame_id.0].key() {
            if pool.table.lookup(&pool.frames, old_key) == Some(frame_id) {
                pool.table.delete(&mut pool.frames, old_key)?;
                self.stats.deletes.fetch_add(1, Ordering::Relaxed);
            }
        }

        let frame = &mut pool.frames[frame_id.0];
        frame.reset();
        frame.set_key(Some(key));

        pool.table.insert(&mut pool.frames, key, frame_id)?;
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Rebuild `pool_type`'s hash table from its frame array.
    ///
    /// Every frame holding a key is reinserted, in frame order. Frames
    /// evicted through [`delete`](Self::delete) have no key and are skipped.
    /// If two frames carry the same key only the lower-numbered one is
    /// indexed. Returns the number of frames indexed.
    pub fn rebuild_index(&mut self, pool_type: PoolType) -> usize {
        let pool = &mut self.pools[pool_type.index()];
        pool.table.clear();

        let mut indexed = 0;
        for i in 0..pool.frames.len() {
            let Some(key) = pool.frames[i].key() else {
                continue;
            };
            if let Some(kept) = pool.table.lookup(&pool.frames, key) {
                warn!(
                    "{} pool: {} held by {} and Frame({}); keeping {}",
                    pool_type, key, kept, i, kept
                );
                continue;
            }
            let inserted = pool.table.insert(&mut pool.frames, key, FrameId::new(i));
            debug_assert!(inserted.is_ok(), "frame {i} out of range during rebuild");
            indexed += 1;
        }

        info!("rebuilt {} hash table: {} frames indexed", pool_type, indexed);
        indexed
    }

    /// Rebuild the hash table of every pool type.
    pub fn rebuild_all(&mut self) -> usize {
        PoolType::ALL
            .iter()
            .map(|&pool_type| self.rebuild_index(pool_type))
            .sum()
    }

    // ========================================================================
    // Public API: Frame access
    // ========================================================================

    /// Frame descriptor at `frame_id`.
    ///
    /// # Errors
    /// `Error::BadIndex` if `frame_id` is outside the pool.
    pub fn frame(&self, pool_type: PoolType, frame_id: FrameId) -> Result<&BufferFrame> {
        let pool = &self.pools[pool_type.index()];
        pool.check_index(frame_id)?;
        Ok(&pool.frames[frame_id.0])
    }

    /// Mutable frame descriptor at `frame_id`.
    ///
    /// # Errors
    /// `Error::BadIndex` if `frame_id` is outside the pool.
    pub fn frame_mut(&mut self, pool_type: PoolType, frame_id: FrameId) -> Result<&mut BufferFrame> {
        let pool = &mut self.pools[pool_type.index()];
        pool.check_index(frame_id)?;
        Ok(&mut pool.frames[frame_id.0])
    }

    /// All frame descriptors of a pool type.
    pub fn frames(&self, pool_type: PoolType) -> &[BufferFrame] {
        &self.pools[pool_type.index()].frames
    }

    /// Hash table of a pool type.
    pub fn table(&self, pool_type: PoolType) -> &HashTable {
        &self.pools[pool_type.index()].table
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Get index statistics.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Get the configuration the pool was built with.
    pub fn config(&self) -> &BufferPoolConfig {
        &self.config
    }

    /// Number of frames in a pool type.
    pub fn capacity(&self, pool_type: PoolType) -> usize {
        self.pools[pool_type.index()].frames.len()
    }

    /// Number of buckets in a pool type's hash table.
    pub fn table_size(&self, pool_type: PoolType) -> usize {
        self.pools[pool_type.index()].table.table_size()
    }

    /// Number of frames currently indexed in a pool type.
    pub fn indexed_count(&self, pool_type: PoolType) -> usize {
        let pool = &self.pools[pool_type.index()];
        pool.table.len(&pool.frames)
    }
}
