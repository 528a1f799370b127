//! Chained hash table mapping page keys to frames.
//!
//! The table is only an array of bucket heads. Chains are threaded through
//! the pool's frame array via each [`BufferFrame`]'s `next` link, so the
//! index owns no per-entry storage.
//!
//! ```text
//!  buckets                         frames
//! ┌───┐
//! │ 0 │ None
//! ├───┤          ┌──────────────┐     ┌──────────────┐
//! │ 1 │ ───────▶ │ F5 key=(1,9) │ ──▶ │ F3 key=(1,1) │ ──▶ None
//! ├───┤          └──────────────┘     └──────────────┘
//! │ 2 │ None
//! └───┘
//! ```
//!
//! # Caller contract
//! The table performs no locking and no duplicate-key detection. The owner
//! must serialize all access to one table, set a frame's key before
//! inserting it, and never insert a key that is already mapped.

use log::{debug, warn};

use crate::buffer::BufferFrame;
use crate::common::{FrameId, PageKey, PoolType};
use crate::error::{Error, Result};

/// Bucket-head array for one pool type.
#[derive(Debug, Clone)]
pub struct HashTable {
    pool_type: PoolType,
    buckets: Vec<Option<FrameId>>,
}

/// Result of walking a chain for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Probe {
    /// Matching frame, if any.
    pub found: Option<FrameId>,
    /// Frame preceding the match in the chain; None when the match is the head.
    pub prev: Option<FrameId>,
    /// Number of frames compared.
    pub steps: usize,
}

impl HashTable {
    /// Create a table with `table_size` empty buckets.
    ///
    /// # Panics
    /// Panics if `table_size` is 0.
    pub fn new(pool_type: PoolType, table_size: usize) -> Self {
        assert!(table_size > 0, "table_size must be > 0");
        Self {
            pool_type,
            buckets: vec![None; table_size],
        }
    }

    /// Pool type this table indexes.
    #[inline]
    pub fn pool_type(&self) -> PoolType {
        self.pool_type
    }

    /// Number of buckets. Never changes after construction.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket for `key`: `(vol_no + page_no) mod table_size`.
    #[inline]
    pub fn bucket_of(&self, key: PageKey) -> usize {
        key.bucket(self.buckets.len())
    }

    /// Head of a bucket's chain.
    #[inline]
    pub fn head(&self, bucket: usize) -> Option<FrameId> {
        self.buckets.get(bucket).copied().flatten()
    }

    /// Insert `frame_id` at the front of `key`'s bucket chain.
    ///
    /// O(1) regardless of chain length. The frame's `next` becomes the old
    /// head, which is None for an empty bucket.
    ///
    /// # Errors
    /// `Error::BadIndex` if `frame_id` is outside `frames`. Nothing is
    /// modified in that case.
    pub fn insert(
        &mut self,
        frames: &mut [BufferFrame],
        key: PageKey,
        frame_id: FrameId,
    ) -> Result<()> {
        let capacity = frames.len();
        if frame_id.0 >= capacity {
            warn!(
                "{} pool: rejected insert of {} at {} (capacity {})",
                self.pool_type, key, frame_id, capacity
            );
            return Err(Error::BadIndex {
                frame_id,
                pool_type: self.pool_type,
                capacity,
            });
        }
        debug_assert_eq!(
            frames[frame_id.0].key(),
            Some(key),
            "frame key must be set before insert"
        );

        let bucket = self.bucket_of(key);
        frames[frame_id.0].set_next(self.buckets[bucket]);
        self.buckets[bucket] = Some(frame_id);

        debug!(
            "{} pool: inserted {} at {} (bucket {})",
            self.pool_type, key, frame_id, bucket
        );
        Ok(())
    }

    /// Find the frame holding `key`, or None on a miss.
    ///
    /// Scans the bucket chain from the head; O(chain length).
    pub fn lookup(&self, frames: &[BufferFrame], key: PageKey) -> Option<FrameId> {
        self.find(frames, key).found
    }

    /// Unlink the frame holding `key` from its chain and return it.
    ///
    /// The removed frame's own `next` link is left untouched and is stale
    /// from here on. The owner must [`reset`](BufferFrame::reset) the frame
    /// before it is inserted again.
    ///
    /// # Errors
    /// `Error::NotFound` if no frame in the chain holds `key`.
    pub fn delete(&mut self, frames: &mut [BufferFrame], key: PageKey) -> Result<FrameId> {
        let probe = self.find(frames, key);
        let found = probe.found.ok_or(Error::NotFound {
            key,
            pool_type: self.pool_type,
        })?;

        let next = frames[found.0].next();
        match probe.prev {
            None => {
                let bucket = self.bucket_of(key);
                self.buckets[bucket] = next;
            }
            Some(prev) => frames[prev.0].set_next(next),
        }

        debug!("{} pool: deleted {} from {}", self.pool_type, key, found);
        Ok(found)
    }

    /// Reset every bucket head to empty.
    ///
    /// Frame links are not touched; every chain simply becomes unreachable.
    pub fn clear(&mut self) {
        self.buckets.fill(None);
    }

    /// Walk `key`'s chain, remembering the predecessor of the match.
    pub(crate) fn find(&self, frames: &[BufferFrame], key: PageKey) -> Probe {
        let mut prev = None;
        let mut steps = 0;

        for frame_id in self.chain(frames, self.bucket_of(key)) {
            steps += 1;
            if frames[frame_id.0].key() == Some(key) {
                return Probe {
                    found: Some(frame_id),
                    prev,
                    steps,
                };
            }
            prev = Some(frame_id);
        }

        Probe {
            found: None,
            prev: None,
            steps,
        }
    }

    // ========================================================================
    // Chain diagnostics
    // ========================================================================

    /// Iterate the frames chained from `bucket`, head first.
    pub fn chain<'a>(&self, frames: &'a [BufferFrame], bucket: usize) -> Chain<'a> {
        Chain {
            frames,
            cursor: self.head(bucket),
            remaining: frames.len(),
        }
    }

    /// Number of frames chained from `bucket`.
    pub fn chain_len(&self, frames: &[BufferFrame], bucket: usize) -> usize {
        self.chain(frames, bucket).count()
    }

    /// Length of the longest chain in the table.
    pub fn longest_chain(&self, frames: &[BufferFrame]) -> usize {
        (0..self.table_size())
            .map(|bucket| self.chain_len(frames, bucket))
            .max()
            .unwrap_or(0)
    }

    /// Number of buckets with a non-empty chain.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|head| head.is_some()).count()
    }

    /// Total number of indexed frames.
    pub fn len(&self, frames: &[BufferFrame]) -> usize {
        (0..self.table_size())
            .map(|bucket| self.chain_len(frames, bucket))
            .sum()
    }

    /// Check if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.occupied_buckets() == 0
    }
}

/// Iterator over one bucket's chain.
///
/// A frame appears at most once in a chain, so no chain is longer than the
/// frame array; iteration stops there even if the links form a cycle.
pub struct Chain<'a> {
    frames: &'a [BufferFrame],
    cursor: Option<FrameId>,
    remaining: usize,
}

impl Iterator for Chain<'_> {
    type Item = FrameId;

    fn next(&mut self) -> Option<FrameId> {
        let current = self.cursor?;
        let frame = self.frames.get(current.0)?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.cursor = frame.next();
        Some(current)
    }
}
