//! Frame descriptor - the bookkeeping half of a buffer slot.
//!
//! A [`BufferFrame`] records which page the slot currently holds and the
//! link to the next frame in the same hash bucket's chain.

use crate::common::{FrameId, PageKey};

/// Descriptor for one slot of a pool's frame array.
///
/// The hash index reads `key` to match lookups and owns `next`. The buffer
/// manager sets `key` when it loads a page and calls [`reset`](Self::reset)
/// before reusing the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferFrame {
    /// Page held by this frame, or None if the slot is empty.
    key: Option<PageKey>,

    /// Next frame in the same bucket chain, or None at the end of the chain.
    next: Option<FrameId>,
}

impl BufferFrame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page held by this frame.
    #[inline]
    pub fn key(&self) -> Option<PageKey> {
        self.key
    }

    /// Record which page this frame holds.
    #[inline]
    pub fn set_key(&mut self, key: Option<PageKey>) {
        self.key = key;
    }

    /// Next frame in the chain.
    ///
    /// After the frame is deleted from the index this link is stale; it is
    /// only meaningful while the frame is reachable from a bucket head.
    #[inline]
    pub fn next(&self) -> Option<FrameId> {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<FrameId>) {
        self.next = next;
    }

    /// Check if the frame holds no page.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    /// Reset the frame to empty state, clearing any stale chain link.
    ///
    /// Must be called before a frame evicted from one chain is reused.
    pub fn reset(&mut self) {
        self.key = None;
        self.next = None;
    }
}
