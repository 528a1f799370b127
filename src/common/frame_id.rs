//! Frame identifier type.

use std::fmt;

/// Identifies a frame slot in one pool type's frame array.
///
/// Chains are threaded through the frame array by `FrameId` rather than by
/// reference, so a slot can be relinked or reused without allocation.
/// "No frame" is spelled `Option<FrameId>::None`, never a magic value.
///
/// # Example
/// ```
/// use bufhash::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// Position of this frame in its pool's frame array.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
