//! Buffer pool categories.

use std::fmt;

/// A buffer-pool category. Each pool type has its own frame array and
/// its own hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolType {
    /// Ordinary data pages.
    Page,
    /// Leaf pages of large objects.
    LargeObject,
}

impl PoolType {
    /// Every pool type, in table order.
    pub const ALL: [PoolType; 2] = [PoolType::Page, PoolType::LargeObject];

    /// Number of pool types.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this pool type in per-type arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PoolType::Page => 0,
            PoolType::LargeObject => 1,
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolType::Page => write!(f, "page"),
            PoolType::LargeObject => write!(f, "large-object"),
        }
    }
}
