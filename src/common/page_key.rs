//! Page key type.

use std::fmt;

/// Identifies a page across all volumes: `(vol_no, page_no)`.
///
/// Two keys are equal exactly when both the volume and the page number
/// match. The key is immutable once built.
///
/// # Example
/// ```
/// use bufhash::PageKey;
///
/// let key = PageKey::new(1, 9);
/// assert_eq!(key.bucket(8), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey {
    /// Volume holding the page.
    pub vol_no: u16,
    /// Page number within the volume.
    pub page_no: u32,
}

impl PageKey {
    /// Create a new PageKey.
    #[inline]
    pub fn new(vol_no: u16, page_no: u32) -> Self {
        Self { vol_no, page_no }
    }

    /// Hash value of the key: the sum of volume and page number.
    ///
    /// Computed in `u64` so the sum cannot overflow.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        u64::from(self.vol_no) + u64::from(self.page_no)
    }

    /// Bucket this key falls into for a table of `table_size` buckets.
    ///
    /// # Panics
    /// Panics if `table_size` is 0. Table sizes are validated when the
    /// pool is configured, so this only fires on direct misuse.
    #[inline]
    pub fn bucket(&self, table_size: usize) -> usize {
        assert!(table_size > 0, "table_size must be > 0");
        (self.hash_value() % table_size as u64) as usize
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({}:{})", self.vol_no, self.page_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_equality() {
        assert_eq!(PageKey::new(1, 9), PageKey::new(1, 9));
        assert_ne!(PageKey::new(1, 9), PageKey::new(2, 9));
        assert_ne!(PageKey::new(1, 9), PageKey::new(1, 8));
    }

    #[test]
    fn test_page_key_bucket() {
        assert_eq!(PageKey::new(1, 1).bucket(8), 2);
        assert_eq!(PageKey::new(1, 9).bucket(8), 2);
        assert_eq!(PageKey::new(0, 0).bucket(8), 0);
        assert_eq!(PageKey::new(3, 4).bucket(8), 7);
    }

    #[test]
    fn test_page_key_hash_no_overflow() {
        let key = PageKey::new(u16::MAX, u32::MAX);
        assert_eq!(key.hash_value(), u64::from(u16::MAX) + u64::from(u32::MAX));
        assert!(key.bucket(7) < 7);
    }

    #[test]
    #[should_panic(expected = "table_size must be > 0")]
    fn test_page_key_bucket_zero_table() {
        PageKey::new(1, 1).bucket(0);
    }

    #[test]
    fn test_page_key_display() {
        assert_eq!(format!("{}", PageKey::new(3, 42)), "Page(3:42)");
    }
}
