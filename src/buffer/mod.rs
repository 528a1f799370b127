//! Buffer pool hash index.
//!
//! Maps a page key to the frame currently holding that page, one chained
//! hash table per pool type.
//!
//! # Components
//! - [`BufferPool`] - Owns frame arrays and hash tables; the index API
//! - [`HashTable`] - Bucket heads and the chain algorithms
//! - [`BufferFrame`] - Frame descriptor carrying the key and chain link
//! - [`SharedBufferPool`] / [`PoolLatchGuard`] / [`PoolReadGuard`] - Coarse latch for sharing
//! - [`IndexStats`] - Lookup and mutation counters

mod buffer_pool;
mod frame;
mod hash_table;
mod latch;
mod stats;

pub use buffer_pool::BufferPool;
pub use frame::BufferFrame;
pub use hash_table::{Chain, HashTable};
pub use latch::{PoolLatchGuard, PoolReadGuard, SharedBufferPool};
pub use stats::{IndexStats, StatsSnapshot};
