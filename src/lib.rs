//! bufhash - the page-to-frame hash index of a buffer manager.
//!
//! Given a page key and a pool type, the index answers which frame (if any)
//! currently holds that page.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Buffer manager (caller)                     │
//! │     fetch / evict / reset  ──  serializes all access        │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SharedBufferPool (buffer/latch.rs)   one coarse RwLock     │
//! │  BufferPool (buffer/buffer_pool.rs)                         │
//! │    per PoolType:  HashTable  ──chains──▶  [BufferFrame]     │
//! │    IndexStats                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageKey, FrameId, PoolType, config)
//! - [`buffer`] - Frame descriptors, hash tables, and the pool that owns them
//! - [`error`] - Error type and Result alias
//!
//! # Quick Start
//! ```
//! use bufhash::{BufferPool, BufferPoolConfig, FrameId, PageKey, PoolType};
//!
//! let mut pool = BufferPool::new(BufferPoolConfig::default()).unwrap();
//! let key = PageKey::new(1, 9);
//!
//! pool.register(key, FrameId::new(5), PoolType::Page).unwrap();
//! assert_eq!(pool.lookup(key, PoolType::Page), Some(FrameId::new(5)));
//!
//! pool.delete(key, PoolType::Page).unwrap();
//! assert_eq!(pool.lookup(key, PoolType::Page), None);
//! ```

pub mod buffer;
pub mod common;
pub mod error;

// Re-export commonly used items at crate root for convenience
pub use common::{BufferPoolConfig, FrameId, PageKey, PoolConfig, PoolType};
pub use error::{Error, Result};

pub use buffer::{
    BufferFrame, BufferPool, HashTable, IndexStats, PoolLatchGuard, PoolReadGuard,
    SharedBufferPool, StatsSnapshot,
};
